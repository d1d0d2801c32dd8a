//! Containment predicates and analytic geometry helpers used for
//! hit-testing tile shapes.

use crate::data_types::Point;
use crate::error::{Result, ToolkitError};
use crate::numeric::{bigger_than, less_than, round_decimals};

/// Classification of a line relative to a circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCircleCollision {
    Intersect,
    Outside,
    Touching,
}

/// Inclusive bounds test.
pub fn in_rectangle(x: f64, y: f64, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> bool {
    !less_than(x, min_x) && !bigger_than(x, max_x) && !less_than(y, min_y) && !bigger_than(y, max_y)
}

pub fn in_ellipse(
    x: f64,
    y: f64,
    center_x: f64,
    center_y: f64,
    radius_x: f64,
    radius_y: f64,
) -> bool {
    let dx = x - center_x;
    let dy = y - center_y;
    let normalized = (dx * dx) / (radius_x * radius_x) + (dy * dy) / (radius_y * radius_y);
    !bigger_than(normalized, 1.0)
}

/// Even-odd ray-casting test against an ordered vertex list; the closing
/// edge between the last and first vertex is implied.
///
/// A point exactly on an edge has undefined parity. That is the canonical
/// ray-casting boundary ambiguity, kept as documented behavior.
pub fn in_polygon(x: f64, y: f64, points: &[Point]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (points[i], points[j]);
        if ((pi.y > y) != (pj.y > y)) && x < (pj.x - pi.x) * (y - pi.y) / (pj.y - pi.y) + pi.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Tests whether `(x, y)` lies inside a ring segment around
/// `(center_x, center_y)`. Angles follow the tile convention: 0° at
/// 12 o'clock, increasing clockwise.
pub fn in_ring_segment(
    x: f64,
    y: f64,
    center_x: f64,
    center_y: f64,
    outer_radius: f64,
    inner_radius: f64,
    start_angle: f64,
    segment_angle: f64,
) -> bool {
    let angle_offset = 90.0;
    let dx = x - center_x;
    let dy = y - center_y;
    let point_radius = (dx * dx + dy * dy).sqrt();
    let point_angle = angle_from_xy_with_offset(x, y, center_x, center_y, angle_offset);
    let start = angle_offset - start_angle;
    let end = start + segment_angle;

    !less_than(point_radius, inner_radius)
        && !bigger_than(point_radius, outer_radius)
        && !less_than(point_angle, start)
        && !bigger_than(point_angle, end)
}

/// [`angle_from_xy_with_offset`] with the 12-o'clock convention (offset 90°).
pub fn angle_from_xy(x: f64, y: f64, center_x: f64, center_y: f64) -> f64 {
    angle_from_xy_with_offset(x, y, center_x, center_y, 90.0)
}

/// Polar angle of `(x, y)` around the center, in degrees in [0, 360).
/// An offset of 0 puts 0° at 3 o'clock, an offset of 90 at 12 o'clock.
pub fn angle_from_xy_with_offset(
    x: f64,
    y: f64,
    center_x: f64,
    center_y: f64,
    angle_offset: f64,
) -> f64 {
    let delta_x = x - center_x;
    let delta_y = y - center_y;
    let radius = (delta_x * delta_x + delta_y * delta_y).sqrt();
    let nx = delta_x / radius;
    let ny = delta_y / radius;
    let theta = ny.atan2(nx);
    let theta = if theta >= 0.0 {
        theta.to_degrees()
    } else {
        theta.to_degrees() + 360.0
    };
    (theta + angle_offset) % 360.0
}

/// Classifies the line through `p1`/`p2` against the circle at
/// `(center_x, center_y)`. The perpendicular distance is rounded to one
/// decimal before comparing with the radius.
pub fn line_circle_collision(
    p1: Point,
    p2: Point,
    center_x: f64,
    center_y: f64,
    radius: f64,
) -> Result<LineCircleCollision> {
    // Implicit line equation a*x + b*y + c = 0 through p1 and p2.
    let a = p1.y - p2.y;
    let b = p2.x - p1.x;
    let c = p1.x * p2.y - p2.x * p1.y;
    if a == 0.0 && b == 0.0 {
        return Err(ToolkitError::DegenerateGeometry(
            "line endpoints coincide, perpendicular distance is undefined".into(),
        ));
    }

    let dist = round_decimals(
        (a * center_x + b * center_y + c).abs() / (a * a + b * b).sqrt(),
        1,
    );
    Ok(if radius > dist {
        LineCircleCollision::Intersect
    } else if radius < dist {
        LineCircleCollision::Outside
    } else {
        LineCircleCollision::Touching
    })
}

pub fn distance(p1: Point, p2: Point) -> f64 {
    euclidean_distance_squared(p1, p2).sqrt()
}

pub fn euclidean_distance_squared(p1: Point, p2: Point) -> f64 {
    let delta_x = p2.x - p1.x;
    let delta_y = p2.y - p1.y;
    delta_x * delta_x + delta_y * delta_y
}

/// Point on the line from `p1` towards `p2` at the given distance from `p1`.
/// Errors when `p1 == p2`, where the direction is undefined.
pub fn point_on_line_at_distance(p1: Point, p2: Point, distance_from_p1: f64) -> Result<Point> {
    let length = distance(p1, p2);
    if length == 0.0 {
        return Err(ToolkitError::DegenerateGeometry(
            "cannot walk along a zero-length line".into(),
        ));
    }
    let t = distance_from_p1 / length;
    Ok(Point::new(
        (1.0 - t) * p1.x + t * p2.x,
        (1.0 - t) * p1.y + t * p2.y,
    ))
}

/// Rotates `point` around `center` by `angle` degrees (counter-clockwise in
/// y-up coordinates).
pub fn rotate_point_around_center(point: Point, center: Point, angle: f64) -> Point {
    let rad = angle.to_radians();
    let sin = rad.sin();
    let cos = rad.cos();
    Point::new(
        center.x + (point.x - center.x) * cos - (point.y - center.y) * sin,
        center.y + (point.x - center.x) * sin + (point.y - center.y) * cos,
    )
}

pub fn midpoint(p1: Point, p2: Point) -> Point {
    Point::new((p1.x + p2.x) * 0.5, (p1.y + p2.y) * 0.5)
}

/// Whole degrees of a decimal degree value.
pub fn degrees(decimal_deg: f64) -> i32 {
    decimal_deg as i32
}

pub fn minutes(decimal_deg: f64) -> i32 {
    ((decimal_deg - degrees(decimal_deg) as f64) * 60.0) as i32
}

pub fn seconds(decimal_deg: f64) -> f64 {
    ((decimal_deg - degrees(decimal_deg) as f64) * 60.0 - minutes(decimal_deg) as f64) * 60.0
}

pub fn decimal_degrees(degrees: i32, minutes: i32, seconds: f64) -> f64 {
    ((seconds / 60.0 + minutes as f64) / 60.0) + degrees as f64
}
