//! Quickhull-style convex hull construction.

use crate::data_types::Point;
use crate::error::{Result, ToolkitError};
use crate::smoothing::subdivide_points;

/// Convex hull of `points`, leaving the input untouched.
///
/// The hull is returned in counter-clockwise winding (y-up coordinates).
/// Collinear points on a hull edge are dropped. Worst-case recursion depth
/// is O(n²) on adversarial inputs (all points collinear except one).
pub fn convex_hull(points: &[Point]) -> Result<Vec<Point>> {
    convex_hull_from(points.to_vec())
}

/// Consuming variant of [`convex_hull`]; partitions its working set in
/// place instead of copying.
pub fn convex_hull_from(mut points: Vec<Point>) -> Result<Vec<Point>> {
    if points.len() < 3 {
        return Err(ToolkitError::InvalidArgument(format!(
            "convex hull needs at least 3 points, got {}",
            points.len()
        )));
    }

    // The two extreme-x points anchor the hull.
    let mut min_idx = 0;
    let mut max_idx = 0;
    for (i, p) in points.iter().enumerate() {
        if p.x < points[min_idx].x {
            min_idx = i;
        }
        if p.x > points[max_idx].x {
            max_idx = i;
        }
    }
    let min_point = points[min_idx];
    let max_point = points[max_idx];

    let mut hull = vec![min_point, max_point];
    if min_idx == max_idx {
        // Every x equal: nothing but the anchor line remains.
        return Ok(hull);
    }
    points.swap_remove(min_idx.max(max_idx));
    points.swap_remove(min_idx.min(max_idx));

    let mut left_set = Vec::new();
    let mut right_set = Vec::new();
    for p in points {
        match point_location(min_point, max_point, p) {
            -1 => left_set.push(p),
            1 => right_set.push(p),
            _ => {} // collinear with the anchor line, never on the hull
        }
    }
    hull_set(min_point, max_point, right_set, &mut hull);
    hull_set(max_point, min_point, left_set, &mut hull);

    // The recursion's insertion order depends on the input configuration;
    // normalize to one fixed winding.
    if signed_area(&hull) < 0.0 {
        hull.reverse();
    }
    Ok(hull)
}

/// Convex hull outline densified through Catmull-Rom subdivision.
pub fn smoothed_convex_hull(points: &[Point], subdivisions: u32) -> Result<Vec<Point>> {
    let hull = convex_hull(points)?;
    subdivide_points(&hull, subdivisions)
}

fn hull_set(p1: Point, p2: Point, mut points: Vec<Point>, hull: &mut Vec<Point>) {
    if points.is_empty() {
        return;
    }
    let Some(insert_position) = hull.iter().position(|p| *p == p2) else {
        return;
    };

    if points.len() == 1 {
        hull.insert(insert_position, points[0]);
        return;
    }

    // Farthest point from the anchor line joins the hull between p1 and p2.
    let mut furthest = 0;
    let mut furthest_dist = f64::NEG_INFINITY;
    for (i, p) in points.iter().enumerate() {
        let d = line_distance(p1, p2, *p);
        if d > furthest_dist {
            furthest_dist = d;
            furthest = i;
        }
    }
    let point = points.swap_remove(furthest);
    hull.insert(insert_position, point);

    let left_of_ap: Vec<Point> = points
        .iter()
        .copied()
        .filter(|m| point_location(p1, point, *m) == 1)
        .collect();
    let left_of_pb: Vec<Point> = points
        .iter()
        .copied()
        .filter(|m| point_location(point, p2, *m) == 1)
        .collect();

    hull_set(p1, point, left_of_ap, hull);
    hull_set(point, p2, left_of_pb, hull);
}

/// Perpendicular distance of `p3` from the line through `p1`/`p2`, scaled by
/// the line length. Only relative order matters here.
fn line_distance(p1: Point, p2: Point, p3: Point) -> f64 {
    let delta_x = p2.x - p1.x;
    let delta_y = p2.y - p1.y;
    (delta_x * (p1.y - p3.y) - delta_y * (p1.x - p3.x)).abs()
}

/// Sign of the cross product of `p1->p2` and `p1->p3`: 1 left of the line,
/// -1 right, 0 collinear.
fn point_location(p1: Point, p2: Point, p3: Point) -> i32 {
    let cross = (p2.x - p1.x) * (p3.y - p1.y) - (p2.y - p1.y) * (p3.x - p1.x);
    if cross > 0.0 {
        1
    } else if cross == 0.0 {
        0
    } else {
        -1
    }
}

/// Shoelace signed area; positive for counter-clockwise winding.
fn signed_area(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p = polygon[i];
        let q = polygon[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    sum * 0.5
}
