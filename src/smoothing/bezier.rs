//! Piecewise cubic-Bezier path fitting.
//!
//! Control points are derived from a tri-diagonal system per axis so that
//! consecutive cubic segments join with continuous first derivatives.

use crate::data_types::{PathCommand, Point};

/// Fits a smoothed path through `points`, one cubic segment per consecutive
/// point pair.
///
/// When `filled`, the path starts and ends on a baseline at the first
/// point's y, so the closing edge of the filled polygon is preserved, and is
/// explicitly closed.
pub fn smooth_path(points: &[Point], filled: bool) -> Vec<PathCommand> {
    if points.is_empty() {
        return Vec::new();
    }
    if points.len() == 1 {
        return vec![PathCommand::MoveTo(points[0])];
    }

    let (first_control_points, second_control_points) = curve_control_points(points);
    let baseline_y = points[0].y;
    let mut commands = Vec::with_capacity(points.len() + 3);

    if filled {
        commands.push(PathCommand::MoveTo(Point::new(points[0].x, baseline_y)));
        commands.push(PathCommand::LineTo(points[0]));
    } else {
        commands.push(PathCommand::MoveTo(points[0]));
    }

    for i in 1..points.len() {
        let ci = i - 1;
        commands.push(PathCommand::CubicCurveTo {
            control1: first_control_points[ci],
            control2: second_control_points[ci],
            end: points[i],
        });
    }

    if filled {
        commands.push(PathCommand::LineTo(Point::new(
            points[points.len() - 1].x,
            baseline_y,
        )));
        commands.push(PathCommand::ClosePath);
    }

    commands
}

/// First and second control points for the `n = len - 1` cubic segments
/// through `data_points`. Callers guarantee at least two points.
fn curve_control_points(data_points: &[Point]) -> (Vec<Point>, Vec<Point>) {
    let n = data_points.len() - 1;
    if n == 1 {
        // Two data points only: the curve degenerates to a straight line
        // with control points at 1/3 and 2/3.
        let first = Point::new(
            (2.0 * data_points[0].x + data_points[1].x) / 3.0,
            (2.0 * data_points[0].y + data_points[1].y) / 3.0,
        );
        let second = Point::new(
            2.0 * first.x - data_points[0].x,
            2.0 * first.y - data_points[0].y,
        );
        return (vec![first], vec![second]);
    }

    let mut rhs = vec![0.0; n];

    for i in 1..n - 1 {
        rhs[i] = 4.0 * data_points[i].x + 2.0 * data_points[i + 1].x;
    }
    rhs[0] = data_points[0].x + 2.0 * data_points[1].x;
    rhs[n - 1] = (8.0 * data_points[n - 1].x + data_points[n].x) / 2.0;
    let x = first_control_coordinates(&rhs);

    for i in 1..n - 1 {
        rhs[i] = 4.0 * data_points[i].y + 2.0 * data_points[i + 1].y;
    }
    rhs[0] = data_points[0].y + 2.0 * data_points[1].y;
    rhs[n - 1] = (8.0 * data_points[n - 1].y + data_points[n].y) / 2.0;
    let y = first_control_coordinates(&rhs);

    let mut first_control_points = Vec::with_capacity(n);
    let mut second_control_points = Vec::with_capacity(n);
    for i in 0..n {
        first_control_points.push(Point::new(x[i], y[i]));
        if i < n - 1 {
            second_control_points.push(Point::new(
                2.0 * data_points[i + 1].x - x[i + 1],
                2.0 * data_points[i + 1].y - y[i + 1],
            ));
        } else {
            second_control_points.push(Point::new(
                (data_points[n].x + x[n - 1]) / 2.0,
                (data_points[n].y + y[n - 1]) / 2.0,
            ));
        }
    }
    (first_control_points, second_control_points)
}

/// Thomas-algorithm solve of the tri-diagonal system for one axis.
fn first_control_coordinates(rhs: &[f64]) -> Vec<f64> {
    let n = rhs.len();
    let mut x = vec![0.0; n];
    let mut tmp = vec![0.0; n];
    let mut b = 2.0;

    x[0] = rhs[0] / b;
    // Decomposition and forward substitution.
    for i in 1..n {
        tmp[i] = 1.0 / b;
        b = (if i < n - 1 { 4.0 } else { 3.5 }) - tmp[i];
        x[i] = (rhs[i] - x[i - 1]) / b;
    }
    // Back substitution.
    for i in 1..n {
        x[n - i - 1] -= tmp[n - i] * x[n - i];
    }
    x
}
