//! Catmull-Rom based point subdivision.

use rayon::prelude::*;

use crate::data_types::{Point, Rect};
use crate::error::{Result, ToolkitError};
use crate::numeric::approx_equal;
use crate::stats;

/// Segment count above which subdivision switches to the parallel path.
const PARALLEL_SEGMENT_THRESHOLD: usize = 1024;

/// One uniform Catmull-Rom segment between `p1` and `p2`, with `p0`/`p3`
/// shaping the tangents.
#[derive(Clone, Copy, Debug)]
pub struct CatmullRom {
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
}

impl CatmullRom {
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluates the segment at `t` in [0, 1]. `q(0)` is `p1`, `q(1)` is `p2`.
    pub fn q(&self, t: f64) -> Point {
        Point::new(
            catmull_rom_axis(self.p0.x, self.p1.x, self.p2.x, self.p3.x, t),
            catmull_rom_axis(self.p0.y, self.p1.y, self.p2.y, self.p3.y, t),
        )
    }
}

fn catmull_rom_axis(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    0.5 * ((2.0 * p1)
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t * t
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t * t * t)
}

/// Densifies a polyline into a smooth curve that passes through every input
/// point, evaluating each consecutive point pair at `subdivisions + 1`
/// parameter values. Boundary segments reuse their end point as the missing
/// neighbor. The output holds `(n - 1) * subdivisions + 1` points.
pub fn subdivide_points(points: &[Point], subdivisions: u32) -> Result<Vec<Point>> {
    if points.len() < 3 {
        return Err(ToolkitError::InvalidArgument(format!(
            "subdivision needs at least 3 points, got {}",
            points.len()
        )));
    }
    if subdivisions < 1 {
        return Err(ToolkitError::InvalidArgument(
            "subdivisions must be at least 1".into(),
        ));
    }

    let n = points.len();
    let sub = subdivisions as usize;
    let increment = 1.0 / subdivisions as f64;
    let mut subdivided = vec![Point::default(); (n - 1) * sub + 1];

    if n - 1 >= PARALLEL_SEGMENT_THRESHOLD {
        // Segments are independent; split the output so each one fills its
        // own window. The shared boundary value belongs to the next window
        // at t = 0, which evaluates to the same point.
        let (body, tail) = subdivided.split_at_mut((n - 1) * sub);
        body.par_chunks_mut(sub).enumerate().for_each(|(i, chunk)| {
            let crs = segment(points, i);
            for (j, slot) in chunk.iter_mut().enumerate() {
                *slot = crs.q(j as f64 * increment);
            }
        });
        tail[0] = segment(points, n - 2).q(1.0);
    } else {
        for i in 0..n - 1 {
            let crs = segment(points, i);
            for j in 0..=sub {
                subdivided[i * sub + j] = crs.q(j as f64 * increment);
            }
        }
    }

    Ok(subdivided)
}

fn segment(points: &[Point], i: usize) -> CatmullRom {
    let n = points.len();
    let p0 = if i == 0 { points[i] } else { points[i - 1] };
    let p3 = if i + 2 == n { points[i + 1] } else { points[i + 2] };
    CatmullRom::new(p0, points[i], points[i + 1], p3)
}

/// Maps a sample list into `graph_bounds` and subdivides the result into a
/// smooth spark line. Flat data (all samples equal) is scaled against the
/// configured `min_value`/`max_value` instead of its own range.
pub fn smooth_spark_line(
    data: &[f64],
    min_value: f64,
    max_value: f64,
    graph_bounds: Rect,
    no_of_datapoints: usize,
) -> Result<Vec<Point>> {
    let mut low = stats::min_f64(data);
    let mut high = stats::max_f64(data);
    if approx_equal(low, high) {
        low = min_value;
        high = max_value;
    }
    let range = high - low;

    let min_x = graph_bounds.x;
    let max_y = graph_bounds.max_y();
    let step_x = graph_bounds.width / (no_of_datapoints as f64 - 1.0);
    let step_y = graph_bounds.height / range;

    let points: Vec<Point> = data
        .iter()
        .enumerate()
        .map(|(i, &value)| Point::new(min_x + i as f64 * step_x, max_y - (low - value).abs() * step_y))
        .collect();

    subdivide_points(&points, 16)
}
