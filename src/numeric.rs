//! Epsilon-tolerant comparisons and rounding helpers.

/// Tolerance used by every approximate comparison in the toolkit.
pub const EPSILON: f64 = 1e-6;

pub fn approx_equal(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() < EPSILON
}

pub fn bigger_than(a: f64, b: f64) -> bool {
    (a - b) > EPSILON
}

pub fn less_than(a: f64, b: f64) -> bool {
    (b - a) > EPSILON
}

/// Rounds to the given number of decimal places.
pub fn round_decimals(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (value * scale).round() / scale
}

/// Rounds to the nearest multiple of `target`.
pub fn round_to(value: f64, target: f64) -> f64 {
    target * (value / target).round()
}

pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

/// Returns whichever of `smaller`/`larger` is closer to `value`.
/// Equal distance favors `smaller`.
pub fn nearest(smaller: f64, value: f64, larger: f64) -> f64 {
    if (value - smaller) <= (larger - value) {
        smaller
    } else {
        larger
    }
}
