//! Axis auto-scaling: "nice" bounds, tick spacing and tick snapping.

use crate::data_types::{AutoScale, NiceScale};
use crate::numeric::nearest;

/// Step candidates a normalized rough step is snapped up to.
const GOOD_NORMALIZED_STEPS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// [`nice_scale`] with the default tick count of 20.
pub fn nice_scale_default(min: f64, max: f64) -> NiceScale {
    nice_scale(min, max, 20)
}

/// Calculates nice min/max values and a nice step size for the range
/// `[min, max]`, aiming for at most `max_ticks` tick values.
pub fn nice_scale(min: f64, max: f64, max_ticks: u32) -> NiceScale {
    // Minimal increment so round extreme values do not land exactly on the
    // edge of the chart.
    let epsilon = (max - min) / 1e6;
    let minimum = min - epsilon;
    let maximum = max + epsilon;
    let range = maximum - minimum;

    // First approximation; the displayed tick count may end up lower.
    let rough_step = range / (max_ticks as f64 - 1.0);

    // Normalize the rough step into [1, 10) and snap it up to the first
    // candidate that fits.
    let step_power = 10f64.powf(-rough_step.abs().log10().floor());
    let normalized_step = rough_step * step_power;
    let good_normalized_step = GOOD_NORMALIZED_STEPS
        .into_iter()
        .find(|candidate| *candidate >= normalized_step)
        .unwrap_or(10.0);
    let nice_step = good_normalized_step / step_power;

    // Scale limits always move outward from zero.
    let mut nice_min = if minimum < 0.0 {
        (minimum / nice_step).floor() * nice_step
    } else {
        (minimum / nice_step).ceil() * nice_step
    };
    let mut nice_max = if maximum < 0.0 {
        (maximum / nice_step).floor() * nice_step
    } else {
        (maximum / nice_step).ceil() * nice_step
    };

    // Bounds that are already tick-aligned are kept verbatim. Intentionally
    // an exact test on the unexpanded inputs.
    if min % nice_step == 0.0 {
        nice_min = min;
    }
    if max % nice_step == 0.0 {
        nice_max = max;
    }

    NiceScale {
        nice_min,
        nice_max,
        nice_range: nice_max - nice_min,
        nice_step,
    }
}

/// Returns a nice number approximately equal to `range`: 1/2/5/10 times a
/// power of ten, rounded when `round` is true and ceiled otherwise.
pub fn calc_nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10f64.powf(exponent);

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * 10f64.powf(exponent)
}

/// Alternate auto-scale routine deriving major/minor tick spacing from a
/// target of 10 ticks per level.
pub fn calc_auto_scale(min: f64, max: f64) -> AutoScale {
    const MAX_MAJOR_TICKS: f64 = 10.0;
    const MAX_MINOR_TICKS: f64 = 10.0;

    let nice_range = calc_nice_number(max - min, false);
    let major_tick_space = calc_nice_number(nice_range / (MAX_MAJOR_TICKS - 1.0), true);
    let nice_min = (min / major_tick_space).floor() * major_tick_space;
    let nice_max = (max / major_tick_space).ceil() * major_tick_space;
    let minor_tick_space = calc_nice_number(major_tick_space / (MAX_MINOR_TICKS - 1.0), true);

    AutoScale {
        nice_min,
        nice_max,
        major_tick_space,
        minor_tick_space,
    }
}

/// Snaps `value` to the nearest tick mark, e.g. for discrete slider steps.
///
/// `minor_tick_count` is the number of minor ticks between two major marks
/// (clamped to [0, 10]); `major_tick_unit` is the distance between two major
/// marks (non-positive values fall back to 0.25). The result is clamped to
/// `[min, max]`; equal distance to both bracketing ticks favors the smaller.
pub fn snap_to_ticks(
    min: f64,
    max: f64,
    value: f64,
    minor_tick_count: i32,
    major_tick_unit: f64,
) -> f64 {
    let minor_tick_count = minor_tick_count.clamp(0, 10);
    let major_tick_unit = if major_tick_unit <= 0.0 {
        0.25
    } else {
        major_tick_unit
    };

    let tick_spacing = if minor_tick_count != 0 {
        major_tick_unit / (minor_tick_count as f64 + 1.0)
    } else {
        major_tick_unit
    };

    let prev_tick = ((value - min) / tick_spacing).trunc();
    let prev_tick_value = prev_tick * tick_spacing + min;
    let next_tick_value = (prev_tick + 1.0) * tick_spacing + min;

    nearest(prev_tick_value, value, next_tick_value).clamp(min, max)
}
