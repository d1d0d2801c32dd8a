//! Gradient-stop color interpolation and section color lookup.

use crate::data_types::{Color, Section, Stop};

/// An immutable gradient snapshot built from an unordered stop collection.
///
/// Stops are keyed by offset (duplicate offsets collapse, last wins) and the
/// domain is clamped: if the smallest offset is above 0 a stop at 0 with the
/// same color is synthesized, and symmetrically at 1.
#[derive(Clone, Debug)]
pub struct Gradient {
    stops: Vec<Stop>,
}

impl Gradient {
    pub fn new(stops: &[Stop]) -> Self {
        let mut keyed: Vec<Stop> = Vec::with_capacity(stops.len());
        for stop in stops {
            match keyed.iter().position(|s| s.offset == stop.offset) {
                Some(i) => keyed[i].color = stop.color,
                None => keyed.push(*stop),
            }
        }
        keyed.sort_by(|a, b| a.offset.total_cmp(&b.offset));

        if let Some(first) = keyed.first().copied() {
            if first.offset > 0.0 {
                keyed.insert(0, Stop::new(0.0, first.color));
            }
        }
        if let Some(last) = keyed.last().copied() {
            if last.offset < 1.0 {
                keyed.push(Stop::new(1.0, last.color));
            }
        }

        Self { stops: keyed }
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Color at `position` in [0, 1] (clamped). An empty gradient yields
    /// opaque black; a position landing exactly on a stop yields that stop's
    /// color; anything else is interpolated per channel between the tightest
    /// bracketing pair.
    pub fn color_at(&self, position: f64) -> Color {
        if self.stops.is_empty() {
            return Color::BLACK;
        }
        let position = position.clamp(0.0, 1.0);
        if self.stops.len() == 1 {
            return self.stops[0].color;
        }
        if let Some(hit) = self.stops.iter().find(|s| s.offset == position) {
            return hit.color;
        }

        let mut lower_bound = self.stops[0];
        let mut upper_bound = self.stops[self.stops.len() - 1];
        for stop in &self.stops {
            if stop.offset < position {
                lower_bound = *stop;
            }
            if stop.offset > position {
                upper_bound = *stop;
                break;
            }
        }
        interpolate_color(lower_bound, upper_bound, position)
    }
}

/// Convenience wrapper around [`Gradient::color_at`] for one-shot lookups.
pub fn gradient_color_at(stops: &[Stop], position: f64) -> Color {
    Gradient::new(stops).color_at(position)
}

fn interpolate_color(lower_bound: Stop, upper_bound: Stop, position: f64) -> Color {
    let pos = (position - lower_bound.offset) / (upper_bound.offset - lower_bound.offset);

    let delta_red = (upper_bound.color.red - lower_bound.color.red) * pos;
    let delta_green = (upper_bound.color.green - lower_bound.color.green) * pos;
    let delta_blue = (upper_bound.color.blue - lower_bound.color.blue) * pos;
    let delta_alpha = (upper_bound.color.alpha - lower_bound.color.alpha) * pos;

    Color::rgba(
        lower_bound.color.red + delta_red,
        lower_bound.color.green + delta_green,
        lower_bound.color.blue + delta_blue,
        lower_bound.color.alpha + delta_alpha,
    )
}

/// Color of the first section containing `value`, or `default`.
pub fn color_of_section(sections: &[Section], value: f64, default: Color) -> Color {
    sections
        .iter()
        .find(|section| section.contains(value))
        .map(|section| section.color)
        .unwrap_or(default)
}

/// Evenly interpolated palette from `from` to `to`.
/// The palette size is clamped to [1, 12].
pub fn create_color_palette(from: Color, to: Color, no_of_colors: usize) -> Vec<Color> {
    let steps = no_of_colors.clamp(1, 12) - 1;
    let mut palette = Vec::with_capacity(steps + 1);
    palette.push(from);
    if steps == 0 {
        return palette;
    }

    let step = 1.0 / steps as f64;
    let delta_red = (to.red - from.red) * step;
    let delta_green = (to.green - from.green) * step;
    let delta_blue = (to.blue - from.blue) * step;
    let delta_alpha = (to.alpha - from.alpha) * step;

    let mut current = from;
    for _ in 0..steps {
        current = Color::rgba(
            current.red + delta_red,
            current.green + delta_green,
            current.blue + delta_blue,
            current.alpha + delta_alpha,
        );
        palette.push(current);
    }
    palette
}
