// Value types shared by the toolkit

use serde::{Deserialize, Serialize};

use crate::numeric::less_than;

/// A 2D point in chart/widget space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, used for graph bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }
}

/// RGBA color with channels in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };
    pub const WHITE: Color = Color {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
        alpha: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 0.0,
    };

    /// Creates a color, clamping every channel to [0, 1].
    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: red.clamp(0.0, 1.0),
            green: green.clamp(0.0, 1.0),
            blue: blue.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Euclidean distance between two colors in RGB space.
    pub fn distance(self, other: Color) -> f64 {
        let delta_r = other.red - self.red;
        let delta_g = other.green - self.green;
        let delta_b = other.blue - self.blue;
        (delta_r * delta_r + delta_g * delta_g + delta_b * delta_b).sqrt()
    }

    pub fn is_monochrome(self) -> bool {
        self.red == self.green && self.green == self.blue
    }

    /// Converts to YUV; `[0]` is the luma channel.
    pub fn to_yuv(self) -> [f64; 3] {
        const WEIGHT_RED: f64 = 0.299;
        const WEIGHT_GREEN: f64 = 0.587;
        const WEIGHT_BLUE: f64 = 0.144;
        const U_MAX: f64 = 0.436;
        const V_MAX: f64 = 0.615;
        let y = (WEIGHT_RED * self.red + WEIGHT_GREEN * self.green + WEIGHT_BLUE * self.blue)
            .clamp(0.0, 1.0);
        let u = (U_MAX * ((self.blue - y) / (1.0 - WEIGHT_BLUE))).clamp(-U_MAX, U_MAX);
        let v = (V_MAX * ((self.red - y) / (1.0 - WEIGHT_RED))).clamp(-V_MAX, V_MAX);
        [y, u, v]
    }

    pub fn is_bright(self) -> bool {
        self.to_yuv()[0] >= 0.5
    }

    pub fn is_dark(self) -> bool {
        !self.is_bright()
    }

    /// HSB brightness (maximum channel).
    pub fn brightness(self) -> f64 {
        self.red.max(self.green).max(self.blue)
    }

    /// Black on bright colors, white on dark ones.
    pub fn contrast_color(self) -> Color {
        if self.brightness() > 0.5 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }
}

/// A gradient anchor: a color pinned at an offset in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub offset: f64,
    pub color: Color,
}

impl Stop {
    pub fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// A colored value range `[start, end)`, used as a fallback color source
/// when no gradient is configured.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub start: f64,
    pub end: f64,
    pub color: Color,
}

impl Section {
    pub fn new(start: f64, end: f64, color: Color) -> Self {
        Self { start, end, color }
    }

    pub fn contains(&self, value: f64) -> bool {
        !less_than(value, self.start) && less_than(value, self.end)
    }
}

/// Result of [`crate::scales::nice_scale`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NiceScale {
    pub nice_min: f64,
    pub nice_max: f64,
    pub nice_range: f64,
    pub nice_step: f64,
}

/// Result of [`crate::scales::calc_auto_scale`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AutoScale {
    pub nice_min: f64,
    pub nice_max: f64,
    pub major_tick_space: f64,
    pub minor_tick_space: f64,
}

/// Drawing commands produced by the path smoother.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicCurveTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    ClosePath,
}
