//! tile_toolkit: geometry and scaling computations behind dashboard tiles
//!
//! Rendering skins hand raw numeric/point data to this crate and get back
//! drawable artifacts: nice axis bounds, interpolated gradient colors,
//! smoothed curves and hull outlines, containment verdicts and map
//! coordinates. No windowing, no event loop, no retained widget state.

pub mod data_types;
pub mod error;
pub mod geometry;
pub mod gradient;
pub mod hull;
pub mod numeric;
pub mod projection;
pub mod resources;
pub mod scales;
pub mod smoothing;
pub mod stats;

pub use data_types::{Color, PathCommand, Point, Rect, Section, Stop};
pub use error::{Result, ToolkitError};
pub use gradient::{gradient_color_at, Gradient};
pub use hull::{convex_hull, smoothed_convex_hull};
pub use scales::{nice_scale, nice_scale_default, snap_to_ticks};
pub use smoothing::{smooth_path, subdivide_points};
