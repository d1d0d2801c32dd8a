//! Curve smoothing: Catmull-Rom subdivision and cubic-Bezier path fitting.

pub mod bezier;
pub mod catmull_rom;

pub use bezier::smooth_path;
pub use catmull_rom::{smooth_spark_line, subdivide_points, CatmullRom};
