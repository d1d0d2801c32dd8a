//! Lat/long to planar map coordinates.
//!
//! Equirectangular x combined with a Mercator y, calibrated against the
//! bundled world-map outline.

use std::f64::consts::PI;

use crate::data_types::Point;

pub const MAP_WIDTH: f64 = 1009.1149817705154 - 1.154000163078308;
pub const MAP_HEIGHT: f64 = 665.2420043945312;
pub const MAP_OFFSET_X: f64 = -MAP_WIDTH * 0.0285;
pub const MAP_OFFSET_Y: f64 = MAP_HEIGHT * 0.195;

/// [`lat_lon_to_xy`] with the bundled map's default offsets.
pub fn lat_lon_to_xy_default(latitude: f64, longitude: f64) -> Point {
    lat_lon_to_xy(latitude, longitude, MAP_OFFSET_X, MAP_OFFSET_Y)
}

pub fn lat_lon_to_xy(latitude: f64, longitude: f64, offset_x: f64, offset_y: f64) -> Point {
    let x = (longitude + 180.0) * (MAP_WIDTH / 360.0) + offset_x;
    let y = (MAP_HEIGHT / 2.0)
        - (MAP_WIDTH * ((PI / 4.0 + latitude.to_radians() / 2.0).tan().ln()) / (2.0 * PI))
        + offset_y;
    Point::new(x, y)
}
