//! Coordinate conversion module
//!
//! Maps geographic coordinates (latitude/longitude) onto Web Mercator tiles and
//! encodes tiles as quadkeys, following the Bing Maps tile system. Stored asset
//! quadkeys are produced with the same scheme, so the pixel rounding and the
//! digit winding here must not change.

mod types;

pub use types::{
    CoordError, Quadkey, TileCoord, MAX_LAT, MAX_LON, MAX_ZOOM, MERCATOR_MAX_LAT, MIN_LAT,
    MIN_LON, MIN_ZOOM, TILE_SIZE,
};

use std::f64::consts::PI;

/// Zoom level used for all lightning/asset matching.
pub const ZOOM_LEVEL: u8 = 12;

/// Converts geographic coordinates to tile coordinates.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees (-90.0 to 90.0, clipped to the Mercator limit)
/// * `lon` - Longitude in degrees (-180.0 to 180.0)
/// * `zoom` - Zoom level (1 to 23)
///
/// # Returns
///
/// A `Result` containing the tile coordinates or an error if inputs are invalid.
#[inline]
pub fn to_tile_coords(lat: f64, lon: f64, zoom: u8) -> Result<TileCoord, CoordError> {
    // NaN fails the range checks as well
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(CoordError::InvalidLongitude(lon));
    }
    if !(MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
        return Err(CoordError::InvalidZoom(zoom));
    }

    let lat = lat.clamp(-MERCATOR_MAX_LAT, MERCATOR_MAX_LAT);

    let x = (lon + 180.0) / 360.0;
    let sin_lat = (lat * PI / 180.0).sin();
    let y = 0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI);

    let map_size = (TILE_SIZE as u64) << zoom;
    let pixel_x = to_pixel(x, map_size);
    let pixel_y = to_pixel(y, map_size);

    Ok(TileCoord {
        row: (pixel_y / TILE_SIZE as u64) as u32,
        col: (pixel_x / TILE_SIZE as u64) as u32,
        zoom,
    })
}

/// Scales a normalized map position to a pixel, rounded and clipped to the map.
#[inline]
fn to_pixel(position: f64, map_size: u64) -> u64 {
    let max = (map_size - 1) as f64;
    (position * map_size as f64 + 0.5).clamp(0.0, max) as u64
}

/// Encodes a tile as a quadkey.
///
/// Interleaves the row and column bits, most significant first. Each digit is
/// `col_bit + 2 * row_bit`.
pub fn tile_to_quadkey(tile: &TileCoord) -> Quadkey {
    let mut digits = String::with_capacity(tile.zoom as usize);
    for level in (1..=tile.zoom).rev() {
        let mask = 1u32 << (level - 1);
        let mut digit = b'0';
        if tile.col & mask != 0 {
            digit += 1;
        }
        if tile.row & mask != 0 {
            digit += 2;
        }
        digits.push(digit as char);
    }
    Quadkey::from_digits(digits)
}

/// Computes the quadkey of the tile containing a geographic point.
///
/// Two points yield the same quadkey if and only if they fall in the same tile
/// at `zoom`.
pub fn quadkey_for(lat: f64, lon: f64, zoom: u8) -> Result<Quadkey, CoordError> {
    let tile = to_tile_coords(lat, lon, zoom)?;
    Ok(tile_to_quadkey(&tile))
}
