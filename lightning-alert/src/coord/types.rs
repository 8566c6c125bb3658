//! Coordinate type definitions

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Valid geographic latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Web Mercator latitude limit. Latitudes beyond it are clipped before projection.
pub const MERCATOR_MAX_LAT: f64 = 85.05112878;

/// Supported zoom levels (Bing tile system)
pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 23;

/// Tile edge length in pixels.
pub const TILE_SIZE: u32 = 256;

/// Tile coordinates in Web Mercator / Slippy Map system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// Y coordinate (north-south), 0 at north
    pub row: u32,
    /// X coordinate (east-west), 0 at west
    pub col: u32,
    /// Zoom level (1-23)
    pub zoom: u8,
}

/// Quadtree cell identifier.
///
/// One base-4 digit per zoom level, most significant first:
/// `0` = NW, `1` = NE, `2` = SW, `3` = SE.
///
/// Implements `Borrow<str>` so hashed collections of quadkeys can be probed
/// with a plain string slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quadkey(String);

impl Quadkey {
    pub(super) fn from_digits(digits: String) -> Self {
        Self(digits)
    }

    /// Returns the quadkey as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Zoom level the key addresses, one digit per level.
    pub fn zoom(&self) -> u8 {
        self.0.len() as u8
    }
}

impl fmt::Display for Quadkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Quadkey {
    type Err = CoordError;

    /// Parse a quadkey string, checking only its shape (1 to 23 digits, each 0-3).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid_len = (MIN_ZOOM as usize..=MAX_ZOOM as usize).contains(&s.len());
        if !valid_len || !s.bytes().all(|b| (b'0'..=b'3').contains(&b)) {
            return Err(CoordError::InvalidQuadkey(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl Borrow<str> for Quadkey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Errors that can occur during coordinate conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordError {
    /// Latitude is not finite or outside -90.0 to 90.0
    #[error("Invalid latitude: {0} (must be between {min} and {max})", min = MIN_LAT, max = MAX_LAT)]
    InvalidLatitude(f64),
    /// Longitude is not finite or outside -180.0 to 180.0
    #[error("Invalid longitude: {0} (must be between {min} and {max})", min = MIN_LON, max = MAX_LON)]
    InvalidLongitude(f64),
    /// Zoom level is outside 1 to 23
    #[error("Invalid zoom level: {0} (must be between {min} and {max})", min = MIN_ZOOM, max = MAX_ZOOM)]
    InvalidZoom(u8),
    /// Quadkey contains invalid characters or has an invalid length
    #[error("Invalid quadkey: '{0}' (must be 1 to {max} digits 0-3)", max = MAX_ZOOM)]
    InvalidQuadkey(String),
}
