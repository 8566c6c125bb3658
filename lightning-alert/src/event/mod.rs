//! Lightning event stream.
//!
//! Events arrive as newline-delimited JSON, one strike per line:
//!
//! ```text
//! {"flashType":1,"strikeTime":1386285909025,"latitude":33.5524951,"longitude":-94.5822016}
//! ```
//!
//! Only `flashType`, `latitude` and `longitude` are read; other fields are
//! ignored. `flashType` must be an integer (`1.0` counts as `1`). Coordinates
//! are only required once the flash type is known to be actionable, so a
//! heartbeat without a position is filtered rather than rejected.
//!
//! The [`EventFilter`] turns a stream of events into the [`CellSet`] of
//! quadkeys they touch.
//!
//! [`CellSet`]: crate::cells::CellSet

mod filter;
mod reader;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use crate::coord::CoordError;

pub use filter::{
    collect_quadkeys, CollectOutcome, EventFilter, FilterStats, MalformedRecordPolicy,
};
pub use reader::EventReader;

/// Flash type codes that produce alerts.
pub const ACCEPTED_FLASH_TYPES: [i64; 2] = [0, 1];

/// Error type for event stream processing.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed event at line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("Missing or non-numeric coordinates at line {line}")]
    MissingCoordinates { line: usize },
    #[error("Invalid coordinates at line {line}: {source}")]
    InvalidCoordinates {
        line: usize,
        #[source]
        source: CoordError,
    },
}

impl EventError {
    /// Line number of the offending record, for per-record errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            EventError::Malformed { line, .. }
            | EventError::MissingCoordinates { line }
            | EventError::InvalidCoordinates { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true for errors confined to a single record.
    pub fn is_record_error(&self) -> bool {
        self.line().is_some()
    }
}

/// Classification of a lightning flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashType {
    /// Cloud-to-ground strike (code 0)
    CloudToGround,
    /// Cloud-to-cloud flash (code 1)
    CloudToCloud,
    /// Feed keep-alive with no strike attached (code 9)
    Heartbeat,
    /// Any other code
    Unknown(i64),
}

impl FlashType {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => FlashType::CloudToGround,
            1 => FlashType::CloudToCloud,
            9 => FlashType::Heartbeat,
            other => FlashType::Unknown(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            FlashType::CloudToGround => 0,
            FlashType::CloudToCloud => 1,
            FlashType::Heartbeat => 9,
            FlashType::Unknown(code) => *code,
        }
    }

    /// Returns true if strikes of this type raise alerts.
    pub fn is_actionable(&self) -> bool {
        ACCEPTED_FLASH_TYPES.contains(&self.code())
    }
}

/// A single lightning strike.
///
/// Decoding fails only when `flashType` is missing or not an integer. A
/// missing or non-numeric coordinate decodes as `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightningEvent {
    /// Raw flash type code
    #[serde(deserialize_with = "flash_code")]
    pub flash_type: i64,
    /// Latitude in decimal degrees
    #[serde(default, deserialize_with = "coordinate")]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    #[serde(default, deserialize_with = "coordinate")]
    pub longitude: Option<f64>,
}

impl LightningEvent {
    pub fn new(flash_type: i64, latitude: f64, longitude: f64) -> Self {
        Self {
            flash_type,
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    pub fn flash_type(&self) -> FlashType {
        FlashType::from_code(self.flash_type)
    }

    /// `(latitude, longitude)` if both are present.
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

/// Accepts integers and floats with no fractional part.
fn flash_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let number = Number::deserialize(deserializer)?;
    if let Some(code) = number.as_i64() {
        return Ok(code);
    }
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => Ok(value as i64),
        _ => Err(D::Error::custom(format!(
            "flashType must be an integer, got {}",
            number
        ))),
    }
}

fn coordinate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        _ => None,
    })
}

/// Open an event file for reading.
///
/// The returned reader owns the file handle; it is closed when the reader is
/// dropped.
pub fn open_event_file<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, EventError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => EventError::NotFound(path.to_path_buf()),
        _ => EventError::Io(e),
    })?;

    tracing::debug!(path = %path.display(), "Opened event file");
    Ok(BufReader::new(file))
}
