//! Reduces an event stream to the set of quadkeys it touches.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use tracing::{trace, warn};

use super::{EventError, EventReader, LightningEvent};
use crate::cells::CellSet;
use crate::coord::{quadkey_for, Quadkey, ZOOM_LEVEL};

/// What to do with a record that cannot be turned into a quadkey.
///
/// Covers lines that are not valid event JSON and actionable events whose
/// coordinates are missing or out of range. I/O errors always abort regardless of policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedRecordPolicy {
    /// Log a warning, count the record and keep reading.
    #[default]
    Skip,
    /// Stop and return the error.
    Abort,
}

impl FromStr for MalformedRecordPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skip" => Ok(MalformedRecordPolicy::Skip),
            "abort" => Ok(MalformedRecordPolicy::Abort),
            other => Err(format!("unknown malformed record policy '{}'", other)),
        }
    }
}

impl fmt::Display for MalformedRecordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedRecordPolicy::Skip => write!(f, "skip"),
            MalformedRecordPolicy::Abort => write!(f, "abort"),
        }
    }
}

/// Counters gathered while filtering an event stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Records read (blank lines excluded)
    pub records: usize,
    /// Records that produced a quadkey
    pub accepted: usize,
    /// Records dropped because of their flash type
    pub filtered: usize,
    /// Records skipped as malformed or out of range
    pub malformed: usize,
}

/// Result of filtering an event stream.
#[derive(Debug, Clone, Default)]
pub struct CollectOutcome {
    pub cells: CellSet,
    pub stats: FilterStats,
}

/// Converts lightning events into quadkeys at [`ZOOM_LEVEL`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EventFilter {
    policy: MalformedRecordPolicy,
}

impl EventFilter {
    pub fn new(policy: MalformedRecordPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MalformedRecordPolicy {
        self.policy
    }

    /// Quadkey for a single event, or `None` if its flash type is not actionable.
    ///
    /// `line` is only used to label the error.
    pub fn quadkey_of(
        &self,
        event: &LightningEvent,
        line: usize,
    ) -> Result<Option<Quadkey>, EventError> {
        if !event.flash_type().is_actionable() {
            return Ok(None);
        }

        let (latitude, longitude) = event
            .position()
            .ok_or(EventError::MissingCoordinates { line })?;

        quadkey_for(latitude, longitude, ZOOM_LEVEL)
            .map(Some)
            .map_err(|source| EventError::InvalidCoordinates { line, source })
    }

    /// Consume the whole stream and collect the distinct quadkeys.
    pub fn collect<R: BufRead>(&self, reader: R) -> Result<CollectOutcome, EventError> {
        let mut outcome = CollectOutcome::default();
        let mut events = EventReader::new(reader);

        while let Some(result) = events.next() {
            let line = events.line_number();

            let record = match result {
                Ok(event) => {
                    outcome.stats.records += 1;
                    self.quadkey_of(&event, line)
                }
                Err(EventError::Io(e)) => return Err(EventError::Io(e)),
                Err(e) => {
                    outcome.stats.records += 1;
                    Err(e)
                }
            };

            match record {
                Ok(Some(quadkey)) => {
                    outcome.stats.accepted += 1;
                    outcome.cells.insert(quadkey);
                }
                Ok(None) => {
                    trace!(line, "Ignoring event with non-actionable flash type");
                    outcome.stats.filtered += 1;
                }
                Err(e) => match self.policy {
                    MalformedRecordPolicy::Skip => {
                        warn!("Skipping event: {}", e);
                        outcome.stats.malformed += 1;
                    }
                    MalformedRecordPolicy::Abort => return Err(e),
                },
            }
        }

        if outcome.stats.malformed > 0 {
            warn!(
                skipped = outcome.stats.malformed,
                "Skipped malformed lightning events"
            );
        }

        Ok(outcome)
    }
}

/// Collect the distinct quadkeys touched by actionable events in `reader`.
///
/// Malformed records are skipped.
pub fn collect_quadkeys<R: BufRead>(reader: R) -> Result<CellSet, EventError> {
    EventFilter::default()
        .collect(reader)
        .map(|outcome| outcome.cells)
}
