//! One-shot alerting pipeline.
//!
//! Loads the asset catalog, reduces the event file to its set of struck
//! quadkeys, then writes one alert per asset in a struck tile.
//!
//! # Example
//!
//! ```ignore
//! use lightning_alert::alerter::Alerter;
//! use lightning_alert::event::MalformedRecordPolicy;
//!
//! let alerter = Alerter::new(MalformedRecordPolicy::Skip);
//! let summary = alerter.run("assets.json", "lightning.json", std::io::stdout().lock())?;
//! ```

use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::alert::{match_assets, write_alerts};
use crate::asset::{AssetCatalog, AssetError};
use crate::event::{
    open_event_file, EventError, EventFilter, FilterStats, MalformedRecordPolicy,
};

/// Errors that abort an alerting run.
#[derive(Debug, thiserror::Error)]
pub enum AlerterError {
    #[error(transparent)]
    Catalog(#[from] AssetError),
    #[error(transparent)]
    Events(#[from] EventError),
    #[error("Failed to write alerts: {0}")]
    Output(#[source] io::Error),
}

impl AlerterError {
    /// Path of the missing input file, if that is what stopped the run.
    pub fn missing_path(&self) -> Option<&Path> {
        match self {
            AlerterError::Catalog(AssetError::NotFound(path))
            | AlerterError::Events(EventError::NotFound(path)) => Some(path.as_path()),
            _ => None,
        }
    }
}

/// Totals from a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Assets in the catalog
    pub assets: usize,
    /// Distinct quadkeys struck
    pub cells: usize,
    /// Alerts written
    pub alerts: usize,
    /// Event filter counters
    pub events: FilterStats,
}

/// Runs the catalog → events → alerts pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alerter {
    filter: EventFilter,
}

impl Alerter {
    pub fn new(policy: MalformedRecordPolicy) -> Self {
        Self {
            filter: EventFilter::new(policy),
        }
    }

    /// Run the pipeline, writing alert lines to `out`.
    ///
    /// Nothing is written unless both inputs were read successfully.
    pub fn run<A, E, W>(
        &self,
        assets_path: A,
        events_path: E,
        out: W,
    ) -> Result<RunSummary, AlerterError>
    where
        A: AsRef<Path>,
        E: AsRef<Path>,
        W: Write,
    {
        let catalog = AssetCatalog::from_path(assets_path)?;

        let outcome = {
            let reader = open_event_file(events_path)?;
            self.filter.collect(reader)?
        };

        info!(
            records = outcome.stats.records,
            accepted = outcome.stats.accepted,
            filtered = outcome.stats.filtered,
            malformed = outcome.stats.malformed,
            cells = outcome.cells.len(),
            "Processed lightning events"
        );

        let alerts = write_alerts(match_assets(&catalog, &outcome.cells), out)
            .map_err(AlerterError::Output)?;

        info!(alerts, "Asset matching complete");

        Ok(RunSummary {
            assets: catalog.len(),
            cells: outcome.cells.len(),
            alerts,
            events: outcome.stats,
        })
    }
}
