//! CLI runner for common setup and operations.
//!
//! Encapsulates configuration loading, logging initialization and the
//! alerting run itself.

use std::io::{self, BufWriter};
use std::path::Path;

use lightning_alert::alerter::Alerter;
use lightning_alert::config::ConfigFile;
use lightning_alert::logging::{init_logging, LoggingGuard};
use tracing::{debug, info};

use crate::error::CliError;

/// Runner that manages CLI lifecycle.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Load configuration and initialize logging.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Explicit config file, which must exist; `None` uses the default location
    /// * `debug_mode` - When true, enables debug-level logging regardless of RUST_LOG
    pub fn new(config_path: Option<&Path>, debug_mode: bool) -> Result<Self, CliError> {
        let config = match config_path {
            Some(path) => ConfigFile::load_required(path)?,
            None => ConfigFile::load()?,
        };

        let logging_guard =
            init_logging(&config.logging, debug_mode).map_err(CliError::LoggingInit)?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Log startup information.
    pub fn log_startup(&self) {
        info!("Lightning Alert v{}", lightning_alert::VERSION);
        debug!(
            malformed_records = %self.config.events.malformed_records,
            "Loaded configuration"
        );
    }

    /// Run the alerter, printing alerts to stdout.
    pub fn run(&self, assets: &Path, events: &Path) -> Result<(), CliError> {
        let alerter = Alerter::new(self.config.events.malformed_records);
        let stdout = BufWriter::new(io::stdout().lock());

        let summary = alerter.run(assets, events, stdout)?;
        debug!(?summary, "Run complete");

        Ok(())
    }
}
