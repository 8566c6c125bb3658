//! Configuration for the lightning alerter.
//!
//! Settings are read from an INI file, `~/.lightning-alert/config.ini` by
//! default. Every key is optional:
//!
//! ```ini
//! [events]
//! ; skip | abort
//! malformed_records = skip
//!
//! [logging]
//! level = warn
//! file = ~/.lightning-alert/lightning-alert.log
//! ```
//!
//! The zoom level and the accepted flash types are fixed and cannot be
//! configured.

mod file;
mod parser;

use std::path::PathBuf;

use crate::event::MalformedRecordPolicy;

pub use file::{config_directory, config_file_path, ConfigFileError};

/// Default log filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    /// Event stream settings
    pub events: EventSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Event stream configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSettings {
    /// Handling of events that cannot be parsed or located
    pub malformed_records: MalformedRecordPolicy,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub level: String,
    /// Optional log file, truncated at the start of each run
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}
