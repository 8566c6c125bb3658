//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process;
use lightning_alert::alerter::AlerterError;
use lightning_alert::config::ConfigFileError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(io::Error),
    /// Configuration error
    Config(ConfigFileError),
    /// Asset catalog or event file does not exist
    MissingFile(PathBuf),
    /// Failed while reading inputs or writing alerts
    Run(AlerterError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Run(AlerterError::Events(e)) = self {
            if e.is_record_error() {
                eprintln!();
                eprintln!("Set malformed_records = skip in the [events] section of the");
                eprintln!("config file to skip bad lines instead of stopping.");
            }
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(e) => write!(f, "Failed to initialize logging: {}", e),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::MissingFile(path) => write!(f, "File '{}' not found", path.display()),
            CliError::Run(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::LoggingInit(e) => Some(e),
            CliError::Config(e) => Some(e),
            CliError::Run(e) => Some(e),
            CliError::MissingFile(_) => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<AlerterError> for CliError {
    fn from(e: AlerterError) -> Self {
        match e.missing_path() {
            Some(path) => CliError::MissingFile(path.to_path_buf()),
            None => CliError::Run(e),
        }
    }
}
