//! INI parsing logic for converting `Ini` → `ConfigFile`.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [events] section
    if let Some(section) = ini.section(Some("events")) {
        if let Some(v) = section.get("malformed_records") {
            config.events.malformed_records =
                v.parse().map_err(|_| ConfigFileError::InvalidValue {
                    section: "events".to_string(),
                    key: "malformed_records".to_string(),
                    value: v.to_string(),
                    reason: "must be one of: skip, abort".to_string(),
                })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("level") {
            let v = v.trim();
            if v.is_empty() {
                return Err(ConfigFileError::InvalidValue {
                    section: "logging".to_string(),
                    key: "level".to_string(),
                    value: v.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
            config.logging.level = v.to_string();
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = Some(expand_tilde(v));
            }
        }
    }

    Ok(config)
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::MalformedRecordPolicy;

    fn parse(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let ini = Ini::load_from_str(content).unwrap();
        parse_ini(&ini)
    }

    #[test]
    fn test_empty_ini_gives_defaults() {
        assert_eq!(parse("").unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_policy_is_case_insensitive() {
        let config = parse("[events]\nmalformed_records = Abort\n").unwrap();
        assert_eq!(
            config.events.malformed_records,
            MalformedRecordPolicy::Abort
        );
    }

    #[test]
    fn test_invalid_policy() {
        let err = parse("[events]\nmalformed_records = ignore\n").unwrap_err();
        match err {
            ConfigFileError::InvalidValue {
                section,
                key,
                value,
                ..
            } => {
                assert_eq!(section, "events");
                assert_eq!(key, "malformed_records");
                assert_eq!(value, "ignore");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_empty_log_level_rejected() {
        assert!(parse("[logging]\nlevel =\n").is_err());
    }

    #[test]
    fn test_empty_log_file_means_no_file() {
        let config = parse("[logging]\nfile =\n").unwrap();
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/logs/a.log"), home.join("logs/a.log"));
            assert_eq!(expand_tilde("~"), home);
        }
        assert_eq!(expand_tilde("/var/log/a.log"), PathBuf::from("/var/log/a.log"));
    }
}
