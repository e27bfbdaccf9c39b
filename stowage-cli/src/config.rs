//! Configuration loading for the STOWAGE CLI.
//!
//! Without a config file every section takes its built-in defaults. A file
//! only needs the sections and fields that differ.

use std::path::Path;
use stowage_core::{StowageConfig, StowageError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] StowageError),
}

/// Load the configuration from `path`, or the defaults when no path is
/// given, then apply environment overrides and validate.
pub fn load(path: Option<&Path>) -> Result<StowageConfig, ConfigFileError> {
    let mut config = match path {
        Some(path) => from_path(path)?,
        None => StowageConfig::default(),
    };
    config.pricing = config.pricing.with_env_overrides();
    config.validate()?;

    tracing::debug!(
        path = ?path,
        currency = %config.pricing.currency,
        "Configuration loaded"
    );
    Ok(config)
}

/// Parse a TOML file without applying overrides or validation.
pub fn from_path(path: &Path) -> Result<StowageConfig, ConfigFileError> {
    let contents = std::fs::read_to_string(path)?;
    let config: StowageConfig = toml::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config(
            r#"
            [pricing]
            min_duration_days = 7

            [capacity.clearances]
            wall = 1.0
            "#,
        );
        let config = from_path(file.path()).unwrap();
        assert_eq!(config.pricing.min_duration_days, 7);
        assert_eq!(config.pricing.currency, "USD");
        assert_eq!(config.capacity.clearances.wall, 1.0);
        assert_eq!(config.capacity.clearances.sprinkler, 0.9);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let file = write_config("[pricing]\ncurrancy = \"EUR\"\n");
        assert!(matches!(
            from_path(file.path()),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config("[pricing.tier_discounts]\ngold = 120\n");
        assert!(matches!(
            load(Some(file.path())),
            Err(ConfigFileError::Invalid(StowageError::Config(_)))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(from_path(&path), Err(ConfigFileError::Io(_))));
    }
}
