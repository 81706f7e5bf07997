//! Error types for loading forecast data and configuration

use std::path::PathBuf;

/// Failures while loading or validating a forecast data set.
///
/// Rendering never fails; these only surface from external data sources.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("failed to read forecast data from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse forecast data from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid temperature '{0}'")]
    InvalidTemperature(String),

    #[error("forecast data has no hourly entries")]
    EmptyHourly,

    #[error("forecast data has no daily entries")]
    EmptyDaily,
}

/// Failures while loading the user configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
