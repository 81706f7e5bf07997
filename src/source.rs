//! Forecast data sources
//!
//! The screen only ever sees a [`ForecastData`]; where it comes from is
//! decided here.

use std::path::{Path, PathBuf};

use crate::error::ForecastError;
use crate::forecast::ForecastData;

/// Something that can produce a complete forecast data set.
pub trait ForecastSource {
    /// Human-readable origin, for logs and the status line
    fn name(&self) -> String;

    fn load(&self) -> Result<ForecastData, ForecastError>;
}

/// The built-in sample set.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleSource;

impl ForecastSource for SampleSource {
    fn name(&self) -> String {
        "sample data".to_string()
    }

    fn load(&self) -> Result<ForecastData, ForecastError> {
        Ok(ForecastData::sample())
    }
}

/// A TOML file with `[current]`, `[[hourly]]` and `[[daily]]` tables.
#[derive(Debug, Clone)]
pub struct TomlFileSource {
    path: PathBuf,
}

impl TomlFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ForecastSource for TomlFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<ForecastData, ForecastError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| ForecastError::Read {
            path: self.path.clone(),
            source,
        })?;
        parse_forecast(&text, &self.path)
    }
}

/// Parse and validate forecast TOML. `path` is only used in errors.
pub fn parse_forecast(text: &str, path: &Path) -> Result<ForecastData, ForecastError> {
    let data: ForecastData = toml::from_str(text).map_err(|source| ForecastError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    data.validate()?;
    tracing::debug!(
        path = %path.display(),
        hourly = data.hourly.len(),
        daily = data.daily.len(),
        "parsed forecast data"
    );
    Ok(data)
}

/// Async read for the reload effect; parsing is shared with [`TomlFileSource`].
pub async fn load_forecast_file(path: &Path) -> Result<ForecastData, ForecastError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ForecastError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse_forecast(&text, path)
}
