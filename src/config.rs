//! User configuration (`config.toml`)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::forecast::TempUnit;

pub const APP_DIR: &str = "weather-card";
pub const CONFIG_FILE: &str = "config.toml";

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub data_file: Option<PathBuf>,
    pub unit: Option<TempUnit>,
    /// `--week` can only switch the section on
    pub show_week: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display unit at startup
    pub unit: TempUnit,
    /// Show the week section below the hourly row
    pub show_week: bool,
    /// Forecast TOML file; the built-in sample set when absent
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// `<config dir>/weather-card/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs_next::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config.resolve_relative_to(path))
    }

    /// Load from `path` or the default location.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of the file values.
    pub fn merge(self, overrides: Overrides) -> Self {
        Self {
            unit: overrides.unit.unwrap_or(self.unit),
            show_week: overrides.show_week || self.show_week,
            data_file: overrides.data_file.or(self.data_file),
        }
    }

    /// Relative `data_file` entries are relative to the config file.
    fn resolve_relative_to(mut self, config_path: &Path) -> Self {
        if let (Some(data_file), Some(dir)) = (&self.data_file, config_path.parent()) {
            if data_file.is_relative() {
                self.data_file = Some(dir.join(data_file));
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_config(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load(Path::new("/no/such/dir/config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.unit, TempUnit::Celsius);
        assert!(!config.show_week);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let (_dir, path) = temp_config("unit = \"fahrenheit\"\n");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.unit, TempUnit::Fahrenheit);
        assert!(!config.show_week);
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn test_relative_data_file_resolved_against_config_dir() {
        let (_dir, path) = temp_config("show_week = true\ndata_file = \"forecast.toml\"\n");
        let config = Config::load(&path).unwrap();
        assert!(config.show_week);
        assert_eq!(
            config.data_file,
            Some(path.parent().unwrap().join("forecast.toml"))
        );
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let (_dir, path) = temp_config("unit = \"kelvin\"\n");
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let file = Config {
            unit: TempUnit::Fahrenheit,
            show_week: true,
            data_file: Some(PathBuf::from("/etc/forecast.toml")),
        };

        assert_eq!(file.clone().merge(Overrides::default()), file);

        let merged = file.clone().merge(Overrides {
            data_file: Some(PathBuf::from("today.toml")),
            unit: Some(TempUnit::Celsius),
            show_week: false,
        });
        assert_eq!(merged.unit, TempUnit::Celsius);
        assert_eq!(merged.data_file, Some(PathBuf::from("today.toml")));
        // Absent flag keeps the file's week setting
        assert!(merged.show_week);

        let week_on = Config::default().merge(Overrides {
            show_week: true,
            ..Default::default()
        });
        assert!(week_on.show_week);
        assert_eq!(week_on.unit, TempUnit::Celsius);
        assert_eq!(week_on.data_file, None);
    }
}
