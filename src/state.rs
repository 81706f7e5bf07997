//! Application state - single source of truth

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::forecast::{ForecastData, TempUnit};

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Core data (visible in debug) ---
    /// Forecast lifecycle: Loaded at startup, Loading/Failed only around reloads
    #[debug(section = "Forecast", label = "Data", debug_fmt)]
    pub forecast: DataResource<ForecastData>,

    /// Whether a reload is in progress (keeps showing current data meanwhile)
    #[debug(section = "Forecast", label = "Reloading")]
    pub is_reloading: bool,

    /// Last reload failure while older data stayed on screen
    #[debug(section = "Forecast", label = "Reload error", debug_fmt)]
    pub reload_error: Option<String>,

    /// Forecast file, if not running on the sample set
    #[debug(section = "Forecast", label = "File", debug_fmt)]
    pub data_file: Option<PathBuf>,

    /// Temperature unit preference
    #[debug(section = "View", label = "Unit", debug_fmt)]
    pub unit: TempUnit,

    /// Index of the first visible hourly card
    #[debug(section = "View", label = "Hourly offset")]
    pub hourly_offset: usize,

    /// Show the week section below the hourly row
    #[debug(section = "View", label = "Week")]
    pub show_week: bool,
}

impl AppState {
    pub fn new(forecast: ForecastData) -> Self {
        Self {
            forecast: DataResource::Loaded(forecast),
            is_reloading: false,
            reload_error: None,
            data_file: None,
            unit: TempUnit::default(),
            hourly_offset: 0,
            show_week: false,
        }
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    pub fn hourly_len(&self) -> usize {
        self.forecast.data().map_or(0, |data| data.hourly.len())
    }

    /// Largest valid `hourly_offset` for the current data.
    pub fn max_hourly_offset(&self) -> usize {
        self.hourly_len().saturating_sub(1)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ForecastData::sample())
    }
}
