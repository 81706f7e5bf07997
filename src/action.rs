//! Actions - everything that can happen to the screen

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::forecast::ForecastData;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Forecast category =====
    /// Intent: reload the forecast data set (file read runs as a task)
    ForecastReload,

    /// Result: forecast data loaded
    ForecastDidLoad(ForecastData),

    /// Result: loading failed
    ForecastDidError(String),

    // ===== Hourly category =====
    /// Scroll the hourly row one card towards earlier hours
    HourlyScrollLeft,

    /// Scroll the hourly row one card towards later hours
    HourlyScrollRight,

    /// Jump back to the first hourly card
    HourlyScrollHome,

    // ===== UI category =====
    /// Toggle between Celsius and Fahrenheit
    UiToggleUnits,

    /// Show or hide the week section
    UiToggleWeek,

    /// Force a re-render
    Render,

    // ===== Uncategorized (global) =====
    /// Exit the application
    Quit,
}
