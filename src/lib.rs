//! Weather card - a static weather screen
//!
//! The core (`forecast`, `icons`, `render`, `screen`, `view`) turns forecast
//! data into a toolkit-independent visual tree. The remaining modules mount
//! that tree in a terminal UI.

pub mod action;
pub mod components;
pub mod config;
pub mod effect;
pub mod error;
pub mod forecast;
pub mod icons;
pub mod reducer;
pub mod render;
pub mod sample;
pub mod screen;
pub mod source;
pub mod sprites;
pub mod state;
pub mod view;

pub use error::{ConfigError, ForecastError};
pub use forecast::{
    Condition, CurrentConditions, DailyForecastEntry, ForecastData, HourlyForecastEntry,
    TempUnit, Temperature,
};
pub use icons::{DEFAULT_ICON, IconHandle, resolve_icon};
pub use render::{render_daily_item, render_detail_item, render_hourly_item};
pub use screen::{compose_screen, compose_screen_with_week, compose_week};
pub use view::VisualNode;
