//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::forecast::ForecastData;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Forecast actions =====
        Action::ForecastReload => {
            let Some(path) = state.data_file.clone() else {
                tracing::debug!("no forecast file configured, reinstalling sample data");
                install_forecast(state, ForecastData::sample());
                return DispatchResult::changed();
            };

            if state.forecast.is_loaded() {
                state.is_reloading = true;
            } else {
                state.forecast = DataResource::Loading;
            }
            tracing::info!(path = %path.display(), "reloading forecast");
            DispatchResult::changed_with(Effect::LoadForecast { path })
        }

        Action::ForecastDidLoad(data) => {
            install_forecast(state, data);
            DispatchResult::changed()
        }

        Action::ForecastDidError(msg) => {
            tracing::warn!(error = %msg, "forecast reload failed");
            state.is_reloading = false;
            if state.forecast.is_loaded() {
                state.reload_error = Some(msg);
            } else {
                state.forecast = DataResource::Failed(msg);
            }
            DispatchResult::changed()
        }

        // ===== Hourly row =====
        Action::HourlyScrollLeft => {
            let offset = state.hourly_offset.saturating_sub(1);
            scroll_to(state, offset)
        }

        Action::HourlyScrollRight => {
            let offset = state.hourly_offset.saturating_add(1);
            scroll_to(state, offset)
        }

        Action::HourlyScrollHome => scroll_to(state, 0),

        // ===== UI actions =====
        Action::UiToggleUnits => {
            state.unit = state.unit.toggle();
            DispatchResult::changed()
        }

        Action::UiToggleWeek => {
            state.show_week = !state.show_week;
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}

fn install_forecast(state: &mut AppState, data: ForecastData) {
    state.forecast = DataResource::Loaded(data);
    state.is_reloading = false;
    state.reload_error = None;
    state.hourly_offset = state.hourly_offset.min(state.max_hourly_offset());
}

fn scroll_to(state: &mut AppState, offset: usize) -> DispatchResult<Effect> {
    let offset = offset.min(state.max_hourly_offset());
    if offset == state.hourly_offset {
        return DispatchResult::unchanged();
    }
    state.hourly_offset = offset;
    DispatchResult::changed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::TempUnit;

    fn file_backed() -> AppState {
        AppState::default().with_data_file("/tmp/forecast.toml")
    }

    #[test]
    fn test_reload_with_file_emits_effect_and_keeps_data() {
        let mut state = file_backed();

        let result = reducer(&mut state, Action::ForecastReload);

        assert!(result.changed);
        assert!(state.is_reloading);
        assert!(state.forecast.is_loaded());
        assert_eq!(result.effects.len(), 1);
        assert_eq!(
            result.effects[0],
            Effect::LoadForecast {
                path: "/tmp/forecast.toml".into()
            }
        );
    }

    #[test]
    fn test_reload_without_file_reinstalls_sample() {
        let mut state = AppState {
            forecast: DataResource::Failed("boom".into()),
            ..Default::default()
        };

        let result = reducer(&mut state, Action::ForecastReload);

        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.forecast.data(), Some(&ForecastData::sample()));
    }

    #[test]
    fn test_reload_from_failed_sets_loading() {
        let mut state = AppState {
            forecast: DataResource::Failed("boom".into()),
            ..file_backed()
        };

        reducer(&mut state, Action::ForecastReload);
        assert!(state.forecast.is_loading());
        assert!(!state.is_reloading);
    }

    #[test]
    fn test_did_error_keeps_loaded_data() {
        let mut state = file_backed();
        reducer(&mut state, Action::ForecastReload);

        reducer(&mut state, Action::ForecastDidError("parse error".into()));

        assert!(state.forecast.is_loaded());
        assert!(!state.is_reloading);
        assert_eq!(state.reload_error.as_deref(), Some("parse error"));
    }

    #[test]
    fn test_did_error_without_data_fails() {
        let mut state = AppState {
            forecast: DataResource::Loading,
            ..file_backed()
        };

        reducer(&mut state, Action::ForecastDidError("missing".into()));
        assert!(state.forecast.is_failed());
        assert_eq!(state.reload_error, None);
    }

    #[test]
    fn test_did_load_clamps_offset_and_clears_error() {
        let mut state = AppState {
            hourly_offset: 20,
            reload_error: Some("old".into()),
            ..file_backed()
        };
        let mut data = ForecastData::sample();
        data.hourly.truncate(3);

        reducer(&mut state, Action::ForecastDidLoad(data));

        assert_eq!(state.hourly_offset, 2);
        assert_eq!(state.reload_error, None);
        assert_eq!(state.hourly_len(), 3);
    }

    #[test]
    fn test_scroll_clamps_at_both_ends() {
        let mut state = AppState::default();

        assert!(!reducer(&mut state, Action::HourlyScrollLeft).changed);
        assert!(reducer(&mut state, Action::HourlyScrollRight).changed);
        assert_eq!(state.hourly_offset, 1);

        state.hourly_offset = state.max_hourly_offset();
        assert!(!reducer(&mut state, Action::HourlyScrollRight).changed);
        assert_eq!(state.hourly_offset, 23);

        assert!(reducer(&mut state, Action::HourlyScrollHome).changed);
        assert_eq!(state.hourly_offset, 0);
        assert!(!reducer(&mut state, Action::HourlyScrollHome).changed);
    }

    #[test]
    fn test_toggles() {
        let mut state = AppState::default();
        assert_eq!(state.unit, TempUnit::Celsius);
        assert!(!state.show_week);

        reducer(&mut state, Action::UiToggleUnits);
        reducer(&mut state, Action::UiToggleWeek);
        assert_eq!(state.unit, TempUnit::Fahrenheit);
        assert!(state.show_week);

        reducer(&mut state, Action::UiToggleUnits);
        assert_eq!(state.unit, TempUnit::Celsius);
    }
}
