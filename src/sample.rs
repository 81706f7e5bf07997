//! Built-in sample data set
//!
//! Stand-in for a live provider. Values are fixed; order is chronological.

use crate::forecast::{
    Condition, CurrentConditions, DailyForecastEntry, HourlyForecastEntry, Temperature,
};

/// Hour labels starting at noon, one per hour for a full day.
const HOURS: [&str; 24] = [
    "12:00 PM", "01:00 PM", "02:00 PM", "03:00 PM", "04:00 PM", "05:00 PM", "06:00 PM",
    "07:00 PM", "08:00 PM", "09:00 PM", "10:00 PM", "11:00 PM", "12:00 AM", "01:00 AM",
    "02:00 AM", "03:00 AM", "04:00 AM", "05:00 AM", "06:00 AM", "07:00 AM", "08:00 AM",
    "09:00 AM", "10:00 AM", "11:00 AM",
];

const DAYS: [&str; 7] = [
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
    "Monday",
];

/// First temperature of both sample lists; each later entry is one degree warmer.
const BASE_TEMP_C: f32 = 25.0;

/// Conditions cycle sunny → rainy → cloudy → stormy → windy.
fn cycled_condition(index: usize) -> Condition {
    Condition::KNOWN[index % Condition::KNOWN.len()].clone()
}

pub fn hourly_forecast() -> Vec<HourlyForecastEntry> {
    HOURS
        .iter()
        .enumerate()
        .map(|(i, hour)| {
            HourlyForecastEntry::new(
                *hour,
                Temperature::celsius(BASE_TEMP_C + i as f32),
                cycled_condition(i),
            )
        })
        .collect()
}

pub fn daily_forecast() -> Vec<DailyForecastEntry> {
    DAYS.iter()
        .enumerate()
        .map(|(i, day)| {
            DailyForecastEntry::new(
                *day,
                Temperature::celsius(BASE_TEMP_C + i as f32),
                cycled_condition(i),
            )
        })
        .collect()
}

pub fn current_conditions() -> CurrentConditions {
    CurrentConditions {
        summary: "Mostly Cloudy".into(),
        condition: Condition::Cloudy,
        timestamp: "Mon June 17 | 12:00 PM".into(),
        temperature: Temperature::celsius(25.0),
        high: Temperature::celsius(27.0),
        low: Temperature::celsius(18.0),
        rain_chance: 20,
        wind_kmh: 5.0,
        humidity: 80,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_sample_shape() {
        let hourly = hourly_forecast();
        assert_eq!(hourly.len(), 24);
        assert_eq!(hourly[0].hour, "12:00 PM");
        assert_eq!(hourly[0].condition, Condition::Sunny);
        assert_eq!(hourly[1].hour, "01:00 PM");
        assert_eq!(hourly[1].temperature, Temperature::celsius(26.0));
        assert_eq!(hourly[1].condition, Condition::Rainy);
        assert_eq!(hourly[23].hour, "11:00 AM");
        assert_eq!(hourly[23].temperature, Temperature::celsius(48.0));
        assert_eq!(hourly[23].condition, Condition::Stormy);
    }

    #[test]
    fn test_daily_sample_shape() {
        let daily = daily_forecast();
        assert_eq!(daily.len(), 7);
        assert_eq!(daily[0].day, "Tuesday");
        assert_eq!(daily[3].day, "Friday");
        assert_eq!(daily[3].temperature, Temperature::celsius(28.0));
        assert_eq!(daily[3].condition, Condition::Stormy);
        assert_eq!(daily[6].day, "Monday");
        assert_eq!(daily[6].condition, Condition::Rainy);
    }

    #[test]
    fn test_samples_only_use_known_conditions() {
        assert!(hourly_forecast().iter().all(|e| e.condition.is_known()));
        assert!(daily_forecast().iter().all(|e| e.condition.is_known()));
    }
}
