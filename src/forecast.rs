//! Forecast data model - immutable value records
//!
//! Entries carry no identity beyond their position in a list. Order is
//! display order.

use std::fmt;
use std::str::FromStr;

use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

// ============================================================================
// Condition tags
// ============================================================================

/// Sky/precipitation state driving icon selection.
///
/// The set is closed; any other label is kept verbatim as `Unknown`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    Sunny,
    Rainy,
    Cloudy,
    Stormy,
    Windy,
    Unknown(String),
}

impl Condition {
    /// Every known condition, in tag-table order.
    pub const KNOWN: [Condition; 5] = [
        Condition::Sunny,
        Condition::Rainy,
        Condition::Cloudy,
        Condition::Stormy,
        Condition::Windy,
    ];

    /// Exact, case-sensitive match against the known labels. Never fails.
    pub fn parse(label: &str) -> Self {
        match label {
            "sunny" => Condition::Sunny,
            "rainy" => Condition::Rainy,
            "cloudy" => Condition::Cloudy,
            "stormy" => Condition::Stormy,
            "windy" => Condition::Windy,
            other => Condition::Unknown(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Condition::Sunny => "sunny",
            Condition::Rainy => "rainy",
            Condition::Cloudy => "cloudy",
            Condition::Stormy => "stormy",
            Condition::Windy => "windy",
            Condition::Unknown(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Condition::Unknown(_))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Condition {
    fn from(label: &str) -> Self {
        Condition::parse(label)
    }
}

impl From<String> for Condition {
    fn from(label: String) -> Self {
        match Condition::parse(&label) {
            Condition::Unknown(_) => Condition::Unknown(label),
            known => known,
        }
    }
}

impl From<Condition> for String {
    fn from(condition: Condition) -> Self {
        match condition {
            Condition::Unknown(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl JsonSchema for Condition {
    fn schema_name() -> String {
        "Condition".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        String::json_schema(gen)
    }
}

// ============================================================================
// Temperatures
// ============================================================================

/// Temperature unit preference
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "°C",
            TempUnit::Fahrenheit => "°F",
        }
    }

    /// Express `temperature` in this unit.
    pub fn convert(&self, temperature: Temperature) -> f32 {
        match (temperature.unit, self) {
            (TempUnit::Celsius, TempUnit::Fahrenheit) => temperature.degrees * 9.0 / 5.0 + 32.0,
            (TempUnit::Fahrenheit, TempUnit::Celsius) => (temperature.degrees - 32.0) * 5.0 / 9.0,
            _ => temperature.degrees,
        }
    }
}

/// A temperature reading together with the unit it was recorded in.
///
/// Parses from labels like `"26°C"`, `"79°F"`, `"26C"` or a bare `"26"`
/// (bare values are Celsius).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Temperature {
    pub degrees: f32,
    pub unit: TempUnit,
}

impl Temperature {
    pub const fn celsius(degrees: f32) -> Self {
        Self {
            degrees,
            unit: TempUnit::Celsius,
        }
    }

    pub const fn fahrenheit(degrees: f32) -> Self {
        Self {
            degrees,
            unit: TempUnit::Fahrenheit,
        }
    }

    /// Rounded whole degrees in `unit`.
    pub fn whole_degrees(&self, unit: TempUnit) -> i32 {
        unit.convert(*self).round() as i32
    }

    /// Whole degrees with a bare degree sign, e.g. `"26°"`.
    pub fn degrees_label(&self, unit: TempUnit) -> String {
        format!("{}°", self.whole_degrees(unit))
    }

    /// Whole degrees with the unit symbol, e.g. `"26°C"`.
    pub fn label(&self, unit: TempUnit) -> String {
        format!("{}{}", self.whole_degrees(unit), unit.symbol())
    }
}

impl FromStr for Temperature {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (number, unit) = if let Some(rest) = trimmed.strip_suffix(&['F', 'f'][..]) {
            (rest, TempUnit::Fahrenheit)
        } else if let Some(rest) = trimmed.strip_suffix(&['C', 'c'][..]) {
            (rest, TempUnit::Celsius)
        } else {
            (trimmed, TempUnit::Celsius)
        };
        let number = number.trim_end().trim_end_matches('°').trim_end();

        number
            .parse::<f32>()
            .ok()
            .filter(|degrees| degrees.is_finite())
            .map(|degrees| Temperature { degrees, unit })
            .ok_or_else(|| ForecastError::InvalidTemperature(s.to_string()))
    }
}

impl TryFrom<String> for Temperature {
    type Error = ForecastError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Temperature> for String {
    fn from(temperature: Temperature) -> Self {
        temperature.to_string()
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.degrees, self.unit.symbol())
    }
}

impl JsonSchema for Temperature {
    fn schema_name() -> String {
        "Temperature".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        String::json_schema(gen)
    }
}

// ============================================================================
// Entries
// ============================================================================

/// Weather at one hour of the day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HourlyForecastEntry {
    /// Display label, e.g. `"12:00 PM"`
    pub hour: String,
    pub temperature: Temperature,
    pub condition: Condition,
}

impl HourlyForecastEntry {
    pub fn new(hour: impl Into<String>, temperature: Temperature, condition: Condition) -> Self {
        Self {
            hour: hour.into(),
            temperature,
            condition,
        }
    }
}

/// Weather for one day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DailyForecastEntry {
    /// Display label, e.g. `"Tuesday"`
    pub day: String,
    pub temperature: Temperature,
    pub condition: Condition,
}

impl DailyForecastEntry {
    pub fn new(day: impl Into<String>, temperature: Temperature, condition: Condition) -> Self {
        Self {
            day: day.into(),
            temperature,
            condition,
        }
    }
}

/// Headline values for the "current conditions" card and detail strip.
///
/// Kept separate from the hourly/daily lists; nothing here is derived
/// from them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurrentConditions {
    pub summary: String,
    pub condition: Condition,
    pub timestamp: String,
    pub temperature: Temperature,
    pub high: Temperature,
    pub low: Temperature,
    /// Chance of rain, percent
    pub rain_chance: u8,
    pub wind_kmh: f32,
    /// Relative humidity, percent
    pub humidity: u8,
}

impl CurrentConditions {
    pub fn high_low_label(&self, unit: TempUnit) -> String {
        format!(
            "H:{} L:{}",
            self.high.whole_degrees(unit),
            self.low.whole_degrees(unit)
        )
    }

    pub fn rain_label(&self) -> String {
        format!("{}%", self.rain_chance)
    }

    pub fn wind_label(&self) -> String {
        format!("{}km/h", self.wind_kmh)
    }

    pub fn humidity_label(&self) -> String {
        format!("{}%", self.humidity)
    }
}

/// A complete data set for one screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastData {
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyForecastEntry>,
    pub daily: Vec<DailyForecastEntry>,
}

impl ForecastData {
    /// The built-in sample set.
    pub fn sample() -> Self {
        Self {
            current: crate::sample::current_conditions(),
            hourly: crate::sample::hourly_forecast(),
            daily: crate::sample::daily_forecast(),
        }
    }

    /// Both lists must be non-empty for externally supplied data.
    pub fn validate(&self) -> Result<(), ForecastError> {
        if self.hourly.is_empty() {
            return Err(ForecastError::EmptyHourly);
        }
        if self.daily.is_empty() {
            return Err(ForecastError::EmptyDaily);
        }
        Ok(())
    }
}

impl Default for ForecastData {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_parse_known() {
        assert_eq!(Condition::parse("sunny"), Condition::Sunny);
        assert_eq!(Condition::parse("rainy"), Condition::Rainy);
        assert_eq!(Condition::parse("cloudy"), Condition::Cloudy);
        assert_eq!(Condition::parse("stormy"), Condition::Stormy);
        assert_eq!(Condition::parse("windy"), Condition::Windy);
    }

    #[test]
    fn test_condition_parse_is_exact() {
        assert_eq!(Condition::parse("Sunny"), Condition::Unknown("Sunny".into()));
        assert_eq!(Condition::parse(" rainy"), Condition::Unknown(" rainy".into()));
        assert_eq!(Condition::parse(""), Condition::Unknown(String::new()));
        assert!(!Condition::parse("foggy").is_known());
    }

    #[test]
    fn test_condition_label_keeps_unknown_text() {
        assert_eq!(Condition::parse("hail").label(), "hail");
        assert_eq!(String::from(Condition::Stormy), "stormy");
    }

    #[test]
    fn test_temperature_parse() {
        assert_eq!("26°C".parse::<Temperature>().unwrap(), Temperature::celsius(26.0));
        assert_eq!("79°F".parse::<Temperature>().unwrap(), Temperature::fahrenheit(79.0));
        assert_eq!("26C".parse::<Temperature>().unwrap(), Temperature::celsius(26.0));
        assert_eq!("26°".parse::<Temperature>().unwrap(), Temperature::celsius(26.0));
        assert_eq!("-3.5".parse::<Temperature>().unwrap(), Temperature::celsius(-3.5));
    }

    #[test]
    fn test_temperature_parse_rejects_garbage() {
        assert!(matches!(
            "warm".parse::<Temperature>(),
            Err(ForecastError::InvalidTemperature(label)) if label == "warm"
        ));
        assert!("°C".parse::<Temperature>().is_err());
    }

    #[test]
    fn test_temperature_labels() {
        let t = Temperature::celsius(26.0);
        assert_eq!(t.degrees_label(TempUnit::Celsius), "26°");
        assert_eq!(t.label(TempUnit::Celsius), "26°C");
        // 26°C = 78.8°F
        assert_eq!(t.degrees_label(TempUnit::Fahrenheit), "79°");
        assert_eq!(t.label(TempUnit::Fahrenheit), "79°F");
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(TempUnit::Fahrenheit.convert(Temperature::celsius(0.0)), 32.0);
        assert_eq!(TempUnit::Celsius.convert(Temperature::fahrenheit(212.0)), 100.0);
        assert_eq!(TempUnit::Celsius.convert(Temperature::celsius(18.0)), 18.0);
        assert_eq!(TempUnit::Celsius.toggle(), TempUnit::Fahrenheit);
    }

    #[test]
    fn test_current_conditions_labels() {
        let current = crate::sample::current_conditions();
        assert_eq!(current.high_low_label(TempUnit::Celsius), "H:27 L:18");
        assert_eq!(current.rain_label(), "20%");
        assert_eq!(current.wind_label(), "5km/h");
        assert_eq!(current.humidity_label(), "80%");
    }

    #[test]
    fn test_validate_rejects_empty_lists() {
        let mut data = ForecastData::sample();
        assert!(data.validate().is_ok());

        data.daily.clear();
        assert!(matches!(data.validate(), Err(ForecastError::EmptyDaily)));

        data.hourly.clear();
        assert!(matches!(data.validate(), Err(ForecastError::EmptyHourly)));
    }
}
