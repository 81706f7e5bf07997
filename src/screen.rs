//! Screen composer - current conditions, detail strip and forecast lists
//!
//! Composition is total: empty lists produce empty sections, never errors.

use crate::forecast::{CurrentConditions, DailyForecastEntry, HourlyForecastEntry, TempUnit};
use crate::icons::IconHandle;
use crate::render::{
    HOURLY_ITEM_SPACING, render_daily_item, render_detail_item, render_hourly_item,
};
use crate::view::{
    Arrangement, BACKGROUND_END, BACKGROUND_START, Container, IconNode, IconSize, Surface,
    TextNode, TextRole, VisualNode,
};

pub const TODAY_LABEL: &str = "Today";
pub const WEEK_LABEL: &str = "Next 7 Days";

/// The full screen, top to bottom: summary, hero icon, timestamp, headline
/// temperature, high/low, detail strip, "Today" label and the scrollable
/// hourly row (one card per entry, input order).
pub fn compose_screen(
    current: &CurrentConditions,
    hourly: &[HourlyForecastEntry],
    unit: TempUnit,
) -> VisualNode {
    screen_body(current, hourly, unit).into()
}

/// The week section: label plus one row per day, input order.
pub fn compose_week(daily: &[DailyForecastEntry], unit: TempUnit) -> VisualNode {
    Container::column()
        .child(TextNode::new(WEEK_LABEL, TextRole::Title))
        .extend(daily.iter().map(|entry| render_daily_item(entry, unit)))
        .into()
}

/// [`compose_screen`] with the week section appended below the hourly row.
pub fn compose_screen_with_week(
    current: &CurrentConditions,
    hourly: &[HourlyForecastEntry],
    daily: &[DailyForecastEntry],
    unit: TempUnit,
) -> VisualNode {
    screen_body(current, hourly, unit)
        .child(compose_week(daily, unit))
        .into()
}

fn screen_body(
    current: &CurrentConditions,
    hourly: &[HourlyForecastEntry],
    unit: TempUnit,
) -> Container {
    Container::column()
        .surface(Surface::Gradient {
            from: BACKGROUND_START,
            to: BACKGROUND_END,
        })
        .child(TextNode::new(current.summary.as_str(), TextRole::Title).centered())
        .child(IconNode::new(
            current.condition.icon(),
            IconSize::Hero,
            current.summary.as_str(),
        ))
        .child(TextNode::new(current.timestamp.as_str(), TextRole::Subtitle).centered())
        .child(TextNode::new(current.temperature.label(unit), TextRole::Headline).centered())
        .child(TextNode::new(current.high_low_label(unit), TextRole::Body).centered())
        .child(detail_strip(current))
        .child(TextNode::new(TODAY_LABEL, TextRole::Title))
        .child(hourly_row(hourly, unit))
}

fn detail_strip(current: &CurrentConditions) -> Container {
    Container::row()
        .arranged(Arrangement::SpaceEvenly)
        .surface(Surface::Card)
        .child(render_detail_item(
            IconHandle::Rain,
            &current.rain_label(),
            "Rain",
        ))
        .child(render_detail_item(
            IconHandle::Wind,
            &current.wind_label(),
            "Wind",
        ))
        .child(render_detail_item(
            IconHandle::Humidity,
            &current.humidity_label(),
            "Humidity",
        ))
}

fn hourly_row(hourly: &[HourlyForecastEntry], unit: TempUnit) -> Container {
    Container::row()
        .arranged(Arrangement::SpacedBy(HOURLY_ITEM_SPACING))
        .scrollable()
        .extend(hourly.iter().map(|entry| render_hourly_item(entry, unit)))
}
