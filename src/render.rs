//! List item renderers - one forecast entry in, one visual node out
//!
//! All renderers are pure. Unknown conditions show the default icon.

use crate::forecast::{DailyForecastEntry, HourlyForecastEntry, TempUnit};
use crate::icons::IconHandle;
use crate::view::{
    Arrangement, Container, IconNode, IconSize, Surface, TextNode, TextRole, VisualNode,
};

/// Gap between hourly cards in the scroll row, in dp.
pub const HOURLY_ITEM_SPACING: u16 = 8;

/// Hourly card, top to bottom: hour label, condition icon, `"26°"`.
pub fn render_hourly_item(entry: &HourlyForecastEntry, unit: TempUnit) -> VisualNode {
    Container::column()
        .arranged(Arrangement::Center)
        .surface(Surface::Card)
        .child(TextNode::new(entry.hour.as_str(), TextRole::Body).centered())
        .child(IconNode::new(
            entry.condition.icon(),
            IconSize::Item,
            entry.condition.label(),
        ))
        .child(TextNode::new(entry.temperature.degrees_label(unit), TextRole::Item).centered())
        .into()
}

/// Daily row, left to right with space between: day, temperature, icon.
pub fn render_daily_item(entry: &DailyForecastEntry, unit: TempUnit) -> VisualNode {
    Container::row()
        .arranged(Arrangement::SpaceBetween)
        .child(TextNode::new(entry.day.as_str(), TextRole::Body))
        .child(TextNode::new(entry.temperature.label(unit), TextRole::Body))
        .child(IconNode::new(
            entry.condition.icon(),
            IconSize::Inline,
            entry.condition.label(),
        ))
        .into()
}

/// Detail strip cell: icon, bold value, label.
pub fn render_detail_item(icon: IconHandle, value: &str, label: &str) -> VisualNode {
    Container::column()
        .arranged(Arrangement::Center)
        .child(IconNode::new(icon, IconSize::Detail, label))
        .child(TextNode::new(value, TextRole::Value).centered())
        .child(TextNode::new(label, TextRole::Caption).centered())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::{Condition, Temperature};
    use crate::icons::DEFAULT_ICON;
    use crate::view::Axis;
    use pretty_assertions::assert_eq;

    fn rainy_one_pm() -> HourlyForecastEntry {
        HourlyForecastEntry::new("01:00 PM", "26°C".parse().unwrap(), Condition::parse("rainy"))
    }

    #[test]
    fn test_hourly_item_label_icon_temperature() {
        let node = render_hourly_item(&rainy_one_pm(), TempUnit::Celsius);

        assert_eq!(node.texts(), vec!["01:00 PM", "26°"]);
        assert_eq!(node.icons(), vec![IconHandle::Rain]);

        let children = node.children();
        assert!(children[0].as_text().is_some());
        assert!(children[1].as_icon().is_some());
        assert!(children[2].as_text().is_some());
    }

    #[test]
    fn test_hourly_item_is_referentially_transparent() {
        let entry = rainy_one_pm();
        let first = render_hourly_item(&entry, TempUnit::Celsius);
        let second = render_hourly_item(&entry.clone(), TempUnit::Celsius);
        assert_eq!(first, second);
    }

    #[test]
    fn test_hourly_item_unknown_condition_degrades() {
        let entry = HourlyForecastEntry::new(
            "03:00 AM",
            Temperature::celsius(12.0),
            Condition::parse("volcanic ash"),
        );
        let node = render_hourly_item(&entry, TempUnit::Celsius);
        assert_eq!(node.icons(), vec![DEFAULT_ICON]);
        assert_eq!(node.texts(), vec!["03:00 AM", "12°"]);
    }

    #[test]
    fn test_items_use_resolved_icon() {
        for label in ["sunny", "rainy", "cloudy", "stormy", "windy", "", "Rainy", "hail"] {
            let temperature = Temperature::celsius(20.0);
            let hourly = HourlyForecastEntry::new("06:00 AM", temperature, Condition::from(label));
            let daily = DailyForecastEntry::new("Sunday", temperature, Condition::from(label));

            let expected = vec![crate::icons::resolve_icon(label)];
            assert_eq!(render_hourly_item(&hourly, TempUnit::Celsius).icons(), expected);
            assert_eq!(render_daily_item(&daily, TempUnit::Celsius).icons(), expected);
        }
    }

    #[test]
    fn test_hourly_item_in_fahrenheit() {
        let node = render_hourly_item(&rainy_one_pm(), TempUnit::Fahrenheit);
        assert_eq!(node.texts(), vec!["01:00 PM", "79°"]);
    }

    #[test]
    fn test_daily_item_left_to_right() {
        let entry = DailyForecastEntry::new("Friday", "28°C".parse().unwrap(), Condition::Stormy);
        let node = render_daily_item(&entry, TempUnit::Celsius);

        let row = node.as_container().expect("daily item is a container");
        assert_eq!(row.axis, Axis::Horizontal);
        assert_eq!(row.arrangement, Arrangement::SpaceBetween);

        let children = node.children();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].as_text().map(|t| t.text.as_str()), Some("Friday"));
        assert_eq!(children[1].as_text().map(|t| t.text.as_str()), Some("28°C"));
        assert_eq!(children[2].as_icon().map(|i| i.icon), Some(IconHandle::Storm));
    }

    #[test]
    fn test_detail_item() {
        let node = render_detail_item(IconHandle::Humidity, "80%", "Humidity");
        assert_eq!(node.texts(), vec!["80%", "Humidity"]);
        assert_eq!(node.icons(), vec![IconHandle::Humidity]);
        assert_eq!(
            node.children()[1].as_text().map(|t| t.role),
            Some(TextRole::Value)
        );
    }
}
