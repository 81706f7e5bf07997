//! Condition tag → icon resolution
//!
//! Unrecognized conditions degrade to [`DEFAULT_ICON`]; resolution never fails.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::forecast::Condition;

/// Opaque reference to a displayable icon asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum IconHandle {
    Sun,
    Rain,
    CloudySunny,
    Storm,
    Wind,
    Humidity,
}

/// Icon for cloudy skies and for every label outside the known set.
pub const DEFAULT_ICON: IconHandle = IconHandle::CloudySunny;

/// Condition label → icon, exhaustive over the known tags.
const ICON_TABLE: [(&str, IconHandle); 5] = [
    ("sunny", IconHandle::Sun),
    ("rainy", IconHandle::Rain),
    ("cloudy", IconHandle::CloudySunny),
    ("stormy", IconHandle::Storm),
    ("windy", IconHandle::Wind),
];

/// Resolve any condition label, known or not, to an icon.
pub fn resolve_icon(label: &str) -> IconHandle {
    ICON_TABLE
        .iter()
        .find(|(tag, _)| *tag == label)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

impl Condition {
    /// Icon for this condition, via [`resolve_icon`].
    pub fn icon(&self) -> IconHandle {
        resolve_icon(self.label())
    }
}

impl IconHandle {
    /// Asset file stem
    pub fn asset_name(self) -> &'static str {
        match self {
            IconHandle::Sun => "sunny",
            IconHandle::Rain => "rain",
            IconHandle::CloudySunny => "cloudy_sunny",
            IconHandle::Storm => "storm",
            IconHandle::Wind => "wind",
            IconHandle::Humidity => "humidity",
        }
    }

    /// Emoji representation for when sprites don't fit
    pub fn emoji(self) -> &'static str {
        match self {
            IconHandle::Sun => "\u{2600}\u{fe0f}",
            IconHandle::Rain => "\u{1f327}\u{fe0f}",
            IconHandle::CloudySunny => "\u{26c5}",
            IconHandle::Storm => "\u{26c8}\u{fe0f}",
            IconHandle::Wind => "\u{1f32c}\u{fe0f}",
            IconHandle::Humidity => "\u{1f4a7}",
        }
    }
}
