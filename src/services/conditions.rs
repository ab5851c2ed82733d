//! Condition text classification.
//!
//! Provider condition strings are free text ("Rain, Partially cloudy",
//! "Snow, Overcast"). Categories are picked by substring rules evaluated in
//! order; the first rule with a matching keyword wins.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    Thunderstorm,
    Snow,
    Rain,
    Fog,
    Overcast,
    Cloudy,
    Windy,
    Clear,
}

/// Precedence order matters: "Rain, Thunderstorm" is a thunderstorm.
const CONDITION_RULES: &[(&[&str], ConditionCategory)] = &[
    (&["thunder", "lightning"], ConditionCategory::Thunderstorm),
    (&["snow", "ice", "sleet", "freez"], ConditionCategory::Snow),
    (&["rain", "drizzle", "shower"], ConditionCategory::Rain),
    (&["fog", "mist", "haze"], ConditionCategory::Fog),
    (&["overcast"], ConditionCategory::Overcast),
    (&["cloud", "partly"], ConditionCategory::Cloudy),
    (&["wind", "gust"], ConditionCategory::Windy),
];

impl ConditionCategory {
    pub fn classify(conditions: &str) -> Self {
        let lower = conditions.to_lowercase();
        CONDITION_RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(_, category)| *category)
            .unwrap_or(ConditionCategory::Clear)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snow",
            Self::Rain => "Rain",
            Self::Fog => "Fog",
            Self::Overcast => "Overcast",
            Self::Cloudy => "Cloudy",
            Self::Windy => "Windy",
            Self::Clear => "Clear",
        }
    }

    /// Terminal glyph for day cards.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "⛈",
            Self::Snow => "❄",
            Self::Rain => "☔",
            Self::Fog => "🌫",
            Self::Overcast => "☁",
            Self::Cloudy => "⛅",
            Self::Windy => "🌬",
            Self::Clear => "☀",
        }
    }
}
