//! Player settings compiled in from `config/player.json`.

use crate::error::Result;
use dioxus::logger::tracing::warn;
use once_cell::sync::Lazy;
use serde::Deserialize;

const EMBEDDED_SETTINGS: &str = include_str!("../config/player.json");

static SETTINGS: Lazy<PlayerSettings> = Lazy::new(|| {
    PlayerSettings::from_json(EMBEDDED_SETTINGS).unwrap_or_else(|err| {
        warn!("{err}; falling back to default player settings");
        PlayerSettings::default()
    })
});

/// Settings loaded once per page.
pub fn settings() -> &'static PlayerSettings {
    &SETTINGS
}

/// Half-open `[min, max)` range used for random leaf parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Range(pub f64, pub f64);

impl Range {
    pub fn min(&self) -> f64 {
        self.0.min(self.1)
    }

    pub fn max(&self) -> f64 {
        self.0.max(self.1)
    }

    #[cfg(test)]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min() && value <= self.max()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeafSettings {
    #[serde(default = "default_leaf_count")]
    pub count: usize,
    #[serde(default = "default_offset_percent")]
    pub offset_percent: Range,
    #[serde(default = "default_delay_secs")]
    pub delay_secs: Range,
    #[serde(default = "default_duration_secs")]
    pub duration_secs: Range,
    #[serde(default = "default_size_px")]
    pub size_px: Range,
    #[serde(default = "default_sway_duration_secs")]
    pub sway_duration_secs: Range,
    #[serde(default = "default_sway_delay_secs")]
    pub sway_delay_secs: Range,
}

fn default_leaf_count() -> usize {
    20
}

fn default_offset_percent() -> Range {
    Range(0.0, 100.0)
}

fn default_delay_secs() -> Range {
    Range(0.0, 15.0)
}

fn default_duration_secs() -> Range {
    Range(15.0, 35.0)
}

fn default_size_px() -> Range {
    Range(12.0, 28.0)
}

fn default_sway_duration_secs() -> Range {
    Range(3.0, 5.0)
}

fn default_sway_delay_secs() -> Range {
    Range(0.0, 2.0)
}

impl Default for LeafSettings {
    fn default() -> Self {
        Self {
            count: default_leaf_count(),
            offset_percent: default_offset_percent(),
            delay_secs: default_delay_secs(),
            duration_secs: default_duration_secs(),
            size_px: default_size_px(),
            sway_duration_secs: default_sway_duration_secs(),
            sway_delay_secs: default_sway_delay_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerSettings {
    #[serde(default = "default_volume")]
    pub default_volume: f64,
    #[serde(default)]
    pub leaves: LeafSettings,
}

fn default_volume() -> f64 {
    0.7
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            default_volume: default_volume(),
            leaves: LeafSettings::default(),
        }
    }
}

impl PlayerSettings {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlayerError;

    #[test]
    fn embedded_file_matches_defaults() {
        let parsed = PlayerSettings::from_json(EMBEDDED_SETTINGS).unwrap();
        assert_eq!(parsed, PlayerSettings::default());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let parsed = PlayerSettings::from_json(r#"{ "leaves": { "count": 5 } }"#).unwrap();
        assert_eq!(parsed.default_volume, 0.7);
        assert_eq!(parsed.leaves.count, 5);
        assert_eq!(parsed.leaves.size_px, Range(12.0, 28.0));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = PlayerSettings::from_json("{ default_volume: ").unwrap_err();
        assert!(matches!(err, PlayerError::InvalidSettings(_)));
    }

    #[test]
    fn range_tolerates_swapped_bounds() {
        let range = Range(35.0, 15.0);
        assert_eq!(range.min(), 15.0);
        assert_eq!(range.max(), 35.0);
        assert!(range.contains(20.0));
        assert!(!range.contains(40.0));
    }

    #[test]
    fn global_settings_load() {
        assert_eq!(settings().leaves.count, 20);
    }
}
