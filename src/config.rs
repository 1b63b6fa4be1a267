//! Page and game configuration.
//!
//! Defaults are built in. A page may override any subset by embedding
//! `<script id="portfolio-config" type="application/json">{ ... }</script>`;
//! missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Inset;
use crate::spawn::max_extent;

pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config json is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid runner setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Runner-game tunables. Distances in canvas pixels, speeds in pixels per tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: f64,
    pub height: f64,
    /// y of the ground line; obstacles and the standing player rest on it.
    pub ground_line: f64,
    pub player_x: f64,
    pub player_width: f64,
    pub player_height: f64,
    pub duck_height: f64,
    pub hitbox_inset: Inset,
    pub gravity: f64,
    /// Initial vertical velocity of a jump (negative is up).
    pub jump_velocity: f64,
    /// Scroll speed at session start (negative is leftward).
    pub initial_speed: f64,
    /// Added to the speed magnitude per obstacle cleared.
    pub speed_step: f64,
    pub max_speed: f64,
    pub spawn_interval_ms: u32,
    pub twin_chance: f64,
    pub twin_offset: f64,
    /// Per-tick probability of a new cloud.
    pub cloud_chance: f64,
    pub ground_period: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 150.0,
            ground_line: 130.0,
            player_x: 50.0,
            player_width: 40.0,
            player_height: 44.0,
            duck_height: 26.0,
            hitbox_inset: Inset::default(),
            gravity: 0.6,
            jump_velocity: -10.0,
            initial_speed: -6.0,
            speed_step: 0.1,
            max_speed: 13.0,
            spawn_interval_ms: 1500,
            twin_chance: 0.3,
            twin_offset: 100.0,
            cloud_chance: 0.01,
            ground_period: 24.0,
        }
    }
}

impl GameConfig {
    /// Resting top edge of the standing player.
    pub fn ground_y(&self) -> f64 {
        self.ground_line - self.player_height
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::Invalid { field, reason });
        if self.width <= 0.0 || self.height <= 0.0 {
            return invalid("width/height", "must be positive");
        }
        if self.ground_line <= 0.0 || self.ground_line > self.height {
            return invalid("ground_line", "must lie inside the canvas");
        }
        if self.player_height <= 0.0 || self.player_width <= 0.0 {
            return invalid("player_width/player_height", "must be positive");
        }
        if self.duck_height <= 0.0 || self.duck_height > self.player_height {
            return invalid("duck_height", "must be positive and at most player_height");
        }
        let inset = &self.hitbox_inset;
        if [inset.left, inset.right, inset.top, inset.bottom].iter().any(|v| *v < 0.0) {
            return invalid("hitbox_inset", "must not be negative");
        }
        if inset.left + inset.right >= self.player_width || inset.top + inset.bottom >= self.duck_height {
            return invalid("hitbox_inset", "must leave a non-empty hitbox while ducking");
        }
        if self.gravity <= 0.0 {
            return invalid("gravity", "must be positive");
        }
        if self.jump_velocity >= 0.0 {
            return invalid("jump_velocity", "must be negative (upward)");
        }
        if self.initial_speed >= 0.0 {
            return invalid("initial_speed", "must be negative (leftward)");
        }
        if self.speed_step < 0.0 {
            return invalid("speed_step", "must not be negative");
        }
        if self.max_speed < -self.initial_speed {
            return invalid("max_speed", "must be at least the initial speed magnitude");
        }
        if self.spawn_interval_ms == 0 {
            return invalid("spawn_interval_ms", "must be positive");
        }
        if self.twin_offset < max_extent() {
            return invalid("twin_offset", "must clear the widest obstacle");
        }
        if !(0.0..=1.0).contains(&self.twin_chance) || !(0.0..=1.0).contains(&self.cloud_chance) {
            return invalid("twin_chance/cloud_chance", "must be a probability");
        }
        if self.ground_period <= 0.0 {
            return invalid("ground_period", "must be positive");
        }
        Ok(())
    }
}

/// Everything the page shell needs: text content for the effects plus the runner tunables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub name: String,
    /// Text the name link types out while hovered.
    pub alias: String,
    pub tagline: String,
    pub locations: Vec<String>,
    pub runner: GameConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            name: "krish".to_string(),
            alias: "goat".to_string(),
            tagline: "software engineer".to_string(),
            locations: vec![
                "San Francisco, CA".to_string(),
                "New York, NY".to_string(),
                "Toronto, ON".to_string(),
            ],
            runner: GameConfig::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: PageConfig = serde_json::from_str(raw)?;
        cfg.runner.validate()?;
        Ok(cfg)
    }

    /// Reads the embedded config element, falling back to defaults when it is
    /// absent or unusable.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            tracing::debug!("no embedded config, using defaults");
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!("ignoring embedded config: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        GameConfig::default().validate().unwrap();
        assert_eq!(GameConfig::default().ground_y(), 86.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = PageConfig::from_json(r#"{"name":"ada","runner":{"gravity":0.8}}"#).unwrap();
        assert_eq!(cfg.name, "ada");
        assert_eq!(cfg.alias, "goat");
        assert_eq!(cfg.runner.gravity, 0.8);
        assert_eq!(cfg.runner.jump_velocity, -10.0);
        assert_eq!(cfg.runner.hitbox_inset, Inset::default());
    }

    #[test]
    fn partial_inset_keeps_other_sides() {
        let cfg = PageConfig::from_json(r#"{"name":"ada","runner":{"hitbox_inset":{"left":2}}}"#).unwrap();
        assert_eq!(cfg.name, "ada");
        assert_eq!(cfg.runner.hitbox_inset, Inset { left: 2.0, ..Inset::default() });
    }

    #[test]
    fn degenerate_hitbox_is_rejected() {
        let err = PageConfig::from_json(
            r#"{"runner":{"hitbox_inset":{"left":30,"right":30,"top":0,"bottom":0}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "hitbox_inset", .. }));

        let mut cfg = GameConfig::default();
        cfg.hitbox_inset.top = 13.0;
        cfg.hitbox_inset.bottom = 13.0;
        assert!(cfg.validate().is_err(), "ducking hitbox would be empty");
        cfg.hitbox_inset.bottom = -1.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn twin_must_trail_its_leader() {
        let err = PageConfig::from_json(r#"{"runner":{"twin_offset":-100}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "twin_offset", .. }));

        let mut cfg = GameConfig::default();
        cfg.twin_offset = 10.0;
        assert!(cfg.validate().is_err(), "twin would overlap a wide leader");
        cfg.twin_offset = max_extent();
        cfg.validate().unwrap();
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            PageConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn out_of_range_tunables_are_rejected() {
        let err = PageConfig::from_json(r#"{"runner":{"duck_height":60}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "duck_height", .. }));

        let mut cfg = GameConfig::default();
        cfg.max_speed = 2.0;
        assert!(cfg.validate().is_err());
        cfg = GameConfig::default();
        cfg.twin_chance = 1.5;
        assert!(cfg.validate().is_err());
    }
}
