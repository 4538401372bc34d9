use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;

/// Energy kept by a ball bouncing off the bottom wall.
pub const DEFAULT_WALL_DAMPING: f32 = 0.45;

/// Speed given to a ball released after a drag, unless overridden per ball.
pub const DEFAULT_BASE_SPEED: f32 = 5.0;

/// Default downward pull (Y grows downward).
pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, 0.5);

/// How world forces relate to the balls that are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForceLayout {
    /// Every `add_ball` appends a fresh Gravity/Wind/Friction triple and every
    /// ball receives every force instance, so the net pull grows with the
    /// number of added balls.
    #[default]
    PerBall,
    /// One canonical triple is created with the simulation and shared by all
    /// balls.
    Shared,
}

/// Wall restitution. The bottom wall keeps `bounce` of the velocity, the side
/// walls keep `bounce²`, the top wall keeps nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallDamping {
    pub bounce: f32,
}

impl WallDamping {
    pub fn new(bounce: f32) -> Self {
        Self { bounce }
    }

    /// Factor applied (negated) to vertical velocity on the bottom wall.
    pub fn floor(&self) -> f32 {
        self.bounce
    }

    /// Factor applied (negated) to horizontal velocity on the side walls.
    pub fn side(&self) -> f32 {
        self.bounce * self.bounce
    }
}

impl Default for WallDamping {
    fn default() -> Self {
        Self::new(DEFAULT_WALL_DAMPING)
    }
}

/// Sandbox configuration, provided by the host. Every field is optional in
/// JSON and falls back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// RNG seed for radii, colors and random spawn positions.
    pub seed: u64,
    /// Smallest radius a new ball can draw (inclusive).
    pub radius_min: i32,
    /// Upper radius bound (exclusive).
    pub radius_max: i32,
    /// Launch speed of newly added balls.
    pub base_speed: f32,
    pub wall_damping: WallDamping,
    /// Initial Gravity vector of each canonical force triple.
    pub gravity: Vec2,
    /// Initial Wind vector of each canonical force triple.
    pub wind: Vec2,
    /// Initial Friction coefficient of each canonical force triple.
    pub friction: Vec2,
    pub force_layout: ForceLayout,
    /// Seed two balls at 25% / 75% of the width on creation.
    pub seed_balls: bool,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            radius_min: 16,
            radius_max: 64,
            base_speed: DEFAULT_BASE_SPEED,
            wall_damping: WallDamping::default(),
            gravity: DEFAULT_GRAVITY,
            wind: Vec2::ZERO,
            friction: Vec2::ZERO,
            force_layout: ForceLayout::PerBall,
            seed_balls: true,
        }
    }
}

impl SandboxConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SandboxConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to JSON (used by hosts to persist UI state).
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radius_min <= 0 || self.radius_max <= self.radius_min {
            return Err(ConfigError::RadiusRange {
                min: self.radius_min,
                max: self.radius_max,
            });
        }
        let k = self.wall_damping.bounce;
        if !k.is_finite() {
            return Err(ConfigError::NonFinite("wall_damping.bounce"));
        }
        if !(0.0..=1.0).contains(&k) {
            return Err(ConfigError::Damping(k));
        }
        if !self.base_speed.is_finite() {
            return Err(ConfigError::NonFinite("base_speed"));
        }
        for (name, v) in [
            ("gravity", self.gravity),
            ("wind", self.wind),
            ("friction", self.friction),
        ] {
            if !v.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_force_layout(mut self, layout: ForceLayout) -> Self {
        self.force_layout = layout;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn without_seed_balls(mut self) -> Self {
        self.seed_balls = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_damping_is_squared() {
        let d = WallDamping::default();
        assert!((d.floor() - 0.45).abs() < 1e-6);
        assert!((d.side() - 0.2025).abs() < 1e-6);
    }

    #[test]
    fn empty_json_gives_defaults() {
        let config = SandboxConfig::from_json("{}").unwrap();
        assert_eq!(config, SandboxConfig::default());
    }

    #[test]
    fn parse_partial_config() {
        let json = r#"{
            "seed": 7,
            "gravity": [0.0, 0.25],
            "force_layout": "shared",
            "wall_damping": { "bounce": 0.8 }
        }"#;
        let config = SandboxConfig::from_json(json).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.gravity, Vec2::new(0.0, 0.25));
        assert_eq!(config.force_layout, ForceLayout::Shared);
        assert!((config.wall_damping.bounce - 0.8).abs() < 1e-6);
        assert_eq!(config.radius_min, 16);
        assert!(config.seed_balls);
    }

    #[test]
    fn round_trips_through_json() {
        let config = SandboxConfig::default().with_seed(3).without_seed_balls();
        let json = config.to_json().unwrap();
        let back = SandboxConfig::from_json(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn rejects_inverted_radius_range() {
        let json = r#"{ "radius_min": 64, "radius_max": 16 }"#;
        match SandboxConfig::from_json(json) {
            Err(ConfigError::RadiusRange { min, max }) => {
                assert_eq!(min, 64);
                assert_eq!(max, 16);
            }
            other => panic!("expected RadiusRange, got {:?}", other),
        }
    }

    #[test]
    fn rejects_damping_above_one() {
        let json = r#"{ "wall_damping": { "bounce": 1.5 } }"#;
        assert!(matches!(
            SandboxConfig::from_json(json),
            Err(ConfigError::Damping(_))
        ));
    }

    #[test]
    fn parse_error_is_reported() {
        let err = SandboxConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let message = err.to_string();
        assert!(message.starts_with("Failed to parse sandbox config"));
    }
}
