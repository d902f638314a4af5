//! Tunable physics constants and track layout
//!
//! Loaded once at startup (JSON) and immutable afterwards. Every field has a
//! default, so a config file only needs to name what it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::track::TrackGeometry;

/// Per-tick vehicle tuning and the respawn pose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Forward speed cap
    pub max_speed: f32,
    /// Speed gained per tick while accelerating
    pub acceleration: f32,
    /// Speed lost per tick while braking
    pub brake_power: f32,
    /// Passive speed decay per tick
    pub friction: f32,
    /// Base angular velocity scale (radians per tick)
    pub turn_rate: f32,

    // === Start pose ===
    pub start_x: f32,
    pub start_y: f32,
    /// Heading in radians (0 faces +x, -π/2 faces up the screen)
    pub start_angle: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            max_speed: 4.8,
            acceleration: 0.12,
            brake_power: 0.16,
            friction: 0.04,
            turn_rate: 0.04,

            start_x: 180.0,
            start_y: 520.0,
            start_angle: -std::f32::consts::FRAC_PI_2,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("physics.max_speed", self.max_speed),
            ("physics.acceleration", self.acceleration),
            ("physics.brake_power", self.brake_power),
            ("physics.friction", self.friction),
            ("physics.turn_rate", self.turn_rate),
            ("physics.start_x", self.start_x),
            ("physics.start_y", self.start_y),
            ("physics.start_angle", self.start_angle),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        if self.max_speed <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "physics.max_speed",
                value: self.max_speed,
            });
        }

        let rates = [
            ("physics.acceleration", self.acceleration),
            ("physics.brake_power", self.brake_power),
            ("physics.friction", self.friction),
            ("physics.turn_rate", self.turn_rate),
        ];
        for (field, value) in rates {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        Ok(())
    }
}

/// Everything needed to build a [`crate::Simulation`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub physics: PhysicsConfig,
    pub track: TrackGeometry,
}

impl SimConfig {
    /// Fail fast on a configuration the simulation could never race on
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.track.validate()?;

        let start = glam::Vec2::new(self.physics.start_x, self.physics.start_y);
        if !self.track.is_on_track(start) {
            // Not fatal: the vehicle is simply damped and clamped every tick
            log::warn!("Start pose {:?} is off the track", start);
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
