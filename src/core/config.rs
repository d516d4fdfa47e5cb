//! Motion controller configuration
//!
//! Supports loading and saving tunables in RON (Rusty Object Notation) and
//! JSON formats.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Tunable parameters for a motion controller
///
/// The defaults reproduce the stock companion behavior; hosts can load a
/// partial file and only override the fields they care about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Horizontal speed in units per tick
    pub speed: f32,
    /// Desired stand-off distance from a follow target
    pub follow_distance: f32,
    /// Ticks between cached-direction refreshes for a slow-moving target
    pub path_update_interval: u32,
    /// Distance beyond which following snaps straight to the target
    pub teleport_range: f32,
    /// Distance below which a move-to is considered arrived
    pub arrive_radius: f32,
    /// How far ahead of the agent the jump probe box is placed
    pub auto_jump_check_distance: f32,
    /// How far above the forward probe the clearance box is placed
    pub auto_jump_clearance_height: f32,
    /// Minimum ticks between auto-jump impulses
    pub auto_jump_cooldown_ticks: i32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed: 0.2,
            follow_distance: 3.0,
            path_update_interval: 5,
            teleport_range: 20.0,
            arrive_radius: 0.5,
            auto_jump_check_distance: 0.7,
            auto_jump_clearance_height: 1.0,
            auto_jump_cooldown_ticks: 4,
        }
    }
}

impl MotionConfig {
    /// Set the movement speed
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the follow stand-off distance
    pub fn with_follow_distance(mut self, distance: f32) -> Self {
        self.follow_distance = distance;
        self
    }

    /// Set the long-range teleport threshold
    pub fn with_teleport_range(mut self, range: f32) -> Self {
        self.teleport_range = range;
        self
    }

    /// Squared teleport threshold, the form the follow update compares against
    #[must_use]
    pub fn teleport_range_sq(&self) -> f32 {
        self.teleport_range * self.teleport_range
    }

    /// Load a config from a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        ron::from_str(&content).map_err(|e| ConfigError::DeserializeError(e.to_string()))
    }

    /// Save the config to a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_ron(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let ron_string = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
        fs::write(path, ron_string).map_err(|e| ConfigError::IoError(e.to_string()))
    }

    /// Load a config from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| ConfigError::DeserializeError(e.to_string()))
    }

    /// Save the config to a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json_string = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
        fs::write(path, json_string).map_err(|e| ConfigError::IoError(e.to_string()))
    }
}

/// Errors that can occur loading or saving a config
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error
    IoError(String),
    /// Serialization error
    SerializeError(String),
    /// Deserialization error
    DeserializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::SerializeError(e) => write!(f, "Serialization error: {e}"),
            Self::DeserializeError(e) => write!(f, "Deserialization error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}
