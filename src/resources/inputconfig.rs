//! Input sampler configuration resource.
//!
//! Manages input tuning loaded from an INI configuration file. Provides
//! defaults that reproduce raw device readings, so a missing file changes
//! nothing.
//!
//! # Configuration File Format
//!
//! ```ini
//! [input]
//! gamepad = 0
//! stick_deadzone = 0.15
//! trigger_threshold = 0.05
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_GAMEPAD: i32 = 0;
const DEFAULT_STICK_DEADZONE: f32 = 0.0;
const DEFAULT_TRIGGER_THRESHOLD: f32 = 0.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Input sampler tuning.
///
/// With the defaults, thumbsticks pass through unfiltered and any trigger
/// travel above zero counts as a press.
#[derive(Resource, Debug, Clone)]
pub struct InputConfig {
    /// Index of the gamepad slot to sample.
    pub gamepad: i32,
    /// Per-axis magnitude under which thumbstick readings clamp to zero.
    pub stick_deadzone: f32,
    /// Trigger travel a press must exceed.
    pub trigger_threshold: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl InputConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            gamepad: DEFAULT_GAMEPAD,
            stick_deadzone: DEFAULT_STICK_DEADZONE,
            trigger_threshold: DEFAULT_TRIGGER_THRESHOLD,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        if let Some(gamepad) = config.getint("input", "gamepad").ok().flatten() {
            self.gamepad = gamepad as i32;
        }
        if let Some(deadzone) = config.getfloat("input", "stick_deadzone").ok().flatten() {
            self.stick_deadzone = deadzone as f32;
        }
        if let Some(threshold) = config.getfloat("input", "trigger_threshold").ok().flatten() {
            self.trigger_threshold = threshold as f32;
        }

        info!(
            "Loaded input config: gamepad={}, stick_deadzone={}, trigger_threshold={}",
            self.gamepad, self.stick_deadzone, self.trigger_threshold
        );

        Ok(())
    }

    /// Write the current values back to the INI file.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        config.set("input", "gamepad", Some(self.gamepad.to_string()));
        config.set(
            "input",
            "stick_deadzone",
            Some(self.stick_deadzone.to_string()),
        );
        config.set(
            "input",
            "trigger_threshold",
            Some(self.trigger_threshold.to_string()),
        );
        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))
    }
}
