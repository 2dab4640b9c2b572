//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides
//! defaults for safe startup and a loader that keeps defaults for any
//! missing value.
//!
//! # Configuration File Format
//!
//! ```ini
//! [level]
//! name = demo
//!
//! [input]
//! source = pointer
//!
//! [simulation]
//! tick_rate = 60
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_LEVEL_NAME: &str = "demo";
const DEFAULT_TICK_RATE: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Which strategy produces the gravity sample each tick.
///
/// Chosen once at startup; both strategies reduce to "produce a 2D vector
/// per tick" and are interchangeable from the simulation's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravitySource {
    /// Steer toward the last known pointer position.
    #[default]
    Pointer,
    /// Follow the tilt sensor.
    Tilt,
}

impl GravitySource {
    /// Parse a config/CLI value. Unknown values are a configuration error.
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pointer" | "touch" => Ok(GravitySource::Pointer),
            "tilt" | "accelerometer" => Ok(GravitySource::Tilt),
            other => Err(format!(
                "unknown input source '{other}' (expected 'pointer' or 'tilt')"
            )),
        }
    }
}

/// Game configuration resource.
///
/// Stores the level selection, input strategy and simulation rate. Values
/// missing from the file keep their defaults.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Key of the level to load from the [`LevelStore`](crate::resources::levelstore::LevelStore).
    pub level_name: String,
    /// Gravity input strategy.
    pub gravity_source: GravitySource,
    /// Simulation ticks per second.
    pub tick_rate: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            level_name: DEFAULT_LEVEL_NAME.to_string(),
            gravity_source: GravitySource::default(),
            tick_rate: DEFAULT_TICK_RATE,
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
    /// Returns an error if the file cannot be read or parsed, or if a
    /// present value is invalid.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [level] section
        if let Some(name) = config.get("level", "name") {
            self.level_name = name;
        }

        // [input] section
        if let Some(source) = config.get("input", "source") {
            self.gravity_source = GravitySource::parse(&source)?;
        }

        // [simulation] section
        if let Some(rate) = config.getuint("simulation", "tick_rate").ok().flatten() {
            self.tick_rate = rate as u32;
        }

        info!(
            "Loaded config: level={}, input={:?}, tick_rate={}",
            self.level_name, self.gravity_source, self.tick_rate
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.level_name, "demo");
        assert_eq!(config.gravity_source, GravitySource::Pointer);
        assert_eq!(config.tick_rate, 60);
    }

    #[test]
    fn test_gravity_source_parse() {
        assert_eq!(
            GravitySource::parse("pointer").unwrap(),
            GravitySource::Pointer
        );
        assert_eq!(GravitySource::parse("Tilt").unwrap(), GravitySource::Tilt);
        assert_eq!(
            GravitySource::parse("accelerometer").unwrap(),
            GravitySource::Tilt
        );
        assert!(GravitySource::parse("keyboard").is_err());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/nonexistent/config.ini");
        assert!(config.load_from_file().is_err());
    }
}
