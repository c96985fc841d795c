//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [picker]
//! range = 10
//! layer_mask = 1
//!
//! [simulation]
//! fixed_delta = 0.0166667
//! time_scale = 1.0
//! frames = 600
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::boxcollider::DEFAULT_LAYER;
use crate::components::viewer::DEFAULT_PICK_RANGE;

/// Default safe values for startup
const DEFAULT_FIXED_DELTA: f32 = 1.0 / 60.0;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_FRAMES: u64 = 600;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores picking and simulation settings. The [`Scene`](crate::scene::Scene)
/// reads it on construction; the headless runner also uses the simulation
/// values to drive its frame loop.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Default pick distance for viewers that do not set one.
    pub pick_range: f32,
    /// Collision layers the pick ray can hit.
    pub pick_layer_mask: u32,
    /// Frame delta in seconds used by the headless runner.
    pub fixed_delta: f32,
    /// Multiplier applied to every frame delta.
    pub time_scale: f32,
    /// Number of frames the headless runner simulates.
    pub frames: u64,
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
            pick_range: DEFAULT_PICK_RANGE,
            pick_layer_mask: DEFAULT_LAYER,
            fixed_delta: DEFAULT_FIXED_DELTA,
            time_scale: DEFAULT_TIME_SCALE,
            frames: DEFAULT_FRAMES,
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

        // [picker] section
        if let Some(range) = config.getfloat("picker", "range").ok().flatten() {
            self.pick_range = range as f32;
        }
        if let Some(mask) = config.getuint("picker", "layer_mask").ok().flatten() {
            match u32::try_from(mask) {
                Ok(mask) => self.pick_layer_mask = mask,
                Err(_) => warn!(
                    "picker.layer_mask {} does not fit in 32 bits, keeping {:#b}",
                    mask, self.pick_layer_mask
                ),
            }
        }

        // [simulation] section
        if let Some(dt) = config.getfloat("simulation", "fixed_delta").ok().flatten() {
            self.fixed_delta = dt as f32;
        }
        if let Some(scale) = config.getfloat("simulation", "time_scale").ok().flatten() {
            self.time_scale = scale as f32;
        }
        if let Some(frames) = config.getuint("simulation", "frames").ok().flatten() {
            self.frames = frames;
        }

        info!(
            "Loaded config: pick range={}, layer mask={:#b}, dt={}, time scale={}, frames={}",
            self.pick_range, self.pick_layer_mask, self.fixed_delta, self.time_scale, self.frames
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [picker] section
        config.set("picker", "range", Some(self.pick_range.to_string()));
        config.set("picker", "layer_mask", Some(self.pick_layer_mask.to_string()));

        // [simulation] section
        config.set("simulation", "fixed_delta", Some(self.fixed_delta.to_string()));
        config.set("simulation", "time_scale", Some(self.time_scale.to_string()));
        config.set("simulation", "frames", Some(self.frames.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
