//! Host settings
//!
//! Loaded from a JSON file by the native binary. Missing fields fall back to
//! their defaults. Game rules are fixed and not configurable here.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::renderer::RenderOptions;

/// Error type for settings loading
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Host configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Framebuffer width in pixels
    pub window_width: u32,
    /// Framebuffer height in pixels
    pub window_height: u32,
    /// RNG seed; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Overlay paddle collision boxes
    pub show_colliders: bool,
    /// Host loop rate (frames per second)
    pub frame_rate: u32,
    /// Headless run length in seconds
    pub run_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            seed: None,
            show_colliders: false,
            frame_rate: 60,
            run_seconds: 30.0,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load from `path` if given, logging and falling back to defaults on error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(SettingsError::Invalid(format!(
                "window size {}x{} must be non-zero",
                self.window_width, self.window_height
            )));
        }
        if self.frame_rate == 0 {
            return Err(SettingsError::Invalid("frame_rate must be positive".into()));
        }
        if !self.run_seconds.is_finite() || self.run_seconds < 0.0 {
            return Err(SettingsError::Invalid(format!(
                "run_seconds {} must be a non-negative number",
                self.run_seconds
            )));
        }
        Ok(())
    }

    /// Host frame delta in seconds
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }

    /// Number of host frames in a headless run
    pub fn frame_count(&self) -> u64 {
        (self.run_seconds * self.frame_rate as f32).ceil() as u64
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_colliders: self.show_colliders,
        }
    }
}
