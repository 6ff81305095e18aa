// Settings module
//
// Read once at startup from settings.toml; every field falls back to its
// default when missing from the file.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Meeting durations offered in the footer selector, in minutes.
pub const DURATION_OPTIONS: [u32; 4] = [30, 60, 90, 120];

pub const THEME_OPTIONS: [&str; 3] = ["light", "dark", "system"];

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("slot height must be a positive number of pixels, got {0}")]
    InvalidSlotHeight(f32),
    #[error("unsupported meeting duration: {0} minutes")]
    InvalidDuration(u32),
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// "light", "dark" or "system"
    pub theme: String,
    /// Height of one half-hour row in pixels
    pub slot_height: f32,
    pub default_duration_minutes: u32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            slot_height: 40.0,
            default_duration_minutes: 30,
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl GridSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.slot_height.is_finite() || self.slot_height <= 0.0 {
            return Err(SettingsError::InvalidSlotHeight(self.slot_height));
        }
        if !DURATION_OPTIONS.contains(&self.default_duration_minutes) {
            return Err(SettingsError::InvalidDuration(
                self.default_duration_minutes,
            ));
        }
        if !THEME_OPTIONS.contains(&self.theme.as_str()) {
            return Err(SettingsError::UnknownTheme(self.theme.clone()));
        }
        Ok(())
    }
}
