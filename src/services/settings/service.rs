use crate::models::settings::GridSettings;
use anyhow::{Context, Result};
#[cfg(not(debug_assertions))]
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of settings.toml: the working directory in debug builds, the
    /// platform config directory otherwise.
    pub fn default_path() -> PathBuf {
        #[cfg(debug_assertions)]
        {
            PathBuf::from(SETTINGS_FILE)
        }

        #[cfg(not(debug_assertions))]
        {
            if let Some(proj_dirs) = ProjectDirs::from("com", "KenBoyle", "AvailabilityGrid") {
                proj_dirs.config_dir().join(SETTINGS_FILE)
            } else {
                PathBuf::from(SETTINGS_FILE)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings. A missing file yields the defaults.
    pub fn get(&self) -> Result<GridSettings> {
        if !self.path.exists() {
            return Ok(GridSettings::default());
        }

        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let settings: GridSettings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        settings.validate().context("Invalid settings")?;

        Ok(settings)
    }

    /// Write settings, creating the parent directory if needed.
    pub fn save(&self, settings: &GridSettings) -> Result<()> {
        settings.validate().context("Invalid settings")?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        Ok(())
    }
}

pub fn load_settings_or_default(settings_service: &SettingsService) -> GridSettings {
    match settings_service.get() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            GridSettings::default()
        }
    }
}
