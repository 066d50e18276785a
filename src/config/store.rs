//! Settings store client
//!
//! The panel only ever reads a full snapshot at startup and writes a full
//! snapshot after each mutation. `JsonFileStore` keeps that snapshot in a JSON
//! file under the user's config directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::display::DisplaySettings;
use crate::constants::config::{APP_DIR, FILENAME, PATH_ENV};

/// Read/write access to the persisted display settings
pub trait SettingsStore: Send + Sync {
    fn get_display_settings(&self) -> Result<DisplaySettings>;

    fn set_display_settings(&self, settings: &DisplaySettings) -> Result<()>;
}

/// Settings persisted as pretty-printed JSON on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the resolved location: explicit path > env var > config dir
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let path = explicit
            .or_else(|| std::env::var_os(PATH_ENV).map(PathBuf::from))
            .unwrap_or_else(Self::default_path);
        Self::new(path)
    }

    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(FILENAME);
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| FILENAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SettingsStore for JsonFileStore {
    fn get_display_settings(&self) -> Result<DisplaySettings> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "Settings file not found, using defaults");
            return Ok(DisplaySettings::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;

        if contents.trim().is_empty() {
            return Ok(DisplaySettings::default());
        }

        let settings: DisplaySettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings JSON from {}", self.path.display()))?;

        debug!(path = %self.path.display(), elements = settings.elements.len(), "Loaded display settings");
        Ok(settings)
    }

    fn set_display_settings(&self, settings: &DisplaySettings) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(settings)
            .context("Failed to serialize display settings to JSON")?;

        // Write beside the target then rename, so readers never see a partial file
        let temp = self.temp_path();
        fs::write(&temp, json)
            .with_context(|| format!("Failed to write settings to {}", temp.display()))?;
        fs::rename(&temp, &self.path)
            .with_context(|| format!("Failed to move settings into {}", self.path.display()))?;

        debug!(path = %self.path.display(), elements = settings.elements.len(), "Saved display settings");
        Ok(())
    }
}
