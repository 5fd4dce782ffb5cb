use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::layers::default_layers;

/// Settings persistence errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or decode settings: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no configuration directory available on this platform")]
    NoConfigDir,
}

/// Grid and snapping preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSettings {
    pub show_grid: bool,
    pub snap_to_grid: bool,
}

impl Default for ObjectSettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            snap_to_grid: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorMode {
    #[default]
    Color,
    Grayscale,
}

/// Print/export preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintSettings {
    /// Dots per inch
    pub resolution: u32,
    pub color_mode: ColorMode,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            resolution: 300,
            color_mode: ColorMode::Color,
        }
    }
}

/// Application preferences, grouped into the same three categories the
/// settings sidebar shows: layers, objects, pcb_print. This is a UI
/// convenience store; the layer registry and pad model never read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Startup visibility per stock layer
    pub layers: IndexMap<String, bool>,
    pub objects: ObjectSettings,
    pub pcb_print: PrintSettings,
}

impl Default for Settings {
    fn default() -> Self {
        let layers = default_layers()
            .into_iter()
            .map(|(name, _, _)| (name.to_string(), true))
            .collect();
        Self {
            layers,
            objects: ObjectSettings::default(),
            pcb_print: PrintSettings::default(),
        }
    }
}

impl Settings {
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Manager for loading and saving application settings
#[derive(Debug)]
pub struct SettingsManager {
    path: PathBuf,
    pub settings: Settings,
}

impl SettingsManager {
    /// Settings manager rooted at the platform config directory
    pub fn new() -> Result<Self, SettingsError> {
        let path = dirs::config_dir()
            .ok_or(SettingsError::NoConfigDir)?
            .join("pcbstudio")
            .join("settings.json");
        Ok(Self::with_path(path))
    }

    /// Settings manager rooted at an explicit file path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            settings: Settings::default(),
        }
    }

    /// Load settings from disk. A missing file seeds the defaults and writes
    /// them out; a corrupt file falls back to defaults with a warning.
    pub fn load(&mut self) -> Result<(), SettingsError> {
        if self.path.exists() {
            match Settings::load_from_file(&self.path) {
                Ok(settings) => {
                    debug!("loaded settings from {}", self.path.display());
                    self.settings = settings;
                }
                Err(err) => {
                    warn!(
                        "settings file {} unreadable ({}), using defaults",
                        self.path.display(),
                        err
                    );
                    self.settings = Settings::default();
                }
            }
        } else {
            self.settings = Settings::default();
            self.save()?;
        }
        Ok(())
    }

    /// Write the current settings to disk
    pub fn save(&self) -> Result<(), SettingsError> {
        self.settings.save_to_file(&self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
