//! Load / save of the global settings document with create-on-missing defaulting.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::node::ConfigNode;
use crate::settings::{SettingKey, Settings};

/// Name of the root section in the settings document.
pub const ROOT_NODE: &str = "KFGlobals";

/// What happened while loading the settings document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// The document was missing or unusable and was rewritten from defaults.
    pub regenerated: bool,
    /// Keys whose compiled default was kept because the stored value was
    /// missing or failed to parse.
    pub defaulted: Vec<SettingKey>,
}

/// Settings bound to the document they were loaded from.
///
/// Constructed once at start-up and flushed with [`SettingsStore::save`] at
/// scene changes and shutdown.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Load settings from `path`.
    ///
    /// A missing or unreadable file, a file without a `KFGlobals` section, or a
    /// section with no values is replaced by a freshly written default document,
    /// which is then read back. Never fails: if the defaults cannot be written
    /// the in-memory defaults are used and the error is logged.
    pub fn load(path: impl Into<PathBuf>) -> (Self, LoadReport) {
        let path = path.into();
        let mut report = LoadReport::default();

        let root = match read_section(&path) {
            Some(root) => root,
            None => {
                report.regenerated = true;
                match Self::create_defaults(&path) {
                    Ok(_) => read_section(&path).unwrap_or_else(default_document),
                    Err(e) => {
                        log::error!("Could not write default settings to {}: {e}", path.display());
                        default_document()
                    }
                }
            }
        };

        let section = root.node(ROOT_NODE).cloned().unwrap_or_default();
        let (settings, defaulted) = Settings::from_node(&section);
        report.defaulted = defaulted;

        if !report.defaulted.is_empty() {
            log::warn!(
                "{} setting(s) in {} fell back to defaults",
                report.defaulted.len(),
                path.display()
            );
        }
        settings.log_values();

        (Self { path, settings }, report)
    }

    /// Write a default document to `path` and return the store holding it.
    pub fn create_defaults(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mut store = Self {
            path: path.into(),
            settings: Settings::default(),
        };
        log::info!("Default config created.");
        store.save()?;
        Ok(store)
    }

    /// Replace the document on disk with the canonicalized in-memory settings.
    ///
    /// The in-memory `debugIsWaterColliderVisible` flag is cleared when debug
    /// is disabled; the numeric values stay as set and are only canonicalized
    /// in the written document.
    pub fn save(&mut self) -> Result<(), ConfigError> {
        if !self.settings.is_debug_enabled {
            self.settings.debug_is_water_collider_visible = false;
        }

        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir).map_err(ConfigError::CreateDirError)?;
        }

        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(ConfigError::RemoveError(e)),
        }

        let canonical = self.settings.canonicalized();
        let mut root = ConfigNode::default();
        root.add_node(canonical.to_node(ROOT_NODE));
        root.save(&self.path).map_err(ConfigError::WriteError)?;

        log::info!("Global settings saved to {}", self.path.display());
        canonical.log_values();
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Read `path` and return its root if it holds a non-empty `KFGlobals` section.
fn read_section(path: &Path) -> Option<ConfigNode> {
    let root = match ConfigNode::load(path) {
        Ok(root) => root,
        Err(e) => {
            log::warn!("Settings document unavailable: {e}");
            return None;
        }
    };
    match root.node(ROOT_NODE) {
        Some(section) if section.count_values() > 0 => Some(root),
        Some(_) => {
            log::warn!("{ROOT_NODE} section in {} is empty", path.display());
            None
        }
        None => {
            log::warn!("{} has no {ROOT_NODE} section", path.display());
            None
        }
    }
}

fn default_document() -> ConfigNode {
    let mut root = ConfigNode::default();
    root.add_node(Settings::default().to_node(ROOT_NODE));
    root
}
