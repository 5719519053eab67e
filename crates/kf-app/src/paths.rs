//! File locations inside a game installation.

use std::path::{Path, PathBuf};

const GAME_DATA: &str = "GameData";
const FOUNDRY_DIR: &str = "KerbalFoundries";
const SETTINGS_DIR: &str = "Settings";
const SETTINGS_FILE: &str = "KFGlobals.txt";
const DUST_COLORS_FILE: &str = "DustColors.cfg";

/// Paths used by the add-on, all derived from the game root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePaths {
    /// Game installation root (contains `GameData`).
    pub root: PathBuf,
    /// `GameData/KerbalFoundries`; log files go here.
    pub log_dir: PathBuf,
    /// `GameData/KerbalFoundries/Settings/KFGlobals.txt`.
    pub settings_file: PathBuf,
    /// `GameData/KerbalFoundries/Settings/DustColors.cfg`.
    pub dust_colors_file: PathBuf,
}

impl GamePaths {
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let foundry = root.join(GAME_DATA).join(FOUNDRY_DIR);
        let settings = foundry.join(SETTINGS_DIR);
        Self {
            settings_file: settings.join(SETTINGS_FILE),
            dust_colors_file: settings.join(DUST_COLORS_FILE),
            log_dir: foundry,
            root,
        }
    }

    /// Paths rooted at the process working directory.
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::from_root(std::env::current_dir()?))
    }

    pub fn settings_dir(&self) -> &Path {
        self.settings_file.parent().unwrap_or(&self.log_dir)
    }
}
