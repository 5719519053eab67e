//! Session state: settings, dust colors and their lifecycle.

use kf_config::{CliArgs, ConfigError, LoadReport, Settings, SettingsStore};
use kf_dust::{DustColorTable, Rgba};
use tracing::{info, warn};

use crate::paths::GamePaths;

/// Everything the add-on keeps between start-up and shutdown.
///
/// Built once with [`FoundryContext::new`] (settings only) or
/// [`FoundryContext::init`] (settings and dust colors), passed to whatever
/// needs it, and consumed by [`FoundryContext::shutdown`].
#[derive(Debug)]
pub struct FoundryContext {
    paths: GamePaths,
    store: SettingsStore,
    report: LoadReport,
    dust_colors: DustColorTable,
}

impl FoundryContext {
    /// Load the settings document and apply command-line overrides.
    ///
    /// The dust color table starts empty; see [`load_dust_colors`](Self::load_dust_colors).
    pub fn new(paths: GamePaths, cli: &CliArgs) -> Self {
        let (mut store, report) = SettingsStore::load(&paths.settings_file);
        if cli.has_overrides() {
            store.settings_mut().apply_cli_overrides(cli);
        }
        Self {
            paths,
            store,
            report,
            dust_colors: DustColorTable::new(),
        }
    }

    /// [`new`](Self::new) followed by [`load_dust_colors`](Self::load_dust_colors).
    pub fn init(paths: GamePaths, cli: &CliArgs) -> Self {
        let mut ctx = Self::new(paths, cli);
        ctx.load_dust_colors();
        ctx
    }

    /// (Re)load the dust color table from disk.
    pub fn load_dust_colors(&mut self) {
        self.dust_colors = DustColorTable::load(&self.paths.dust_colors_file);
        info!("Dust colors loaded for {} bodies", self.dust_colors.len());
    }

    pub fn paths(&self) -> &GamePaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        self.store.settings()
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        self.store.settings_mut()
    }

    /// Outcome of the settings load performed at start-up.
    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    /// Log the start-up load outcome: regeneration and every defaulted key.
    /// Call after the subscriber is installed.
    pub fn log_load_report(&self) {
        if self.report.regenerated {
            warn!(
                "Settings at {} were missing or damaged and have been regenerated",
                self.paths.settings_file.display()
            );
        }
        for key in &self.report.defaulted {
            warn!("{key} was missing or invalid, using default {}", key.default_value());
        }
    }

    pub fn dust_colors(&self) -> &DustColorTable {
        &self.dust_colors
    }

    /// Dust color for a body/biome pair, falling back to the default color.
    pub fn dust_color(&self, body: &str, biome: &str) -> Rgba {
        self.dust_colors.lookup(body, biome)
    }

    /// Persist the current settings without ending the session.
    pub fn save(&mut self) -> Result<(), ConfigError> {
        self.store.save()
    }

    /// Persist the settings and end the session.
    pub fn shutdown(mut self) -> Result<(), ConfigError> {
        if let Err(e) = self.store.save() {
            warn!("Saving settings to {} failed: {e}", self.paths.settings_file.display());
            return Err(e);
        }
        info!("Kerbal Foundries session closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_overrides() {
        let temp = tempfile::tempdir().unwrap();
        let paths = GamePaths::from_root(temp.path());
        let cli = CliArgs {
            dust_amount: Some(2.0),
            ..Default::default()
        };
        let ctx = FoundryContext::new(paths, &cli);
        assert!(ctx.load_report().regenerated);
        assert_eq!(ctx.settings().dust_amount, 2.0);
        assert!(ctx.dust_colors().is_empty());
    }

    #[test]
    fn test_dust_color_fallback() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = FoundryContext::init(GamePaths::from_root(temp.path()), &CliArgs::default());
        assert_eq!(ctx.dust_color("Kerbin", "Shores"), kf_dust::DEFAULT_DUST_COLOR);
    }
}
