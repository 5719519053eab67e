//! Command-line argument parsing for the Kerbal Foundries tools.

use std::path::PathBuf;

use clap::Parser;

use crate::Settings;

/// Kerbal Foundries command-line arguments.
///
/// Override values replace settings loaded from `KFGlobals.txt` and are
/// persisted, canonicalized, on the next save.
#[derive(Parser, Debug, Default)]
pub struct CliArgs {
    /// Game installation root (the directory holding `GameData`).
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Enable or disable dust effects.
    #[arg(long)]
    pub dust: Option<bool>,

    /// Enable or disable the ground-color dust camera.
    #[arg(long)]
    pub dust_camera: Option<bool>,

    /// Enable or disable editor orientation markers.
    #[arg(long)]
    pub markers: Option<bool>,

    /// Enable or disable repulsor lighting.
    #[arg(long)]
    pub rep_light: Option<bool>,

    /// Dust emission multiplier (stored in 0.25 steps within 0..=3).
    #[arg(long, allow_negative_numbers = true)]
    pub dust_amount: Option<f32>,

    /// Ride-height step (stored in steps of 5 within 5..=20).
    #[arg(long, allow_negative_numbers = true)]
    pub suspension_increment: Option<f32>,

    /// Enable or disable debug options.
    #[arg(long)]
    pub debug: Option<bool>,

    /// Show the water collider (requires --debug true).
    #[arg(long)]
    pub water_collider: Option<bool>,

    /// Mirror log output to the log file.
    #[arg(long)]
    pub write_log_file: Option<bool>,

    /// Log file name.
    #[arg(long)]
    pub log_file: Option<String>,

    /// Dust camera resolution.
    #[arg(long)]
    pub camera_res: Option<i32>,

    /// Dust camera frame rate.
    #[arg(long)]
    pub camera_framerate: Option<i32>,
}

impl CliArgs {
    /// Returns `true` if any setting override was given.
    pub fn has_overrides(&self) -> bool {
        self.dust.is_some()
            || self.dust_camera.is_some()
            || self.markers.is_some()
            || self.rep_light.is_some()
            || self.dust_amount.is_some()
            || self.suspension_increment.is_some()
            || self.debug.is_some()
            || self.water_collider.is_some()
            || self.write_log_file.is_some()
            || self.log_file.is_some()
            || self.camera_res.is_some()
            || self.camera_framerate.is_some()
    }
}

impl Settings {
    /// Apply CLI overrides to loaded settings.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(v) = args.dust {
            self.is_dust_enabled = v;
        }
        if let Some(v) = args.dust_camera {
            self.is_dust_camera_enabled = v;
        }
        if let Some(v) = args.markers {
            self.is_marker_enabled = v;
        }
        if let Some(v) = args.rep_light {
            self.is_rep_light_enabled = v;
        }
        if let Some(v) = args.dust_amount {
            self.dust_amount = v;
        }
        if let Some(v) = args.suspension_increment {
            self.suspension_increment = v;
        }
        if let Some(v) = args.debug {
            self.is_debug_enabled = v;
        }
        if let Some(v) = args.water_collider {
            self.debug_is_water_collider_visible = v;
        }
        if let Some(v) = args.write_log_file {
            self.write_to_log_file = v;
        }
        if let Some(ref v) = args.log_file {
            self.log_file = v.clone();
        }
        if let Some(v) = args.camera_res {
            self.camera_res = v;
        }
        if let Some(v) = args.camera_framerate {
            self.camera_framerate = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut settings = Settings::default();
        let args = CliArgs {
            dust_amount: Some(2.0),
            debug: Some(true),
            log_file: Some("wheels.log".to_string()),
            ..Default::default()
        };
        settings.apply_cli_overrides(&args);
        assert_eq!(settings.dust_amount, 2.0);
        assert!(settings.is_debug_enabled);
        assert_eq!(settings.log_file, "wheels.log");
        // Non-overridden fields retain defaults
        assert_eq!(settings.camera_res, 6);
        assert!(settings.is_dust_enabled);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Settings::default();
        let mut settings = Settings::default();
        let args = CliArgs::default();
        settings.apply_cli_overrides(&args);
        assert_eq!(settings, original);
        assert!(!args.has_overrides());
    }

    #[test]
    fn test_has_overrides() {
        // A value equal to the default still counts as an explicit override.
        let args = CliArgs {
            camera_framerate: Some(10),
            ..Default::default()
        };
        assert!(args.has_overrides());
        let args = CliArgs {
            markers: Some(false),
            ..Default::default()
        };
        assert!(args.has_overrides());
    }

    #[test]
    fn test_parse_from_args() {
        let args = CliArgs::parse_from([
            "kf",
            "--root",
            "/games/ksp",
            "--dust",
            "false",
            "--dust-amount",
            "-1",
        ]);
        assert_eq!(args.root, Some(PathBuf::from("/games/ksp")));
        assert_eq!(args.dust, Some(false));
        assert_eq!(args.dust_amount, Some(-1.0));
    }
}
