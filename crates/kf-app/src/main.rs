//! `kf`: inspect and edit Kerbal Foundries settings for a game installation.
//!
//! Loads `KFGlobals.txt` (creating it with defaults when missing), applies any
//! override flags, optionally looks up a dust color and writes the settings
//! back in canonical form.
//!
//! ```text
//! kf --root ~/KSP --dust-amount 1.3 --debug true
//! kf --root ~/KSP --dust-color Kerbin Shores
//! ```

use std::process::ExitCode;

use clap::Parser;
use kf_app::{FoundryContext, GamePaths};
use kf_config::CliArgs;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "kf", version, about = "Kerbal Foundries settings tool")]
struct Args {
    #[command(flatten)]
    settings: CliArgs,

    /// Print the dust color for a body and biome.
    #[arg(long, num_args = 2, value_names = ["BODY", "BIOME"])]
    dust_color: Option<Vec<String>>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let paths = match args.settings.root.clone() {
        Some(root) => GamePaths::from_root(root),
        None => match GamePaths::from_current_dir() {
            Ok(paths) => paths,
            Err(e) => {
                eprintln!("Failed to resolve the game directory: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let mut ctx = FoundryContext::new(paths, &args.settings);
    if let Err(e) = kf_log::init_logging(Some(&ctx.paths().log_dir), ctx.settings()) {
        eprintln!("Logging unavailable: {e}");
    }
    info!("Settings: {}", ctx.paths().settings_file.display());
    ctx.log_load_report();
    ctx.settings().log_values();
    ctx.load_dust_colors();

    if let Some([body, biome]) = args.dust_color.as_deref() {
        let color = ctx.dust_color(body, biome);
        println!("{body}/{biome}: {},{},{},{}", color.r, color.g, color.b, color.a);
    }

    match ctx.shutdown() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
