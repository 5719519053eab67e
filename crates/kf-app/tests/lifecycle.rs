//! Start-up, override and shutdown against a temporary game directory.

use std::fs;
use std::process::Command;

use kf_app::{FoundryContext, GamePaths};
use kf_config::{CliArgs, ConfigNode, ROOT_NODE};
use kf_dust::Rgba;

const DUST_COLORS: &str = "\
DustColorDefinitions
{
\tKerbin
\t{
\t\tShores
\t\t{
\t\t\tColor = 0.53,0.46,0.36,0.02
\t\t}
\t}
}
";

fn game_dir() -> (tempfile::TempDir, GamePaths) {
    let temp = tempfile::tempdir().unwrap();
    let paths = GamePaths::from_root(temp.path());
    fs::create_dir_all(paths.settings_dir()).unwrap();
    fs::write(&paths.dust_colors_file, DUST_COLORS).unwrap();
    (temp, paths)
}

#[test]
fn test_first_run_creates_settings() {
    let (_temp, paths) = game_dir();
    let ctx = FoundryContext::init(paths.clone(), &CliArgs::default());
    assert!(ctx.load_report().regenerated);
    assert!(paths.settings_file.exists());
    assert_eq!(ctx.dust_color("Kerbin", "Shores"), Rgba::new(0.53, 0.46, 0.36, 0.02));
    ctx.shutdown().unwrap();
}

#[test]
fn test_overrides_persist_canonicalized() {
    let (_temp, paths) = game_dir();
    let cli = CliArgs {
        dust_amount: Some(1.3),
        suspension_increment: Some(42.0),
        water_collider: Some(true),
        ..Default::default()
    };
    FoundryContext::init(paths.clone(), &cli).shutdown().unwrap();

    let root = ConfigNode::load(&paths.settings_file).unwrap();
    let section = root.node(ROOT_NODE).unwrap();
    assert_eq!(section.value("dustAmount"), Some("1.25"));
    assert_eq!(section.value("suspensionIncrement"), Some("20"));
    assert_eq!(section.value("debugIsWaterColliderVisible"), Some("False"));

    let ctx = FoundryContext::init(paths, &CliArgs::default());
    assert!(!ctx.load_report().regenerated);
    assert!(ctx.load_report().defaulted.is_empty());
    assert_eq!(ctx.settings().dust_amount, 1.25);
}

#[test]
fn test_mid_session_save() {
    let (_temp, paths) = game_dir();
    let mut ctx = FoundryContext::init(paths.clone(), &CliArgs::default());
    ctx.settings_mut().camera_res = 8;
    ctx.save().unwrap();

    let (store, _) = kf_config::SettingsStore::load(&paths.settings_file);
    assert_eq!(store.settings().camera_res, 8);
}

#[test]
fn test_binary_dust_color_lookup() {
    let (temp, paths) = game_dir();
    let output = Command::new(env!("CARGO_BIN_EXE_kf"))
        .arg("--root")
        .arg(temp.path())
        .args(["--dust-color", "Kerbin", "Shores", "--dust", "false"])
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Kerbin/Shores: 0.53,0.46,0.36,0.02"), "{stdout}");

    let root = ConfigNode::load(&paths.settings_file).unwrap();
    assert_eq!(root.node(ROOT_NODE).unwrap().value("isDustEnabled"), Some("False"));
}

#[test]
fn test_binary_reports_defaulted_settings() {
    let (temp, paths) = game_dir();
    fs::write(
        &paths.settings_file,
        "KFGlobals\n{\n\tisDustEnabled = True\n\tcameraRes = eight\n}\n",
    )
    .unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_kf"))
        .arg("--root")
        .arg(temp.path())
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WARN"), "{stderr}");
    assert!(
        stderr.contains("cameraRes was missing or invalid, using default 6"),
        "{stderr}"
    );
    assert!(
        stderr.contains("cameraFramerate was missing or invalid, using default 10"),
        "{stderr}"
    );
    assert!(!stderr.contains("have been regenerated"), "{stderr}");
}
