use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchbar_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sketchbar").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn sketchbar_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    sketchbar_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Drawing toolbar controller for sketch canvases",
        ));
}

#[test]
fn replay_cycles_alpha_and_width() {
    let temp = TempDir::new().unwrap();
    sketchbar_cmd(&temp)
        .args(["tap:1", "tap:1", "tap:1", "brush", "width", "width"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""active_alpha": "77""#))
        .stdout(predicate::str::contains(r##""stroke_color": "#EF595277""##))
        .stdout(predicate::str::contains(r#""stroke_width": 15.0"#))
        .stdout(predicate::str::contains(r#""active_tool": "BRUSH""#));
}

#[test]
fn replay_reports_undo_and_save() {
    let temp = TempDir::new().unwrap();
    sketchbar_cmd(&temp)
        .args(["--storage-root", "/sketches", "undo", "save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("undo: none"))
        .stdout(predicate::str::contains("saved: true /sketches/"))
        .stdout(predicate::str::contains(r#""active_tool": "UNDO""#));
}

#[test]
fn denied_permission_blocks_save_when_configured() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "[permission]\nblock_save_when_denied = true\n");
    sketchbar_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .args(["--deny-permission", "save"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""permission": "denied""#))
        .stdout(predicate::str::contains("saved: false -"));
}

#[test]
fn unknown_gesture_fails() {
    let temp = TempDir::new().unwrap();
    sketchbar_cmd(&temp)
        .arg("redo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown gesture 'redo'"));
}

#[test]
fn check_rejects_empty_palette() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "[palette]\ncolors = []\n");
    sketchbar_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "palette must contain at least one color",
        ));
}

#[test]
fn check_accepts_defaults() {
    let temp = TempDir::new().unwrap();
    sketchbar_cmd(&temp)
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration OK: 7 colors"));
}
