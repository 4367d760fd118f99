use std::path::PathBuf;
use std::process::Command;

fn main() {
    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=SKETCHBAR_GIT_HASH={hash}");

    let git_dir = std::env::var_os("GIT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".git"));
    for name in ["HEAD", "refs", "packed-refs"] {
        let path = git_dir.join(name);
        if let Some(display) = path.to_str().filter(|_| path.exists()) {
            println!("cargo:rerun-if-changed={display}");
        }
    }
    println!("cargo:rerun-if-changed=build.rs");
}
