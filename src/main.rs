use anyhow::{Context, anyhow};
use clap::{ArgAction, Parser};
use serde::Serialize;
use std::path::PathBuf;

use sketchbar::canvas::{MemoryCanvas, PathData, PathId};
use sketchbar::export::file;
use sketchbar::input::{Gesture, SessionSnapshot};
use sketchbar::permission::{PermissionStatus, StaticPermission};
use sketchbar::{Config, ToolbarController, ToolbarHost, util};

#[derive(Parser, Debug)]
#[command(name = "sketchbar")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SKETCHBAR_GIT_HASH"), ")"),
    about = "Drawing toolbar controller for sketch canvases"
)]
struct Cli {
    /// Config file to use instead of ~/.config/sketchbar/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Validate the configuration and exit
    #[arg(long, action = ArgAction::SetTrue)]
    check: bool,

    /// Answer the startup permission request with "deny"
    #[arg(long, action = ArgAction::SetTrue)]
    deny_permission: bool,

    /// Directory reported for saved sketches (default: ~/Pictures/Sketchbar)
    #[arg(long, value_name = "DIR")]
    storage_root: Option<PathBuf>,

    /// Gestures to replay: tap:<index>, pencil, brush, eraser, undo, clear,
    /// close, width, save, frame
    #[arg(value_name = "GESTURE")]
    gestures: Vec<String>,
}

/// Host that records every callback for the replay report.
#[derive(Default)]
struct ReplayHost {
    events: Vec<String>,
}

impl ToolbarHost for ReplayHost {
    fn on_paths_change(&mut self, paths: &[PathData]) {
        self.events.push(format!("paths: {}", paths.len()));
    }

    fn on_undo_pressed(&mut self, removed: Option<PathId>) {
        match removed {
            Some(id) => self.events.push(format!("undo: {id}")),
            None => self.events.push("undo: none".to_string()),
        }
    }

    fn on_clear_pressed(&mut self) {
        self.events.push("clear".to_string());
    }

    fn on_close_pressed(&mut self) {
        self.events.push("close".to_string());
    }

    fn on_sketch_saved(&mut self, success: bool, path: Option<&str>) {
        self.events
            .push(format!("saved: {} {}", success, path.unwrap_or("-")));
    }
}

#[derive(Serialize)]
struct ReplayReport {
    permission: PermissionStatus,
    session: SessionSnapshot,
    events: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if cli.check {
        config.validate().context("Invalid configuration")?;
        println!(
            "Configuration OK: {} colors, {} alpha levels, widths {}-{} step {}",
            config.palette.colors.len(),
            config.palette.alpha_levels.len(),
            config.stroke.min_width,
            config.stroke.max_width,
            config.stroke.width_step
        );
        return Ok(());
    }

    if cli.gestures.is_empty() {
        // No gestures: show usage
        println!("sketchbar: Drawing toolbar controller for sketch canvases");
        println!();
        println!("Usage:");
        println!("  sketchbar [OPTIONS] <GESTURE>...   Replay gestures and print the session");
        println!("  sketchbar --check                  Validate the configuration");
        println!("  sketchbar --help                   Show help");
        println!();
        println!("Example:");
        println!("  sketchbar tap:1 tap:1 brush width save");
        return Ok(());
    }

    let gestures = cli
        .gestures
        .iter()
        .map(|word| util::parse_gesture(word).ok_or_else(|| anyhow!("Unknown gesture '{word}'")))
        .collect::<anyhow::Result<Vec<Gesture>>>()?;

    let storage_root = cli
        .storage_root
        .clone()
        .unwrap_or_else(file::default_storage_root);
    let canvas = MemoryCanvas::new().with_storage_root(storage_root);
    let mut controller = ToolbarController::new(&config, canvas, ReplayHost::default())
        .context("Failed to create toolbar")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start runtime")?;
    runtime.block_on(controller.authorize(&StaticPermission(!cli.deny_permission)));

    for gesture in gestures {
        log::debug!("Replaying {:?}", gesture);
        if let Err(err) = controller.dispatch(gesture) {
            log::warn!("{:?} failed: {}", gesture, err);
        }
        controller.pump_canvas_events();
    }

    let report = ReplayReport {
        permission: controller.permission(),
        session: controller.session().snapshot(),
        events: controller.host().events.clone(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
