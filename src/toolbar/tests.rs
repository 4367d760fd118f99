use super::*;
use crate::canvas::{MemoryCanvas, PathData, PathId};
use crate::config::{ColorSpec, Config, ConfigError};
use crate::draw::{BLACK, Color, ERASER, RED};
use crate::export::{ImageFormat, SavePreference};
use crate::input::{Gesture, Tool};
use crate::permission::{PermissionStatus, StaticPermission};

#[derive(Default)]
struct RecordingHost {
    undo_results: Vec<Option<PathId>>,
    clears: usize,
    closes: usize,
    strokes_started: usize,
    strokes_changed: usize,
    strokes_ended: usize,
    path_counts: Vec<usize>,
    saved: Vec<(bool, Option<String>)>,
    preference: Option<SavePreference>,
    preference_calls: usize,
}

impl ToolbarHost for RecordingHost {
    fn on_stroke_start(&mut self, _path: &PathData) {
        self.strokes_started += 1;
    }

    fn on_stroke_changed(&mut self, _path: &PathData) {
        self.strokes_changed += 1;
    }

    fn on_stroke_end(&mut self, _path: &PathData) {
        self.strokes_ended += 1;
    }

    fn on_paths_change(&mut self, paths: &[PathData]) {
        self.path_counts.push(paths.len());
    }

    fn on_undo_pressed(&mut self, removed: Option<PathId>) {
        self.undo_results.push(removed);
    }

    fn on_clear_pressed(&mut self) {
        self.clears += 1;
    }

    fn on_close_pressed(&mut self) {
        self.closes += 1;
    }

    fn on_sketch_saved(&mut self, success: bool, path: Option<&str>) {
        self.saved.push((success, path.map(str::to_string)));
    }

    fn save_preference(&mut self) -> Option<SavePreference> {
        self.preference_calls += 1;
        self.preference.clone()
    }
}

type TestController = ToolbarController<MemoryCanvas, RecordingHost>;

fn create_controller(config: &Config) -> TestController {
    ToolbarController::new(config, MemoryCanvas::new(), RecordingHost::default()).unwrap()
}

fn draw_stroke(controller: &mut TestController) {
    let canvas = controller.canvas_mut();
    canvas.begin_stroke(0.0, 0.0);
    canvas.extend_stroke(5.0, 5.0);
    canvas.end_stroke();
    controller.pump_canvas_events();
}

#[test]
fn test_construction_configures_canvas() {
    let mut config = Config::default();
    config.canvas.user = Some("alice".to_string());
    config.canvas.canvas_style = Some(ColorSpec::Text("white".to_string()));
    config.permission.dialog_title = "Storage".to_string();

    let controller = create_controller(&config);
    let options = controller.canvas().options().unwrap();
    assert_eq!(options.user.as_deref(), Some("alice"));
    assert_eq!(options.canvas_style, Some(Color::rgb(255, 255, 255)));
    assert_eq!(options.permission_dialog_title, "Storage");

    let style = controller.canvas().stroke_style().unwrap();
    assert_eq!(style.color.to_string(), "#000000FF");
    assert_eq!(style.width, 3.0);
}

#[test]
fn test_empty_palette_rejected_at_construction() {
    let mut config = Config::default();
    config.palette.colors.clear();
    let result = ToolbarController::new(&config, MemoryCanvas::new(), ());
    assert!(matches!(result, Err(ConfigError::EmptyPalette)));
}

#[test]
fn test_gestures_push_stroke_style_to_canvas() {
    let mut controller = create_controller(&Config::default());

    controller.tap_palette_entry(1);
    assert_eq!(
        controller.canvas().stroke_style().unwrap().color.to_string(),
        "#EF5952FF"
    );

    controller.tap_palette_entry(1);
    assert_eq!(
        controller.canvas().stroke_style().unwrap().color.to_string(),
        "#EF5952AA"
    );

    controller.select_brush();
    assert_eq!(controller.canvas().stroke_style().unwrap().width, 10.0);

    controller.step_stroke_width();
    assert_eq!(controller.canvas().stroke_style().unwrap().width, 13.0);

    controller.select_eraser();
    assert_eq!(controller.canvas().stroke_style().unwrap().color, ERASER);
}

#[test]
fn test_undo_on_empty_history() {
    let mut controller = create_controller(&Config::default());
    controller.select_brush();
    let style = controller.session().stroke_style();

    assert_eq!(controller.press_undo(), None);
    assert_eq!(controller.host().undo_results, vec![None]);
    assert_eq!(controller.session().active_tool(), Some(Tool::Undo));
    assert_eq!(controller.session().stroke_style(), style);
}

#[test]
fn test_undo_reports_removed_path() {
    let mut controller = create_controller(&Config::default());
    draw_stroke(&mut controller);
    draw_stroke(&mut controller);

    assert_eq!(controller.press_undo(), Some(2));
    assert_eq!(controller.host().undo_results, vec![Some(2)]);
    assert_eq!(controller.canvas().paths().len(), 1);
}

#[test]
fn test_stroke_events_reach_host() {
    let mut controller = create_controller(&Config::default());
    draw_stroke(&mut controller);

    let host = controller.host();
    assert_eq!(host.strokes_started, 1);
    assert_eq!(host.strokes_changed, 1);
    assert_eq!(host.strokes_ended, 1);
    assert_eq!(host.path_counts, vec![1]);
}

#[test]
fn test_clear_and_close_notify_host() {
    let mut controller = create_controller(&Config::default());
    draw_stroke(&mut controller);

    controller.press_clear();
    controller.press_close();
    controller.pump_canvas_events();

    assert!(controller.canvas().paths().is_empty());
    assert_eq!(controller.session().active_tool(), Some(Tool::Bin));
    assert_eq!(controller.host().clears, 1);
    assert_eq!(controller.host().closes, 1);
    assert_eq!(controller.host().path_counts, vec![1, 0]);
}

#[test]
fn test_programmatic_paths() {
    let mut controller = create_controller(&Config::default());
    let path = PathData {
        id: 42,
        color: RED,
        width: 4.0,
        points: vec![(1.0, 1.0)],
    };
    controller.add_path(path.clone()).unwrap();
    assert_eq!(
        controller.add_path(path),
        Err(ToolbarError::Canvas(crate::canvas::CanvasError::DuplicatePath(42)))
    );
    controller.delete_path(42).unwrap();
    assert!(controller.delete_path(42).is_err());
    assert_eq!(controller.undo(), None);
    assert_eq!(controller.session().active_tool(), Some(Tool::Pencil));
}

#[test]
fn test_save_with_defaults_reports_completion() {
    let mut controller = ToolbarController::new(
        &Config::default(),
        MemoryCanvas::new().with_storage_root("/pictures"),
        RecordingHost::default(),
    )
    .unwrap();

    let config = controller.save().unwrap();
    assert_eq!(config.image_format, ImageFormat::Png);
    assert_eq!(config.folder, "");
    assert!(config.include_image && config.include_text);
    assert!(!config.crop_to_image_size);
    assert_eq!(controller.host().preference_calls, 1);

    controller.pump_canvas_events();
    let expected = format!("/pictures/{}.png", config.filename);
    assert_eq!(controller.host().saved, vec![(true, Some(expected))]);
}

#[test]
fn test_host_preference_wins_over_config_section() {
    let mut config = Config::default();
    config.save = Some(SavePreference {
        folder: Some("from-config".to_string()),
        ..SavePreference::default()
    });
    let mut controller = create_controller(&config);

    let resolved = controller.save().unwrap();
    assert_eq!(resolved.folder, "from-config");

    controller.host_mut().preference = Some(SavePreference {
        include_image: Some(false),
        filename: Some("mine".to_string()),
        ..SavePreference::default()
    });
    let resolved = controller.save().unwrap();
    assert_eq!(resolved.folder, "");
    assert_eq!(resolved.filename, "mine");
    assert!(!resolved.include_image);
    assert!(resolved.include_text);
    assert_eq!(controller.canvas().saves().len(), 2);
}

#[test]
fn test_failed_save_surfaces_to_host() {
    let mut controller = ToolbarController::new(
        &Config::default(),
        MemoryCanvas::new().failing_saves(),
        RecordingHost::default(),
    )
    .unwrap();
    controller.save().unwrap();
    controller.pump_canvas_events();
    assert_eq!(controller.host().saved, vec![(false, None)]);
}

#[tokio::test]
async fn test_denied_permission_degrades_gracefully_by_default() {
    let mut controller = create_controller(&Config::default());
    let status = controller.authorize(&StaticPermission(false)).await;
    assert_eq!(status, PermissionStatus::Denied);

    assert!(controller.save().is_ok());
    assert_eq!(controller.canvas().saves().len(), 1);
}

#[tokio::test]
async fn test_denied_permission_blocks_save_when_configured() {
    let mut config = Config::default();
    config.permission.block_save_when_denied = true;
    let mut controller = create_controller(&config);
    controller.authorize(&StaticPermission(false)).await;

    assert_eq!(controller.save(), Err(ToolbarError::PermissionDenied));
    assert!(controller.canvas().saves().is_empty());
    assert_eq!(controller.host().saved, vec![(false, None)]);
}

#[tokio::test]
async fn test_permission_is_requested_once() {
    let mut controller = create_controller(&Config::default());
    controller.authorize(&StaticPermission(true)).await;
    let status = controller.authorize(&StaticPermission(false)).await;
    assert_eq!(status, PermissionStatus::Granted);
}

#[test]
fn test_dispatch_routes_gestures() {
    let mut controller = create_controller(&Config::default());
    for gesture in [
        Gesture::TapSwatch(2),
        Gesture::Frame,
        Gesture::NextWidth,
        Gesture::Eraser,
        Gesture::Close,
    ] {
        controller.dispatch(gesture).unwrap();
    }
    let session = controller.session();
    assert_eq!(session.active_color(), ERASER);
    assert_eq!(session.stroke_width(), 6.0);
    assert!(!session.color_just_changed());
    assert_eq!(controller.host().closes, 1);
}

#[test]
fn test_view_highlights_active_tool_and_swatch() {
    let mut controller = create_controller(&Config::default());
    controller.tap_palette_entry(1);
    let view = controller.view();

    assert_eq!(view.swatches.len(), 7);
    assert!(!view.swatches[0].selected);
    assert!(view.swatches[1].selected);
    assert!(view.swatches[1].color_just_changed);
    assert_eq!(
        view.swatches[1].stroke_color.map(|c| c.to_string()),
        Some("#EF5952FF".to_string())
    );

    let pencil = view
        .buttons
        .iter()
        .find(|b| b.kind == ButtonKind::Pencil)
        .unwrap();
    assert!(pencil.highlighted);
    assert_eq!(pencil.scale, HIGHLIGHT_SCALE);
    assert!(view.buttons.iter().filter(|b| b.highlighted).count() == 1);
}

struct LabelRenderer;

impl ToolbarRenderer for LabelRenderer {
    type Output = String;

    fn swatch(&self, color: Color, index: usize) -> Option<String> {
        Some(format!("{index}:{color}"))
    }

    fn selected_swatch(&self, stroke_color: Color, index: usize, changed: bool) -> Option<String> {
        Some(format!("[{index}:{stroke_color}:{changed}]"))
    }

    fn undo(&self, button: &ButtonView) -> Option<String> {
        Some(format!("undo x{}", button.scale))
    }
}

#[test]
fn test_render_skips_missing_components() {
    let mut config = Config::default();
    config.palette.colors = vec![ColorSpec::from(BLACK), ColorSpec::from(RED)];
    let mut controller = create_controller(&config);
    controller.press_undo();

    let rendered = controller.render(&LabelRenderer);
    assert_eq!(
        rendered.swatches,
        vec!["[0:#000000FF:false]".to_string(), "1:#EF5952".to_string()]
    );
    assert_eq!(rendered.buttons, vec![(ButtonKind::Undo, "undo x1.5".to_string())]);
}
