use crate::canvas::{PathData, PathId};
use crate::export::SavePreference;

/// Callbacks the host application receives from the toolbar.
///
/// Every method defaults to a no-op, so hosts only implement what they use.
pub trait ToolbarHost {
    fn on_stroke_start(&mut self, _path: &PathData) {}

    fn on_stroke_changed(&mut self, _path: &PathData) {}

    fn on_stroke_end(&mut self, _path: &PathData) {}

    /// Full committed path list after any change.
    fn on_paths_change(&mut self, _paths: &[PathData]) {}

    /// Undo button result: the removed path id, or `None` on empty history.
    fn on_undo_pressed(&mut self, _removed: Option<PathId>) {}

    fn on_clear_pressed(&mut self) {}

    fn on_close_pressed(&mut self) {}

    /// Save completion as reported by the canvas.
    fn on_sketch_saved(&mut self, _success: bool, _path: Option<&str>) {}

    /// Custom save preferences, invoked once per save request.
    ///
    /// `None` falls back to the config file's `[save]` section, then to the
    /// built-in defaults.
    fn save_preference(&mut self) -> Option<SavePreference> {
        None
    }
}

impl ToolbarHost for () {}
