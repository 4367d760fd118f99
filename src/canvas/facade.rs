use crate::canvas::types::{CanvasError, CanvasEvent, CanvasOptions, PathData, PathId};
use crate::export::SaveConfig;
use crate::input::StrokeStyle;

/// Abstraction over the native drawing surface.
///
/// The toolbar never rasterizes or encodes anything itself; it issues these
/// commands and consumes [`CanvasEvent`]s. Implementations may run commands
/// asynchronously and report completion through [`Canvas::poll_event`].
pub trait Canvas {
    /// Applies static options once, before the first stroke.
    fn configure(&mut self, _options: &CanvasOptions) {}

    /// Sets the color and width used for the next stroke.
    fn set_stroke_style(&mut self, style: StrokeStyle);

    /// Discards all committed strokes.
    fn clear(&mut self);

    /// Removes the most recent stroke, returning its id if there was one.
    fn undo(&mut self) -> Option<PathId>;

    /// Adds a path without going through gesture input.
    fn add_path(&mut self, path: PathData) -> Result<(), CanvasError>;

    /// Deletes the path with the given id.
    fn delete_path(&mut self, id: PathId) -> Result<(), CanvasError>;

    /// Starts exporting the sketch. Completion arrives as
    /// [`CanvasEvent::SketchSaved`].
    fn save(&mut self, config: &SaveConfig);

    /// Returns the next pending event, if any.
    fn poll_event(&mut self) -> Option<CanvasEvent> {
        None
    }
}
