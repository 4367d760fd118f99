//! Toolbar gesture types.

/// A discrete user action on the toolbar.
///
/// Host UI layers map their native touch/click events to these values and
/// feed them to [`ToolbarController::dispatch`](crate::toolbar::ToolbarController::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Tap on the palette swatch at the given index
    TapSwatch(usize),
    /// Pencil width picker
    Pencil,
    /// Brush width picker
    Brush,
    /// Eraser button
    Eraser,
    /// Undo button
    Undo,
    /// Clear (bin) button
    Clear,
    /// Close button
    Close,
    /// "Next width" control (long-press or repeated tap)
    NextWidth,
    /// Save request
    Save,
    /// End of a render/update cycle
    Frame,
}
