//! Toolbar tool selection.

use serde::Serialize;

/// Highlighted toolbar tool.
///
/// Pencil, brush and eraser are drawing modes. Undo and bin are actions
/// that only take the highlight; drawing continues with the last drawing
/// mode's parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tool {
    /// Thin stroke (fixed pencil width)
    Pencil,
    /// Thick stroke (fixed brush width)
    Brush,
    /// Paints with the fully transparent sentinel color
    Eraser,
    /// Undo button was the last one pressed
    Undo,
    /// Clear (bin) button was the last one pressed
    Bin,
}
