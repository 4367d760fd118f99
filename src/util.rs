//! Utility functions for color names and gesture scripts.
//!
//! This module provides:
//! - Name-to-color mapping for the configuration file
//! - Parsing of the textual gesture scripts used by `sketchbar replay`

use crate::draw::{Color, color::*};
use crate::input::Gesture;

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "black", "white", "red", "yellow", "green", "orange", "pink", "blue",
///   "purple", "transparent"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "yellow" => Some(YELLOW),
        "green" => Some(GREEN),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "blue" => Some(BLUE),
        "purple" => Some(PURPLE),
        "transparent" => Some(ERASER),
        _ => None,
    }
}

// ============================================================================
// Gesture Scripts
// ============================================================================

/// Parses one gesture word.
///
/// # Supported Words (case-insensitive)
/// - `tap:<index>` → palette swatch tap
/// - `pencil`, `brush`, `eraser`, `undo`, `clear`, `close`
/// - `width` → step the stroke width oscillator
/// - `save` → request a save
/// - `frame` → finish a render/update cycle
///
/// # Returns
/// - `Some(Gesture)` for a recognized word
/// - `None` otherwise
pub fn parse_gesture(word: &str) -> Option<Gesture> {
    let lower = word.trim().to_lowercase();
    if let Some(index) = lower.strip_prefix("tap:") {
        return index.parse().ok().map(Gesture::TapSwatch);
    }

    match lower.as_str() {
        "pencil" => Some(Gesture::Pencil),
        "brush" => Some(Gesture::Brush),
        "eraser" => Some(Gesture::Eraser),
        "undo" => Some(Gesture::Undo),
        "clear" => Some(Gesture::Clear),
        "close" => Some(Gesture::Close),
        "width" => Some(Gesture::NextWidth),
        "save" => Some(Gesture::Save),
        "frame" => Some(Gesture::Frame),
        _ => None,
    }
}
