//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::canvas::{BackgroundImage, TextOverlay};
use crate::draw::{AlphaLevels, Palette};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Palette settings.
///
/// Controls the swatches shown in the toolbar and the opacity levels cycled
/// by tapping the active swatch again.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PaletteConfig {
    /// Swatch colors in display order (must not be empty)
    #[serde(default = "default_colors")]
    pub colors: Vec<ColorSpec>,

    /// Opacity levels as two hex digits, lowest to highest (must not be empty)
    #[serde(default = "default_alpha_levels")]
    pub alpha_levels: Vec<String>,

    /// Index of the swatch selected at startup
    #[serde(default)]
    pub default_index: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            alpha_levels: default_alpha_levels(),
            default_index: 0,
        }
    }
}

/// Stroke width settings.
///
/// The "next width" control oscillates between `min_width` and `max_width`
/// in steps of `width_step`; pencil and brush commit fixed widths.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StrokeConfig {
    /// Width at startup (clamped into bounds)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Lower bound for every committed width (must be positive)
    #[serde(default = "default_min_width")]
    pub min_width: f64,

    /// Upper bound for every committed width
    #[serde(default = "default_max_width")]
    pub max_width: f64,

    /// Oscillator step (must be positive)
    #[serde(default = "default_width_step")]
    pub width_step: f64,

    /// Width committed by the pencil picker (clamped into bounds)
    #[serde(default = "default_pencil_width")]
    pub pencil_width: f64,

    /// Width committed by the brush picker (clamped into bounds)
    #[serde(default = "default_brush_width")]
    pub brush_width: f64,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            default_width: default_width(),
            min_width: default_min_width(),
            max_width: default_max_width(),
            width_step: default_width_step(),
            pencil_width: default_pencil_width(),
            brush_width: default_brush_width(),
        }
    }
}

/// Canvas presentation settings forwarded to the drawing surface.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Background color of the toolbar container
    #[serde(default)]
    pub container_style: Option<ColorSpec>,

    /// Background color of the drawing surface
    #[serde(default)]
    pub canvas_style: Option<ColorSpec>,

    /// Tag attached to paths drawn in this session
    #[serde(default)]
    pub user: Option<String>,

    /// Text entries drawn with the sketch
    #[serde(default)]
    pub text: Vec<TextOverlay>,

    /// Image loaded underneath the strokes
    #[serde(default)]
    pub background_image: Option<BackgroundImage>,
}

/// Startup permission dialog settings.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct PermissionConfig {
    /// Title of the storage permission dialog
    #[serde(default)]
    pub dialog_title: String,

    /// Body of the storage permission dialog
    #[serde(default)]
    pub dialog_message: String,

    /// Refuse save requests after the user denied storage access
    #[serde(default)]
    pub block_save_when_denied: bool,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_colors() -> Vec<ColorSpec> {
    Palette::default().iter().map(ColorSpec::from).collect()
}

fn default_alpha_levels() -> Vec<String> {
    let levels = AlphaLevels::default();
    (0..levels.len())
        .filter_map(|i| levels.get(i))
        .map(|token| token.to_string())
        .collect()
}

fn default_width() -> f64 {
    3.0
}

fn default_min_width() -> f64 {
    3.0
}

fn default_max_width() -> f64 {
    15.0
}

fn default_width_step() -> f64 {
    3.0
}

fn default_pencil_width() -> f64 {
    5.0
}

fn default_brush_width() -> f64 {
    10.0
}
