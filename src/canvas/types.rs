//! Data types exchanged with the canvas.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::draw::Color;

/// Identifier of a committed path.
pub type PathId = u64;

/// One stroke, either in progress or committed.
#[derive(Debug, Clone, PartialEq)]
pub struct PathData {
    pub id: PathId,
    /// Stroke color with alpha already applied
    pub color: Color,
    pub width: f64,
    pub points: Vec<(f32, f32)>,
}

/// Events the canvas reports back to the toolbar.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// Pointer went down and a new path started
    StrokeStart(PathData),
    /// The in-progress path gained points
    StrokeChanged(PathData),
    /// Pointer went up and the path was committed
    StrokeEnd(PathData),
    /// The committed path list changed (carries the full list)
    PathsChange(Vec<PathData>),
    /// A save request finished
    SketchSaved {
        success: bool,
        path: Option<String>,
    },
}

/// Whether overlay text is drawn above or below the strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayMode {
    #[default]
    TextOnSketch,
    SketchOnText,
}

/// How `position` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Coordinate {
    /// Canvas units
    #[default]
    Absolute,
    /// Fractions of the canvas size (0.0-1.0)
    Ratio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A 2D point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A text entry the canvas draws together with the sketch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextOverlay {
    pub text: String,
    #[serde(default)]
    pub font: Option<String>,
    #[serde(default)]
    pub font_size: Option<f64>,
    /// Color string (`#RRGGBB`, `rgba(...)` or a name)
    #[serde(default)]
    pub font_color: Option<String>,
    #[serde(default)]
    pub overlay: OverlayMode,
    #[serde(default)]
    pub anchor: Option<Point>,
    #[serde(default)]
    pub position: Option<Point>,
    #[serde(default)]
    pub coordinate: Coordinate,
    #[serde(default)]
    pub alignment: TextAlignment,
    #[serde(default)]
    pub line_height_multiple: Option<f64>,
}

/// Image the canvas loads underneath the strokes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BackgroundImage {
    pub filename: String,
    #[serde(default)]
    pub directory: Option<String>,
    /// Scaling mode understood by the canvas (e.g. "AspectFill")
    #[serde(default)]
    pub mode: Option<String>,
}

/// Static options handed to the canvas once at construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasOptions {
    /// Background of the toolbar container
    pub container_style: Option<Color>,
    /// Background of the drawing surface
    pub canvas_style: Option<Color>,
    /// Tag attached to paths drawn in this session
    pub user: Option<String>,
    pub text: Vec<TextOverlay>,
    pub background_image: Option<BackgroundImage>,
    pub permission_dialog_title: String,
    pub permission_dialog_message: String,
}

/// Errors a canvas can report synchronously.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    #[error("no path with id {0}")]
    UnknownPath(PathId),

    #[error("a path with id {0} already exists")]
    DuplicatePath(PathId),
}
