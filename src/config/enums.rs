//! Configuration enum types.

use crate::draw::{Color, ColorParseError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a color string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// canvas_style = "white"
///
/// # Hex, with or without an alpha channel
/// colors = ["#EF5952", "#00000080"]
///
/// # CSS-style functional notation
/// container_style = "rgba(53, 47, 73, 1)"
///
/// # Custom RGB color (0-255 per component, no alpha channel)
/// canvas_style = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Color string: `#RRGGBB`, `#RRGGBBAA`, `rgb(...)`, `rgba(...)` or a name
    Text(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Strings go through [`Color`]'s parser; RGB arrays carry no alpha
    /// channel, so the active alpha level applies to them.
    pub fn to_color(&self) -> Result<Color, ColorParseError> {
        match self {
            ColorSpec::Text(text) => text.parse(),
            ColorSpec::Rgb([r, g, b]) => Ok(Color::rgb(*r, *g, *b)),
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Text(color.to_string())
    }
}
