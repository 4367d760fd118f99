//! Data types for sketch export.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Raster format the canvas encodes the sketch into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Platform default raster format
    #[default]
    Png,
    Jpg,
}

impl ImageFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
        }
    }
}

/// Fully resolved parameters for one save request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveConfig {
    /// Image encoding
    pub image_format: ImageFormat,
    /// Keep the background transparent (ignored by formats without alpha)
    pub transparent_background: bool,
    /// Destination folder, relative to the canvas' storage root ("" = root)
    pub folder: String,
    /// File name without extension
    pub filename: String,
    /// Include the background image in the export
    pub include_image: bool,
    /// Include overlay text in the export
    pub include_text: bool,
    /// Crop the export to the background image's size
    pub crop_to_image_size: bool,
}

/// Save preferences supplied by the host; unset fields get defaults.
///
/// Can be returned by
/// [`ToolbarHost::save_preference`](crate::toolbar::ToolbarHost::save_preference)
/// or set in the `[save]` section of the config file.
///
/// # Example TOML
/// ```toml
/// [save]
/// image_type = "jpg"
/// folder = "sketches"
/// include_text = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SavePreference {
    #[serde(default)]
    pub image_type: Option<ImageFormat>,
    #[serde(default)]
    pub transparent: Option<bool>,
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub include_image: Option<bool>,
    #[serde(default)]
    pub include_text: Option<bool>,
    #[serde(default)]
    pub crop_to_image_size: Option<bool>,
}
