//! Configuration file support for sketchbar.
//!
//! This module handles loading and validating toolbar settings from the
//! configuration file located at `~/.config/sketchbar/config.toml`. Settings
//! include the palette, alpha levels, stroke width bounds, canvas presentation,
//! save preferences and the permission dialog copy.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;


// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, PaletteConfig, PermissionConfig, StrokeConfig};

use crate::canvas::CanvasOptions;
use crate::draw::{AlphaLevels, AlphaToken, Color, ColorParseError, Palette};
use crate::export::SavePreference;
use crate::input::{SessionState, StrokeWidthSettings};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main configuration structure containing all toolbar settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [palette]
/// colors = ["#000000", "#EF5952", "rgba(80, 213, 245, 1)"]
/// alpha_levels = ["33", "77", "AA", "FF"]
/// default_index = 0
///
/// [stroke]
/// default_width = 3.0
/// min_width = 3.0
/// max_width = 15.0
/// width_step = 3.0
///
/// [save]
/// image_type = "png"
/// folder = "sketches"
///
/// [permission]
/// dialog_title = "Storage access"
/// dialog_message = "Allow saving sketches to your pictures folder"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Swatches and alpha levels
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Stroke width bounds and tool widths
    #[serde(default)]
    pub stroke: StrokeConfig,

    /// Canvas presentation (styles, overlay text, background image)
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Default save preferences (the host callback takes precedence)
    #[serde(default)]
    pub save: Option<SavePreference>,

    /// Startup permission dialog
    #[serde(default)]
    pub permission: PermissionConfig,
}

/// Errors that make a configuration unusable.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("alpha_levels must contain at least one level")]
    EmptyAlphaLevels,

    #[error("invalid color in {field}: {source}")]
    InvalidColor {
        field: String,
        #[source]
        source: ColorParseError,
    },

    #[error("invalid alpha level: {0}")]
    InvalidAlpha(#[source] ColorParseError),

    #[error("default_index {index} is out of range for a palette of {len} colors")]
    DefaultIndexOutOfRange { index: usize, len: usize },

    #[error("width_step must be a positive number (got {0})")]
    InvalidWidthStep(f64),

    #[error("invalid width bounds: min_width {min} must be positive and not above max_width {max}")]
    InvalidWidthBounds { min: f64, max: f64 },

    #[error("{field} must be a finite number (got {value})")]
    NonFiniteWidth { field: &'static str, value: f64 },
}

impl Config {
    /// Clamps soft stroke settings into the configured width bounds.
    ///
    /// Only applies when the bounds themselves are valid; invalid bounds are
    /// reported by [`Config::validate`]. Invalid values are clamped to the
    /// nearest valid value and a warning is logged.
    fn validate_and_clamp(&mut self) {
        let (min, max) = (self.stroke.min_width, self.stroke.max_width);
        if !(min > 0.0 && min <= max) {
            return;
        }

        let fields = [
            ("default_width", &mut self.stroke.default_width),
            ("pencil_width", &mut self.stroke.pencil_width),
            ("brush_width", &mut self.stroke.brush_width),
        ];
        for (name, value) in fields {
            if value.is_finite() && !(min..=max).contains(&*value) {
                log::warn!(
                    "Invalid {} {:.1}, clamping to {:.1}-{:.1} range",
                    name,
                    *value,
                    min,
                    max
                );
                *value = value.clamp(min, max);
            }
        }
    }

    /// Checks every hard constraint without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_session()?;
        self.canvas_options()?;
        Ok(())
    }

    /// Builds the palette and alpha levels.
    pub fn palette_model(&self) -> Result<(Palette, AlphaLevels), ConfigError> {
        let colors = self
            .palette
            .colors
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                spec.to_color().map_err(|source| ConfigError::InvalidColor {
                    field: format!("palette.colors[{i}]"),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let palette = Palette::new(colors).ok_or(ConfigError::EmptyPalette)?;

        let levels = self
            .palette
            .alpha_levels
            .iter()
            .map(|level| level.parse::<AlphaToken>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(ConfigError::InvalidAlpha)?;
        let alpha_levels = AlphaLevels::new(levels).ok_or(ConfigError::EmptyAlphaLevels)?;

        if self.palette.default_index >= palette.len() {
            return Err(ConfigError::DefaultIndexOutOfRange {
                index: self.palette.default_index,
                len: palette.len(),
            });
        }

        Ok((palette, alpha_levels))
    }

    /// Validated stroke width settings.
    pub fn width_settings(&self) -> Result<StrokeWidthSettings, ConfigError> {
        let stroke = &self.stroke;
        if !(stroke.width_step.is_finite() && stroke.width_step > 0.0) {
            return Err(ConfigError::InvalidWidthStep(stroke.width_step));
        }
        if !(stroke.min_width.is_finite()
            && stroke.max_width.is_finite()
            && stroke.min_width > 0.0
            && stroke.min_width <= stroke.max_width)
        {
            return Err(ConfigError::InvalidWidthBounds {
                min: stroke.min_width,
                max: stroke.max_width,
            });
        }

        for (field, value) in [
            ("default_width", stroke.default_width),
            ("pencil_width", stroke.pencil_width),
            ("brush_width", stroke.brush_width),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteWidth { field, value });
            }
        }

        Ok(StrokeWidthSettings {
            min: stroke.min_width,
            max: stroke.max_width,
            step: stroke.width_step,
            pencil: stroke.pencil_width,
            brush: stroke.brush_width,
        })
    }

    /// Builds the initial session state for a new toolbar.
    pub fn build_session(&self) -> Result<SessionState, ConfigError> {
        let (palette, alpha_levels) = self.palette_model()?;
        let widths = self.width_settings()?;
        Ok(SessionState::new(
            palette,
            alpha_levels,
            self.palette.default_index,
            self.stroke.default_width,
            widths,
        ))
    }

    /// Builds the static options handed to the canvas.
    pub fn canvas_options(&self) -> Result<CanvasOptions, ConfigError> {
        let style = |field: &str, spec: &Option<ColorSpec>| -> Result<Option<Color>, ConfigError> {
            spec.as_ref()
                .map(|spec| {
                    spec.to_color().map_err(|source| ConfigError::InvalidColor {
                        field: field.to_string(),
                        source,
                    })
                })
                .transpose()
        };

        Ok(CanvasOptions {
            container_style: style("canvas.container_style", &self.canvas.container_style)?,
            canvas_style: style("canvas.canvas_style", &self.canvas.canvas_style)?,
            user: self.canvas.user.clone(),
            text: self.canvas.text.clone(),
            background_image: self.canvas.background_image.clone(),
            permission_dialog_title: self.permission.dialog_title.clone(),
            permission_dialog_message: self.permission.dialog_message.clone(),
        })
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchbar/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchbar");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read or parsed
    /// - The file violates a hard constraint (see [`ConfigError`])
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, which must exist.
    ///
    /// All loaded values are validated, and soft values are clamped.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();
        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON schema of the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
