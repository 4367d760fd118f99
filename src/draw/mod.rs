//! Palette model and color primitives.
//!
//! This module defines the pure data the toolbar selects from:
//! - [`Color`]: RGB color with an optional embedded alpha channel
//! - [`AlphaToken`]: one discrete opacity level
//! - [`Palette`]: the ordered swatches shown in the toolbar
//! - [`AlphaLevels`]: the ordered opacity levels cycled by repeated taps

pub mod color;
pub mod palette;

// Re-export commonly used types at module level
pub use color::{AlphaToken, Color, ColorParseError};
pub use palette::{AlphaLevels, Palette};

// Re-export color constants for public API
pub use color::{BLACK, BLUE, ERASER, GREEN, ORANGE, PINK, PURPLE, RED, WHITE, YELLOW};
