//! Save configuration for finished sketches.
//!
//! This module resolves the parameters the canvas needs to export a sketch:
//! - Caller-supplied preferences, with unset fields filled in
//! - Built-in defaults with a timestamped filename

pub mod file;
pub mod types;

mod resolve;

pub use resolve::{resolve_save_config, resolve_save_config_at};
pub use types::{ImageFormat, SaveConfig, SavePreference};
