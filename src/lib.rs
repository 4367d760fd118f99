//! Drawing toolbar controller for sketch canvases.
//!
//! Turns toolbar gestures (swatch taps, width pickers, undo/clear/close
//! buttons) into drawing-session state, and forwards the committed stroke
//! style and save requests to an external [`Canvas`](canvas::Canvas).
//! Configuration types are exposed so hosts can share validation and
//! serialization with the `sketchbar` binary.

pub mod canvas;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod permission;
pub mod toolbar;
pub mod util;

pub use config::Config;
pub use toolbar::{ToolbarController, ToolbarHost};
