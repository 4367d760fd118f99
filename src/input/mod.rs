//! Toolbar input handling and tool state machine.
//!
//! This module translates toolbar gestures into session state changes.
//! It maintains the highlighted tool, the committed stroke parameters
//! (color, alpha, width) and the cycling state behind repeated taps.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::Gesture;
pub use state::{AlphaDirection, SessionSnapshot, SessionState, StrokeStyle, StrokeWidthSettings};
pub use tool::Tool;
