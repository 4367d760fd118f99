//! Toolbar controller wiring session state, canvas and host together.
//!
//! The controller is explicitly constructed from a validated [`Config`](crate::config::Config)
//! and owns its [`SessionState`](crate::input::SessionState). Gestures mutate the
//! session, the resulting stroke style is pushed to the canvas, and canvas
//! events are re-broadcast to the [`ToolbarHost`].

mod controller;
mod host;
mod view;
#[cfg(test)]
mod tests;

pub use controller::{ToolbarController, ToolbarError};
pub use host::ToolbarHost;
pub use view::{
    ButtonKind, ButtonView, HIGHLIGHT_SCALE, RenderedToolbar, SwatchView, ToolbarRenderer,
    ToolbarView, render_toolbar,
};
