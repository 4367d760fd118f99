//! Boundary to the external rendering collaborator.
//!
//! This module provides:
//! - The [`Canvas`] facade trait the toolbar issues commands through
//! - Path and event types flowing across that boundary
//! - [`MemoryCanvas`], an in-memory facade used for replay and tests

pub mod memory;
pub mod types;

mod facade;

pub use facade::Canvas;
pub use memory::MemoryCanvas;
pub use types::{
    BackgroundImage, CanvasError, CanvasEvent, CanvasOptions, Coordinate, OverlayMode, PathData,
    PathId, Point, TextAlignment, TextOverlay,
};
