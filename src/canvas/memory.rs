//! In-memory canvas used by the replay CLI and the test suite.
//!
//! Keeps the path history and simulates stroke input, but never rasterizes
//! or writes files; saves are acknowledged with a queued completion event.

use std::collections::VecDeque;
use std::path::PathBuf;

use super::facade::Canvas;
use super::types::{CanvasError, CanvasEvent, CanvasOptions, PathData, PathId};
use crate::draw::BLACK;
use crate::export::{SaveConfig, file};
use crate::input::StrokeStyle;

/// Canvas facade backed by plain vectors.
#[derive(Debug, Default)]
pub struct MemoryCanvas {
    options: Option<CanvasOptions>,
    style: Option<StrokeStyle>,
    paths: Vec<PathData>,
    in_progress: Option<PathData>,
    next_id: PathId,
    events: VecDeque<CanvasEvent>,
    saves: Vec<SaveConfig>,
    storage_root: PathBuf,
    fail_saves: bool,
}

impl MemoryCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports saves relative to `root`.
    pub fn with_storage_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.storage_root = root.into();
        self
    }

    /// Makes every save report `success = false`.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn options(&self) -> Option<&CanvasOptions> {
        self.options.as_ref()
    }

    pub fn stroke_style(&self) -> Option<StrokeStyle> {
        self.style
    }

    pub fn paths(&self) -> &[PathData] {
        &self.paths
    }

    pub fn saves(&self) -> &[SaveConfig] {
        &self.saves
    }

    /// Starts a stroke at `(x, y)` with the current style.
    pub fn begin_stroke(&mut self, x: f32, y: f32) {
        self.next_id += 1;
        let style = self.style.unwrap_or(StrokeStyle {
            color: BLACK,
            width: 1.0,
        });
        let path = PathData {
            id: self.next_id,
            color: style.color,
            width: style.width,
            points: vec![(x, y)],
        };
        self.events.push_back(CanvasEvent::StrokeStart(path.clone()));
        self.in_progress = Some(path);
    }

    /// Extends the in-progress stroke; ignored when no stroke is active.
    pub fn extend_stroke(&mut self, x: f32, y: f32) {
        if let Some(path) = self.in_progress.as_mut() {
            path.points.push((x, y));
            self.events
                .push_back(CanvasEvent::StrokeChanged(path.clone()));
        }
    }

    /// Commits the in-progress stroke; ignored when no stroke is active.
    pub fn end_stroke(&mut self) {
        if let Some(path) = self.in_progress.take() {
            self.events.push_back(CanvasEvent::StrokeEnd(path.clone()));
            self.paths.push(path);
            self.emit_paths_change();
        }
    }

    fn emit_paths_change(&mut self) {
        self.events
            .push_back(CanvasEvent::PathsChange(self.paths.clone()));
    }
}

impl Canvas for MemoryCanvas {
    fn configure(&mut self, options: &CanvasOptions) {
        self.options = Some(options.clone());
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.style = Some(style);
    }

    fn clear(&mut self) {
        self.in_progress = None;
        if !self.paths.is_empty() {
            self.paths.clear();
            self.emit_paths_change();
        }
    }

    fn undo(&mut self) -> Option<PathId> {
        let removed = self.paths.pop()?;
        self.emit_paths_change();
        Some(removed.id)
    }

    fn add_path(&mut self, path: PathData) -> Result<(), CanvasError> {
        if self.paths.iter().any(|p| p.id == path.id) {
            return Err(CanvasError::DuplicatePath(path.id));
        }
        self.next_id = self.next_id.max(path.id);
        self.paths.push(path);
        self.emit_paths_change();
        Ok(())
    }

    fn delete_path(&mut self, id: PathId) -> Result<(), CanvasError> {
        let index = self
            .paths
            .iter()
            .position(|p| p.id == id)
            .ok_or(CanvasError::UnknownPath(id))?;
        self.paths.remove(index);
        self.emit_paths_change();
        Ok(())
    }

    fn save(&mut self, config: &SaveConfig) {
        self.saves.push(config.clone());

        let event = if self.fail_saves {
            CanvasEvent::SketchSaved {
                success: false,
                path: None,
            }
        } else {
            let path = self.storage_root.join(file::relative_path(config));
            CanvasEvent::SketchSaved {
                success: true,
                path: Some(path.to_string_lossy().into_owned()),
            }
        };
        self.events.push_back(event);
    }

    fn poll_event(&mut self) -> Option<CanvasEvent> {
        self.events.pop_front()
    }
}
