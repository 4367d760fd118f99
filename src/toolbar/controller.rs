//! Toolbar controller.

use chrono::Local;
use thiserror::Error;

use super::host::ToolbarHost;
use super::view::{RenderedToolbar, ToolbarRenderer, ToolbarView, render_toolbar};
use crate::canvas::{Canvas, CanvasError, CanvasEvent, PathData, PathId};
use crate::config::{Config, ConfigError};
use crate::export::{SaveConfig, SavePreference, resolve_save_config_at};
use crate::input::{Gesture, SessionState};
use crate::permission::{PermissionGate, PermissionStatus, request_permission};

/// Errors surfaced by toolbar commands.
#[derive(Debug, Error, PartialEq)]
pub enum ToolbarError {
    #[error("storage permission was denied; save refused")]
    PermissionDenied,

    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// Drawing toolbar controller.
///
/// Owns the session state exclusively. Every gesture runs synchronously:
/// the session is mutated, the resulting stroke style is pushed to the
/// canvas, and host callbacks fire before the call returns.
pub struct ToolbarController<C: Canvas, H: ToolbarHost> {
    session: SessionState,
    canvas: C,
    host: H,
    /// `[save]` section of the config, used when the host has no preference
    save_preference: Option<SavePreference>,
    permission: PermissionStatus,
    permission_dialog: (String, String),
    block_save_when_denied: bool,
}

impl<C: Canvas, H: ToolbarHost> ToolbarController<C, H> {
    /// Creates a controller from a configuration.
    ///
    /// The canvas is configured once and receives the initial stroke style.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the configuration violates a hard
    /// constraint (empty palette, bad colors, invalid width bounds, ...).
    pub fn new(config: &Config, mut canvas: C, host: H) -> Result<Self, ConfigError> {
        let session = config.build_session()?;
        let options = config.canvas_options()?;

        canvas.configure(&options);
        canvas.set_stroke_style(session.stroke_style());

        log::info!(
            "Toolbar ready: {} swatches, {} alpha levels, width {:.1}",
            session.palette().len(),
            session.alpha_levels().len(),
            session.stroke_width()
        );

        Ok(Self {
            session,
            canvas,
            host,
            save_preference: config.save.clone(),
            permission: PermissionStatus::Unknown,
            permission_dialog: (
                options.permission_dialog_title,
                options.permission_dialog_message,
            ),
            block_save_when_denied: config.permission.block_save_when_denied,
        })
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn permission(&self) -> PermissionStatus {
        self.permission
    }

    /// Performs the one-time startup permission request.
    ///
    /// Later calls return the stored status without asking again.
    pub async fn authorize(&mut self, gate: &dyn PermissionGate) -> PermissionStatus {
        if self.permission == PermissionStatus::Unknown {
            let (title, message) = &self.permission_dialog;
            self.permission = request_permission(gate, title, message).await;
        }
        self.permission
    }

    fn sync_stroke_style(&mut self) {
        self.canvas.set_stroke_style(self.session.stroke_style());
    }

    // ------------------------------------------------------------------
    // Toolbar gestures
    // ------------------------------------------------------------------

    pub fn select_pencil(&mut self) {
        self.session.select_pencil();
        self.sync_stroke_style();
    }

    pub fn select_brush(&mut self) {
        self.session.select_brush();
        self.sync_stroke_style();
    }

    pub fn select_eraser(&mut self) {
        self.session.select_eraser();
        self.sync_stroke_style();
    }

    /// Undo button: highlights undo, undoes on the canvas and reports the
    /// removed path id to the host.
    pub fn press_undo(&mut self) -> Option<PathId> {
        let removed = self.canvas.undo();
        log::debug!("Undo pressed, removed path: {:?}", removed);
        self.host.on_undo_pressed(removed);
        self.session.mark_undo();
        removed
    }

    /// Clear button: highlights the bin, clears the canvas and notifies the host.
    pub fn press_clear(&mut self) {
        self.canvas.clear();
        self.host.on_clear_pressed();
        self.session.mark_clear();
        log::debug!("Canvas cleared");
    }

    pub fn press_close(&mut self) {
        self.host.on_close_pressed();
    }

    /// Swatch tap; see [`SessionState::tap_palette_entry`].
    pub fn tap_palette_entry(&mut self, index: usize) -> bool {
        let handled = self.session.tap_palette_entry(index);
        if handled {
            self.sync_stroke_style();
        }
        handled
    }

    /// "Next width" control; returns the committed width.
    pub fn step_stroke_width(&mut self) -> f64 {
        let width = self.session.step_stroke_width();
        self.sync_stroke_style();
        width
    }

    /// Marks the end of a render/update cycle.
    pub fn finish_update(&mut self) {
        self.session.finish_update();
    }

    /// Routes a gesture to the matching operation.
    pub fn dispatch(&mut self, gesture: Gesture) -> Result<(), ToolbarError> {
        match gesture {
            Gesture::TapSwatch(index) => {
                self.tap_palette_entry(index);
            }
            Gesture::Pencil => self.select_pencil(),
            Gesture::Brush => self.select_brush(),
            Gesture::Eraser => self.select_eraser(),
            Gesture::Undo => {
                self.press_undo();
            }
            Gesture::Clear => self.press_clear(),
            Gesture::Close => self.press_close(),
            Gesture::NextWidth => {
                self.step_stroke_width();
            }
            Gesture::Save => {
                self.save()?;
            }
            Gesture::Frame => self.finish_update(),
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Programmatic canvas commands (no highlight change)
    // ------------------------------------------------------------------

    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    pub fn undo(&mut self) -> Option<PathId> {
        self.canvas.undo()
    }

    pub fn add_path(&mut self, path: PathData) -> Result<(), ToolbarError> {
        Ok(self.canvas.add_path(path)?)
    }

    pub fn delete_path(&mut self, id: PathId) -> Result<(), ToolbarError> {
        Ok(self.canvas.delete_path(id)?)
    }

    /// Resolves the save configuration and dispatches it to the canvas.
    ///
    /// The host's preference wins over the config file's `[save]` section.
    /// Completion arrives later as a canvas event.
    ///
    /// # Errors
    /// [`ToolbarError::PermissionDenied`] when permission was denied and
    /// `permission.block_save_when_denied` is set; the host is told the save
    /// failed.
    pub fn save(&mut self) -> Result<SaveConfig, ToolbarError> {
        if self.block_save_when_denied && self.permission == PermissionStatus::Denied {
            log::warn!("Save refused: storage permission denied");
            self.host.on_sketch_saved(false, None);
            return Err(ToolbarError::PermissionDenied);
        }

        let preference = self
            .host
            .save_preference()
            .or_else(|| self.save_preference.clone());
        let config = resolve_save_config_at(preference, &Local::now());

        log::info!(
            "Saving sketch as '{}.{}' (folder '{}')",
            config.filename,
            config.image_format.extension(),
            config.folder
        );
        self.canvas.save(&config);
        Ok(config)
    }

    // ------------------------------------------------------------------
    // Canvas events
    // ------------------------------------------------------------------

    /// Re-broadcasts one canvas event to the host.
    pub fn handle_canvas_event(&mut self, event: CanvasEvent) {
        match event {
            CanvasEvent::StrokeStart(path) => self.host.on_stroke_start(&path),
            CanvasEvent::StrokeChanged(path) => self.host.on_stroke_changed(&path),
            CanvasEvent::StrokeEnd(path) => self.host.on_stroke_end(&path),
            CanvasEvent::PathsChange(paths) => self.host.on_paths_change(&paths),
            CanvasEvent::SketchSaved { success, path } => {
                if success {
                    log::info!("Sketch saved: {}", path.as_deref().unwrap_or("<unknown>"));
                } else {
                    log::warn!("Sketch save failed");
                }
                self.host.on_sketch_saved(success, path.as_deref());
            }
        }
    }

    /// Drains pending canvas events; returns how many were handled.
    pub fn pump_canvas_events(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.canvas.poll_event() {
            self.handle_canvas_event(event);
            handled += 1;
        }
        handled
    }

    // ------------------------------------------------------------------
    // View
    // ------------------------------------------------------------------

    pub fn view(&self) -> ToolbarView {
        ToolbarView::from_session(&self.session)
    }

    /// Renders the toolbar with the host's custom components.
    pub fn render<R: ToolbarRenderer>(&self, renderer: &R) -> RenderedToolbar<R::Output> {
        render_toolbar(&self.view(), renderer)
    }
}
