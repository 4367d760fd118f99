//! Session state and tool-selection transitions.

use super::cycle::{AlphaCycler, AlphaDirection, WidthOscillator};
use crate::draw::{AlphaLevels, AlphaToken, Color, ERASER, Palette};
use crate::input::tool::Tool;
use serde::Serialize;

/// Stroke width bounds and the fixed widths of the pencil and brush tools.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeWidthSettings {
    /// Smallest width the oscillator may produce
    pub min: f64,
    /// Largest width the oscillator may produce
    pub max: f64,
    /// Oscillator step magnitude (positive)
    pub step: f64,
    /// Width committed by the pencil picker
    pub pencil: f64,
    /// Width committed by the brush picker
    pub brush: f64,
}

impl Default for StrokeWidthSettings {
    fn default() -> Self {
        Self {
            min: 3.0,
            max: 15.0,
            step: 3.0,
            pencil: 5.0,
            brush: 10.0,
        }
    }
}

/// Color and width the canvas should use for the next stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Active color with the active alpha applied (unless it has its own)
    pub color: Color,
    /// Stroke width in canvas units
    pub width: f64,
}

/// Serializable view of the committed session, used by the replay CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub active_color: String,
    pub active_alpha: String,
    pub stroke_color: String,
    pub stroke_width: f64,
    pub active_tool: Option<Tool>,
    pub color_just_changed: bool,
    pub alpha_direction: Option<AlphaDirection>,
}

/// Transient drawing-session state owned by the toolbar controller.
///
/// Holds the palette model, the committed stroke parameters and the cycling
/// state behind repeated taps. Every transition keeps `stroke_width` inside
/// `[min, max]` and the alpha index inside the configured levels.
#[derive(Debug, Clone)]
pub struct SessionState {
    palette: Palette,
    alpha_levels: AlphaLevels,
    widths: StrokeWidthSettings,
    active_color: Color,
    alpha_index: usize,
    stroke_width: f64,
    active_tool: Option<Tool>,
    color_just_changed: bool,
    alpha_cycler: AlphaCycler,
    width_oscillator: WidthOscillator,
}

impl SessionState {
    /// Creates a session with the given palette defaults.
    ///
    /// The active color is `palette[default_index]` (first swatch if the index
    /// is out of range), alpha starts at the most opaque level, the tool
    /// starts as pencil, and `default_width` is clamped into bounds.
    pub fn new(
        palette: Palette,
        alpha_levels: AlphaLevels,
        default_index: usize,
        default_width: f64,
        widths: StrokeWidthSettings,
    ) -> Self {
        let active_color = palette.get(default_index).unwrap_or_else(|| palette.first());
        let alpha_index = alpha_levels.last_index();

        Self {
            palette,
            alpha_levels,
            widths,
            active_color,
            alpha_index,
            stroke_width: default_width.clamp(widths.min, widths.max),
            active_tool: Some(Tool::Pencil),
            color_just_changed: false,
            alpha_cycler: AlphaCycler::default(),
            width_oscillator: WidthOscillator::new(widths.step),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn alpha_levels(&self) -> &AlphaLevels {
        &self.alpha_levels
    }

    pub fn widths(&self) -> &StrokeWidthSettings {
        &self.widths
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn active_alpha(&self) -> AlphaToken {
        self.alpha_levels
            .get(self.alpha_index)
            .unwrap_or(AlphaToken::OPAQUE)
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn active_tool(&self) -> Option<Tool> {
        self.active_tool
    }

    pub fn color_just_changed(&self) -> bool {
        self.color_just_changed
    }

    pub fn alpha_direction(&self) -> Option<AlphaDirection> {
        self.alpha_cycler.direction()
    }

    /// Color actually handed to the canvas for the next stroke.
    pub fn stroke_color(&self) -> Color {
        self.active_color.with_alpha_token(self.active_alpha())
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.stroke_color(),
            width: self.stroke_width,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            active_color: self.active_color.to_string(),
            active_alpha: self.active_alpha().to_string(),
            stroke_color: self.stroke_color().to_string(),
            stroke_width: self.stroke_width,
            active_tool: self.active_tool,
            color_just_changed: self.color_just_changed,
            alpha_direction: self.alpha_cycler.direction(),
        }
    }

    /// Highlights the pencil and commits the fixed pencil width.
    pub fn select_pencil(&mut self) {
        self.active_tool = Some(Tool::Pencil);
        self.stroke_width = self.widths.pencil.clamp(self.widths.min, self.widths.max);
        log::debug!("Pencil selected (width {:.1})", self.stroke_width);
    }

    /// Highlights the brush and commits the fixed brush width.
    pub fn select_brush(&mut self) {
        self.active_tool = Some(Tool::Brush);
        self.stroke_width = self.widths.brush.clamp(self.widths.min, self.widths.max);
        log::debug!("Brush selected (width {:.1})", self.stroke_width);
    }

    /// Highlights the eraser and commits the transparent sentinel color.
    pub fn select_eraser(&mut self) {
        self.active_tool = Some(Tool::Eraser);
        self.active_color = ERASER;
        log::debug!("Eraser selected");
    }

    /// Highlights the undo button; color and width are untouched.
    pub fn mark_undo(&mut self) {
        self.active_tool = Some(Tool::Undo);
    }

    /// Highlights the bin button; color and width are untouched.
    pub fn mark_clear(&mut self) {
        self.active_tool = Some(Tool::Bin);
    }

    /// Applies a tap on the palette swatch at `index`.
    ///
    /// A different color is committed as-is and restarts alpha cycling.
    /// Tapping the active color again walks the alpha levels, reversing at
    /// either end.
    ///
    /// # Returns
    /// `false` if `index` is outside the palette (state is left untouched)
    pub fn tap_palette_entry(&mut self, index: usize) -> bool {
        let Some(color) = self.palette.get(index) else {
            log::warn!(
                "Ignoring tap on swatch {} (palette has {} entries)",
                index,
                self.palette.len()
            );
            return false;
        };

        if color != self.active_color {
            self.active_color = color;
            self.color_just_changed = true;
            self.alpha_cycler.reset();
            log::debug!("Color changed to {}", color);
        } else {
            self.alpha_index = self
                .alpha_cycler
                .advance(self.alpha_index, self.alpha_levels.len());
            log::debug!("Alpha cycled to {}", self.active_alpha());
        }
        true
    }

    /// Advances the "next width" oscillator and returns the new width.
    pub fn step_stroke_width(&mut self) -> f64 {
        self.stroke_width =
            self.width_oscillator
                .next(self.stroke_width, self.widths.min, self.widths.max);
        log::debug!("Stroke width stepped to {:.1}", self.stroke_width);
        self.stroke_width
    }

    /// Ends a render/update cycle, clearing the one-shot color-change flag.
    pub fn finish_update(&mut self) {
        self.color_just_changed = false;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(
            Palette::default(),
            AlphaLevels::default(),
            0,
            3.0,
            StrokeWidthSettings::default(),
        )
    }
}
