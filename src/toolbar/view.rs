//! Toolbar view model and custom render hooks.

use crate::draw::Color;
use crate::input::{SessionState, Tool};

/// Scale applied to the highlighted tool button.
pub const HIGHLIGHT_SCALE: f32 = 1.5;

/// One palette swatch as it should be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchView {
    pub index: usize,
    pub color: Color,
    /// Whether this swatch holds the active color
    pub selected: bool,
    /// Color with the active alpha applied; only set for the selected swatch
    pub stroke_color: Option<Color>,
    /// True during the update cycle in which this swatch became active
    pub color_just_changed: bool,
}

/// Toolbar affordances other than swatches, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Close,
    Pencil,
    Brush,
    Undo,
    Eraser,
    Clear,
}

impl ButtonKind {
    pub const ALL: [ButtonKind; 6] = [
        ButtonKind::Close,
        ButtonKind::Pencil,
        ButtonKind::Brush,
        ButtonKind::Undo,
        ButtonKind::Eraser,
        ButtonKind::Clear,
    ];

    fn tool(self) -> Option<Tool> {
        match self {
            ButtonKind::Close => None,
            ButtonKind::Pencil => Some(Tool::Pencil),
            ButtonKind::Brush => Some(Tool::Brush),
            ButtonKind::Undo => Some(Tool::Undo),
            ButtonKind::Eraser => Some(Tool::Eraser),
            ButtonKind::Clear => Some(Tool::Bin),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonView {
    pub kind: ButtonKind,
    pub highlighted: bool,
    pub scale: f32,
}

/// Everything the host needs to draw the toolbar.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarView {
    pub swatches: Vec<SwatchView>,
    pub buttons: Vec<ButtonView>,
}

impl ToolbarView {
    pub fn from_session(session: &SessionState) -> Self {
        let active = session.active_color();
        let swatches = session
            .palette()
            .iter()
            .enumerate()
            .map(|(index, color)| {
                let selected = color == active;
                SwatchView {
                    index,
                    color,
                    selected,
                    stroke_color: selected.then(|| session.stroke_color()),
                    color_just_changed: selected && session.color_just_changed(),
                }
            })
            .collect();

        let buttons = ButtonKind::ALL
            .into_iter()
            .map(|kind| {
                let highlighted = kind.tool().is_some() && kind.tool() == session.active_tool();
                ButtonView {
                    kind,
                    highlighted,
                    scale: if highlighted { HIGHLIGHT_SCALE } else { 1.0 },
                }
            })
            .collect();

        Self { swatches, buttons }
    }
}

/// Host-supplied render functions for each toolbar affordance.
///
/// Returning `None` hides the affordance, which is also the default.
pub trait ToolbarRenderer {
    type Output;

    fn swatch(&self, _color: Color, _index: usize) -> Option<Self::Output> {
        None
    }

    fn selected_swatch(
        &self,
        _stroke_color: Color,
        _index: usize,
        _color_just_changed: bool,
    ) -> Option<Self::Output> {
        None
    }

    fn close(&self, _button: &ButtonView) -> Option<Self::Output> {
        None
    }

    fn pencil(&self, _button: &ButtonView) -> Option<Self::Output> {
        None
    }

    fn brush(&self, _button: &ButtonView) -> Option<Self::Output> {
        None
    }

    fn undo(&self, _button: &ButtonView) -> Option<Self::Output> {
        None
    }

    fn eraser(&self, _button: &ButtonView) -> Option<Self::Output> {
        None
    }

    fn clear(&self, _button: &ButtonView) -> Option<Self::Output> {
        None
    }
}

/// Output of [`render_toolbar`]; hidden affordances are left out.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedToolbar<T> {
    pub swatches: Vec<T>,
    pub buttons: Vec<(ButtonKind, T)>,
}

/// Walks `view` and collects whatever `renderer` produces.
pub fn render_toolbar<R: ToolbarRenderer>(
    view: &ToolbarView,
    renderer: &R,
) -> RenderedToolbar<R::Output> {
    let swatches = view
        .swatches
        .iter()
        .filter_map(|swatch| match swatch.stroke_color {
            Some(stroke_color) if swatch.selected => {
                renderer.selected_swatch(stroke_color, swatch.index, swatch.color_just_changed)
            }
            _ => renderer.swatch(swatch.color, swatch.index),
        })
        .collect();

    let buttons = view
        .buttons
        .iter()
        .filter_map(|button| {
            let rendered = match button.kind {
                ButtonKind::Close => renderer.close(button),
                ButtonKind::Pencil => renderer.pencil(button),
                ButtonKind::Brush => renderer.brush(button),
                ButtonKind::Undo => renderer.undo(button),
                ButtonKind::Eraser => renderer.eraser(button),
                ButtonKind::Clear => renderer.clear(button),
            };
            rendered.map(|output| (button.kind, output))
        })
        .collect();

    RenderedToolbar { swatches, buttons }
}
