//! Contracts with the components the picker delegates to.
//!
//! The picker does not draw a color picker or position a popover. When a
//! stop's editor should appear it calls [`StopEditor::open`]; the editor
//! reports back by sending [`EditorAction`]s as
//! [`UiEvent::Editor`](crate::event::UiEvent::Editor) events.

use gradient_css::{ColorValue, RgbaColor};

/// What an opened editor should show.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorRequest {
    /// Color of the edited stop; `None` when the editor inserts a new stop.
    pub current: Option<ColorValue>,
    /// Whether the editor offers a "remove stop" action.
    pub removable: bool,
    /// Left edge of the element the editor anchors to, relative to the track.
    pub anchor_offset: f32,
}

/// Reports from an editor back to the picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorAction {
    /// A color was committed in the color picker.
    CommitColor(RgbaColor),
    /// The "remove stop" action was chosen.
    Remove,
    /// The popover was dismissed.
    Dismiss,
}

/// Popover plus color picker.
///
/// `close` is also called after the editor itself reported
/// [`EditorAction::Dismiss`], so it must tolerate being called while closed.
pub trait StopEditor {
    fn open(&mut self, request: &EditorRequest);
    fn close(&mut self);
}
