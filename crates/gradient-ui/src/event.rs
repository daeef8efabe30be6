use gradient_engine::coords::Vec2;
use gradient_engine::input::{Key, Modifiers};

use crate::capture::PointerCapture;
use crate::collaborators::EditorAction;

/// Input events routed through the widget tree.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Pointer moved to `pos`.
    PointerMove { pos: Vec2 },
    /// Primary button pressed at `pos`.
    PointerDown { pos: Vec2 },
    /// Primary button released at `pos`. Delivered even outside the widget.
    PointerUp { pos: Vec2 },
    /// Pointer left the host surface.
    PointerLeave,
    /// Press and release that did not start a captured gesture.
    Click { pos: Vec2 },
    /// Named key pressed.
    KeyPress { key: Key, modifiers: Modifiers },
    /// Report from an external stop editor.
    Editor(EditorAction),
}

/// Result returned by [`crate::widget::Widget::on_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled.
    Consumed,
    /// Event was not handled.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }

    /// `Consumed` if either result is.
    #[inline]
    #[must_use]
    pub fn or(self, other: EventResult) -> EventResult {
        if self.is_consumed() || other.is_consumed() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

impl From<bool> for EventResult {
    fn from(consumed: bool) -> Self {
        if consumed { EventResult::Consumed } else { EventResult::Ignored }
    }
}

/// Services lent to widgets while an event is routed.
pub struct EventCtx<'a> {
    pub capture: &'a PointerCapture,
}
