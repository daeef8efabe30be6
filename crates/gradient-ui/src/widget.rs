use gradient_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::event::{EventCtx, EventResult, UiEvent};
use crate::painter::Painter;

/// The trait every UI component implements.
pub trait Widget {
    /// Size this widget wants given the available space.
    ///
    /// Must be deterministic: the scene measures before both paint and event
    /// routing and expects the same answer.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Draw into `painter` within `rect`.
    fn paint(&self, painter: &mut Painter<'_>, rect: Rect);

    /// Route an input event. Return [`EventResult::Consumed`] when handled.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect, _ctx: &EventCtx<'_>) -> EventResult {
        EventResult::Ignored
    }
}
