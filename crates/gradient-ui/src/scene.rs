use gradient_engine::coords::{Rect, Vec2};
use gradient_engine::input::{
    InputEvent, InputState, KeyState, MouseButton, MouseButtonState, PointerButtonEvent, Transition,
};
use gradient_engine::scene::DrawList;

use crate::capture::PointerCapture;
use crate::constraints::Constraints;
use crate::event::{EventCtx, EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

/// Primary-button press in progress.
#[derive(Debug, Clone, Copy)]
struct Press {
    /// Whether the press handed pointer capture to a widget.
    captured: bool,
}

/// Top-level coordinator between a host and a root widget.
///
/// Owns the draw list, the input state and the pointer capture slot. The host
/// feeds raw [`InputEvent`]s to [`dispatch`](Self::dispatch), which turns them
/// into [`UiEvent`]s, and calls [`frame`](Self::frame) to repaint.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new(Vec2::new(260.0, 48.0));
/// let mut picker = CustomGradientPicker::new().on_change(|v| println!("{v}"));
/// ui.dispatch(&mut picker, &InputEvent::pointer_moved(120.0, 24.0));
/// let draw_list = ui.frame(&picker);
/// ```
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
    pub input: InputState,
    capture: PointerCapture,
    viewport: Vec2,
    press: Option<Press>,
}

impl UiScene {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            draw_list: DrawList::new(),
            input: InputState::default(),
            capture: PointerCapture::new(),
            viewport,
            press: None,
        }
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    #[inline]
    pub fn capture(&self) -> &PointerCapture {
        &self.capture
    }

    /// Rect the root occupies: its measured size at the top-left corner.
    pub fn layout(&self, root: &dyn Widget) -> Rect {
        let size = root.measure(Constraints::loose(self.viewport));
        Rect::new(0.0, 0.0, size.x, size.y)
    }

    /// Measure and paint `root` into the draw list.
    pub fn frame(&mut self, root: &dyn Widget) -> &DrawList {
        self.draw_list.clear();
        let rect = self.layout(root);
        let pointer = self.input.pointer_pos.map(|(x, y)| Vec2::new(x, y));
        let down = self.input.button_down(MouseButton::Left);
        {
            let mut painter = Painter::new(&mut self.draw_list, pointer, down);
            root.paint(&mut painter, rect);
        }
        &self.draw_list
    }

    /// Route one widget-level event to `root`.
    pub fn send(&mut self, root: &mut dyn Widget, event: &UiEvent) -> EventResult {
        let rect = self.layout(root);
        let ctx = EventCtx { capture: &self.capture };
        root.on_event(event, rect, &ctx)
    }

    /// Apply a raw input event and route the resulting widget events.
    ///
    /// A primary-button release yields `PointerUp` followed by `Click` unless
    /// the matching press handed out pointer capture. Capture still held
    /// after `PointerUp` is force-released.
    pub fn dispatch(&mut self, root: &mut dyn Widget, event: &InputEvent) -> EventResult {
        let transition = self.input.apply_event(event);
        match event {
            InputEvent::PointerMoved(m) => {
                self.send(root, &UiEvent::PointerMove { pos: Vec2::new(m.x, m.y) })
            }
            InputEvent::PointerLeft => self.send(root, &UiEvent::PointerLeave),
            InputEvent::PointerButton(b) if b.button == MouseButton::Left => {
                if transition == Transition::Repeat {
                    log::debug!("ignoring repeated {:?} of the primary button", b.state);
                    return EventResult::Ignored;
                }
                match b.state {
                    MouseButtonState::Pressed => self.press_primary(root, b),
                    MouseButtonState::Released => self.release_primary(root, b),
                }
            }
            InputEvent::PointerButton(_) => EventResult::Ignored,
            InputEvent::Key { key, state: KeyState::Pressed, modifiers } => {
                self.send(root, &UiEvent::KeyPress { key: *key, modifiers: *modifiers })
            }
            InputEvent::Key { .. } => EventResult::Ignored,
            InputEvent::Focused(true) => EventResult::Ignored,
            InputEvent::Focused(false) => {
                // The release will never arrive; end any gesture where the pointer was.
                if self.press.is_none() {
                    return EventResult::Ignored;
                }
                let (x, y) = self.input.pointer_pos.unwrap_or_default();
                self.release_primary(root, &PointerButtonEvent::left_released(x, y))
            }
        }
    }

    fn press_primary(&mut self, root: &mut dyn Widget, b: &PointerButtonEvent) -> EventResult {
        let result = self.send(root, &UiEvent::PointerDown { pos: Vec2::new(b.x, b.y) });
        self.press = Some(Press { captured: self.capture.is_captured() });
        result
    }

    fn release_primary(&mut self, root: &mut dyn Widget, b: &PointerButtonEvent) -> EventResult {
        let pos = Vec2::new(b.x, b.y);
        let mut result = self.send(root, &UiEvent::PointerUp { pos });
        if let Some(owner) = self.capture.force_release() {
            log::warn!("pointer capture still held by {owner:?} after release; releasing");
        }
        match self.press.take() {
            Some(Press { captured: false }) => {
                result = result.or(self.send(root, &UiEvent::Click { pos }));
            }
            Some(Press { captured: true }) => {}
            None => log::debug!("primary release without a tracked press"),
        }
        result
    }
}
