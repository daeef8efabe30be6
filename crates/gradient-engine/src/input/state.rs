use std::collections::HashSet;

use super::types::{
    InputEvent,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for one host surface: held keys and buttons plus the
/// pointer position.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,
    /// Pointer position in logical pixels; `None` once the pointer has left.
    pub pointer_pos: Option<(f32, f32)>,
    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

/// Transition reported by [`InputState::apply_event`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Transition {
    /// The event changed which buttons or keys are held.
    Edge,
    /// A repeat (key or button already held, or released while not held).
    Repeat,
    /// The event carries no held-state change (moves, leave, focus).
    None,
}

impl InputState {
    /// Applies `ev` and reports whether it changed the held sets.
    pub fn apply_event(&mut self, ev: &InputEvent) -> Transition {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Nothing is delivered while unfocused, so held state is stale.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
                Transition::None
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
                Transition::None
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
                Transition::None
            }

            InputEvent::Key { key, state, .. } => {
                let changed = match state {
                    KeyState::Pressed => self.keys_down.insert(*key),
                    KeyState::Released => self.keys_down.remove(key),
                };
                if changed { Transition::Edge } else { Transition::Repeat }
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, .. }) => {
                self.pointer_pos = Some((*x, *y));
                let changed = match state {
                    MouseButtonState::Pressed => self.buttons_down.insert(*button),
                    MouseButtonState::Released => self.buttons_down.remove(button),
                };
                if changed { Transition::Edge } else { Transition::Repeat }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}
