use std::fmt;

/// Keyboard key identifier. Only the keys the editor reacts to are named.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Delete,
    Space,
    /// Platform-dependent key not represented here.
    Unknown(u32),
}

impl Key {
    /// Parses a lowercase key name (`"escape"`, `"delete"`, ...).
    pub fn from_name(name: &str) -> Option<Key> {
        Some(match name.to_ascii_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "enter" | "return" => Key::Enter,
            "tab" => Key::Tab,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "space" => Key::Space,
            _ => return None,
        })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Modifier keys held during an event.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Pointer moved to `(x, y)` in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button transition at `(x, y)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
    pub modifiers: Modifiers,
}

impl PointerButtonEvent {
    /// Primary-button press at `(x, y)` with no modifiers.
    pub fn left_pressed(x: f32, y: f32) -> Self {
        Self { button: MouseButton::Left, state: MouseButtonState::Pressed, x, y, modifiers: Modifiers::default() }
    }

    /// Primary-button release at `(x, y)` with no modifiers.
    pub fn left_released(x: f32, y: f32) -> Self {
        Self { button: MouseButton::Left, state: MouseButtonState::Released, x, y, modifiers: Modifiers::default() }
    }
}

/// Platform-agnostic input events.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
    },

    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),

    /// Pointer left the host surface.
    PointerLeft,

    /// Host focus change.
    Focused(bool),
}

impl InputEvent {
    pub fn pointer_moved(x: f32, y: f32) -> Self {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    pub fn key_pressed(key: Key) -> Self {
        InputEvent::Key { key, state: KeyState::Pressed, modifiers: Modifiers::default() }
    }
}
