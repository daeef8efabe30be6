//! Input subsystem.
//!
//! Platform-agnostic events: whatever hosts the widget tree (a window
//! runtime, a test, the replay binary) translates its own events into
//! [`InputEvent`]s.

mod state;
mod types;

pub use state::{InputState, Transition};
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
