//! Scene (draw stream) types.
//!
//! Widgets record renderer-agnostic commands into a [`DrawList`]; ordering is
//! deterministic (z-index, then insertion order).

mod cmd;
mod key;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
pub use shapes::Border;
