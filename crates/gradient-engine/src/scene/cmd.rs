use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::rounded_rect::RoundedRectCmd;

/// Renderer-agnostic draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
    Circle(CircleCmd),
}

impl DrawCmd {
    /// Short tag used in logs and textual dumps.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Rect(_) => "rect",
            DrawCmd::RoundedRect(_) => "rounded-rect",
            DrawCmd::Circle(_) => "circle",
        }
    }
}
