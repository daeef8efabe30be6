use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Rounded rectangle with a uniform corner radius.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radius: f32,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl DrawList {
    #[inline]
    pub fn push_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radius: f32,
        paint: Paint,
        border: Option<Border>,
    ) {
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd { rect, radius, paint, border }));
    }
}
