use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

impl DrawList {
    /// Axis-aligned fill without corners or border.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, paint: Paint) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, paint }));
    }
}
