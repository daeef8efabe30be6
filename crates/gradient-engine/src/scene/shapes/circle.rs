use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl DrawList {
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        paint: Paint,
        border: Option<Border>,
    ) {
        self.push(z, DrawCmd::Circle(CircleCmd { center, radius, paint, border }));
    }
}
