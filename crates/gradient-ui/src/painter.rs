use gradient_engine::coords::{Rect, Vec2};
use gradient_engine::paint::Paint;
use gradient_engine::scene::{Border, DrawList, ZIndex};

/// Drawing surface passed to [`crate::widget::Widget::paint`].
///
/// Wraps the engine's `DrawList`, assigns increasing z so later calls paint
/// on top, and exposes the pointer state for hover visuals.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
    /// Pointer position in logical pixels, `None` when outside the surface.
    pub pointer_pos: Option<Vec2>,
    /// True while the primary button is held.
    pub pointer_down: bool,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, pointer_pos: Option<Vec2>, pointer_down: bool) -> Self {
        Self { draw_list, z: 0, pointer_pos, pointer_down }
    }

    /// Returns `true` if the pointer is inside `rect`.
    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.pointer_pos.is_some_and(|p| rect.contains(p))
    }

    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, paint.into());
    }

    /// Rounded rectangle with optional border. `radius = 0.0` gives sharp corners.
    pub fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        let z = self.next_z();
        self.draw_list.push_rounded_rect(z, rect, radius, paint.into(), border);
    }

    pub fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        let z = self.next_z();
        self.draw_list.push_circle(z, center, radius, paint.into(), border);
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
