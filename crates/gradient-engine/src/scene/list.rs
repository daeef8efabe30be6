use super::{DrawCmd, SortKey, ZIndex};

/// A single recorded draw item.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// `push()` is O(1); the paint-order index buffer is rebuilt lazily and reused
/// across frames.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items, keeping allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { key: SortKey::new(z, order), cmd });
        self.sorted_dirty = true;
    }

    /// Iterates items back-to-front without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.sorted_indices.clear();
            self.sorted_indices.extend(0..self.items.len());
            let items = &self.items;
            self.sorted_indices.sort_by(|&a, &b| items[a].key.cmp(&items[b].key));
            self.sorted_dirty = false;
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::{Color, Paint};

    #[test]
    fn paint_order_is_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_rect(ZIndex(2), Rect::new(0.0, 0.0, 1.0, 1.0), Paint::Solid(Color::white()));
        list.push_rect(ZIndex(1), Rect::new(1.0, 0.0, 1.0, 1.0), Paint::Solid(Color::white()));
        list.push_rect(ZIndex(1), Rect::new(2.0, 0.0, 1.0, 1.0), Paint::Solid(Color::white()));
        let orders: Vec<u32> = list.iter_in_paint_order().map(|i| i.key.order).collect();
        assert_eq!(orders, vec![1, 2, 0]);
    }

    #[test]
    fn clear_resets_order() {
        let mut list = DrawList::new();
        list.push_rect(ZIndex(0), Rect::new(0.0, 0.0, 1.0, 1.0), Paint::Solid(Color::white()));
        list.clear();
        assert!(list.is_empty());
        list.push_rect(ZIndex(0), Rect::new(0.0, 0.0, 1.0, 1.0), Paint::Solid(Color::white()));
        assert_eq!(list.items()[0].key.order, 0);
        assert_eq!(list.iter_in_paint_order().count(), 1);
    }
}
