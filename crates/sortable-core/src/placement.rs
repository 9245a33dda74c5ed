//! Placement Engine
//!
//! Decides where the dragged item sits for a given pointer position: right
//! before the nearest item whose vertical midpoint is still below the
//! pointer, or at the end when there is none.

use std::collections::HashMap;
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;
use crate::model::Item;

/// Vertical extent of a rendered item, `[top, top + height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Source of item bounds, measured by whatever renders the items
pub trait Layout {
    /// `None` when the item is not rendered; such items are never anchors.
    fn bounds(&self, item: ItemId) -> Option<Bounds>;
}

impl<S: BuildHasher> Layout for HashMap<ItemId, Bounds, S> {
    fn bounds(&self, item: ItemId) -> Option<Bounds> {
        self.get(&item).copied()
    }
}

impl Layout for [(ItemId, Bounds)] {
    fn bounds(&self, item: ItemId) -> Option<Bounds> {
        self.iter().find(|(id, _)| *id == item).map(|(_, b)| *b)
    }
}

impl Layout for Vec<(ItemId, Bounds)> {
    fn bounds(&self, item: ItemId) -> Option<Bounds> {
        self.as_slice().bounds(item)
    }
}

/// Signed distance from the pointer to the item's midpoint.
/// Negative means the pointer is above the midpoint.
pub fn pointer_offset(pointer_y: f64, bounds: Bounds) -> f64 {
    pointer_y - bounds.top - bounds.height / 2.0
}

/// Item the active one should be inserted before, `None` for "append".
///
/// Only items with a negative offset qualify; the one closest to zero wins.
/// Equal offsets keep the earlier item in sequence order.
pub fn compute_insertion_anchor<L: Layout + ?Sized>(
    items: &[Item],
    active: ItemId,
    pointer_y: f64,
    layout: &L,
) -> Option<ItemId> {
    let mut closest: Option<(f64, ItemId)> = None;

    for item in items.iter().filter(|item| item.id() != active) {
        let Some(bounds) = layout.bounds(item.id()) else {
            continue;
        };
        let offset = pointer_offset(pointer_y, bounds);
        if offset < 0.0 && closest.map_or(true, |(best, _)| offset > best) {
            closest = Some((offset, item.id()));
        }
    }

    closest.map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::NodeId;
    use crate::model::{Node, NodeKind};

    fn make_items(ids: &[u32]) -> Vec<Item> {
        ids.iter()
            .map(|&id| {
                let root = Node::new(NodeId::from(id + 1000), NodeKind::Label(format!("test {}", id)));
                Item::new(ItemId::from(id), root)
            })
            .collect()
    }

    /// Items 1, 2, 3 at (0,10), (20,30), (40,50): midpoints 5, 25, 45
    fn stacked() -> (Vec<Item>, Vec<(ItemId, Bounds)>) {
        let items = make_items(&[1, 2, 3]);
        let layout = vec![
            (ItemId::from(1), Bounds::new(0.0, 10.0)),
            (ItemId::from(2), Bounds::new(20.0, 10.0)),
            (ItemId::from(3), Bounds::new(40.0, 10.0)),
        ];
        (items, layout)
    }

    #[test]
    fn test_nearest_item_below_pointer() {
        let (items, layout) = stacked();
        let anchor = compute_insertion_anchor(&items, ItemId::from(99), 20.0, &layout);
        assert_eq!(anchor, Some(ItemId::from(2)));
    }

    #[test]
    fn test_midpoint_exactly_at_pointer_is_not_eligible() {
        let (items, layout) = stacked();
        let anchor = compute_insertion_anchor(&items, ItemId::from(99), 25.0, &layout);
        assert_eq!(anchor, Some(ItemId::from(3)));
    }

    #[test]
    fn test_below_everything_appends() {
        let (items, layout) = stacked();
        assert_eq!(compute_insertion_anchor(&items, ItemId::from(99), 60.0, &layout), None);
    }

    #[test]
    fn test_above_everything_goes_first() {
        let (items, layout) = stacked();
        assert_eq!(
            compute_insertion_anchor(&items, ItemId::from(99), -5.0, &layout),
            Some(ItemId::from(1))
        );
    }

    #[test]
    fn test_empty_container_appends() {
        let layout: Vec<(ItemId, Bounds)> = Vec::new();
        assert_eq!(compute_insertion_anchor(&[], ItemId::from(1), 10.0, &layout), None);
    }

    #[test]
    fn test_active_item_is_never_an_anchor() {
        let (items, layout) = stacked();
        // Pointer just above item 2's midpoint, but item 2 is the one being dragged
        let anchor = compute_insertion_anchor(&items, ItemId::from(2), 24.0, &layout);
        assert_eq!(anchor, Some(ItemId::from(3)));
    }

    #[test]
    fn test_unmeasured_items_are_skipped() {
        let (items, mut layout) = stacked();
        layout.retain(|(id, _)| *id != ItemId::from(2));
        let anchor = compute_insertion_anchor(&items, ItemId::from(99), 20.0, &layout);
        assert_eq!(anchor, Some(ItemId::from(3)));
    }

    #[test]
    fn test_tie_prefers_sequence_order() {
        let items = make_items(&[1, 2]);
        let layout: HashMap<ItemId, Bounds> = [
            (ItemId::from(1), Bounds::new(10.0, 10.0)),
            (ItemId::from(2), Bounds::new(10.0, 10.0)),
        ]
        .into_iter()
        .collect();
        let anchor = compute_insertion_anchor(&items, ItemId::from(99), 0.0, &layout);
        assert_eq!(anchor, Some(ItemId::from(1)));
    }

    #[test]
    fn test_offset_sign() {
        let b = Bounds::new(20.0, 10.0);
        assert_eq!(b.midpoint(), 25.0);
        assert_eq!(pointer_offset(20.0, b), -5.0);
        assert_eq!(pointer_offset(25.0, b), 0.0);
        assert!(pointer_offset(30.0, b) > 0.0);
    }
}
