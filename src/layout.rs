//! DOM Layout
//!
//! Measures rendered items so the placement engine can work with plain
//! numbers. Bounds are re-read on every call.

use std::collections::HashMap;

use sortable_core::{Bounds, ItemId};
use wasm_bindgen::JsCast;

/// Attribute carrying the item id on each rendered item
pub const ITEM_ID_ATTR: &str = "data-item-id";

pub fn parse_item_id(raw: &str) -> Option<ItemId> {
    raw.trim().parse::<u32>().ok().map(ItemId::from)
}

/// Bounds of every visible item rendered under `surface`.
/// Hidden items have an empty rect and are left out.
pub fn measure_items(surface: &web_sys::Element) -> HashMap<ItemId, Bounds> {
    let mut layout = HashMap::new();
    let Ok(nodes) = surface.query_selector_all("[data-item-id]") else {
        return layout;
    };

    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let Some(id) = element.get_attribute(ITEM_ID_ATTR).and_then(|raw| parse_item_id(&raw)) else {
            continue;
        };
        let rect = element.get_bounding_client_rect();
        if rect.width() == 0.0 && rect.height() == 0.0 {
            continue;
        }
        layout.insert(id, Bounds::new(rect.top(), rect.height()));
    }

    layout
}
