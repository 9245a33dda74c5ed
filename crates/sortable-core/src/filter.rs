//! Filter Engine
//!
//! Case-insensitive substring search over the label leaves of every item in
//! a container. The query is used as typed (never trimmed).

use crate::model::{Container, Node};

/// Whether `label` contains `query`, ignoring case
pub fn matches(label: &str, query: &str) -> bool {
    label.to_lowercase().contains(&query.to_lowercase())
}

/// Store `query` on the container and recompute visibility of every item.
/// Returns the number of visible items afterwards.
pub fn apply_filter(container: &mut Container, query: &str) -> usize {
    if container.query != query {
        container.query = query.to_owned();
    }
    let needle = query.to_lowercase();

    for item in container.items.iter_mut() {
        let mut verdict = None;
        visit(item.root(), &needle, &mut verdict);
        // Items without a label leaf keep their current state
        if let Some(visible) = verdict {
            item.visible = visible;
        }
    }

    container.visible_items().count()
}

// Every label leaf overwrites the verdict, so with several labels the last
// one in tree order decides. The walk never stops early.
fn visit(node: &Node, needle: &str, verdict: &mut Option<bool>) {
    if let Some(text) = node.label() {
        *verdict = Some(text.to_lowercase().contains(needle));
    }
    for child in &node.children {
        visit(child, needle, verdict);
    }
}
