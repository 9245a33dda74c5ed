//! Widget Model
//!
//! Containers own their items; every item owns a small node tree that
//! mirrors what gets rendered (a label leaf and a delete button under a
//! group node).

use crate::ids::{ContainerId, ItemId, NodeId};
use crate::subscription::Subscription;

/// What a node of an item's tree represents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Structural node without content of its own
    Group,
    /// Text-bearing leaf, the one the filter looks at
    Label(String),
    /// Delete affordance
    DeleteButton,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self { id, kind, children: Vec::new() }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn label(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Label(text) => Some(text),
            _ => None,
        }
    }

    /// Pre-order visit of this node and all descendants
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// A draggable item
#[derive(Debug, Clone)]
pub struct Item {
    id: ItemId,
    root: Node,
    pub(crate) active: bool,
    pub(crate) visible: bool,
    pub(crate) listeners: Vec<Subscription>,
}

impl Item {
    pub(crate) fn new(id: ItemId, root: Node) -> Self {
        Self {
            id,
            root,
            active: false,
            visible: true,
            listeners: Vec::new(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// First label leaf in tree order
    pub fn label(&self) -> Option<&str> {
        let mut found = None;
        self.root.walk(&mut |node| {
            if found.is_none() {
                found = node.label();
            }
        });
        found
    }

    pub fn delete_node(&self) -> Option<NodeId> {
        let mut found = None;
        self.root.walk(&mut |node| {
            if found.is_none() && node.kind == NodeKind::DeleteButton {
                found = Some(node.id);
            }
        });
        found
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// An ordered drop surface with its own search query
#[derive(Debug, Clone)]
pub struct Container {
    id: ContainerId,
    pub(crate) items: Vec<Item>,
    pub(crate) query: String,
    pub(crate) listeners: Vec<Subscription>,
}

impl Container {
    pub(crate) fn new(id: ContainerId) -> Self {
        Self {
            id,
            items: Vec::new(),
            query: String::new(),
            listeners: Vec::new(),
        }
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.visible)
    }

    /// Move `item` right before `anchor`, or to the end when there is no
    /// anchor. Returns whether the order changed.
    pub(crate) fn move_before(&mut self, item: ItemId, anchor: Option<ItemId>) -> bool {
        let Some(from) = self.position_of(item) else {
            return false;
        };
        if anchor == Some(item) {
            return false;
        }
        let moved = self.items.remove(from);
        let to = anchor
            .and_then(|a| self.position_of(a))
            .unwrap_or(self.items.len());
        self.items.insert(to, moved);
        from != to
    }
}
