//! Item Registry
//!
//! Owns the containers, the flat list of every item, the node ownership
//! links used to find an item from one of its nodes, and the live listener
//! subscriptions.

use std::collections::HashMap;

use crate::error::{SortError, SortResult};
use crate::filter::apply_filter;
use crate::ids::{ContainerId, IdAllocator, ItemId, NodeId};
use crate::model::{Container, Item, Node, NodeKind};
use crate::snapshot::{ContainerSnapshot, RegistrySnapshot};
use crate::subscription::{EventKind, Subscriptions, Target};

/// Upward link of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeParent {
    Node(NodeId),
    Item(ItemId),
}

#[derive(Debug, Default, Clone)]
pub struct Registry {
    ids: IdAllocator,
    containers: Vec<Container>,
    /// Every item across all containers, in creation order
    items: Vec<ItemId>,
    owners: HashMap<ItemId, ContainerId>,
    parents: HashMap<NodeId, NodeParent>,
    subscriptions: Subscriptions,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Containers
    // ========================

    /// Create an empty container with an empty query and append it.
    pub fn add_container(&mut self) -> ContainerId {
        let id: ContainerId = self.ids.next();
        let mut container = Container::new(id);
        let target = Target::Container(id);
        container.listeners = vec![
            self.subscriptions.subscribe(&mut self.ids, target, EventKind::DragOver),
            self.subscriptions.subscribe(&mut self.ids, target, EventKind::SearchInput),
        ];
        self.containers.push(container);
        log::info!("added {}", id);
        id
    }

    /// Detach the container's listeners and tear down its subtree. Its items
    /// leave the flat list as well.
    pub fn remove_container(&mut self, id: ContainerId) -> SortResult<Container> {
        let index = self
            .containers
            .iter()
            .position(|c| c.id() == id)
            .ok_or(SortError::UnknownContainer(id))?;
        let mut container = self.containers.remove(index);

        for handle in container.listeners.drain(..) {
            self.subscriptions.cancel(handle);
        }
        for item in container.items.iter_mut() {
            self.forget_item(item);
        }

        log::info!("removed {} with {} items", id, container.items.len());
        Ok(container)
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn container(&self, id: ContainerId) -> SortResult<&Container> {
        self.containers
            .iter()
            .find(|c| c.id() == id)
            .ok_or(SortError::UnknownContainer(id))
    }

    pub(crate) fn container_mut(&mut self, id: ContainerId) -> SortResult<&mut Container> {
        self.containers
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or(SortError::UnknownContainer(id))
    }

    // ========================
    // Items
    // ========================

    /// Append a new item to the first container and re-run that container's
    /// filter so the item respects an active query.
    pub fn add_item(&mut self, label: &str) -> SortResult<ItemId> {
        let container_id = self
            .containers
            .first()
            .map(Container::id)
            .ok_or(SortError::NoContainer)?;

        let id: ItemId = self.ids.next();
        let root = self.build_item_tree(id, label);
        let mut item = Item::new(id, root);
        let target = Target::Item(id);
        item.listeners = vec![
            self.subscriptions.subscribe(&mut self.ids, target, EventKind::DragStart),
            self.subscriptions.subscribe(&mut self.ids, target, EventKind::DragEnd),
        ];

        let container = self.container_mut(container_id)?;
        container.items.push(item);
        let query = container.query.clone();
        apply_filter(container, &query);

        self.items.push(id);
        self.owners.insert(id, container_id);
        log::debug!("added {} {:?} to {}", id, label, container_id);
        Ok(id)
    }

    /// Detach the item's listeners and remove it from its container and from
    /// the flat list.
    pub fn remove_item(&mut self, id: ItemId) -> SortResult<Item> {
        let owner = self.owner_of(id)?;
        let container = self.container_mut(owner)?;
        let index = container.position_of(id).ok_or(SortError::UnknownItem(id))?;
        let mut item = container.items.remove(index);
        self.forget_item(&mut item);
        log::debug!("removed {} from {}", id, owner);
        Ok(item)
    }

    /// Item ids across every container, in creation order
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> SortResult<&Item> {
        let owner = self.owner_of(id)?;
        self.container(owner)?
            .item(id)
            .ok_or(SortError::UnknownItem(id))
    }

    pub(crate) fn item_mut(&mut self, id: ItemId) -> SortResult<&mut Item> {
        let owner = self.owner_of(id)?;
        self.container_mut(owner)?
            .item_mut(id)
            .ok_or(SortError::UnknownItem(id))
    }

    pub fn owner_of(&self, id: ItemId) -> SortResult<ContainerId> {
        self.owners.get(&id).copied().ok_or(SortError::UnknownItem(id))
    }

    /// Walk up from `node` to the nearest item that owns it.
    pub fn owning_item(&self, node: NodeId) -> SortResult<ItemId> {
        let mut current = node;
        // Bounded by the number of known nodes, which rules out cycles
        for _ in 0..=self.parents.len() {
            match self.parents.get(&current) {
                Some(NodeParent::Item(item)) => return Ok(*item),
                Some(NodeParent::Node(parent)) => current = *parent,
                None => break,
            }
        }
        Err(SortError::NoOwningItem(node))
    }

    // ========================
    // Search
    // ========================

    /// Store `query` on the container and refresh its item visibility.
    pub fn set_query(&mut self, id: ContainerId, query: &str) -> SortResult<usize> {
        Ok(apply_filter(self.container_mut(id)?, query))
    }

    /// Re-run the container's filter with its stored query.
    pub fn refresh_filter(&mut self, id: ContainerId) -> SortResult<usize> {
        let container = self.container_mut(id)?;
        let query = container.query.clone();
        Ok(apply_filter(container, &query))
    }

    // ========================
    // Listeners
    // ========================

    pub fn is_subscribed(&self, target: Target, kind: EventKind) -> bool {
        self.subscriptions.is_subscribed(target, kind)
    }

    pub fn ensure_subscribed(&self, target: Target, kind: EventKind) -> SortResult<()> {
        if self.is_subscribed(target, kind) {
            Ok(())
        } else {
            Err(SortError::Detached { kind })
        }
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    // ========================
    // Reset
    // ========================

    /// Tear everything down: items first, then queries, then containers.
    pub fn reset(&mut self) {
        for id in std::mem::take(&mut self.items) {
            if let Err(err) = self.remove_item(id) {
                log::debug!("reset: {}", err);
            }
        }
        for container in self.containers.iter_mut() {
            container.query.clear();
        }
        let ids: Vec<ContainerId> = self.containers.iter().map(Container::id).collect();
        for id in ids {
            if let Err(err) = self.remove_container(id) {
                log::debug!("reset: {}", err);
            }
        }
        debug_assert!(self.owners.is_empty() && self.parents.is_empty());
        debug_assert!(self.subscriptions.is_empty());
        log::info!("registry reset");
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty() && self.items.is_empty()
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            containers: self.containers.iter().map(ContainerSnapshot::from).collect(),
            item_count: self.items.len(),
            active: self
                .containers
                .iter()
                .flat_map(Container::items)
                .find(|item| item.is_active())
                .map(Item::id),
        }
    }

    // ========================
    // Internals
    // ========================

    /// Group { Label(text), DeleteButton }, with ownership links registered.
    fn build_item_tree(&mut self, item: ItemId, label: &str) -> Node {
        let root_id: NodeId = self.ids.next();
        let label_id: NodeId = self.ids.next();
        let delete_id: NodeId = self.ids.next();

        self.parents.insert(root_id, NodeParent::Item(item));
        self.parents.insert(label_id, NodeParent::Node(root_id));
        self.parents.insert(delete_id, NodeParent::Node(root_id));

        Node::new(root_id, NodeKind::Group).with_children(vec![
            Node::new(label_id, NodeKind::Label(label.to_string())),
            Node::new(delete_id, NodeKind::DeleteButton),
        ])
    }

    fn forget_item(&mut self, item: &mut Item) {
        for handle in item.listeners.drain(..) {
            self.subscriptions.cancel(handle);
        }
        let parents = &mut self.parents;
        item.root().walk(&mut |node| {
            parents.remove(&node.id);
        });
        item.active = false;
        self.items.retain(|id| *id != item.id());
        self.owners.remove(&item.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(registry: &Registry, index: usize) -> Vec<String> {
        registry.containers()[index]
            .items()
            .iter()
            .filter_map(|i| i.label().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_add_item_without_container() {
        let mut registry = Registry::new();
        assert!(matches!(registry.add_item("lost"), Err(SortError::NoContainer)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_item_goes_to_first_container() {
        let mut registry = Registry::new();
        let first = registry.add_container();
        let second = registry.add_container();
        let id = registry.add_item("test 1").unwrap();

        assert_eq!(registry.owner_of(id).unwrap(), first);
        assert!(registry.container(second).unwrap().items().is_empty());
        assert_eq!(registry.items(), &[id]);
        assert!(registry.is_subscribed(Target::Item(id), EventKind::DragStart));
        assert!(registry.is_subscribed(Target::Item(id), EventKind::DragEnd));
    }

    #[test]
    fn test_add_item_respects_query() {
        let mut registry = Registry::new();
        let c = registry.add_container();
        registry.set_query(c, "2").unwrap();

        let shown = registry.add_item("test 2").unwrap();
        let hidden = registry.add_item("test 5").unwrap();
        assert!(registry.item(shown).unwrap().is_visible());
        assert!(!registry.item(hidden).unwrap().is_visible());

        registry.set_query(c, "").unwrap();
        assert!(registry.item(hidden).unwrap().is_visible());
    }

    #[test]
    fn test_remove_item_everywhere() {
        let mut registry = Registry::new();
        registry.add_container();
        let a = registry.add_item("a").unwrap();
        let b = registry.add_item("b").unwrap();
        let delete_node = registry.item(a).unwrap().delete_node().unwrap();

        let removed = registry.remove_item(a).unwrap();
        assert_eq!(removed.id(), a);
        assert_eq!(registry.items(), &[b]);
        assert_eq!(labels(&registry, 0), vec!["b"]);
        assert!(!registry.is_subscribed(Target::Item(a), EventKind::DragStart));
        assert!(registry.owning_item(delete_node).is_err());
        assert!(matches!(registry.remove_item(a), Err(SortError::UnknownItem(_))));
    }

    #[test]
    fn test_owning_item_walks_up() {
        let mut registry = Registry::new();
        registry.add_container();
        let id = registry.add_item("x").unwrap();
        let item = registry.item(id).unwrap();
        let root = item.root().id;
        let delete_node = item.delete_node().unwrap();

        assert_eq!(registry.owning_item(delete_node).unwrap(), id);
        assert_eq!(registry.owning_item(root).unwrap(), id);
        assert!(matches!(
            registry.owning_item(NodeId::from(9999)),
            Err(SortError::NoOwningItem(_))
        ));
    }

    #[test]
    fn test_remove_container_drops_its_items() {
        let mut registry = Registry::new();
        let first = registry.add_container();
        let second = registry.add_container();
        registry.add_item("a").unwrap();
        registry.add_item("b").unwrap();

        registry.remove_container(first).unwrap();
        assert!(registry.items().is_empty());
        assert_eq!(registry.containers().len(), 1);
        assert!(!registry.is_subscribed(Target::Container(first), EventKind::DragOver));
        assert!(registry.is_subscribed(Target::Container(second), EventKind::DragOver));

        // The second container is now the insertion target
        let c = registry.add_item("c").unwrap();
        assert_eq!(registry.owner_of(c).unwrap(), second);
    }

    #[test]
    fn test_reset_leaves_fresh_state() {
        let mut registry = Registry::new();
        let c = registry.add_container();
        registry.add_container();
        for n in 1..=4 {
            registry.add_item(&format!("test {}", n)).unwrap();
        }
        registry.set_query(c, "test").unwrap();

        registry.reset();
        assert!(registry.is_empty());
        assert!(registry.containers().is_empty());
        assert!(registry.items().is_empty());
        assert!(registry.subscriptions().is_empty());
        assert_eq!(registry.snapshot(), RegistrySnapshot::default());
    }
}
