//! Interaction Controller
//!
//! Entry point for everything the front end forwards: drag lifecycle,
//! search input, delete clicks and the add/reset buttons. Failures are
//! silent; each hook reports whether it changed anything.

use crate::config::SortableConfig;
use crate::error::{SortError, SortResult};
use crate::ids::{ContainerId, ItemId, NodeId};
use crate::placement::{compute_insertion_anchor, Layout};
use crate::registry::Registry;
use crate::snapshot::{ContainerSnapshot, RegistrySnapshot};
use crate::subscription::{EventKind, Target};

#[derive(Debug, Default, Clone)]
pub struct Controller {
    registry: Registry,
    /// The one item currently being dragged
    active: Option<ItemId>,
}

/// Log and drop an error; every hook goes through here.
fn silently<T>(hook: &str, result: SortResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("{} ignored: {}", hook, err);
            None
        }
    }
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the start-up layout: containers first, then the seed items.
    pub fn bootstrap(config: &SortableConfig) -> Self {
        let mut controller = Self::new();
        for _ in 0..config.initial_containers {
            controller.create_container();
        }
        for label in &config.seed_labels {
            controller.add_draggable_element(label);
        }
        controller
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn active(&self) -> Option<ItemId> {
        self.active
    }

    // ========================
    // Structure
    // ========================

    pub fn create_container(&mut self) -> ContainerId {
        self.registry.add_container()
    }

    pub fn remove_container(&mut self, id: ContainerId) -> bool {
        let removed = silently("remove_container", self.registry.remove_container(id));
        if let Some(container) = &removed {
            if self.active.is_some_and(|a| container.item(a).is_some()) {
                self.active = None;
            }
        }
        removed.is_some()
    }

    /// Add an item labelled `text` to the first container. Does nothing when
    /// there is no container.
    pub fn add_draggable_element(&mut self, text: &str) -> Option<ItemId> {
        silently("add_draggable_element", self.registry.add_item(text))
    }

    pub fn reset_all(&mut self) {
        self.active = None;
        self.registry.reset();
    }

    // ========================
    // Drag lifecycle
    // ========================

    /// Mark `item` as the one being dragged, clearing any previous one first.
    pub fn on_drag_start(&mut self, item: ItemId) -> bool {
        silently("on_drag_start", self.start_drag(item)).is_some()
    }

    /// Relocate the dragged item inside `container` for the pointer position.
    /// Returns true when the order changed.
    pub fn on_drag_over<L: Layout + ?Sized>(
        &mut self,
        container: ContainerId,
        pointer_y: f64,
        layout: &L,
    ) -> bool {
        silently("on_drag_over", self.drag_over(container, pointer_y, layout)).unwrap_or(false)
    }

    /// Clear the dragging mark and refresh the owner's filter.
    pub fn on_drag_end(&mut self, item: ItemId) -> bool {
        silently("on_drag_end", self.end_drag(item)).is_some()
    }

    // ========================
    // Search and delete
    // ========================

    pub fn on_search_input(&mut self, container: ContainerId, text: &str) -> bool {
        let result = self
            .registry
            .ensure_subscribed(Target::Container(container), EventKind::SearchInput)
            .and_then(|_| self.registry.set_query(container, text));
        silently("on_search_input", result).is_some()
    }

    /// Remove the item owning `node` (normally its delete button).
    pub fn on_delete_clicked(&mut self, node: NodeId) -> bool {
        let Some(item) = silently("on_delete_clicked", self.registry.owning_item(node)) else {
            return false;
        };
        self.remove_item(item)
    }

    pub fn remove_item(&mut self, item: ItemId) -> bool {
        let result = self.registry.remove_item(item);
        debug_assert!(result.is_ok(), "removing unregistered {}", item);
        if self.active == Some(item) {
            self.active = None;
        }
        silently("remove_item", result).is_some()
    }

    // ========================
    // Read hooks
    // ========================

    pub fn snapshot(&self) -> RegistrySnapshot {
        self.registry.snapshot()
    }

    /// Snapshot of the container at `index`, also logged as JSON.
    pub fn state(&self, index: usize) -> Option<ContainerSnapshot> {
        let container = self.registry.containers().get(index)?;
        let snapshot = ContainerSnapshot::from(container);
        match serde_json::to_string(&snapshot) {
            Ok(json) => log::info!("container {}: {}", index, json),
            Err(err) => log::warn!("container {} not serializable: {}", index, err),
        }
        Some(snapshot)
    }

    // ========================
    // Internals
    // ========================

    fn start_drag(&mut self, item: ItemId) -> SortResult<()> {
        self.registry
            .ensure_subscribed(Target::Item(item), EventKind::DragStart)?;

        if let Some(previous) = self.active.take() {
            if let Ok(prev) = self.registry.item_mut(previous) {
                prev.active = false;
            }
        }
        self.registry.item_mut(item)?.active = true;
        self.active = Some(item);
        log::debug!("drag start {}", item);
        Ok(())
    }

    fn drag_over<L: Layout + ?Sized>(
        &mut self,
        container: ContainerId,
        pointer_y: f64,
        layout: &L,
    ) -> SortResult<bool> {
        self.registry
            .ensure_subscribed(Target::Container(container), EventKind::DragOver)?;
        let active = self.active.ok_or(SortError::NotDragging)?;
        if self.registry.owner_of(active)? != container {
            return Err(SortError::ForeignContainer { item: active, container });
        }

        let target = self.registry.container_mut(container)?;
        let anchor = compute_insertion_anchor(target.items(), active, pointer_y, layout);
        let moved = target.move_before(active, anchor);
        if moved {
            log::trace!("{} moved before {:?} at y={}", active, anchor, pointer_y);
        }
        Ok(moved)
    }

    fn end_drag(&mut self, item: ItemId) -> SortResult<usize> {
        self.registry
            .ensure_subscribed(Target::Item(item), EventKind::DragEnd)?;

        self.registry.item_mut(item)?.active = false;
        if self.active == Some(item) {
            self.active = None;
        }
        let owner = self.registry.owner_of(item)?;
        log::debug!("drag end {}", item);
        self.registry.refresh_filter(owner)
    }
}
