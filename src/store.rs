//! View State Store
//!
//! Mirror of the controller's snapshot with field-level reactivity. The
//! controller stays the source of truth; components only read from here.

use leptos::prelude::*;
use reactive_stores::Store;
use sortable_core::{ContainerId, ContainerSnapshot, ItemId, RegistrySnapshot};

/// What the page renders
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Containers in page order, each with its items and query
    pub containers: Vec<ContainerSnapshot>,
    /// Items across all containers
    pub item_count: usize,
    /// Item currently being dragged
    pub active: Option<ItemId>,
}

/// Type alias for the store
pub type AppStore = Store<ViewState>;

pub fn create_app_store() -> AppStore {
    Store::new(ViewState::default())
}

// ========================
// Store Helper Functions
// ========================

/// Replace the view state with a fresh snapshot
pub fn store_sync(store: &AppStore, snapshot: RegistrySnapshot) {
    *store.containers().write() = snapshot.containers;
    *store.item_count().write() = snapshot.item_count;
    *store.active().write() = snapshot.active;
}

pub fn store_container_ids(store: &AppStore) -> Vec<ContainerId> {
    store.containers().get().iter().map(|c| c.id).collect()
}

pub fn store_container(store: &AppStore, id: ContainerId) -> Option<ContainerSnapshot> {
    store.containers().get().into_iter().find(|c| c.id == id)
}

pub fn store_item_count(store: &AppStore) -> usize {
    store.item_count().get()
}

pub fn store_active(store: &AppStore) -> Option<ItemId> {
    store.active().get()
}
