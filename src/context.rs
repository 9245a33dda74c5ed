//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;
use sortable_core::Controller;

use crate::store::{create_app_store, store_sync, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Owner of every container and item; mutated only through `apply`
    controller: StoredValue<Controller>,
    /// Rendered mirror of the controller state
    pub store: AppStore,
    /// Drag gesture signals
    pub dnd: DndSignals,
}

impl AppContext {
    pub fn new(controller: Controller, dnd: DndSignals) -> Self {
        let ctx = Self {
            controller: StoredValue::new(controller),
            store: create_app_store(),
            dnd,
        };
        ctx.sync();
        ctx
    }

    /// Run one controller hook; re-render when it reports a change.
    pub fn apply(&self, op: impl FnOnce(&mut Controller) -> bool) -> bool {
        let changed = self.controller.try_update_value(op).unwrap_or(false);
        if changed {
            self.sync();
        }
        changed
    }

    /// Push a fresh snapshot into the store
    pub fn sync(&self) {
        let snapshot = self.controller.with_value(Controller::snapshot);
        store_sync(&self.store, snapshot);
    }

    /// Log the container at `index` as JSON
    pub fn log_state(&self, index: usize) {
        if self.controller.with_value(|c| c.state(index)).is_none() {
            log::warn!("no container at index {}", index);
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
