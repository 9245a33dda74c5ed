//! Listener Subscriptions
//!
//! Every listener the widget binds is represented by a handle returned at
//! registration time. Cancelling takes the same handle back, so there is no
//! reliance on closure identity.

use std::collections::HashMap;

use crate::ids::{ContainerId, IdAllocator, ItemId, SubscriptionId};

/// Event kinds the front end forwards into the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DragStart,
    DragEnd,
    DragOver,
    SearchInput,
}

/// What a listener is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Item(ItemId),
    Container(ContainerId),
}

/// Handle for one live listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub target: Target,
    pub kind: EventKind,
}

/// Table of live listeners
#[derive(Debug, Default, Clone)]
pub struct Subscriptions {
    live: HashMap<SubscriptionId, (Target, EventKind)>,
}

impl Subscriptions {
    pub(crate) fn subscribe(
        &mut self,
        ids: &mut IdAllocator,
        target: Target,
        kind: EventKind,
    ) -> Subscription {
        let id = ids.next();
        self.live.insert(id, (target, kind));
        Subscription { id, target, kind }
    }

    /// Cancel a listener. Returns false if the handle was already cancelled.
    pub fn cancel(&mut self, handle: Subscription) -> bool {
        self.live.remove(&handle.id).is_some()
    }

    pub fn is_subscribed(&self, target: Target, kind: EventKind) -> bool {
        self.live.values().any(|&(t, k)| t == target && k == kind)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
