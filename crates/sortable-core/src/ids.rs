//! Identifiers
//!
//! Opaque handles for containers, items, item nodes and subscriptions.
//! Ids come from a single counter per registry and are never reused.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

define_id!(
    /// A drop surface holding items and one search query
    ContainerId,
    "container"
);
define_id!(
    /// A draggable, deletable item
    ItemId,
    "item"
);
define_id!(
    /// One node of an item's visual tree (label, delete button, group)
    NodeId,
    "node"
);
define_id!(
    /// A listener registration, returned at subscribe time and used to cancel
    SubscriptionId,
    "sub"
);

/// Monotonic id source shared by every kind of handle
#[derive(Debug, Default, Clone)]
pub(crate) struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub(crate) fn next<T: From<u32>>(&mut self) -> T {
        self.next += 1;
        T::from(self.next)
    }
}
