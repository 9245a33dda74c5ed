//! Core Error Types
//!
//! Every failure here is recoverable by ignoring the event; the controller
//! turns these into silent no-ops.

use thiserror::Error;

use crate::ids::{ContainerId, ItemId, NodeId};
use crate::subscription::EventKind;

/// Common result type for registry and controller operations
pub type SortResult<T> = Result<T, SortError>;

/// Errors raised by the registry and the interaction controller
#[derive(Debug, Error)]
pub enum SortError {
    /// An item was added before any container exists.
    #[error("no container to insert into")]
    NoContainer,

    #[error("unknown container {0}")]
    UnknownContainer(ContainerId),

    #[error("unknown item {0}")]
    UnknownItem(ItemId),

    /// The ownership walk from a node reached the top without finding an item.
    #[error("node {0} is not owned by any item")]
    NoOwningItem(NodeId),

    /// Drag-over on a container that does not own the dragged item.
    #[error("item {item} belongs to another container than {container}")]
    ForeignContainer { item: ItemId, container: ContainerId },

    #[error("no item is being dragged")]
    NotDragging,

    /// The event target has no live listener of this kind.
    #[error("no live {kind:?} listener on the event target")]
    Detached { kind: EventKind },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
