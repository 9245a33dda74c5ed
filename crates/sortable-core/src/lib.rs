//! Sortable Core
//!
//! Headless engine behind the sortable lists widget:
//! - model: ids, item node trees and containers
//! - placement: where a dragged item lands for a pointer position
//! - filter: live per-container search
//! - registry: ownership of containers, items and listener subscriptions
//! - controller: drag lifecycle and the event hooks the front end forwards

mod config;
mod controller;
mod error;
mod filter;
mod ids;
mod model;
mod placement;
mod registry;
mod snapshot;
mod subscription;

pub use config::SortableConfig;
pub use controller::Controller;
pub use error::{SortError, SortResult};
pub use filter::{apply_filter, matches};
pub use ids::{ContainerId, ItemId, NodeId, SubscriptionId};
pub use model::{Container, Item, Node, NodeKind};
pub use placement::{compute_insertion_anchor, pointer_offset, Bounds, Layout};
pub use registry::Registry;
pub use snapshot::{ContainerSnapshot, ItemSnapshot, RegistrySnapshot};
pub use subscription::{EventKind, Subscription, Subscriptions, Target};
