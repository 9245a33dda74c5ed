//! Read-only views of the registry, handed to the renderer.

use serde::{Deserialize, Serialize};

use crate::ids::{ContainerId, ItemId, NodeId};
use crate::model::{Container, Item};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub id: ItemId,
    pub label: String,
    pub delete_node: Option<NodeId>,
    pub visible: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSnapshot {
    pub id: ContainerId,
    pub query: String,
    pub items: Vec<ItemSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub containers: Vec<ContainerSnapshot>,
    pub item_count: usize,
    pub active: Option<ItemId>,
}

impl From<&Item> for ItemSnapshot {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id(),
            label: item.label().unwrap_or_default().to_string(),
            delete_node: item.delete_node(),
            visible: item.is_visible(),
            active: item.is_active(),
        }
    }
}

impl From<&Container> for ContainerSnapshot {
    fn from(container: &Container) -> Self {
        Self {
            id: container.id(),
            query: container.query().to_string(),
            items: container.items().iter().map(ItemSnapshot::from).collect(),
        }
    }
}

impl ContainerSnapshot {
    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.label.as_str()).collect()
    }

    pub fn visible_labels(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.visible)
            .map(|item| item.label.as_str())
            .collect()
    }
}
