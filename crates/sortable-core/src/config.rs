//! Widget Configuration
//!
//! Start-up layout: how many containers exist and which items are seeded
//! into the first one.

use serde::{Deserialize, Serialize};

use crate::error::SortResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortableConfig {
    /// Containers created at start-up
    pub initial_containers: usize,
    /// Labels added to the first container, in order
    pub seed_labels: Vec<String>,
}

impl Default for SortableConfig {
    fn default() -> Self {
        Self {
            initial_containers: 2,
            seed_labels: (1..=4).map(|n| format!("test {}", n)).collect(),
        }
    }
}

impl SortableConfig {
    /// Parse a JSON document; missing fields fall back to defaults.
    pub fn from_json(json: &str) -> SortResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
