//! UI Components
//!
//! Leptos components rendering containers and items.

mod container_field;
mod draggable_item;
mod toolbar;

pub use container_field::ContainerField;
pub use draggable_item::DraggableItem;
pub use toolbar::Toolbar;
