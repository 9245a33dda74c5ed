//! Draggable Item Component
//!
//! A single row: label and delete button.

use leptos::prelude::*;
use sortable_core::ItemSnapshot;

use crate::context::use_app_context;
use leptos_dragdrop::make_on_mousedown;

/// One item inside a container
#[component]
pub fn DraggableItem(item: ItemSnapshot) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let delete_node = item.delete_node;
    let on_mousedown = make_on_mousedown(ctx.dnd, id.get());

    let class = if item.active { "draggable dragging" } else { "draggable" };
    let style = if item.visible { "" } else { "display: none;" };

    view! {
        <div
            class=class
            style=style
            data-item-id=id.get().to_string()
            on:mousedown=on_mousedown
        >
            <span class="item-label">{item.label}</span>
            <button class="delete-btn" on:click=move |ev| {
                ev.stop_propagation();
                // A drop that ends over the button must not delete
                if ctx.dnd.drag_just_ended_read.get_untracked() {
                    return;
                }
                if let Some(node) = delete_node {
                    ctx.apply(|c| c.on_delete_clicked(node));
                }
            }>"delete"</button>
        </div>
    }
}
