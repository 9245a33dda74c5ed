//! Container Field Component
//!
//! One container: its search input and the drop surface holding its items.
//! Moves over the surface are forwarded to the controller together with
//! freshly measured item bounds.

use leptos::html::Div;
use leptos::prelude::*;
use sortable_core::ContainerId;
use wasm_bindgen::JsCast;

use crate::components::DraggableItem;
use crate::context::use_app_context;
use crate::layout::measure_items;
use crate::store::store_container;

use leptos_dragdrop::*;

/// Container with search field and drop surface
#[component]
pub fn ContainerField(container_id: ContainerId) -> impl IntoView {
    let ctx = use_app_context();
    let surface_ref = NodeRef::<Div>::new();

    let snapshot = move || store_container(&ctx.store, container_id);
    let query = move || snapshot().map(|c| c.query).unwrap_or_default();
    let items = move || snapshot().map(|c| c.items).unwrap_or_default();

    let on_mousemove = make_on_surface_mousemove(ctx.dnd, container_id.get(), move |surface, y| {
        let Some(element) = surface_ref.get_untracked() else {
            return;
        };
        let layout = measure_items(&element);
        ctx.apply(|c| c.on_drag_over(ContainerId::from(surface), y, &layout));
    });
    let on_mouseleave = make_on_surface_mouseleave(ctx.dnd);

    let on_search = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let text = input.value();
        ctx.apply(|c| c.on_search_input(container_id, &text));
    };

    let is_over = move || ctx.dnd.over_surface_read.get() == Some(container_id.get());

    view! {
        <div class="main-container">
            <div class="container-header">
                <input
                    type="text"
                    class="search"
                    placeholder="search"
                    prop:value=query
                    on:input=on_search
                />
                <button
                    class="remove-container-btn"
                    on:click=move |_| {
                        ctx.apply(|c| c.remove_container(container_id));
                    }
                >
                    "×"
                </button>
            </div>

            <div
                class=move || if is_over() { "container drag-over" } else { "container" }
                data-container-id=container_id.get().to_string()
                node_ref=surface_ref
                on:mousemove=on_mousemove
                on:mouseleave=on_mouseleave
            >
                <For
                    each=items
                    // Every field that changes the row's markup is part of the key
                    key=|item| (item.id, item.visible, item.active, item.label.clone())
                    children=move |item| view! { <DraggableItem item=item /> }
                />
            </div>
        </div>
    }
}
