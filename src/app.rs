//! Sortable Lists App
//!
//! Main application component: the containers side by side and the toolbar
//! below them.

use leptos::prelude::*;
use sortable_core::{Controller, ItemId};

use crate::components::{ContainerField, Toolbar};
use crate::context::AppContext;
use crate::store::{store_active, store_container_ids, store_item_count};

use leptos_dragdrop::*;

#[component]
pub fn App(controller: Controller) -> impl IntoView {
    let dnd = create_dnd_signals();
    let ctx = AppContext::new(controller, dnd);

    // Provide context to all children
    provide_context(ctx);

    // Gesture crossed the threshold: the pressed item becomes the active one
    bind_global_mousemove(dnd, move |id| {
        log::debug!(target: "dnd", "drag start item#{}", id);
        ctx.apply(|c| c.on_drag_start(ItemId::from(id)));
    });

    // Drop anywhere ends the drag and refreshes the owner's filter
    bind_global_mouseup(dnd, move |id| {
        log::debug!(target: "dnd", "drag end item#{}", id);
        ctx.apply(|c| c.on_drag_end(ItemId::from(id)));
    });

    let container_ids = move || store_container_ids(&ctx.store);
    let is_dragging = move || store_active(&ctx.store).is_some();

    view! {
        <div class=move || if is_dragging() { "app-layout dragging-active" } else { "app-layout" }>
            <main class="main-content">
                <div id="App" class="containers">
                    <For
                        each=container_ids
                        key=|id| *id
                        children=move |id| view! { <ContainerField container_id=id /> }
                    />
                </div>

                <Toolbar />

                <p class="item-count">
                    {move || format!("{} items", store_item_count(&ctx.store))}
                </p>
            </main>
        </div>
    }
}
