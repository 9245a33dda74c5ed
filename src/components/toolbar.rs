//! Toolbar Component
//!
//! Text input for new items plus the add item, add container and reset
//! buttons.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());

    // Empty text is allowed; the new item simply has an empty label
    let add_item = move |_| {
        let text = new_text.get_untracked();
        ctx.apply(|c| c.add_draggable_element(&text).is_some());
    };

    let add_container = move |_| {
        ctx.apply(|c| {
            c.create_container();
            true
        });
    };

    let reset = move |_| {
        ctx.apply(|c| {
            c.reset_all();
            true
        });
    };

    view! {
        <div class="add-field">
            <input
                type="text"
                id="new-element-input"
                placeholder="Item text"
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    if let Some(input) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    {
                        set_new_text.set(input.value());
                    }
                }
            />
            <button class="add-button" on:click=add_item>"Add item"</button>
            <button class="add-container-button" on:click=add_container>"Add container"</button>
            <button class="reset-button" on:click=reset>"Reset"</button>
            <button class="state-button" on:click=move |_| ctx.log_state(0)>"Log state"</button>
        </div>
    }
}
