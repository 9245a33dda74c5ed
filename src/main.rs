//! Sortable Lists Frontend Entry Point

mod app;
mod components;
mod context;
mod layout;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;
use sortable_core::{Controller, SortableConfig};

/// Element holding an optional JSON configuration
const CONFIG_ELEMENT_ID: &str = "sortable-config";

/// Read the start-up configuration from the page, falling back to defaults.
fn load_config() -> SortableConfig {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(json) => SortableConfig::from_json(&json).unwrap_or_else(|err| {
            log::warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, err);
            SortableConfig::default()
        }),
        None => SortableConfig::default(),
    }
}

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);

    let config = load_config();
    let controller = Controller::bootstrap(&config);
    log::info!(
        "started with {} containers, {} items",
        controller.registry().containers().len(),
        controller.registry().items().len()
    );

    mount_to_body(move || view! { <App controller=controller.clone() /> });
}
