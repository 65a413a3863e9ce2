use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Window};

mod config;
mod controller;
mod dom;
mod state;
mod behaviors {
    pub mod anchors;
    pub mod counters;
    pub mod download;
    pub mod hover;
    pub mod menu;
    pub mod page;
    pub mod reveal;
    pub mod scroll;
    pub mod scroll_top;
}

use config::{ControllerConfig, CONFIG_ELEMENT_ID};
use controller::PageController;

fn load_config(document: &Document) -> ControllerConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return ControllerConfig::default();
    };
    match ControllerConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring invalid #{CONFIG_ELEMENT_ID}: {e}");
            ControllerConfig::default()
        }
    }
}

fn start(window: &Window, document: &Document) {
    let config = load_config(document);
    let controller = PageController::mount(window, document, &config);
    info!(
        "Page behaviors ready ({} listeners, {} observers)",
        controller.listener_count(),
        controller.observer_count()
    );
    // Lives for the rest of the page session.
    std::mem::forget(controller);
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() != "loading" {
        start(&window, &document);
        return;
    }

    info!("Waiting for DOMContentLoaded");
    let target = document.clone();
    let on_ready = Closure::once(move || start(&window, &document));
    if let Err(e) = target
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        warn!("Could not wait for DOMContentLoaded: {e:?}");
    }
    on_ready.forget();
}
