use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlElement};

use crate::config::{DisableMode, DownloadConfig};
use crate::dom::{self, Listener};
use crate::state::{ButtonView, DownloadState};

fn apply(button: &HtmlElement, view: &ButtonView, mode: DisableMode) {
    button.set_inner_html(&view.content);
    if view.disabled {
        disable(button, mode);
    } else {
        enable(button, mode);
    }
}

fn disable(button: &HtmlElement, mode: DisableMode) {
    match mode {
        DisableMode::Attribute => {
            let _ = button.set_attribute("disabled", "");
            let _ = button.set_attribute("aria-disabled", "true");
        }
        DisableMode::PointerEvents => dom::set_style(button, "pointer-events", "none"),
    }
}

fn enable(button: &HtmlElement, mode: DisableMode) {
    match mode {
        DisableMode::Attribute => {
            let _ = button.remove_attribute("disabled");
            let _ = button.remove_attribute("aria-disabled");
        }
        DisableMode::PointerEvents => {
            let _ = button.style().remove_property("pointer-events");
        }
    }
}

/// Swaps each download button's content for a loading indicator, then
/// restores it after a fixed delay. Nothing is actually transferred.
pub fn install(document: &Document, config: &DownloadConfig) -> Result<Vec<Listener>, JsValue> {
    let buttons = dom::query_all(document, &config.selector);
    let mut listeners = Vec::with_capacity(buttons.len());

    for button in buttons {
        let state = Rc::new(RefCell::new(DownloadState::default()));
        let config = config.clone();
        let target = button.clone();

        listeners.push(Listener::new(&target, "click", move |e: Event| {
            let view = state
                .borrow_mut()
                .click(&button.inner_html(), &config.loading_html);
            let Some(view) = view else {
                e.prevent_default();
                return;
            };
            info!("Download button clicked");
            apply(&button, &view, config.disable);

            if let Some(ms) = config.press_feedback_ms {
                dom::set_style(&button, "transform", "scale(0.95)");
                let button = button.clone();
                Timeout::new(ms, move || {
                    let _ = button.style().remove_property("transform");
                })
                .forget();
            }

            let state = state.clone();
            let button = button.clone();
            let delay = config.delay_ms;
            let mode = config.disable;
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                let view = state.borrow_mut().elapse();
                if let Some(view) = view {
                    apply(&button, &view, mode);
                    debug!("Download button restored");
                }
            });
        })?);
    }

    Ok(listeners)
}
