use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{
    Document, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::config::AnchorConfig;
use crate::dom::{self, Listener};

/// Id an in-page link points at, if any. `"#"` alone has no target.
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// Window offset that puts an element's top edge just below the navbar.
pub fn scroll_target(element_top: f64, scroll_y: f64, nav_height: f64) -> f64 {
    (element_top + scroll_y - nav_height).max(0.0)
}

/// What a click on an in-page link does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorAction {
    /// No target; the browser navigates as usual.
    Fallthrough,
    /// Smooth scroll of the window to an offset below the navbar.
    ScrollTo(f64),
    /// Smooth `scroll_into_view` of the target.
    IntoView,
}

impl AnchorAction {
    pub fn prevents_default(self) -> bool {
        self != AnchorAction::Fallthrough
    }
}

/// `target_top` is the target's viewport top, `None` when the fragment did
/// not resolve; `nav_height` is set when a navbar offset applies.
pub fn resolve(target_top: Option<f64>, scroll_y: f64, nav_height: Option<f64>) -> AnchorAction {
    match (target_top, nav_height) {
        (None, _) => AnchorAction::Fallthrough,
        (Some(top), Some(nav)) => AnchorAction::ScrollTo(scroll_target(top, scroll_y, nav)),
        (Some(_), None) => AnchorAction::IntoView,
    }
}

pub fn install(
    window: &Window,
    document: &Document,
    config: &AnchorConfig,
) -> Result<Vec<Listener>, JsValue> {
    let links = dom::query_all(document, &config.selector);
    let mut listeners = Vec::with_capacity(links.len());

    for link in links {
        let window = window.clone();
        let document = document.clone();
        let nav_selector = config.nav_offset_selector.clone();
        let href_source = link.clone();

        listeners.push(Listener::new(&link, "click", move |e: Event| {
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            let target = fragment_target(&href).and_then(|id| document.get_element_by_id(id));
            let nav_height = nav_selector
                .as_deref()
                .and_then(|selector| dom::query_one(&document, selector))
                .map(|navbar| f64::from(navbar.offset_height()));
            let action = resolve(
                target.as_ref().map(|t| t.get_bounding_client_rect().top()),
                dom::scroll_offset(&window),
                nav_height,
            );
            if !action.prevents_default() {
                return;
            }
            e.prevent_default();
            debug!("Smooth scrolling to {href}");

            match (action, target) {
                (AnchorAction::ScrollTo(top), _) => dom::smooth_scroll_to(&window, top),
                (AnchorAction::IntoView, Some(target)) => {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
                _ => {}
            }
        })?);
    }

    Ok(listeners)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_needs_hash_and_id() {
        assert_eq!(fragment_target("#features"), Some("features"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/download#features"), None);
    }

    #[test]
    fn scroll_target_subtracts_navbar() {
        assert_eq!(scroll_target(200.0, 1000.0, 70.0), 1130.0);
    }

    #[test]
    fn missing_target_falls_through() {
        let action = resolve(None, 400.0, Some(70.0));
        assert_eq!(action, AnchorAction::Fallthrough);
        assert!(!action.prevents_default());
    }

    #[test]
    fn navbar_offset_scrolls_window() {
        let action = resolve(Some(200.0), 1000.0, Some(70.0));
        assert_eq!(action, AnchorAction::ScrollTo(1130.0));
        assert!(action.prevents_default());
    }

    #[test]
    fn without_navbar_scrolls_target_into_view() {
        let action = resolve(Some(200.0), 1000.0, None);
        assert_eq!(action, AnchorAction::IntoView);
        assert!(action.prevents_default());
    }

    #[test]
    fn scroll_target_never_negative() {
        assert_eq!(scroll_target(-500.0, 100.0, 70.0), 0.0);
    }
}
