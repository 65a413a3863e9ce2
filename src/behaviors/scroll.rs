use log::info;
use wasm_bindgen::JsValue;
use web_sys::{Document, Event, HtmlElement, Window};

use crate::config::{NavbarConfig, ParallaxConfig};
use crate::dom::{self, Listener};
use crate::state::{ScrollSnapshot, ScrollThresholds};

/// Scroll-driven decorations, applied together from one snapshot per
/// scroll event.
struct ScrollView {
    navbar: Option<(HtmlElement, NavbarConfig)>,
    hero: Option<HtmlElement>,
}

impl ScrollView {
    fn render(&self, snapshot: &ScrollSnapshot) {
        if let Some((navbar, config)) = &self.navbar {
            if snapshot.navbar_scrolled {
                dom::add_classes(navbar, &config.scrolled_classes);
                dom::remove_classes(navbar, &config.top_classes);
            } else {
                dom::remove_classes(navbar, &config.scrolled_classes);
                dom::add_classes(navbar, &config.top_classes);
            }
        }
        if let Some(hero) = &self.hero {
            dom::set_style(
                hero,
                "transform",
                &format!("translateY({}px)", snapshot.parallax_offset),
            );
        }
    }
}

pub fn install(
    window: &Window,
    document: &Document,
    thresholds: ScrollThresholds,
    navbar: Option<&NavbarConfig>,
    parallax: Option<&ParallaxConfig>,
) -> Result<Option<Listener>, JsValue> {
    let view = ScrollView {
        navbar: navbar.and_then(|config| {
            dom::query_one(document, &config.selector).map(|el| (el, config.clone()))
        }),
        hero: parallax.and_then(|config| dom::query_one(document, &config.selector)),
    };
    if view.navbar.is_none() && view.hero.is_none() {
        return Ok(None);
    }
    info!(
        "Scroll view: navbar={} parallax={}",
        view.navbar.is_some(),
        view.hero.is_some()
    );

    view.render(&ScrollSnapshot::at(dom::scroll_offset(window), &thresholds));

    let source = window.clone();
    let listener = Listener::new(window, "scroll", move |_: Event| {
        view.render(&ScrollSnapshot::at(dom::scroll_offset(&source), &thresholds));
    })?;
    Ok(Some(listener))
}
