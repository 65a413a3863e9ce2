use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, Node};

use crate::config::RevealConfig;
use crate::dom::{self, Observer};
use crate::state::RevealSet;

fn is_same(element: &HtmlElement, target: &Element) -> bool {
    let node: &Node = target;
    element.is_same_node(Some(node))
}

/// Shared view of which observed elements are still hidden.
#[derive(Clone)]
pub struct RevealTracker {
    elements: Rc<Vec<HtmlElement>>,
    states: Rc<RefCell<RevealSet>>,
}

impl RevealTracker {
    pub fn is_pending(&self, element: &Element) -> bool {
        self.states
            .borrow()
            .is_pending_matching(self.elements.as_slice(), |el| is_same(el, element))
    }
}

pub fn transition_for(index: usize, config: &RevealConfig) -> String {
    let delay = index as f64 * config.stagger_secs;
    let duration = config.duration_secs;
    if delay > 0.0 {
        format!("opacity {duration}s ease {delay:.1}s, transform {duration}s ease {delay:.1}s")
    } else {
        format!("opacity {duration}s ease, transform {duration}s ease")
    }
}

/// Puts every matching element in its hidden state and reveals each one
/// the first time it intersects the viewport.
pub fn install(
    document: &Document,
    config: &RevealConfig,
) -> Result<Option<(Observer, RevealTracker)>, JsValue> {
    let elements = dom::query_all(document, &config.selector);
    if elements.is_empty() {
        return Ok(None);
    }

    let tracker = RevealTracker {
        states: Rc::new(RefCell::new(RevealSet::new(elements.len()))),
        elements: Rc::new(elements),
    };
    let reveal_classes = config.reveal_classes.clone();
    let unobserve = config.unobserve_after_reveal;

    let observer = Observer::new(config.threshold, Some(config.root_margin.as_str()), {
        let tracker = tracker.clone();
        move |entry: &IntersectionObserverEntry, observer: &IntersectionObserver| {
            let target = entry.target();
            if unobserve {
                observer.unobserve(&target);
            }
            let mut states = tracker.states.borrow_mut();
            let elements = tracker.elements.as_slice();
            let Some(index) = states.reveal_matching(elements, |el| is_same(el, &target)) else {
                return;
            };
            let element = &elements[index];
            dom::set_style(element, "opacity", "1");
            dom::set_style(element, "transform", "translateY(0)");
            dom::add_classes(element, &reveal_classes);
            debug!(
                "Revealed element {index} ({}/{})",
                states.revealed_count(),
                states.len()
            );
        }
    })?;

    let hidden_transform = format!("translateY({}px)", config.offset_px);
    for (index, element) in tracker.elements.iter().enumerate() {
        dom::set_style(element, "opacity", "0");
        dom::set_style(element, "transform", &hidden_transform);
        dom::set_style(element, "transition", &transition_for(index, config));
        observer.observe(element);
    }

    info!("Watching {} elements for reveal", tracker.elements.len());
    Ok(Some((observer, tracker)))
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ControllerConfig, Variant};

    #[test]
    fn classic_transition_has_no_delay() {
        let config = ControllerConfig::for_variant(Variant::Classic).reveal;
        assert_eq!(
            transition_for(3, &config),
            "opacity 0.6s ease, transform 0.6s ease"
        );
    }

    #[test]
    fn bootstrap_transition_staggers_by_index() {
        let config = ControllerConfig::for_variant(Variant::Bootstrap).reveal;
        assert_eq!(
            transition_for(0, &config),
            "opacity 0.6s ease, transform 0.6s ease"
        );
        assert_eq!(
            transition_for(2, &config),
            "opacity 0.6s ease 0.2s, transform 0.6s ease 0.2s"
        );
    }
}
