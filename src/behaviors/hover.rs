use log::info;
use wasm_bindgen::JsValue;
use web_sys::{Document, Event};

use crate::behaviors::reveal::RevealTracker;
use crate::config::HoverRule;
use crate::dom::{self, Listener};

/// Elements still waiting for their reveal keep the hidden transform, so
/// neither edge touches them. Disabled elements are only skipped on enter,
/// leave always restores the baseline.
pub fn applies(entering: bool, disabled: bool, pending_reveal: bool) -> bool {
    !pending_reveal && !(entering && disabled)
}

pub fn install(
    document: &Document,
    rules: &[HoverRule],
    reveal: Option<RevealTracker>,
) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::new();

    for rule in rules {
        let elements = dom::query_all(document, &rule.selector);
        for element in &elements {
            for (event, entering, styles) in [
                ("mouseenter", true, rule.enter.clone()),
                ("mouseleave", false, rule.leave.clone()),
            ] {
                let target = element.clone();
                let element = element.clone();
                let reveal = reveal.clone();
                let handler = move |_: Event| {
                    let pending = reveal.as_ref().map_or(false, |r| r.is_pending(&element));
                    if applies(entering, dom::is_disabled(&element), pending) {
                        dom::set_styles(&element, &styles);
                    }
                };
                listeners.push(Listener::new(&target, event, handler)?);
            }
        }
        if !elements.is_empty() {
            info!("Hover effects on {} x {}", elements.len(), rule.selector);
        }
    }

    Ok(listeners)
}

#[cfg(test)]
mod tests {
    use super::applies;

    #[test]
    fn enter_skips_disabled_elements() {
        assert!(applies(true, false, false));
        assert!(!applies(true, true, false));
    }

    #[test]
    fn leave_restores_disabled_elements() {
        assert!(applies(false, true, false));
    }

    #[test]
    fn unrevealed_elements_keep_hidden_transform() {
        assert!(!applies(true, false, true));
        assert!(!applies(false, false, true));
    }
}
