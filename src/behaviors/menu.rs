use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlElement};

use crate::config::{MobileMenuConfig, MobileMenuMode};
use crate::dom::{self, Listener};

const ENTRANCE_CLASSES: [&str; 2] = ["animate__animated", "animate__fadeInRight"];

pub fn link_delay(index: u32) -> String {
    format!("{:.1}s", f64::from(index) * 0.1)
}

fn stagger_links(menu: &HtmlElement) {
    let Ok(links) = menu.query_selector_all(".nav-link") else {
        return;
    };
    for index in 0..links.length() {
        let Some(link) = links.item(index).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        dom::set_style(&link, "animation-delay", &link_delay(index));
        for class in ENTRANCE_CLASSES {
            let _ = link.class_list().add_1(class);
        }
    }
}

pub fn install(document: &Document, config: &MobileMenuConfig) -> Result<Option<Listener>, JsValue> {
    let (Some(toggle), Some(menu)) = (
        dom::query_one(document, &config.toggle_selector),
        dom::query_one(document, &config.menu_selector),
    ) else {
        return Ok(None);
    };

    let mode = config.mode;
    let button = toggle.clone();
    let listener = Listener::new(&toggle, "click", move |_: Event| match mode {
        MobileMenuMode::Toggle => {
            let _ = menu.class_list().toggle("active");
            let _ = button.class_list().toggle("active");
        }
        MobileMenuMode::Stagger => stagger_links(&menu),
    })?;
    Ok(Some(listener))
}

#[cfg(test)]
mod tests {
    use super::link_delay;

    #[test]
    fn links_enter_a_tenth_of_a_second_apart() {
        assert_eq!(link_delay(0), "0.0s");
        assert_eq!(link_delay(3), "0.3s");
    }
}
