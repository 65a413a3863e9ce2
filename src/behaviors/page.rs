use gloo_timers::callback::Timeout;
use log::{info, warn};
use stylist::GlobalStyle;
use wasm_bindgen::JsValue;
use web_sys::{Document, Event, Window};

use crate::config::PageConfig;
use crate::dom::{self, Listener};

const FADE_IN_CSS: &str = r#"
    body {
        opacity: 0;
        transition: opacity 0.5s ease;
    }
"#;

const ANIMATION_CSS: &str = r#"
    @keyframes pulse {
        0% { transform: scale(1); }
        50% { transform: scale(1.05); }
        100% { transform: scale(1); }
    }

    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }

    @keyframes fadeInRight {
        from { opacity: 0; transform: translateX(30px); }
        to { opacity: 1; transform: translateX(0); }
    }

    .animate__animated {
        animation-duration: 0.6s;
    }

    .animate__fadeInUp {
        animation-name: fadeInUp;
    }

    .animate__fadeInRight {
        animation-name: fadeInRight;
    }

    .btn:disabled, .btn[aria-disabled="true"] {
        opacity: 0.7;
        cursor: not-allowed;
    }
"#;

const DECORATION_CSS: &str = r#"
    @keyframes float {
        0%, 100% { transform: translateY(0px); }
        50% { transform: translateY(-10px); }
    }

    .phone-frame {
        animation: float 6s ease-in-out infinite;
    }

    .feature-card:hover .feature-icon {
        animation: pulse 1s ease-in-out;
    }

    .btn:hover {
        transform: translateY(-2px);
    }

    .card:hover {
        transform: translateY(-5px) scale(1.02);
    }

    .badge:hover {
        transform: scale(1.1);
    }

    .navbar {
        transition: all 0.3s ease;
    }

    .navbar.bg-transparent {
        background: transparent !important;
    }

    @media (max-width: 768px) {
        .phone-frame {
            animation: none;
        }
    }
"#;

pub fn stylesheet(config: &PageConfig) -> String {
    let mut css = String::new();
    if config.fade_in_body {
        css.push_str(FADE_IN_CSS);
    }
    css.push_str(ANIMATION_CSS);
    if config.decorations {
        css.push_str(DECORATION_CSS);
    }
    css
}

/// Registers the page-wide stylesheet. It stays mounted for the session.
pub fn install_styles(config: &PageConfig) -> Option<GlobalStyle> {
    match GlobalStyle::new(stylesheet(config)) {
        Ok(style) => Some(style),
        Err(e) => {
            warn!("Failed to register page styles: {e}");
            None
        }
    }
}

fn on_loaded(document: &Document, config: &PageConfig) {
    if let Some(body) = document.body() {
        dom::set_style(&body, "opacity", "1");
    }
    if let Some(badge) = config
        .pulse_selector
        .as_deref()
        .and_then(|selector| dom::query_one(document, selector))
    {
        Timeout::new(config.pulse_delay_ms, move || {
            dom::set_style(&badge, "animation", "pulse 2s infinite");
        })
        .forget();
    }
    info!("Page loaded");
}

/// Fades the body in once the window has finished loading.
pub fn install(
    window: &Window,
    document: &Document,
    config: &PageConfig,
) -> Result<Option<Listener>, JsValue> {
    if document.ready_state() == "complete" {
        on_loaded(document, config);
        return Ok(None);
    }

    let document = document.clone();
    let config = config.clone();
    let listener = Listener::new(window, "load", move |_: Event| on_loaded(&document, &config))?;
    Ok(Some(listener))
}

#[cfg(test)]
mod tests {
    use super::stylesheet;
    use crate::config::{ControllerConfig, Variant};

    #[test]
    fn bootstrap_floats_phone_frame_and_animates_navbar() {
        let css = stylesheet(&ControllerConfig::for_variant(Variant::Bootstrap).page);
        assert!(css.contains("@keyframes float"));
        assert!(css.contains("animation: float 6s ease-in-out infinite"));
        assert!(css.contains("@media (max-width: 768px)"));
        assert!(css.contains(".feature-card:hover .feature-icon"));
        assert!(css.contains(".navbar {\n        transition: all 0.3s ease;"));
        assert!(css.contains(".navbar.bg-transparent"));
    }

    #[test]
    fn classic_has_no_unused_keyframes() {
        let css = stylesheet(&ControllerConfig::for_variant(Variant::Classic).page);
        assert!(!css.contains("float"));
        assert!(!css.contains(".navbar"));
        assert!(css.contains("opacity: 0;"));
    }
}
