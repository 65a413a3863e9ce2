use stylist::Style;
use web_sys::{Element, Event, MouseEvent};
use yew::prelude::*;
use yew::AppHandle;
use yew_hooks::use_event_with_window;

use crate::config::ControllerConfig;
use crate::dom;
use crate::state::{ScrollSnapshot, ScrollThresholds};

const BASE_CSS: &str = r#"
    position: fixed;
    bottom: 20px;
    right: 20px;
    width: 50px;
    height: 50px;
    border-radius: 50%;
    cursor: pointer;
    transition: all 0.3s ease;
    z-index: 1000;
    box-shadow: 0 4px 15px rgba(30, 58, 138, 0.3);
"#;

const THEME_CSS: &str = r#"
    background: #1E3A8A;
    color: white;
    border: none;
    font-size: 20px;

    &:hover {
        background: #3B82F6;
        transform: translateY(-2px);
        box-shadow: 0 6px 20px rgba(30, 58, 138, 0.4);
    }
"#;

#[derive(Properties, PartialEq, Clone)]
pub struct ScrollToTopProps {
    pub thresholds: ScrollThresholds,
    pub class: String,
    #[prop_or_default]
    pub icon_class: Option<String>,
    #[prop_or_default]
    pub themed: bool,
}

impl From<&ControllerConfig> for ScrollToTopProps {
    fn from(config: &ControllerConfig) -> Self {
        Self {
            thresholds: config.scroll_thresholds(),
            class: config.scroll_top.class.clone(),
            icon_class: config.scroll_top.icon_class.clone(),
            themed: config.scroll_top.themed,
        }
    }
}

pub fn visibility_style(visible: bool) -> &'static str {
    if visible {
        "opacity: 1; visibility: visible;"
    } else {
        "opacity: 0; visibility: hidden;"
    }
}

/// Where a click scrolls the window to, or `None` when already at the top.
pub fn click_target(offset: f64) -> Option<f64> {
    (offset > 0.0).then_some(0.0)
}

fn current_visibility(thresholds: &ScrollThresholds) -> bool {
    web_sys::window()
        .map(|window| ScrollSnapshot::at(dom::scroll_offset(&window), thresholds).scroll_top_visible)
        .unwrap_or(false)
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top(props: &ScrollToTopProps) -> Html {
    let visible = use_state_eq(|| current_visibility(&props.thresholds));

    {
        let visible = visible.clone();
        let thresholds = props.thresholds;
        use_event_with_window("scroll", move |_: Event| {
            visible.set(current_visibility(&thresholds));
        });
    }

    let style = use_memo(
        |themed| {
            let css = if *themed {
                format!("{BASE_CSS}{THEME_CSS}")
            } else {
                BASE_CSS.to_string()
            };
            Style::new(css).ok()
        },
        props.themed,
    );

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            if let Some(top) = click_target(dom::scroll_offset(&window)) {
                dom::smooth_scroll_to(&window, top);
            }
        }
    });

    let scoped = (*style).as_ref().map(|s| s.get_class_name().to_string());

    html! {
        <button
            type="button"
            aria-label="Scroll to top"
            class={classes!(props.class.clone(), scoped)}
            style={visibility_style(*visible)}
            onclick={onclick}
        >
            {
                match &props.icon_class {
                    Some(icon) => html! { <i class={icon.clone()}></i> },
                    None => html! { {"↑"} },
                }
            }
        </button>
    }
}

/// Renders the control into `root`, which stays owned by the caller.
pub fn mount(root: Element, config: &ControllerConfig) -> AppHandle<ScrollToTop> {
    yew::Renderer::<ScrollToTop>::with_root_and_props(root, config.into()).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_style_hides_and_fades() {
        assert_eq!(visibility_style(false), "opacity: 0; visibility: hidden;");
        assert_eq!(visibility_style(true), "opacity: 1; visibility: visible;");
    }

    #[test]
    fn click_scrolls_back_to_top() {
        assert_eq!(click_target(1250.0), Some(0.0));
        assert_eq!(click_target(301.0), Some(0.0));
    }

    #[test]
    fn click_at_top_does_not_scroll() {
        assert_eq!(click_target(0.0), None);
    }

    #[test]
    fn props_follow_config() {
        let config = ControllerConfig::for_variant(crate::config::Variant::Bootstrap);
        let props = ScrollToTopProps::from(&config);
        assert_eq!(props.thresholds.scroll_top, 300.0);
        assert!(!props.themed);
        assert_eq!(props.icon_class.as_deref(), Some("bi bi-arrow-up"));
    }
}
