use log::{info, warn};
use stylist::GlobalStyle;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};
use yew::AppHandle;

use crate::behaviors::scroll_top::{self, ScrollToTop};
use crate::behaviors::{anchors, counters, download, hover, menu, page, reveal, scroll};
use crate::config::ControllerConfig;
use crate::dom::{Listener, Observer};

/// Everything installed on the page. Dropping it detaches all listeners,
/// disconnects the observers and removes the scroll-to-top control.
pub struct PageController {
    listeners: Vec<Listener>,
    observers: Vec<Observer>,
    scroll_top: Option<(Element, AppHandle<ScrollToTop>)>,
    _styles: Option<GlobalStyle>,
}

/// Logs and skips a behavior whose setup failed so the rest still install.
fn installed<T: Default>(name: &str, result: Result<T, JsValue>) -> T {
    result.unwrap_or_else(|e| {
        warn!("Skipping {name}: {e:?}");
        T::default()
    })
}

impl PageController {
    pub fn mount(window: &Window, document: &Document, config: &ControllerConfig) -> Self {
        let styles = page::install_styles(&config.page);
        let mut listeners = Vec::new();
        let mut observers = Vec::new();

        let links = installed("anchors", anchors::install(window, document, &config.anchors));
        info!("Smooth scroll on {} anchors", links.len());
        listeners.extend(links);

        let revealed = installed("reveal", reveal::install(document, &config.reveal));
        let tracker = revealed.as_ref().map(|(_, tracker)| tracker.clone());
        observers.extend(revealed.map(|(observer, _)| observer));
        listeners.extend(installed("hover", hover::install(document, &config.hover, tracker)));

        let buttons = installed("download", download::install(document, &config.download));
        info!("Download simulation on {} buttons", buttons.len());
        listeners.extend(buttons);

        listeners.extend(installed(
            "scroll view",
            scroll::install(
                window,
                document,
                config.scroll_thresholds(),
                config.navbar.as_ref(),
                config.parallax.as_ref(),
            ),
        ));

        if let Some(menu_config) = &config.mobile_menu {
            listeners.extend(installed("mobile menu", menu::install(document, menu_config)));
        }
        if let Some(counter_config) = &config.counters {
            observers.extend(installed("counters", counters::install(document, counter_config)));
        }
        listeners.extend(installed("page load", page::install(window, document, &config.page)));

        let scroll_top = installed(
            "scroll-to-top",
            Self::mount_scroll_top(document, config).map(Some),
        );

        Self {
            listeners,
            observers,
            scroll_top,
            _styles: styles,
        }
    }

    fn mount_scroll_top(
        document: &Document,
        config: &ControllerConfig,
    ) -> Result<(Element, AppHandle<ScrollToTop>), JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        let root = document.create_element("div")?;
        body.append_child(&root)?;
        let handle = scroll_top::mount(root.clone(), config);
        Ok((root, handle))
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Drop for PageController {
    fn drop(&mut self) {
        if let Some((root, handle)) = self.scroll_top.take() {
            handle.destroy();
            root.remove();
        }
    }
}
