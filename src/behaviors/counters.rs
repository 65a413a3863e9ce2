use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, info};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry};

use crate::config::CounterConfig;
use crate::dom::{self, Observer};
use crate::state::{parse_counter_target, CounterProgress};

fn start(element: Element, progress: CounterProgress, tick_ms: u32) {
    let progress = Rc::new(RefCell::new(progress));
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

    let interval = {
        let handle = handle.clone();
        Interval::new(tick_ms, move || {
            let (value, done) = progress.borrow_mut().tick();
            element.set_text_content(Some(&value.to_string()));
            if done {
                debug!("Counter reached {value}");
                // Dropping the interval cancels it.
                handle.borrow_mut().take();
            }
        })
    };
    *handle.borrow_mut() = Some(interval);
}

/// Counts each statistic up to its target the first time it becomes
/// visible. Elements without a numeric target are left alone.
pub fn install(document: &Document, config: &CounterConfig) -> Result<Option<Observer>, JsValue> {
    let counters: Vec<_> = dom::query_all(document, &config.selector)
        .into_iter()
        .filter(|el| {
            el.get_attribute(&config.attribute)
                .and_then(|raw| parse_counter_target(&raw))
                .is_some()
        })
        .collect();
    if counters.is_empty() {
        return Ok(None);
    }

    let attribute = config.attribute.clone();
    let duration_ms = config.duration_ms;
    let tick_ms = config.tick_ms;
    let observer = Observer::new(
        0.0,
        None,
        move |entry: &IntersectionObserverEntry, observer: &IntersectionObserver| {
            let target = entry.target();
            observer.unobserve(&target);
            let Some(count) = target
                .get_attribute(&attribute)
                .and_then(|raw| parse_counter_target(&raw))
            else {
                return;
            };
            start(target, CounterProgress::new(count, duration_ms, tick_ms), tick_ms);
        },
    )?;

    for counter in &counters {
        observer.observe(counter);
    }
    info!("Watching {} counters", counters.len());
    Ok(Some(observer))
}
