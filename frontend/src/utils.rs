use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit,
};

/// All elements matching `selector`, in document order. An invalid selector
/// yields nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First element matching `selector`, if any.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Attach `handler` for the page's lifetime.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    // Listeners are never removed, so the closure lives as long as the page.
    closure.forget();
}

/// [`listen`] with `{ passive: true }`, for scroll handlers.
pub fn listen_passive(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

/// Append a `<style>` block with `css` to `<head>`.
pub fn inject_style(document: &Document, css: &str) {
    let Some(head) = document.head() else {
        return;
    };
    if let Ok(style) = document.create_element("style") {
        style.set_text_content(Some(css));
        let _ = head.append_child(&style);
    }
}

/// Current vertical scroll offset of the window.
pub fn scroll_y(window: &web_sys::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Viewport height of the window.
pub fn viewport_height(window: &web_sys::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Build an observer that reports `(index, intersecting)` for entries
/// targeting one of `elements`, and unobserves an element when
/// `on_entry` returns `true`.
pub fn observe_once(
    elements: Vec<Element>,
    options: Option<&IntersectionObserverInit>,
    mut on_entry: impl FnMut(usize, bool, &Element) -> bool + 'static,
) {
    if elements.is_empty() {
        return;
    }
    let elements = Rc::new(elements);
    let tracked = elements.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = tracked.iter().position(|el| *el == target) else {
                    continue;
                };
                if on_entry(index, entry.is_intersecting(), &target) {
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = match options {
        Some(options) => {
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)
        },
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    };
    let Ok(observer) = observer else {
        log::debug!("IntersectionObserver unavailable");
        return;
    };
    callback.forget();

    for element in elements.iter() {
        observer.observe(element);
    }
}
