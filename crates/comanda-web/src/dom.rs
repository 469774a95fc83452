#![forbid(unsafe_code)]

//! Small DOM helpers shared by every installer.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventInit, EventTarget, HtmlInputElement, Window};

pub(crate) fn window() -> Option<Window> {
    web_sys::window()
}

pub(crate) fn document() -> Option<Document> {
    window()?.document()
}

/// All elements matching `selector`, or empty when the query fails.
pub(crate) fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(list.length() as usize);
    for idx in 0..list.length() {
        if let Some(element) = list.get(idx).and_then(|node| node.dyn_into::<Element>().ok()) {
            out.push(element);
        }
    }
    out
}

/// The first input matching `selector` under `root`, as an input element.
pub(crate) fn input_in(root: &Element, selector: &str) -> Option<HtmlInputElement> {
    root.query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

pub(crate) fn input_by_id(doc: &Document, id: &str) -> Option<HtmlInputElement> {
    doc.get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

/// Register `handler` for `event` on `target` for the rest of the page's
/// life. The closure is intentionally leaked; handlers are never removed.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}

/// Re-dispatch a bubbling `change` on `input` so listeners attached to the
/// input (or the form) observe a card click exactly like a direct click.
pub(crate) fn dispatch_change(input: &HtmlInputElement) {
    let init = EventInit::new();
    init.set_bubbles(true);
    if let Ok(event) = Event::new_with_event_init_dict("change", &init) {
        let _ = input.dispatch_event(&event);
    }
}

pub(crate) fn set_color(element: &Element, color: &str) {
    if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("color", color);
    }
}

pub(crate) fn set_display(element: &Element, value: &str) {
    if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("display", value);
    }
}

pub(crate) fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

pub(crate) fn confirm(message: &str) -> bool {
    window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub(crate) fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

/// Human-readable description of a JS error value.
pub(crate) fn js_desc(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub(crate) fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("panic: {info}")
            };
            console_error(&msg);
        }));
    });
}
