#![forbid(unsafe_code)]

//! Touch niceties for the tablet: pressed-state opacity on buttons and an
//! injected style override that keeps text selection and pointer events
//! enabled despite the kiosk stylesheet.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom;

const FEEDBACK_SELECTOR: &str = ".action-button, .quantity-btn, .quick-amount-btn, .calc-btn";

const SELECTION_OVERRIDE_CSS: &str = "\
* {
    user-select: auto !important;
    -webkit-user-select: auto !important;
    -moz-user-select: auto !important;
    -ms-user-select: auto !important;
}

input, label, button {
    pointer-events: auto !important;
}
";

pub(crate) fn install(doc: &Document) {
    install_button_feedback(doc);
    unlock_text_selection(doc);
}

fn install_button_feedback(doc: &Document) {
    for element in dom::query_all(doc, FEEDBACK_SELECTOR) {
        let Ok(button) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        {
            let button = button.clone();
            dom::listen(button.clone().as_ref(), "touchstart", move |_event| {
                let _ = button.style().set_property("opacity", "0.8");
            });
        }
        dom::listen(button.clone().as_ref(), "touchend", move |_event| {
            let _ = button.style().set_property("opacity", "1");
        });
    }
}

fn unlock_text_selection(doc: &Document) {
    let Ok(style) = doc.create_element("style") else {
        return;
    };
    style.set_text_content(Some(SELECTION_OVERRIDE_CSS));
    if let Some(head) = doc.head() {
        let _ = head.append_child(&style);
    }
}
