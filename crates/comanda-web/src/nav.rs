#![forbid(unsafe_code)]

//! Cancel button (enhanced set): immediate navigation, no confirmation;
//! touch devices double-prompting was the original complaint.

use web_sys::Document;

use crate::dom;

const CANCEL_BTN_ID: &str = "cancel-btn";

pub(crate) fn install(doc: &Document) {
    let Some(btn) = doc.get_element_by_id(CANCEL_BTN_ID) else {
        return;
    };

    dom::listen(btn.clone().as_ref(), "click", move |_event| {
        let target = match btn.get_attribute("data-url") {
            Some(url) if !url.is_empty() => url,
            _ => {
                dom::console_error("cancel button has no data-url, falling back to /");
                "/".to_owned()
            }
        };
        if let Some(window) = dom::window() {
            let _ = window.location().set_href(&target);
        }
    });
}
