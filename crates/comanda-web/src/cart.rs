#![forbid(unsafe_code)]

//! Cart quantity controls and server persistence.
//!
//! Persistence is fire-and-forget: each accepted edit spawns one request,
//! and a confirmed success reconciles by reloading the whole page. A
//! superseded request is never cancelled; whichever success completes
//! last still reloads into the server's current truth.

use comanda_core::cart::{self, PersistError, UpdateAck};
use comanda_core::messages;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlInputElement, RequestInit, Response};

use crate::dom;

const QUANTITY_INPUT_SELECTOR: &str = ".quantity-input";

pub(crate) fn install(doc: &Document) {
    let plus = dom::query_all(doc, ".quantity-btn.plus");
    let minus = dom::query_all(doc, ".quantity-btn.minus");
    if plus.is_empty() && minus.is_empty() {
        return; // not the cart page
    }

    for btn in plus {
        let doc = doc.clone();
        wire_step(btn, move |index| {
            let Some(input) = line_input(&doc, &index) else {
                return;
            };
            let value = cart::increment(&input.value());
            input.set_value(&value.to_string());
            persist(index, value);
        });
    }

    for btn in minus {
        let doc = doc.clone();
        wire_step(btn, move |index| {
            let Some(input) = line_input(&doc, &index) else {
                return;
            };
            if let Some(value) = cart::decrement(&input.value()) {
                input.set_value(&value.to_string());
                persist(index, value);
            }
        });
    }

    for element in dom::query_all(doc, QUANTITY_INPUT_SELECTOR) {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        dom::listen(input.clone().as_ref(), "change", move |_event| {
            let Some(index) = input.get_attribute("data-index") else {
                return;
            };
            let value = cart::clamp_edit(&input.value());
            input.set_value(&value.to_string());
            persist(index, value);
        });
    }

    install_remove_confirm(doc, ".item-action.delete");
}

/// Removal keeps its native action (a link or submit); declining the
/// prompt cancels it.
pub(crate) fn install_remove_confirm(doc: &Document, selector: &str) {
    for btn in dom::query_all(doc, selector) {
        dom::listen(btn.as_ref(), "click", move |event| {
            if !dom::confirm(messages::REMOVE_CONFIRM) {
                event.prevent_default();
            }
        });
    }
}

fn wire_step<F>(btn: Element, mut apply: F)
where
    F: FnMut(String) + 'static,
{
    dom::listen(btn.clone().as_ref(), "click", move |_event| {
        if let Some(index) = btn.get_attribute("data-index") {
            apply(index);
        }
    });
}

fn line_input(doc: &Document, index: &str) -> Option<HtmlInputElement> {
    doc.query_selector(&format!(
        "{QUANTITY_INPUT_SELECTOR}[data-index=\"{index}\"]"
    ))
    .ok()
    .flatten()?
    .dyn_into::<HtmlInputElement>()
    .ok()
}

/// Spawn one update request; reload on confirmed success, log failure.
pub(crate) fn persist(index: String, quantity: u32) {
    wasm_bindgen_futures::spawn_local(async move {
        match send_update(&index, quantity).await {
            Ok(UpdateAck { success: true }) => {
                if let Some(window) = dom::window() {
                    let _ = window.location().reload();
                }
            }
            Ok(UpdateAck { success: false }) => {
                // Server declined; the line stays locally edited until the
                // next reload.
                warn!(index = %index, quantity, "quantity update not accepted");
            }
            Err(err) => {
                warn!(index = %index, quantity, %err, "quantity update failed");
                dom::console_error(&format!("Error updating quantity: {err}"));
            }
        }
    });
}

async fn send_update(index: &str, quantity: u32) -> Result<UpdateAck, PersistError> {
    let window = dom::window().ok_or_else(|| PersistError::Http("no window".into()))?;

    let init = RequestInit::new();
    init.set_method("POST");

    let response = JsFuture::from(
        window.fetch_with_str_and_init(&cart::update_path(index, quantity), &init),
    )
    .await
    .map_err(|err| PersistError::Http(dom::js_desc(&err)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|err| PersistError::Http(dom::js_desc(&err)))?;

    let body = JsFuture::from(
        response
            .text()
            .map_err(|err| PersistError::Http(dom::js_desc(&err)))?,
    )
    .await
    .map_err(|err| PersistError::Http(dom::js_desc(&err)))?;
    let body = body
        .as_string()
        .ok_or_else(|| PersistError::BadBody("response body is not text".into()))?;

    cart::parse_ack(&body)
}
