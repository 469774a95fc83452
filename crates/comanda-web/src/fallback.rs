#![forbid(unsafe_code)]

//! Baseline handler set.
//!
//! Installed only when the page opts out of the enhanced handlers. Covers
//! the behaviors a degraded client still needs: quantity edits, removal and
//! cancel confirmations, and required-radio validation. Deliberately no
//! option cards, no counter, no cash calculator.

use std::collections::BTreeSet;

use comanda_core::cart::{self, BaselineEdit};
use comanda_core::messages;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::cart as cart_web;
use crate::dom;

pub(crate) fn install(doc: &Document) {
    install_cancel_confirm(doc);
    install_quantity_edits(doc);
    cart_web::install_remove_confirm(doc, ".remove-btn, .item-action.delete");
    install_required_radios(doc);
}

fn install_cancel_confirm(doc: &Document) {
    let Some(btn) = doc.get_element_by_id("cancel-btn") else {
        return;
    };
    dom::listen(btn.clone().as_ref(), "click", move |_event| {
        let Some(url) = btn.get_attribute("data-url") else {
            return;
        };
        if dom::confirm(messages::CANCEL_CONFIRM)
            && let Some(window) = dom::window()
        {
            let _ = window.location().set_href(&url);
        }
    });
}

fn install_quantity_edits(doc: &Document) {
    for element in dom::query_all(doc, ".quantity-input") {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        dom::listen(input.clone().as_ref(), "change", move |_event| {
            let Some(index) = input.get_attribute("data-index") else {
                return;
            };
            match cart::baseline_edit(&input.value()) {
                BaselineEdit::ResetToMin => {
                    input.set_value(&cart::MIN_QUANTITY.to_string());
                }
                BaselineEdit::Persist(value) => cart_web::persist(index, value),
            }
        });
    }
}

/// One alert per required radio group with no checked member; submission is
/// blocked if any group is missing.
fn install_required_radios(doc: &Document) {
    let Some(form) = doc.get_element_by_id("customizationForm") else {
        return;
    };
    let doc = doc.clone();
    dom::listen(form.as_ref(), "submit", move |event| {
        let mut groups = BTreeSet::new();
        for element in dom::query_all(&doc, "input[type=\"radio\"][required]") {
            if let Some(name) = element.get_attribute("name") {
                groups.insert(name);
            }
        }

        let mut invalid = false;
        for group in groups {
            let checked = doc
                .query_selector(&format!("input[name=\"{group}\"]:checked"))
                .ok()
                .flatten();
            if checked.is_none() {
                invalid = true;
                dom::alert(&messages::required_group_alert(&group));
            }
        }

        if invalid {
            event.prevent_default();
        }
    });
}
