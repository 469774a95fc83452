#![forbid(unsafe_code)]

//! Submit interception for the customization form.

use comanda_core::context::PageContext;
use comanda_core::validate::{self, FormSnapshot};
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::counter;
use crate::dom;

const FORM_ID: &str = "customizationForm";
const SAUCE_FIELD_ID: &str = "sauce_field";

pub(crate) fn install(doc: &Document, ctx: PageContext) {
    let Some(form) = doc.get_element_by_id(FORM_ID) else {
        return;
    };

    let doc = doc.clone();
    dom::listen(form.as_ref(), "submit", move |event| {
        let snapshot = snapshot_form(&doc);
        match validate::check(&snapshot, ctx) {
            Ok(plan) => {
                // The prepared value is the canonical sushi sauce; it must
                // be in the hidden field before the submission leaves.
                if let Some(value) = plan.sauce_field
                    && let Some(sauce) = dom::input_by_id(&doc, SAUCE_FIELD_ID)
                {
                    sauce.set_value(&value);
                }
            }
            Err(failures) => {
                event.prevent_default();
                if let Some(first) = failures.first() {
                    dom::alert(&first.to_string());
                }
            }
        }
    });
}

fn snapshot_form(doc: &Document) -> FormSnapshot {
    FormSnapshot {
        style: checked_value(doc, "style"),
        sauce: checked_value(doc, "sauce"),
        prepared: checked_value(doc, "prepared"),
        ingredient_count: counter::checked_ingredients(doc),
    }
}

fn checked_value(doc: &Document, group: &str) -> Option<String> {
    let selector = format!("input[name=\"{group}\"]:checked");
    let input = doc
        .query_selector(&selector)
        .ok()
        .flatten()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    Some(input.value())
}
