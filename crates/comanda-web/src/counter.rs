#![forbid(unsafe_code)]

//! Ingredient counter rendering.

use comanda_core::context::PageContext;
use comanda_core::ingredients::IngredientTally;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::dom;

pub(crate) const INGREDIENT_SELECTOR: &str = ".ingredient-checkbox";
const COUNTER_ID: &str = "selected-count";

/// Number of currently checked ingredient inputs.
pub(crate) fn checked_ingredients(doc: &Document) -> usize {
    dom::query_all(doc, INGREDIENT_SELECTOR)
        .iter()
        .filter_map(|el| el.dyn_ref::<HtmlInputElement>())
        .filter(|input| input.checked())
        .count()
}

/// Re-render the count display and its tri-state color cue.
///
/// Skips silently when the page has no counter or no ingredient inputs.
pub(crate) fn refresh(doc: &Document, ctx: PageContext) {
    let Some(counter) = doc.get_element_by_id(COUNTER_ID) else {
        return;
    };
    if dom::query_all(doc, INGREDIENT_SELECTOR).is_empty() {
        return;
    }

    let tally = IngredientTally::new(checked_ingredients(doc), ctx);
    counter.set_text_content(Some(&tally.selected.to_string()));
    dom::set_color(&counter, tally.color());
}
