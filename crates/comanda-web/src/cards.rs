#![forbid(unsafe_code)]

//! Option-card wiring: card-body clicks drive the wrapped input.

use comanda_core::context::PageContext;
use comanda_core::ingredients;
use comanda_core::messages;
use comanda_core::selection::{self, CardClickOutcome};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::counter;
use crate::dom;

const CARD_SELECTOR: &str = ".option-card";
const SELECTED_CLASS: &str = "selected";
const SAUCE_FIELD_ID: &str = "sauce_field";

pub(crate) fn install(doc: &Document, ctx: PageContext) {
    for card in dom::query_all(doc, CARD_SELECTOR) {
        if let Some(input) = dom::input_in(&card, "input[type=\"checkbox\"]") {
            wire_checkbox_card(doc, &card, input, ctx);
        } else if let Some(input) = dom::input_in(&card, "input[type=\"radio\"]") {
            wire_radio_card(doc, &card, input, ctx);
        }
    }
    install_direct_change_guard(doc, ctx);
}

/// Clicks landing on the input itself or anywhere inside its label keep
/// their native behavior; intercepting them would double-toggle.
fn clicked_native_surface(event: &Event, input: &HtmlInputElement) -> bool {
    let Some(target) = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
    else {
        return false;
    };
    if target.is_same_node(Some(input.as_ref())) {
        return true;
    }
    if target.tag_name().eq_ignore_ascii_case("label") {
        return true;
    }
    matches!(target.closest("label"), Ok(Some(_)))
}

fn wire_checkbox_card(doc: &Document, card: &Element, input: HtmlInputElement, ctx: PageContext) {
    if input.checked() {
        let _ = card.class_list().add_1(SELECTED_CLASS);
    }

    let doc = doc.clone();
    let card = card.clone();
    dom::listen(card.clone().as_ref(), "click", move |event| {
        if clicked_native_surface(&event, &input) {
            return;
        }

        let now_checked = !input.checked();
        input.set_checked(now_checked);
        let is_ingredient = input.class_list().contains("ingredient-checkbox");
        let outcome = selection::checkbox_click(
            now_checked,
            is_ingredient,
            counter::checked_ingredients(&doc),
            ctx,
        );
        match outcome {
            CardClickOutcome::Toggled { now_checked } => {
                let _ = card.class_list().toggle_with_force(SELECTED_CLASS, now_checked);
            }
            CardClickOutcome::Rejected { message } => {
                input.set_checked(false);
                let _ = card.class_list().remove_1(SELECTED_CLASS);
                dom::alert(&message);
            }
            CardClickOutcome::Selected { .. } => {}
        }

        counter::refresh(&doc, ctx);
        dom::dispatch_change(&input);
    });
}

fn wire_radio_card(doc: &Document, card: &Element, input: HtmlInputElement, ctx: PageContext) {
    if input.checked() {
        let _ = card.class_list().add_1(SELECTED_CLASS);
    }

    let doc = doc.clone();
    let card = card.clone();
    dom::listen(card.clone().as_ref(), "click", move |event| {
        if clicked_native_surface(&event, &input) {
            return;
        }

        input.set_checked(true);
        let group = input.name();
        let CardClickOutcome::Selected { mirror_to_sauce } =
            selection::radio_click(&group, &input.value())
        else {
            return;
        };

        clear_group_markers(&doc, &group);
        let _ = card.class_list().add_1(SELECTED_CLASS);

        if let Some(value) = mirror_to_sauce
            && let Some(sauce) = dom::input_by_id(&doc, SAUCE_FIELD_ID)
        {
            sauce.set_value(&value);
        }

        counter::refresh(&doc, ctx);
        dom::dispatch_change(&input);
    });
}

fn clear_group_markers(doc: &Document, group: &str) {
    for member in dom::query_all(doc, &format!("input[name=\"{group}\"]")) {
        if let Ok(Some(card)) = member.closest(CARD_SELECTOR) {
            let _ = card.class_list().remove_1(SELECTED_CLASS);
        }
    }
}

/// Direct clicks on ingredient inputs (or their labels) bypass the card
/// handler, so the limit is enforced again on `change`. Card clicks land
/// here too via the re-dispatched event, by then already settled.
fn install_direct_change_guard(doc: &Document, ctx: PageContext) {
    for element in dom::query_all(doc, counter::INGREDIENT_SELECTOR) {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let doc = doc.clone();
        dom::listen(input.clone().as_ref(), "change", move |_event| {
            if input.checked() {
                let count = counter::checked_ingredients(&doc);
                if ingredients::exceeds_limit(count, ctx) {
                    dom::alert(&messages::ingredient_limit_alert(ctx));
                    input.set_checked(false);
                    if let Ok(Some(card)) = input.closest(CARD_SELECTOR) {
                        let _ = card.class_list().remove_1(SELECTED_CLASS);
                    }
                }
            }
            counter::refresh(&doc, ctx);
        });
    }
}
