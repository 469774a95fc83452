#![forbid(unsafe_code)]

//! Cash payment page wiring: calculate button, quick amounts, keypad,
//! clear control, and live recalculation.

use comanda_core::cash;
use web_sys::{Document, HtmlInputElement};

use crate::dom;

const CALCULATE_BTN_ID: &str = "calculate-change-btn";
const AMOUNT_INPUT_ID: &str = "amount-given";
const TOTAL_ID: &str = "total-amount";
const CHANGE_DUE_ID: &str = "change-due";
const PRINT_TICKET_ID: &str = "print-ticket";

pub(crate) fn install(doc: &Document) {
    let Some(calculate_btn) = doc.get_element_by_id(CALCULATE_BTN_ID) else {
        return; // not the cash page
    };

    {
        let doc = doc.clone();
        dom::listen(calculate_btn.as_ref(), "click", move |_event| {
            calculate(&doc);
        });
    }

    install_quick_amounts(doc);
    install_keypad(doc);
    install_clear(doc);
    install_live_recalc(doc);
}

/// Explicit trigger: failures alert, success reveals the print action.
fn calculate(doc: &Document) {
    let Some(total_el) = doc.get_element_by_id(TOTAL_ID) else {
        return;
    };
    let Some(amount_input) = dom::input_by_id(doc, AMOUNT_INPUT_ID) else {
        return;
    };
    let Some(change_due) = doc.get_element_by_id(CHANGE_DUE_ID) else {
        return;
    };

    let Some(total) = cash::parse_currency(&total_el.text_content().unwrap_or_default()) else {
        return; // total display is server-rendered; nothing sane to do
    };
    let given = cash::parse_amount(&amount_input.value());

    match cash::compute_change(total, given) {
        Ok(change) => {
            change_due.set_text_content(Some(&cash::format_money(change)));
            dom::set_color(&change_due, cash::COLOR_SUCCESS);
            if let Some(given) = given {
                reveal_print_ticket(doc, given);
            }
            vibrate();
        }
        Err(err) => {
            change_due.set_text_content(Some(cash::ZERO_DISPLAY));
            dom::set_color(&change_due, cash::COLOR_ERROR);
            dom::alert(&err.to_string());
        }
    }
}

fn reveal_print_ticket(doc: &Document, amount_given: f64) {
    let Some(print_btn) = doc.get_element_by_id(PRINT_TICKET_ID) else {
        return;
    };
    dom::set_display(&print_btn, "block");
    if let Some(href) = print_btn.get_attribute("href") {
        let _ = print_btn.set_attribute("href", &cash::ticket_href(&href, amount_given));
    }
}

fn hide_print_ticket(doc: &Document) {
    if let Some(print_btn) = doc.get_element_by_id(PRINT_TICKET_ID) {
        dom::set_display(&print_btn, "none");
    }
}

/// Best-effort haptic pulse; silently unsupported on most desktops.
fn vibrate() {
    if let Some(window) = dom::window() {
        let _ = window.navigator().vibrate_with_duration(cash::VIBRATE_MS);
    }
}

// Both button kinds read their data attribute on every click, so markup
// updated after install still feeds the current value through.

fn install_quick_amounts(doc: &Document) {
    for btn in dom::query_all(doc, ".quick-amount-btn") {
        let doc = doc.clone();
        dom::listen(btn.clone().as_ref(), "click", move |_event| {
            let amount = btn.get_attribute("data-amount").unwrap_or_default();
            let Some(input) = dom::input_by_id(&doc, AMOUNT_INPUT_ID) else {
                return;
            };
            input.set_value(&amount);
            calculate(&doc);
        });
    }
}

fn install_keypad(doc: &Document) {
    for btn in dom::query_all(doc, ".calc-btn:not(.clear-btn)") {
        let doc = doc.clone();
        dom::listen(btn.clone().as_ref(), "click", move |_event| {
            let digits = btn.get_attribute("data-value").unwrap_or_default();
            let Some(input) = dom::input_by_id(&doc, AMOUNT_INPUT_ID) else {
                return;
            };
            if !is_active_element(&doc, &input) {
                let _ = input.focus();
            }

            let text = input.value();
            let (start, end) = selection_range(&input, text.len());
            let (updated, cursor) = cash::insert_at_selection(&text, start, end, &digits);
            input.set_value(&updated);
            let _ = input.set_selection_range(cursor as u32, cursor as u32);
        });
    }
}

fn install_clear(doc: &Document) {
    let Some(clear_btn) = doc.query_selector(".clear-btn").ok().flatten() else {
        return;
    };
    let doc = doc.clone();
    dom::listen(clear_btn.as_ref(), "click", move |_event| {
        if let Some(input) = dom::input_by_id(&doc, AMOUNT_INPUT_ID) {
            input.set_value("");
            let _ = input.focus();
        }
        if let Some(change_due) = doc.get_element_by_id(CHANGE_DUE_ID) {
            change_due.set_text_content(Some(cash::ZERO_DISPLAY));
        }
        hide_print_ticket(&doc);
    });
}

/// Recalculate on every edit, but stay silent until the amount covers the
/// total; alerts are reserved for the explicit trigger.
fn install_live_recalc(doc: &Document) {
    let Some(input) = dom::input_by_id(doc, AMOUNT_INPUT_ID) else {
        return;
    };
    let doc = doc.clone();
    dom::listen(input.clone().as_ref(), "input", move |_event| {
        let total = doc
            .get_element_by_id(TOTAL_ID)
            .and_then(|el| cash::parse_currency(&el.text_content().unwrap_or_default()));
        let Some(total) = total else {
            return;
        };

        if cash::live_change(total, &input.value()).is_some() {
            calculate(&doc);
        } else {
            if let Some(change_due) = doc.get_element_by_id(CHANGE_DUE_ID) {
                change_due.set_text_content(Some(cash::ZERO_DISPLAY));
            }
            hide_print_ticket(&doc);
        }
    });
}

fn is_active_element(doc: &Document, input: &HtmlInputElement) -> bool {
    doc.active_element()
        .is_some_and(|active| active.is_same_node(Some(input.as_ref())))
}

/// Current selection, defaulting to a collapsed cursor at the end.
fn selection_range(input: &HtmlInputElement, len: usize) -> (usize, usize) {
    let read = |sel: Result<Option<u32>, wasm_bindgen::JsValue>| {
        sel.ok().flatten().map_or(len, |v| v as usize)
    };
    (
        read(input.selection_start()),
        read(input.selection_end()),
    )
}
