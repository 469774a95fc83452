#![cfg(target_arch = "wasm32")]
#![forbid(unsafe_code)]

//! Browser-side wiring tests. These run under `wasm-pack test --headless`
//! and exercise the public boot path against a real document.

use wasm_bindgen::JsCast;
use wasm_bindgen_test::wasm_bindgen_test;
use web_sys::{Document, HtmlElement, HtmlInputElement};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().expect("window").document().expect("document")
}

fn click(doc: &Document, selector: &str) {
    doc.query_selector(selector)
        .expect("query")
        .expect("element present")
        .dyn_into::<HtmlElement>()
        .expect("clickable element")
        .click();
}

fn input(doc: &Document, selector: &str) -> HtmlInputElement {
    doc.query_selector(selector)
        .expect("query")
        .expect("input present")
        .dyn_into()
        .expect("input element")
}

#[wasm_bindgen_test]
fn card_click_toggles_checkbox_marker_and_counter() {
    let doc = document();
    doc.body().expect("body").set_inner_html(
        r#"
        <span id="selected-count">0</span>
        <div class="option-card">
            <input type="checkbox" class="ingredient-checkbox" value="Queso">
        </div>
        "#,
    );
    comanda_web::start();

    click(&doc, ".option-card");

    let card = doc.query_selector(".option-card").unwrap().unwrap();
    assert!(input(&doc, "input").checked());
    assert!(card.class_list().contains("selected"));
    assert_eq!(
        doc.get_element_by_id("selected-count")
            .unwrap()
            .text_content()
            .unwrap(),
        "1"
    );

    click(&doc, ".option-card");
    assert!(!input(&doc, "input").checked());
    assert!(!card.class_list().contains("selected"));
}

#[wasm_bindgen_test]
fn radio_card_selection_clears_group_siblings() {
    let doc = document();
    doc.body().expect("body").set_inner_html(
        r#"
        <div class="option-card" id="card-fria">
            <input type="radio" name="style" value="Fría" checked>
        </div>
        <div class="option-card" id="card-emp">
            <input type="radio" name="style" value="Empanizada">
        </div>
        "#,
    );
    comanda_web::start();

    let fria = doc.get_element_by_id("card-fria").unwrap();
    assert!(fria.class_list().contains("selected"));

    click(&doc, "#card-emp");

    let emp = doc.get_element_by_id("card-emp").unwrap();
    assert!(!fria.class_list().contains("selected"));
    assert!(emp.class_list().contains("selected"));
    assert!(input(&doc, "#card-emp input").checked());
}

#[wasm_bindgen_test]
fn keypad_reads_its_value_attribute_on_every_click() {
    let doc = document();
    doc.body().expect("body").set_inner_html(
        r#"
        <button id="calculate-change-btn"></button>
        <input type="text" id="amount-given" value="">
        <button class="calc-btn" data-value="5"></button>
        "#,
    );
    comanda_web::start();

    click(&doc, ".calc-btn");
    assert_eq!(input(&doc, "#amount-given").value(), "5");

    // Markup rewritten after install still feeds the current value through.
    doc.query_selector(".calc-btn")
        .expect("query")
        .expect("keypad button")
        .set_attribute("data-value", "7")
        .expect("set data-value");
    click(&doc, ".calc-btn");
    assert_eq!(input(&doc, "#amount-given").value(), "57");
}

#[wasm_bindgen_test]
fn baseline_boot_installs_only_the_fallback_set() {
    let doc = document();
    let body = doc.body().expect("body");
    body.set_attribute("data-comanda-boot", "baseline")
        .expect("set boot attribute");
    body.set_inner_html(
        r#"
        <span id="selected-count">0</span>
        <div class="option-card">
            <input type="checkbox" class="ingredient-checkbox" value="Queso">
        </div>
        <input type="text" class="quantity-input" data-index="0" value="abc">
        "#,
    );
    comanda_web::start();
    body.remove_attribute("data-comanda-boot")
        .expect("remove boot attribute");

    // Enhanced card wiring must be absent: a card-body click neither checks
    // the input nor marks the card nor moves the counter.
    click(&doc, ".option-card");
    let card = doc.query_selector(".option-card").unwrap().unwrap();
    assert!(!input(&doc, ".option-card input").checked());
    assert!(!card.class_list().contains("selected"));
    assert_eq!(
        doc.get_element_by_id("selected-count")
            .unwrap()
            .text_content()
            .unwrap(),
        "0"
    );

    // The fallback quantity handler is active: a garbage edit snaps back to
    // the floor without any update request.
    let quantity = input(&doc, ".quantity-input");
    let change = web_sys::Event::new("change").expect("change event");
    quantity.dispatch_event(&change).expect("dispatch");
    assert_eq!(quantity.value(), "1");
}

#[wasm_bindgen_test]
fn prepared_card_click_mirrors_value_into_the_sauce_field() {
    let doc = document();
    doc.body().expect("body").set_inner_html(
        r#"
        <div class="preparation-options"></div>
        <input type="hidden" id="sauce_field" value="">
        <div class="option-card">
            <input type="radio" name="prepared" value="Empanizado">
        </div>
        "#,
    );
    comanda_web::start();

    click(&doc, ".option-card");

    assert_eq!(input(&doc, "#sauce_field").value(), "Empanizado");
}
