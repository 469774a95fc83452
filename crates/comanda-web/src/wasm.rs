#![forbid(unsafe_code)]

//! `wasm-bindgen` entry point.
//!
//! Boot resolves two things exactly once, the handler fidelity
//! ([`BootMode`]) and the page context, then installs a single handler
//! set. Nothing later in the page's life re-probes either.

use comanda_core::context::{PageContext, PageProbes};
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::boot::BootMode;
use crate::{cards, cart, cash, counter, dom, fallback, feedback, form, nav};

const BOOT_ATTR: &str = "data-comanda-boot";
const PREPARATION_MARKER: &str = ".preparation-options";
const COLD_STYLE_MARKER: &str = ".option-card input[value=\"Fría\"]";

#[wasm_bindgen(start)]
pub fn start() {
    dom::install_panic_hook();
    let Some(doc) = dom::document() else {
        return;
    };
    let mode = BootMode::resolve(requested_mode(&doc).as_deref());
    install(mode, &doc);
}

fn requested_mode(doc: &Document) -> Option<String> {
    doc.body()?.get_attribute(BOOT_ATTR)
}

fn detect_context(doc: &Document) -> PageContext {
    let present = |selector: &str| doc.query_selector(selector).ok().flatten().is_some();
    PageContext::resolve(PageProbes {
        has_preparation_options: present(PREPARATION_MARKER),
        has_cold_style_option: present(COLD_STYLE_MARKER),
    })
}

fn install(mode: BootMode, doc: &Document) {
    match mode {
        BootMode::Enhanced => {
            let ctx = detect_context(doc);
            counter::refresh(doc, ctx);
            cards::install(doc, ctx);
            form::install(doc, ctx);
            nav::install(doc);
            feedback::install(doc);
            cash::install(doc);
            cart::install(doc);
            debug!(?ctx, "enhanced handlers installed");
        }
        BootMode::Baseline => {
            fallback::install(doc);
            debug!("baseline handlers installed");
        }
    }
}
