#![forbid(unsafe_code)]

//! `comanda-core` is the host-agnostic decision core for the Comanda tablet
//! order terminal.
//!
//! Design goals:
//! - **No DOM, no I/O**: every module here is a pure function of its inputs
//!   and runs on native targets, so all behavior is unit-testable without a
//!   browser.
//! - **One context, resolved once**: page behavior hinges on
//!   [`context::PageContext`], an explicit enum resolved a single time at
//!   boot and passed into every component, never re-probed from markup.
//! - **Fixed user-facing text**: all Spanish strings live in [`messages`];
//!   the adapter layer never invents wording.
//!
//! The `comanda-web` crate wraps these decisions with `wasm-bindgen` and
//! applies them to the document.

pub mod cart;
pub mod cash;
pub mod context;
pub mod ingredients;
pub mod messages;
pub mod selection;
pub mod validate;
