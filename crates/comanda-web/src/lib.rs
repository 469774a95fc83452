#![forbid(unsafe_code)]

//! `comanda-web` wires the decisions in `comanda-core` to the document.
//!
//! Design:
//! - **One boot, one handler set**: [`boot::BootMode`] is resolved exactly
//!   once at startup and selects either the enhanced tablet handlers or the
//!   conservative fallback set, never both. The legacy pair of mutable
//!   globals is gone.
//! - **Guard-and-return**: every installer probes for its elements and
//!   silently skips when they are absent ("feature not on this page");
//!   nothing here panics on missing markup.
//! - **Listeners live for the page**: closures are `forget`-leaked after
//!   registration, matching the page-lifetime ownership the browser gives
//!   them.
//!
//! All DOM-touching modules only compile on `wasm32`; boot-mode selection is
//! pure and tested on native.

pub mod boot;

#[cfg(target_arch = "wasm32")]
mod cards;
#[cfg(target_arch = "wasm32")]
mod cart;
#[cfg(target_arch = "wasm32")]
mod cash;
#[cfg(target_arch = "wasm32")]
mod counter;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod fallback;
#[cfg(target_arch = "wasm32")]
mod feedback;
#[cfg(target_arch = "wasm32")]
mod form;
#[cfg(target_arch = "wasm32")]
mod nav;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::start;
