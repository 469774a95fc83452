//! Boot-mode selection.
//!
//! The legacy scripts coordinated through two mutable globals: the enhanced
//! script set a flag after installing its handlers, and the fallback script
//! probed it to avoid double-registering. Here the choice is made once, up
//! front: the page may opt into the fallback set with
//! `<body data-comanda-boot="baseline">`; anything else boots enhanced.

/// Which handler set this page load runs. Exactly one is ever installed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BootMode {
    /// Full tablet behavior: option cards, counter, cash calculator, cart.
    #[default]
    Enhanced,
    /// Conservative fallback: quantity edits, removal/cancel confirms,
    /// required-radio validation.
    Baseline,
}

impl BootMode {
    /// Resolve from the body's `data-comanda-boot` attribute, if any.
    #[must_use]
    pub fn resolve(requested: Option<&str>) -> Self {
        match requested.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("baseline") => Self::Baseline,
            _ => Self::Enhanced,
        }
    }
}
