//! Ingredient tally and the tri-state limit cue.
//!
//! The counter renders the number of checked ingredient inputs plus a color
//! hint: green under the limit, orange exactly at it, red over it. An over
//! state is always transient: the selector reverts the triggering input in
//! the same interaction, so no settled state ever exceeds the cap.

use crate::context::PageContext;

/// Counter color while under the limit.
pub const COLOR_UNDER: &str = "#2ecc71";
/// Counter color exactly at the limit.
pub const COLOR_AT_LIMIT: &str = "#f39c12";
/// Counter color over the limit (momentary, pre-revert).
pub const COLOR_OVER: &str = "#e74c3c";

/// Where the tally sits relative to the context cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyStatus {
    Under,
    AtLimit,
    Over,
}

/// A checked-ingredient count paired with its context limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientTally {
    pub selected: usize,
    pub limit: usize,
}

impl IngredientTally {
    #[must_use]
    pub const fn new(selected: usize, ctx: PageContext) -> Self {
        Self {
            selected,
            limit: ctx.ingredient_limit(),
        }
    }

    #[must_use]
    pub const fn status(self) -> TallyStatus {
        if self.selected > self.limit {
            TallyStatus::Over
        } else if self.selected == self.limit {
            TallyStatus::AtLimit
        } else {
            TallyStatus::Under
        }
    }

    /// Color cue for the count display.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self.status() {
            TallyStatus::Under => COLOR_UNDER,
            TallyStatus::AtLimit => COLOR_AT_LIMIT,
            TallyStatus::Over => COLOR_OVER,
        }
    }
}

/// Whether a settled count of `selected` ingredients breaks the context cap.
///
/// Used both when an input is checked directly and at submit time.
#[must_use]
pub const fn exceeds_limit(selected: usize, ctx: PageContext) -> bool {
    selected > ctx.ingredient_limit()
}
