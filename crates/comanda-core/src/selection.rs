//! Option-card click outcomes.
//!
//! Each selectable option on the page is a decorative card wrapping exactly
//! one checkbox or radio input. A click on the card body (not on the input or
//! its label; those keep their native behavior) has to move the input and
//! the card's `selected` marker in lockstep. This module decides *what*
//! should happen; the DOM layer applies it and re-dispatches a bubbling
//! `change` event so other listeners observe the update as if the input had
//! been clicked directly.

use crate::context::PageContext;
use crate::ingredients;
use crate::messages;

/// Radio group whose selected value doubles as the sushi sauce.
pub const PREPARED_GROUP: &str = "prepared";

/// What a card-body click should do to the card and its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardClickOutcome {
    /// Checkbox toggled; the `selected` marker must match `now_checked`.
    Toggled { now_checked: bool },
    /// Checkbox check rejected: revert the input, clear the marker, alert.
    Rejected { message: String },
    /// Radio selected: clear every group sibling's marker, set this card's.
    /// `mirror_to_sauce` carries the value the hidden sauce field must take.
    Selected { mirror_to_sauce: Option<String> },
}

/// Decide the outcome of a card click over a checkbox input.
///
/// `now_checked` is the input state after the toggle has been applied, and
/// `checked_after` is the total checked-ingredient count at that point.
/// Non-ingredient checkboxes (bases, toppings) never hit the limit.
#[must_use]
pub fn checkbox_click(
    now_checked: bool,
    is_ingredient: bool,
    checked_after: usize,
    ctx: PageContext,
) -> CardClickOutcome {
    if now_checked && is_ingredient && ingredients::exceeds_limit(checked_after, ctx) {
        return CardClickOutcome::Rejected {
            message: messages::ingredient_limit_alert(ctx),
        };
    }
    CardClickOutcome::Toggled { now_checked }
}

/// Decide the outcome of a card click over a radio input.
#[must_use]
pub fn radio_click(group: &str, value: &str) -> CardClickOutcome {
    let mirror_to_sauce = (group == PREPARED_GROUP).then(|| value.to_owned());
    CardClickOutcome::Selected { mirror_to_sauce }
}
