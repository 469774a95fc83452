//! Cash payment arithmetic, keypad editing, and ticket-link building.
//!
//! The cash page shows a fixed total (as display text, e.g. `$12.50`), takes
//! an amount from the cashier, and renders the change due. Two trigger paths
//! share the same math:
//!
//! - **Explicit** (calculate button, quick-amount buttons): failures alert.
//! - **Live** (every input edit): failures silently reset the display; the
//!   full calculate-and-reveal path only runs once the parsed amount is a
//!   valid number at or above the total.

use core::fmt;

use crate::messages;

/// Change display color after a successful calculation.
pub const COLOR_SUCCESS: &str = "#2b8a3e";
/// Change display color in any error state.
pub const COLOR_ERROR: &str = "#e74c3c";
/// Rendered change while none is due.
pub const ZERO_DISPLAY: &str = "$0.00";
/// Haptic pulse length on confirmed success, milliseconds.
pub const VIBRATE_MS: u32 = 50;

/// A rejected calculation. `Display` yields the Spanish alert text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashError {
    /// Amount given did not parse as a number.
    InvalidAmount,
    /// Amount given is below the total.
    InsufficientAmount,
}

impl fmt::Display for CashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount => f.write_str(messages::AMOUNT_INVALID),
            Self::InsufficientAmount => f.write_str(messages::AMOUNT_INSUFFICIENT),
        }
    }
}

impl std::error::Error for CashError {}

/// Parse a displayed currency amount, tolerating one leading `$`.
#[must_use]
pub fn parse_currency(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let bare = trimmed.strip_prefix('$').unwrap_or(trimmed);
    parse_amount(bare)
}

/// Parse a user-entered amount. Empty or non-numeric input yields `None`.
#[must_use]
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Change due for `given` against `total`.
pub fn compute_change(total: f64, given: Option<f64>) -> Result<f64, CashError> {
    let given = given.ok_or(CashError::InvalidAmount)?;
    if given < total {
        return Err(CashError::InsufficientAmount);
    }
    Ok(given - total)
}

/// Live-edit gate: `Some(change)` when the full calculate-and-reveal path
/// applies, `None` when the display should silently reset.
#[must_use]
pub fn live_change(total: f64, raw_input: &str) -> Option<f64> {
    compute_change(total, parse_amount(raw_input)).ok()
}

/// Render an amount as `$` plus exactly two decimals.
#[must_use]
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Print-ticket link for a confirmed cash payment.
///
/// The base path is the href up to its first `?`; any previous query is
/// replaced wholesale.
#[must_use]
pub fn ticket_href(current_href: &str, amount_given: f64) -> String {
    let base = current_href.split('?').next().unwrap_or(current_href);
    format!("{base}?payment_method=cash&amount_paid={amount_given:.2}")
}

/// Insert keypad `digits` into `text` at the current selection.
///
/// `sel_start..sel_end` is replaced (a collapsed selection inserts at the
/// cursor) and the returned cursor sits just after the inserted text.
/// Indexes are clamped to the text and snapped back to char boundaries, so
/// out-of-range DOM selection values cannot split a code point.
#[must_use]
pub fn insert_at_selection(
    text: &str,
    sel_start: usize,
    sel_end: usize,
    digits: &str,
) -> (String, usize) {
    let mut start = sel_start.min(text.len());
    let mut end = sel_end.min(text.len());
    if start > end {
        core::mem::swap(&mut start, &mut end);
    }
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }

    let mut out = String::with_capacity(text.len() + digits.len());
    out.push_str(&text[..start]);
    out.push_str(digits);
    out.push_str(&text[end..]);
    (out, start + digits.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_currency_strips_one_dollar_sign() {
        assert_eq!(parse_currency("$12.50"), Some(12.5));
        assert_eq!(parse_currency("  $7 "), Some(7.0));
        assert_eq!(parse_currency("12.50"), Some(12.5));
        assert_eq!(parse_currency("$$12.50"), None);
        assert_eq!(parse_currency(""), None);
    }

    #[test]
    fn parse_amount_rejects_non_numbers() {
        assert_eq!(parse_amount("20"), Some(20.0));
        assert_eq!(parse_amount("20.00"), Some(20.0));
        assert_eq!(parse_amount("veinte"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn change_is_given_minus_total() {
        assert_eq!(compute_change(12.5, Some(20.0)), Ok(7.5));
        assert_eq!(compute_change(10.0, Some(10.0)), Ok(0.0));
    }

    #[test]
    fn insufficient_and_invalid_amounts_are_distinct_errors() {
        assert_eq!(
            compute_change(10.0, Some(9.99)),
            Err(CashError::InsufficientAmount)
        );
        assert_eq!(compute_change(10.0, None), Err(CashError::InvalidAmount));
        assert_eq!(
            CashError::InvalidAmount.to_string(),
            "Por favor ingresa un monto válido"
        );
        assert_eq!(
            CashError::InsufficientAmount.to_string(),
            "El monto ingresado es insuficiente"
        );
    }

    #[test]
    fn live_gate_only_opens_at_or_above_the_total() {
        assert_eq!(live_change(10.0, "15"), Some(5.0));
        assert_eq!(live_change(10.0, "10"), Some(0.0));
        assert_eq!(live_change(10.0, "9.5"), None);
        assert_eq!(live_change(10.0, "1x"), None);
        assert_eq!(live_change(10.0, ""), None);
    }

    #[test]
    fn money_renders_with_exactly_two_decimals() {
        assert_eq!(format_money(5.0), "$5.00");
        assert_eq!(format_money(7.5), "$7.50");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(12.345), "$12.35");
    }

    #[test]
    fn ticket_href_replaces_any_existing_query() {
        assert_eq!(
            ticket_href("/print_ticket", 20.0),
            "/print_ticket?payment_method=cash&amount_paid=20.00"
        );
        assert_eq!(
            ticket_href("/print_ticket?old=1&x=2", 7.5),
            "/print_ticket?payment_method=cash&amount_paid=7.50"
        );
    }

    #[test]
    fn keypad_inserts_at_a_collapsed_cursor() {
        assert_eq!(insert_at_selection("12.5", 2, 2, "0"), ("120.5".into(), 3));
        assert_eq!(insert_at_selection("", 0, 0, "9"), ("9".into(), 1));
    }

    #[test]
    fn keypad_replaces_an_active_selection() {
        assert_eq!(insert_at_selection("1234", 1, 3, "9"), ("194".into(), 2));
        assert_eq!(insert_at_selection("1234", 0, 4, "5"), ("5".into(), 1));
    }

    #[test]
    fn keypad_clamps_out_of_range_and_inverted_selections() {
        assert_eq!(insert_at_selection("12", 9, 9, "3"), ("123".into(), 3));
        assert_eq!(insert_at_selection("12", 2, 0, "3"), ("3".into(), 1));
    }
}
