#![forbid(unsafe_code)]

//! Property tests for the arithmetic and clamping contracts.

use comanda_core::cart;
use comanda_core::cash;
use proptest::prelude::*;

proptest! {
    #[test]
    fn change_is_exact_and_never_negative(
        total in 0.0f64..10_000.0,
        extra in 0.0f64..10_000.0,
    ) {
        let given = total + extra;
        let change = cash::compute_change(total, Some(given)).expect("given >= total");
        prop_assert!(change >= 0.0);
        prop_assert!((change - extra).abs() < 1e-9);
    }

    #[test]
    fn insufficient_amounts_always_error(
        total in 1.0f64..10_000.0,
        frac in 0.0f64..1.0,
    ) {
        let given = total * frac * 0.999;
        prop_assert_eq!(
            cash::compute_change(total, Some(given)),
            Err(cash::CashError::InsufficientAmount)
        );
    }

    #[test]
    fn formatted_money_is_dollar_plus_two_decimals(amount in 0.0f64..100_000.0) {
        let shown = cash::format_money(amount);
        prop_assert!(shown.starts_with('$'));
        let (_, decimals) = shown.split_once('.').expect("decimal point present");
        prop_assert_eq!(decimals.len(), 2);
        prop_assert!(decimals.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn keypad_insertion_preserves_all_digits(
        text in "[0-9.]{0,12}",
        start in 0usize..16,
        end in 0usize..16,
        digit in "[0-9]",
    ) {
        let (out, cursor) = cash::insert_at_selection(&text, start, end, &digit);
        prop_assert!(cursor <= out.len());
        prop_assert!(out.contains(digit.as_str()));
        // Replacing a selection can only shrink by what the selection covered.
        prop_assert!(out.len() <= text.len() + digit.len());
    }

    #[test]
    fn quantities_never_settle_below_the_floor(raw in "\\PC{0,8}") {
        prop_assert!(cart::increment(&raw) >= cart::MIN_QUANTITY);
        prop_assert!(cart::clamp_edit(&raw) >= cart::MIN_QUANTITY);
        if let Some(next) = cart::decrement(&raw) {
            prop_assert!(next >= cart::MIN_QUANTITY);
        }
    }

    #[test]
    fn decrement_then_increment_round_trips_above_the_floor(value in 2u32..10_000) {
        let raw = value.to_string();
        let down = cart::decrement(&raw).expect("above floor");
        prop_assert_eq!(cart::increment(&down.to_string()), value);
    }
}
