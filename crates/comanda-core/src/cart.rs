//! Cart line quantity rules and the persistence wire contract.
//!
//! Each cart line exposes an increment control, a decrement control, and a
//! directly editable quantity field, correlated by a shared line index. The
//! server owns the truth: after a confirmed update the page reloads rather
//! than re-rendering locally. Quantities never settle below one.

use core::fmt;

use serde::Deserialize;

/// Smallest quantity a cart line may hold.
pub const MIN_QUANTITY: u32 = 1;

/// Increment: parse (defaulting to 1 on garbage), add one. Always persists.
#[must_use]
pub fn increment(raw: &str) -> u32 {
    parse_or_min(raw).saturating_add(1)
}

/// Decrement: only values above the floor move. `None` means leave the field
/// alone and issue no persist call.
#[must_use]
pub fn decrement(raw: &str) -> Option<u32> {
    let value = parse_or_min(raw);
    (value > MIN_QUANTITY).then(|| value - 1)
}

/// Direct edit: clamp to the floor; unparseable input also lands on the
/// floor. Always persists the clamped value.
#[must_use]
pub fn clamp_edit(raw: &str) -> u32 {
    parse_or_min(raw).max(MIN_QUANTITY)
}

/// Baseline (fallback handler set) direct-edit rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineEdit {
    /// Below the floor or unparseable: rewrite the field to 1, do not persist.
    ResetToMin,
    /// Acceptable value: persist as-is.
    Persist(u32),
}

/// The fallback set is more conservative than the enhanced one: a sub-floor
/// edit is corrected locally without talking to the server.
#[must_use]
pub fn baseline_edit(raw: &str) -> BaselineEdit {
    match raw.trim().parse::<u32>() {
        Ok(value) if value >= MIN_QUANTITY => BaselineEdit::Persist(value),
        _ => BaselineEdit::ResetToMin,
    }
}

fn parse_or_min(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(MIN_QUANTITY)
}

/// Request path for a quantity update. Index and quantity ride in the path;
/// there is no body.
#[must_use]
pub fn update_path(index: &str, quantity: u32) -> String {
    format!("/update_quantity/{index}/{quantity}")
}

/// Server acknowledgement for a quantity update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UpdateAck {
    #[serde(default)]
    pub success: bool,
}

/// A failed persist. Logged, never surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    /// The fetch itself failed (network, CORS, no window).
    Http(String),
    /// The response body was not the expected JSON shape.
    BadBody(String),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(msg) => write!(f, "quantity update request failed: {msg}"),
            Self::BadBody(msg) => write!(f, "quantity update response malformed: {msg}"),
        }
    }
}

impl std::error::Error for PersistError {}

/// Parse the `{"success": bool}` acknowledgement body.
pub fn parse_ack(body: &str) -> Result<UpdateAck, PersistError> {
    serde_json::from_str(body).map_err(|err| PersistError::BadBody(err.to_string()))
}
