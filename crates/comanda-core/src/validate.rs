//! Order-form submission rules.
//!
//! The validator sees a snapshot of the form (which exclusive options are
//! checked, how many ingredients are ticked) plus the page context, and
//! answers one question: may this submission proceed? Rule order is fixed:
//! style, then sauce, then the context-specific checks. Every failing
//! rule is reported, in that order. Submission proceeds only when all
//! applicable rules pass; the adapter layer alerts the first failure.

use core::fmt;

use crate::context::PageContext;
use crate::ingredients;
use crate::messages;

/// Checked values of the form's exclusive groups plus the ingredient tally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub style: Option<String>,
    pub sauce: Option<String>,
    pub prepared: Option<String>,
    pub ingredient_count: usize,
}

/// A submit-blocking rule failure. `Display` yields the Spanish alert text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No style chosen (sushi and rice-ball pages); wording differs.
    MissingStyle { sushi: bool },
    /// No sauce chosen (rice-ball and boneless pages).
    MissingSauce,
    /// No preparation chosen (sushi pages).
    MissingPrepared,
    /// Checked ingredients exceed the context cap.
    TooManyIngredients { ctx: PageContext },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStyle { sushi: true } => f.write_str(messages::STYLE_REQUIRED_SUSHI),
            Self::MissingStyle { sushi: false } => {
                f.write_str(messages::STYLE_REQUIRED_RICE_BALL)
            }
            Self::MissingSauce => f.write_str(messages::SAUCE_REQUIRED),
            Self::MissingPrepared => f.write_str(messages::PREPARED_REQUIRED),
            Self::TooManyIngredients { ctx } => {
                f.write_str(&messages::ingredient_limit_alert(*ctx))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Side effect the adapter must apply before a passing submission proceeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitPlan {
    /// Value to write into the hidden sauce field (sushi: the prepared
    /// value is canonical and must reach the server as the sauce).
    pub sauce_field: Option<String>,
}

/// Evaluate every applicable rule in fixed order.
///
/// `Err` carries all failures, first-to-alert first. `Ok` carries the
/// pre-submit plan.
pub fn check(snapshot: &FormSnapshot, ctx: PageContext) -> Result<SubmitPlan, Vec<ValidationError>> {
    let mut failures = Vec::new();

    if ctx != PageContext::Boneless && snapshot.style.is_none() {
        failures.push(ValidationError::MissingStyle {
            sushi: ctx == PageContext::Sushi,
        });
    }

    if ctx != PageContext::Sushi && snapshot.sauce.is_none() {
        failures.push(ValidationError::MissingSauce);
    }

    let mut plan = SubmitPlan::default();
    match ctx {
        PageContext::Sushi => {
            match &snapshot.prepared {
                Some(value) => plan.sauce_field = Some(value.clone()),
                None => failures.push(ValidationError::MissingPrepared),
            }
            if ingredients::exceeds_limit(snapshot.ingredient_count, ctx) {
                failures.push(ValidationError::TooManyIngredients { ctx });
            }
        }
        PageContext::RiceBall => {
            if ingredients::exceeds_limit(snapshot.ingredient_count, ctx) {
                failures.push(ValidationError::TooManyIngredients { ctx });
            }
        }
        PageContext::Boneless => {}
    }

    if failures.is_empty() { Ok(plan) } else { Err(failures) }
}
