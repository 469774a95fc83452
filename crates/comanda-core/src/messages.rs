//! Fixed Spanish user-facing strings.
//!
//! Every alert and confirmation the UI shows lives here. A few are templated
//! with the numeric ingredient limit; none are assembled anywhere else.

use crate::context::PageContext;

/// Style missing on a sushi order.
pub const STYLE_REQUIRED_SUSHI: &str =
    "Por favor selecciona si deseas tu sushi Frío o Empanizado.";

/// Style missing on a rice-ball order.
pub const STYLE_REQUIRED_RICE_BALL: &str =
    "Por favor selecciona si deseas tu bola de arroz Fría o Empanizada.";

/// Sauce missing (rice ball and boneless).
pub const SAUCE_REQUIRED: &str = "Por favor selecciona una salsa.";

/// Preparation missing (sushi only).
pub const PREPARED_REQUIRED: &str = "Por favor selecciona una opción de preparado.";

/// Amount given is not a number.
pub const AMOUNT_INVALID: &str = "Por favor ingresa un monto válido";

/// Amount given is less than the total.
pub const AMOUNT_INSUFFICIENT: &str = "El monto ingresado es insuficiente";

/// Cart line removal confirmation.
pub const REMOVE_CONFIRM: &str = "¿Seguro que quieres eliminar este artículo?";

/// Cancel-button confirmation (baseline handler set only).
pub const CANCEL_CONFIRM: &str =
    "¿Seguro que deseas cancelar? Los cambios no se guardarán.";

/// Alert shown when an ingredient selection would exceed the context limit.
///
/// Also used by the submit-time cap check; the sushi wording names the dish.
#[must_use]
pub fn ingredient_limit_alert(ctx: PageContext) -> String {
    let limit = ctx.ingredient_limit();
    match ctx {
        PageContext::Sushi => {
            format!("Solo puedes seleccionar hasta {limit} ingredientes para el sushi.")
        }
        PageContext::RiceBall | PageContext::Boneless => {
            format!("Solo puedes seleccionar hasta {limit} ingredientes.")
        }
    }
}

/// Baseline-validator alert for a required radio group with no selection.
///
/// The group name is shown with its first letter upper-cased, as the legacy
/// page did.
#[must_use]
pub fn required_group_alert(group: &str) -> String {
    let mut chars = group.chars();
    let shown = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    format!("Por favor selecciona una opción para {shown}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn limit_alert_names_sushi_and_its_cap() {
        assert_eq!(
            ingredient_limit_alert(PageContext::Sushi),
            "Solo puedes seleccionar hasta 3 ingredientes para el sushi."
        );
    }

    #[test]
    fn limit_alert_for_rice_ball_is_generic() {
        assert_eq!(
            ingredient_limit_alert(PageContext::RiceBall),
            "Solo puedes seleccionar hasta 6 ingredientes."
        );
        assert_eq!(
            ingredient_limit_alert(PageContext::Boneless),
            "Solo puedes seleccionar hasta 6 ingredientes."
        );
    }

    #[test]
    fn required_group_alert_capitalizes_the_group() {
        assert_eq!(
            required_group_alert("sauce"),
            "Por favor selecciona una opción para Sauce."
        );
        assert_eq!(
            required_group_alert(""),
            "Por favor selecciona una opción para ."
        );
    }
}
