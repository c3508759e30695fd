use tracing::warn;

use super::super::domain::{Condition, EvaluationRequest, FieldValue, Operator, Rule};
use super::super::grades::GradeHierarchies;

/// Check whether every condition of a rule holds for the request.
///
/// Empty condition list means the rule is unconditionally applicable. A
/// referenced field missing from the request fails the whole rule; there is
/// no partial or weighted matching and no OR at the rule level.
pub(crate) fn rule_matches(
    rule: &Rule,
    request: &EvaluationRequest,
    grades: &GradeHierarchies,
) -> bool {
    rule.conditions.iter().all(|condition| {
        match request.field(&condition.field) {
            Some(value) => evaluate_condition(value, condition, grades, &rule.policy_id),
            None => false,
        }
    })
}

/// Evaluate one condition against the value found in the request.
///
/// Every failure mode degrades to "no match": unknown operators, thresholds
/// of the wrong shape, and values that cannot be coerced all return false
/// instead of surfacing an error past the evaluator.
pub(crate) fn evaluate_condition(
    request_value: &FieldValue,
    condition: &Condition,
    grades: &GradeHierarchies,
    policy_id: &str,
) -> bool {
    match condition.operator {
        Operator::Equals => request_value == &condition.value,
        Operator::In => match &condition.value {
            FieldValue::List(options) => options.contains(request_value),
            other => {
                warn!(
                    field = %condition.field,
                    threshold = ?other,
                    "'in' condition requires a list threshold"
                );
                false
            }
        },
        Operator::GreaterThan
        | Operator::LessThan
        | Operator::GreaterThanOrEquals
        | Operator::LessThanOrEquals => {
            ordering_holds(request_value, condition, grades, policy_id)
        }
        Operator::Unknown => {
            warn!(field = %condition.field, "skipping condition with unknown operator");
            false
        }
    }
}

fn ordering_holds(
    request_value: &FieldValue,
    condition: &Condition,
    grades: &GradeHierarchies,
    policy_id: &str,
) -> bool {
    let Some(lhs) = coerce_numeric(request_value, grades, policy_id) else {
        return false;
    };
    let Some(rhs) = coerce_numeric(&condition.value, grades, policy_id) else {
        return false;
    };

    // Negative durations and amounts never satisfy an ordering comparison;
    // upstream extraction occasionally produces them from malformed input.
    if lhs < 0.0 || rhs < 0.0 {
        return false;
    }

    match condition.operator {
        Operator::GreaterThan => lhs > rhs,
        Operator::LessThan => lhs < rhs,
        Operator::GreaterThanOrEquals => lhs >= rhs,
        Operator::LessThanOrEquals => lhs <= rhs,
        _ => false,
    }
}

/// Coerce an operand of an ordering comparison to a number.
///
/// Strings are first resolved as grade tokens (scoped to the owning rule's
/// policy), which itself falls back to a numeric parse; plain numbers pass
/// through. Booleans and lists have no ordering and never coerce.
fn coerce_numeric(value: &FieldValue, grades: &GradeHierarchies, policy_id: &str) -> Option<f64> {
    match value {
        FieldValue::Number(number) => Some(*number),
        FieldValue::Text(token) => grades.resolve_level(token, Some(policy_id)),
        FieldValue::Bool(_) | FieldValue::List(_) => None,
    }
}
