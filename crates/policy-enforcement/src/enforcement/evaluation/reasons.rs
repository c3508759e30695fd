use super::super::domain::{Rule, Severity, Violation};

pub(crate) const NO_APPLICABLE_RULE: &str = "no applicable policy rule found";
pub(crate) const MISSING_REQUEST_ID: &str = "request_id is required";

const SNIPPET_LIMIT: usize = 80;

/// Single-line rejection explanation anchored on the most severe violation.
///
/// Critical violations take precedence, then high, then the first violation
/// in evaluation order; ties within a severity break by evaluation order.
pub(crate) fn rejection_reason(violations: &[Violation]) -> String {
    let lead = violations
        .iter()
        .find(|violation| violation.severity == Severity::Critical)
        .or_else(|| {
            violations
                .iter()
                .find(|violation| violation.severity == Severity::High)
        })
        .or_else(|| violations.first());

    match lead {
        Some(violation) if violations.len() > 1 => format!(
            "{}: {} ({} policy violations in total)",
            violation.rule_id.0,
            violation.message,
            violations.len()
        ),
        Some(violation) => format!("{}: {}", violation.rule_id.0, violation.message),
        None => NO_APPLICABLE_RULE.to_string(),
    }
}

/// Single-line approval explanation naming every approving rule, with up to
/// two policy-name snippets for context.
pub(crate) fn approval_reason(approved_rules: &[&Rule]) -> String {
    let rule_ids = approved_rules
        .iter()
        .map(|rule| rule.rule_id.0.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let snippets = approved_rules
        .iter()
        .take(2)
        .map(|rule| format!("{}: {}", rule.policy_name, truncate(&rule.message)))
        .collect::<Vec<_>>()
        .join("; ");

    format!("approved under {rule_ids} ({snippets})")
}

fn truncate(message: &str) -> String {
    let single_line = message.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= SNIPPET_LIMIT {
        single_line
    } else {
        let mut clipped: String = single_line.chars().take(SNIPPET_LIMIT).collect();
        clipped.push_str("...");
        clipped
    }
}
