mod conditions;
mod reasons;

use std::sync::Arc;

use tracing::debug;

use super::domain::{
    Advisory, Approval, Decision, EvaluationRequest, Rule, RuleAction, Verdict, Violation,
};
use super::snapshot::RuleSnapshot;
pub(crate) use conditions::{evaluate_condition, rule_matches};

/// Stateless evaluator bound to one consistent snapshot of rules and grades.
///
/// An engine is cheap to construct per call; holding the snapshot behind an
/// `Arc` guarantees a reload happening concurrently can never swap rules out
/// from under an in-flight evaluation.
pub struct EvaluationEngine {
    snapshot: Arc<RuleSnapshot>,
}

impl EvaluationEngine {
    pub fn new(snapshot: Arc<RuleSnapshot>) -> Self {
        Self { snapshot }
    }

    /// Evaluate one request against every rule in the snapshot.
    ///
    /// Aggregation is a whitelist policy: any matched REJECT rule wins over
    /// any number of approvals, and a request matching no rule at all is
    /// rejected rather than silently approved. A request without a
    /// `request_id` is INVALID before any rule is consulted; no other field
    /// is mandatory at this layer.
    pub fn evaluate(&self, request: &EvaluationRequest) -> Decision {
        let Some(request_id) = request.request_id() else {
            return Decision::invalid(reasons::MISSING_REQUEST_ID);
        };

        let mut applicable_rules = Vec::new();
        let mut approvals = Vec::new();
        let mut violations = Vec::new();
        let mut advisories = Vec::new();
        let mut approving_rules: Vec<&Rule> = Vec::new();

        for rule in self.snapshot.rules() {
            if !rule_matches(rule, request, self.snapshot.grades()) {
                continue;
            }

            applicable_rules.push(rule.rule_id.clone());

            match rule.action {
                RuleAction::Reject => violations.push(Violation {
                    rule_id: rule.rule_id.clone(),
                    message: rule.message.clone(),
                    severity: rule.severity,
                }),
                RuleAction::Approve | RuleAction::Eligible => {
                    approvals.push(Approval {
                        rule_id: rule.rule_id.clone(),
                        allocation: rule.allocation,
                        period: rule.period.clone(),
                    });
                    approving_rules.push(rule);
                }
                RuleAction::RequireDocumentation | RuleAction::Warn => {
                    advisories.push(Advisory {
                        rule_id: rule.rule_id.clone(),
                        message: rule.message.clone(),
                        required_doc: rule.required_doc.clone(),
                        severity: rule.severity,
                    })
                }
            }
        }

        let (verdict, primary_reason) = if !violations.is_empty() {
            (Verdict::Reject, reasons::rejection_reason(&violations))
        } else if !approvals.is_empty() {
            (Verdict::Approve, reasons::approval_reason(&approving_rules))
        } else {
            (Verdict::Reject, reasons::NO_APPLICABLE_RULE.to_string())
        };

        debug!(
            request_id,
            ?verdict,
            matched = applicable_rules.len(),
            violations = violations.len(),
            approvals = approvals.len(),
            "request evaluated"
        );

        Decision {
            request_id: Some(request_id.to_string()),
            decision: verdict,
            primary_reason,
            applicable_rules,
            approvals,
            violations,
            advisories,
        }
    }
}
