use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::enforcement::domain::{
    Condition, EvaluationRequest, FieldValue, Operator, Rule, RuleAction, RuleId, Severity,
};
use crate::enforcement::grades::GradeHierarchies;
use crate::enforcement::service::PolicyEnforcementService;
use crate::enforcement::snapshot::RuleSnapshot;

pub(super) const TRAVEL_POLICY_ID: &str = "POL_OVE";
pub(super) const TRAVEL_POLICY_NAME: &str = "Overseas Business Travel";

pub(super) fn hierarchy() -> GradeHierarchies {
    let mut grades = GradeHierarchies::new();
    for (name, level) in [("E7", 1.0), ("E8", 2.0), ("E9", 3.0), ("E10", 4.0)] {
        grades.insert(TRAVEL_POLICY_ID, name, level);
    }
    grades
}

pub(super) fn condition(field: &str, operator: Operator, value: FieldValue) -> Condition {
    Condition {
        field: field.to_string(),
        operator,
        value,
    }
}

pub(super) fn rule(id: &str, action: RuleAction, conditions: Vec<Condition>) -> Rule {
    Rule {
        rule_id: RuleId(id.to_string()),
        policy_id: TRAVEL_POLICY_ID.to_string(),
        policy_name: TRAVEL_POLICY_NAME.to_string(),
        conditions,
        action,
        allocation: None,
        period: None,
        message: format!("policy consequence for {id}"),
        required_doc: None,
        severity: Severity::Medium,
    }
}

/// Rule granting business class travel to grade E8 and above.
pub(super) fn eligibility_rule() -> Rule {
    let mut eligible = rule(
        "RULE_OVE_001",
        RuleAction::Eligible,
        vec![condition(
            "grade",
            Operator::GreaterThanOrEquals,
            FieldValue::from("E8"),
        )],
    );
    eligible.allocation = Some(4.0);
    eligible.period = Some("per year".to_string());
    eligible.message = "Grades E8 and above may travel business class".to_string();
    eligible
}

/// Rule rejecting first class travel outright.
pub(super) fn first_class_rejection() -> Rule {
    let mut rejection = rule(
        "RULE_OVE_002",
        RuleAction::Reject,
        vec![condition(
            "class_of_travel",
            Operator::Equals,
            FieldValue::from("First Class"),
        )],
    );
    rejection.severity = Severity::High;
    rejection.message = "First class travel is not permitted".to_string();
    rejection
}

pub(super) fn travel_request(id: &str, grade: &str) -> EvaluationRequest {
    EvaluationRequest::from_fields([
        ("request_id", FieldValue::from(id)),
        ("grade", FieldValue::from(grade)),
        ("class_of_travel", FieldValue::from("Business Class")),
    ])
}

pub(super) fn snapshot(rules: Vec<Rule>) -> RuleSnapshot {
    RuleSnapshot::new(rules, hierarchy())
}

pub(super) fn build_service(rules: Vec<Rule>) -> Arc<PolicyEnforcementService> {
    Arc::new(PolicyEnforcementService::new(snapshot(rules)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");
    serde_json::from_slice(&bytes).expect("body is valid JSON")
}
