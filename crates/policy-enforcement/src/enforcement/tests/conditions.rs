use super::common::*;
use crate::enforcement::domain::{FieldValue, Operator};
use crate::enforcement::evaluation::{evaluate_condition, rule_matches};
use crate::enforcement::grades::GradeHierarchies;

fn holds(request_value: FieldValue, operator: Operator, threshold: FieldValue) -> bool {
    let condition = condition("field_under_test", operator, threshold);
    evaluate_condition(&request_value, &condition, &hierarchy(), TRAVEL_POLICY_ID)
}

#[test]
fn equals_compares_directly_without_coercion() {
    assert!(holds(
        FieldValue::from("Business Class"),
        Operator::Equals,
        FieldValue::from("Business Class"),
    ));
    assert!(!holds(
        FieldValue::from("7"),
        Operator::Equals,
        FieldValue::from(7.0),
    ));
    assert!(holds(
        FieldValue::from(7.0),
        Operator::Equals,
        FieldValue::from(7.0),
    ));
}

#[test]
fn in_tests_membership_against_a_list() {
    let options = FieldValue::List(vec![
        FieldValue::from("United States"),
        FieldValue::from("Canada"),
    ]);
    assert!(holds(
        FieldValue::from("Canada"),
        Operator::In,
        options.clone(),
    ));
    assert!(!holds(FieldValue::from("France"), Operator::In, options));
}

#[test]
fn in_with_scalar_threshold_never_matches() {
    assert!(!holds(
        FieldValue::from("Canada"),
        Operator::In,
        FieldValue::from("Canada"),
    ));
}

#[test]
fn ordering_resolves_grade_tokens_through_the_hierarchy() {
    assert!(holds(
        FieldValue::from("E9"),
        Operator::GreaterThanOrEquals,
        FieldValue::from("E8"),
    ));
    assert!(!holds(
        FieldValue::from("E7"),
        Operator::GreaterThanOrEquals,
        FieldValue::from("E8"),
    ));
    assert!(holds(
        FieldValue::from("E7"),
        Operator::LessThan,
        FieldValue::from("E10"),
    ));
}

#[test]
fn ordering_falls_back_to_numeric_literals() {
    assert!(holds(
        FieldValue::from(12.0),
        Operator::GreaterThan,
        FieldValue::from("10"),
    ));
    assert!(holds(
        FieldValue::from("3"),
        Operator::LessThanOrEquals,
        FieldValue::from(3.0),
    ));
}

#[test]
fn ordering_fails_for_unresolvable_tokens() {
    assert!(!holds(
        FieldValue::from("Intern"),
        Operator::GreaterThanOrEquals,
        FieldValue::from("E8"),
    ));
    assert!(!holds(
        FieldValue::from("E9"),
        Operator::GreaterThanOrEquals,
        FieldValue::from("Board Member"),
    ));
}

#[test]
fn negative_operands_never_satisfy_ordering() {
    assert!(!holds(
        FieldValue::from(-3.0),
        Operator::LessThan,
        FieldValue::from(10.0),
    ));
    assert!(!holds(
        FieldValue::from(5.0),
        Operator::GreaterThan,
        FieldValue::from(-1.0),
    ));
    assert!(!holds(
        FieldValue::from("-2"),
        Operator::LessThanOrEquals,
        FieldValue::from("4"),
    ));
}

#[test]
fn booleans_and_lists_never_coerce_for_ordering() {
    assert!(!holds(
        FieldValue::from(true),
        Operator::GreaterThan,
        FieldValue::from(0.0),
    ));
    assert!(!holds(
        FieldValue::List(vec![FieldValue::from(3.0)]),
        Operator::LessThan,
        FieldValue::from(5.0),
    ));
}

#[test]
fn unknown_operator_never_matches() {
    assert!(!holds(
        FieldValue::from("anything"),
        Operator::Unknown,
        FieldValue::from("anything"),
    ));
}

#[test]
fn unrecognized_operator_names_deserialize_to_unknown() {
    let operator: Operator =
        serde_json::from_str("\"matches_regex\"").expect("operator deserializes");
    assert_eq!(operator, Operator::Unknown);
}

#[test]
fn empty_condition_list_matches_any_request() {
    let unconditional = rule("RULE_ANY", crate::enforcement::RuleAction::Warn, Vec::new());
    assert!(rule_matches(
        &unconditional,
        &travel_request("R-any", "Intern"),
        &GradeHierarchies::new(),
    ));
}

#[test]
fn absent_field_fails_the_whole_rule() {
    let grade_rule = eligibility_rule();
    let request = crate::enforcement::EvaluationRequest::from_fields([(
        "request_id",
        FieldValue::from("R-missing"),
    )]);
    assert!(!rule_matches(&grade_rule, &request, &hierarchy()));
}

#[test]
fn conditions_combine_as_pure_and() {
    let mut two_conditions = eligibility_rule();
    two_conditions.conditions.push(condition(
        "class_of_travel",
        Operator::Equals,
        FieldValue::from("Business Class"),
    ));

    assert!(rule_matches(
        &two_conditions,
        &travel_request("R1", "E9"),
        &hierarchy(),
    ));

    let mut economy = travel_request("R2", "E9");
    economy
        .fields
        .insert("class_of_travel".to_string(), FieldValue::from("Economy"));
    assert!(!rule_matches(&two_conditions, &economy, &hierarchy()));
}
