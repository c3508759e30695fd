use std::cmp::Ordering;

use super::common::*;
use crate::enforcement::grades::GradeHierarchies;

#[test]
fn scoped_lookup_prefers_the_named_policy() {
    let mut grades = hierarchy();
    grades.insert("POL_LVE", "E8", 7.0);

    assert_eq!(grades.resolve_level("E8", Some(TRAVEL_POLICY_ID)), Some(2.0));
    assert_eq!(grades.resolve_level("E8", Some("POL_LVE")), Some(7.0));
}

#[test]
fn unscoped_lookup_walks_policies_in_id_order() {
    let mut grades = GradeHierarchies::new();
    grades.insert("POL_B", "Directors", 9.0);
    grades.insert("POL_A", "Directors", 5.0);

    // Insertion order is irrelevant; POL_A sorts first.
    assert_eq!(grades.resolve_level("Directors", None), Some(5.0));
}

#[test]
fn scope_miss_falls_back_to_global_search() {
    let mut grades = hierarchy();
    grades.insert("POL_LVE", "Directors", 9.0);

    assert_eq!(
        grades.resolve_level("Directors", Some(TRAVEL_POLICY_ID)),
        Some(9.0)
    );
}

#[test]
fn numeric_tokens_parse_directly() {
    let grades = GradeHierarchies::new();
    assert_eq!(grades.resolve_level("6", None), Some(6.0));
    assert_eq!(grades.resolve_level(" 4.5 ", None), Some(4.5));
}

#[test]
fn unknown_tokens_resolve_to_none() {
    assert_eq!(hierarchy().resolve_level("Intern", None), None);
    assert_eq!(
        hierarchy().resolve_level("Intern", Some(TRAVEL_POLICY_ID)),
        None
    );
}

#[test]
fn compare_orders_resolved_grades() {
    let grades = hierarchy();
    assert_eq!(
        grades.compare("E9", "E8", Some(TRAVEL_POLICY_ID)),
        Some(Ordering::Greater)
    );
    assert_eq!(grades.compare("E7", "E10", None), Some(Ordering::Less));
    assert_eq!(grades.compare("E8", "E8", None), Some(Ordering::Equal));
}

#[test]
fn compare_is_none_when_either_side_is_unresolvable() {
    let grades = hierarchy();
    assert_eq!(grades.compare("Intern", "E8", None), None);
    assert_eq!(grades.compare("E8", "Contractor", None), None);
}
