use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for extracted policy rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RuleId(pub String);

/// Scalar or collection value carried by request fields and rule thresholds.
///
/// Requests and rule condition values arrive as untyped JSON, so the union is
/// modeled explicitly and every coercion happens over these variants rather
/// than via downcasting. Variant order matters for untagged deserialization:
/// booleans and numbers must be tried before strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Numeric reading of the value without consulting any grade hierarchy.
    pub fn as_numeric_literal(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            FieldValue::Text(raw) => raw.trim().parse::<f64>().ok(),
            FieldValue::Bool(_) | FieldValue::List(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(raw) => Some(raw),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Comparison operators the rule extraction pipeline is allowed to emit.
///
/// Anything else deserializes to `Unknown`, which never matches; a malformed
/// operator in one rule must not poison the rest of the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equals,
    GreaterThan,
    LessThan,
    GreaterThanOrEquals,
    LessThanOrEquals,
    In,
    #[serde(other)]
    Unknown,
}

/// A single testable predicate over one request field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    pub value: FieldValue,
}

/// Consequence attached to a rule when its conditions match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleAction {
    Approve,
    Reject,
    Eligible,
    RequireDocumentation,
    Warn,
}

/// Severity attached to violations for reason prioritization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// Declarative policy rule produced upstream by the extraction pipeline.
///
/// Conditions are AND-combined; an empty list makes the rule unconditionally
/// applicable. Rules are read-only once loaded into a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub rule_id: RuleId,
    pub policy_id: String,
    pub policy_name: String,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    pub action: RuleAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_doc: Option<String>,
    #[serde(default)]
    pub severity: Severity,
}

/// Open request payload: a flat map of field name to value.
///
/// `request_id` is an ordinary key in the map; only the engine treats it as
/// mandatory. The request is never mutated during evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluationRequest {
    pub fields: BTreeMap<String, FieldValue>,
}

impl EvaluationRequest {
    pub fn from_fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, FieldValue)>,
        K: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// The mandatory identifier, if present and non-blank.
    pub fn request_id(&self) -> Option<&str> {
        match self.fields.get("request_id") {
            Some(FieldValue::Text(raw)) if !raw.trim().is_empty() => Some(raw.as_str()),
            _ => None,
        }
    }
}

/// Final verdict for one evaluated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Approve,
    Reject,
    Invalid,
}

/// Entitlement granted by a matched APPROVE/ELIGIBLE rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    pub rule_id: RuleId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

/// Matched REJECT rule with the context needed for adverse notices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub rule_id: RuleId,
    pub message: String,
    pub severity: Severity,
}

/// Matched informational rule (documentation requirement or warning).
///
/// Advisories are surfaced for callers but never move the verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub rule_id: RuleId,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_doc: Option<String>,
    pub severity: Severity,
}

/// Complete, deterministic decision record for one request.
///
/// `applicable_rules` is exactly the set of matched rule ids; approvals,
/// violations, and advisories partition that set by rule action. Timestamps
/// are deliberately absent so repeated evaluation of the same inputs yields
/// an identical record; the HTTP layer attaches wall-clock metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub decision: Verdict,
    pub primary_reason: String,
    pub applicable_rules: Vec<RuleId>,
    pub approvals: Vec<Approval>,
    pub violations: Vec<Violation>,
    pub advisories: Vec<Advisory>,
}

impl Decision {
    /// Validation failure before any rule is consulted.
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self {
            request_id: None,
            decision: Verdict::Invalid,
            primary_reason: reason.into(),
            applicable_rules: Vec::new(),
            approvals: Vec::new(),
            violations: Vec::new(),
            advisories: Vec::new(),
        }
    }
}
