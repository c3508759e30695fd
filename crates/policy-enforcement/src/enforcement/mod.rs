//! Rule evaluation engine for extracted organizational policies.
//!
//! Rules and grade hierarchies are produced upstream by the document
//! extraction pipeline and arrive as flat JSON records; this module owns the
//! real semantics: condition matching with type coercion, grade-token
//! resolution, whitelist decision aggregation, and reason composition.

pub mod domain;
pub(crate) mod evaluation;
pub mod grades;
pub mod router;
pub mod service;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use domain::{
    Advisory, Approval, Condition, Decision, EvaluationRequest, FieldValue, Operator, Rule,
    RuleAction, RuleId, Severity, Verdict, Violation,
};
pub use evaluation::EvaluationEngine;
pub use grades::GradeHierarchies;
pub use router::{enforcement_router, EvaluationResponse};
pub use service::PolicyEnforcementService;
pub use snapshot::{PolicySummary, RuleSnapshot, SnapshotError};
