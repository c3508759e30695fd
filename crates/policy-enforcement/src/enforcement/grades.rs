use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-policy seniority hierarchies mapping grade tokens to numeric ranks.
///
/// Hierarchies are extracted upstream, one per policy, and a grade name is
/// unique only within its policy: "Directors" may rank differently under the
/// travel policy and the leave policy. Storage is a `BTreeMap` so that the
/// unscoped fallback search walks policies in ascending policy-id order and
/// the same token always resolves to the same level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeHierarchies {
    policies: BTreeMap<String, BTreeMap<String, f64>>,
}

impl GradeHierarchies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one grade under a policy's hierarchy.
    pub fn insert(&mut self, policy_id: impl Into<String>, grade: impl Into<String>, level: f64) {
        self.policies
            .entry(policy_id.into())
            .or_default()
            .insert(grade.into(), level);
    }

    pub fn policy_count(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Resolve a grade token to its numeric rank.
    ///
    /// Lookup order: the scoped hierarchy when `policy_id` names one, then
    /// every hierarchy in ascending policy-id order, then a direct numeric
    /// parse for grades that are already numeric strings. `None` means the
    /// token cannot participate in an ordering comparison.
    pub fn resolve_level(&self, token: &str, policy_id: Option<&str>) -> Option<f64> {
        let token = token.trim();

        if let Some(policy_id) = policy_id {
            if let Some(level) = self
                .policies
                .get(policy_id)
                .and_then(|hierarchy| hierarchy.get(token))
            {
                return Some(*level);
            }
        }

        for hierarchy in self.policies.values() {
            if let Some(level) = hierarchy.get(token) {
                return Some(*level);
            }
        }

        token.parse::<f64>().ok()
    }

    /// Compare two grade tokens under an optional policy scope.
    ///
    /// `None` when either side cannot be resolved to a rank.
    pub fn compare(&self, left: &str, right: &str, policy_id: Option<&str>) -> Option<Ordering> {
        let left = self.resolve_level(left, policy_id)?;
        let right = self.resolve_level(right, policy_id)?;
        left.partial_cmp(&right)
    }
}
