use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::Rule;
use super::grades::GradeHierarchies;

/// Immutable bundle of rules and grade hierarchies used for evaluation.
///
/// Whoever owns the storage (flat file, relational table, vector-store
/// reconstruction) builds a snapshot and hands it to the engine; the engine
/// only ever borrows it for the duration of one call. Reloads swap whole
/// snapshots so an in-flight evaluation never sees a half-updated rule set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSnapshot {
    #[serde(default)]
    rules: Vec<Rule>,
    #[serde(default)]
    grades: GradeHierarchies,
}

impl RuleSnapshot {
    pub fn new(rules: Vec<Rule>, grades: GradeHierarchies) -> Self {
        Self { rules, grades }
    }

    /// Load a snapshot from a rules JSON file (array of rule records) and an
    /// optional grade hierarchy JSON file (policy id to grade-level map).
    pub fn from_files(
        rules_path: &Path,
        grades_path: Option<&Path>,
    ) -> Result<Self, SnapshotError> {
        let rules: Vec<Rule> = read_json(rules_path)?;
        let grades = match grades_path {
            Some(path) => read_json(path)?,
            None => GradeHierarchies::new(),
        };
        Ok(Self::new(rules, grades))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn grades(&self) -> &GradeHierarchies {
        &self.grades
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn rules_for_policy(&self, policy_name: &str) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|rule| rule.policy_name == policy_name)
            .collect()
    }

    /// Per-policy rule counts for listing endpoints, ordered by policy id.
    pub fn policy_summaries(&self) -> Vec<PolicySummary> {
        let mut by_policy: BTreeMap<&str, PolicySummary> = BTreeMap::new();
        for rule in &self.rules {
            by_policy
                .entry(rule.policy_id.as_str())
                .or_insert_with(|| PolicySummary {
                    policy_id: rule.policy_id.clone(),
                    policy_name: rule.policy_name.clone(),
                    rule_count: 0,
                })
                .rule_count += 1;
        }
        by_policy.into_values().collect()
    }
}

fn read_json<T>(path: &Path) -> Result<T, SnapshotError>
where
    T: serde::de::DeserializeOwned,
{
    let raw = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SnapshotError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Aggregated view of one policy for the listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySummary {
    pub policy_id: String,
    pub policy_name: String,
    pub rule_count: usize,
}

/// Error enumeration for snapshot loading failures.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}
