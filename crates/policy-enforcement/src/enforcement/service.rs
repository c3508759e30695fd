use std::sync::{Arc, RwLock};

use tracing::info;

use super::domain::{Decision, EvaluationRequest};
use super::evaluation::EvaluationEngine;
use super::snapshot::RuleSnapshot;

/// Service owning the current rule snapshot and running evaluations.
///
/// Concurrent evaluations share the snapshot through copy-on-read `Arc`
/// handles; `replace` swaps the whole snapshot atomically so a reload never
/// exposes a partially updated rule set to an in-flight call. The engine
/// itself holds no mutable state.
pub struct PolicyEnforcementService {
    snapshot: RwLock<Arc<RuleSnapshot>>,
}

impl PolicyEnforcementService {
    pub fn new(snapshot: RuleSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Handle to the snapshot currently in effect.
    pub fn snapshot(&self) -> Arc<RuleSnapshot> {
        self.snapshot
            .read()
            .expect("snapshot lock poisoned")
            .clone()
    }

    /// Install a freshly loaded snapshot, leaving in-flight evaluations on
    /// the handle they already hold.
    pub fn replace(&self, snapshot: RuleSnapshot) {
        let mut guard = self.snapshot.write().expect("snapshot lock poisoned");
        *guard = Arc::new(snapshot);
        info!(rules = guard.rule_count(), "rule snapshot replaced");
    }

    /// Evaluate a single request against the current snapshot.
    pub fn evaluate(&self, request: &EvaluationRequest) -> Decision {
        EvaluationEngine::new(self.snapshot()).evaluate(request)
    }

    /// Evaluate a batch of requests over one consistent snapshot.
    ///
    /// Items are independent: a request failing validation yields an INVALID
    /// decision in its slot without aborting the rest of the batch.
    pub fn evaluate_batch(&self, requests: &[EvaluationRequest]) -> Vec<Decision> {
        let engine = EvaluationEngine::new(self.snapshot());
        requests
            .iter()
            .map(|request| engine.evaluate(request))
            .collect()
    }
}
