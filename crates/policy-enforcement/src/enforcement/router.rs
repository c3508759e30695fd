use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{Decision, EvaluationRequest};
use super::service::PolicyEnforcementService;

/// Router builder exposing HTTP endpoints for evaluation and rule listing.
pub fn enforcement_router(service: Arc<PolicyEnforcementService>) -> Router {
    Router::new()
        .route("/api/v1/evaluate", post(evaluate_handler))
        .route("/api/v1/evaluate/batch", post(evaluate_batch_handler))
        .route("/api/v1/rules", get(rules_handler))
        .route(
            "/api/v1/rules/by-policy/:policy_name",
            get(rules_by_policy_handler),
        )
        .route("/api/v1/policies", get(policies_handler))
        .with_state(service)
}

/// Decision plus the wall-clock metadata the engine deliberately omits.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResponse {
    #[serde(flatten)]
    pub decision: Decision,
    pub timestamp: DateTime<Utc>,
}

impl EvaluationResponse {
    fn now(decision: Decision) -> Self {
        Self {
            decision,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchEvaluationRequest {
    pub(crate) requests: Vec<EvaluationRequest>,
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<PolicyEnforcementService>>,
    axum::Json(request): axum::Json<EvaluationRequest>,
) -> Response {
    let decision = service.evaluate(&request);
    (StatusCode::OK, axum::Json(EvaluationResponse::now(decision))).into_response()
}

pub(crate) async fn evaluate_batch_handler(
    State(service): State<Arc<PolicyEnforcementService>>,
    axum::Json(batch): axum::Json<BatchEvaluationRequest>,
) -> Response {
    let decisions = service.evaluate_batch(&batch.requests);
    let results: Vec<EvaluationResponse> =
        decisions.into_iter().map(EvaluationResponse::now).collect();

    let payload = json!({
        "total_requests": results.len(),
        "results": results,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn rules_handler(
    State(service): State<Arc<PolicyEnforcementService>>,
) -> Response {
    let snapshot = service.snapshot();
    let payload = json!({
        "total_rules": snapshot.rule_count(),
        "rules": snapshot.rules(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn rules_by_policy_handler(
    State(service): State<Arc<PolicyEnforcementService>>,
    Path(policy_name): Path<String>,
) -> Response {
    let snapshot = service.snapshot();
    let rules = snapshot.rules_for_policy(&policy_name);
    let payload = json!({
        "policy_name": policy_name,
        "total_rules": rules.len(),
        "rules": rules,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn policies_handler(
    State(service): State<Arc<PolicyEnforcementService>>,
) -> Response {
    let snapshot = service.snapshot();
    let policies = snapshot.policy_summaries();
    let payload = json!({
        "total_policies": policies.len(),
        "policies": policies,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
