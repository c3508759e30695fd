use metrics_exporter_prometheus::PrometheusHandle;
use policy_enforcement::config::SnapshotConfig;
use policy_enforcement::enforcement::RuleSnapshot;
use policy_enforcement::error::AppError;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the rule and grade snapshot named by the configuration.
///
/// A missing rules file is fatal at startup: serving with an empty rule set
/// would reject every request and mask the deployment problem.
pub(crate) fn load_snapshot(config: &SnapshotConfig) -> Result<RuleSnapshot, AppError> {
    let snapshot = RuleSnapshot::from_files(&config.rules_path, config.grades_path.as_deref())?;
    Ok(snapshot)
}
