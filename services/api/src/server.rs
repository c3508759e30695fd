use crate::cli::ServeArgs;
use crate::infra::{load_snapshot, AppState};
use crate::routes::with_enforcement_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use policy_enforcement::config::AppConfig;
use policy_enforcement::enforcement::PolicyEnforcementService;
use policy_enforcement::error::AppError;
use policy_enforcement::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let snapshot = load_snapshot(&config.snapshot)?;
    info!(
        rules = snapshot.rule_count(),
        grade_policies = snapshot.grades().policy_count(),
        "rule snapshot loaded"
    );
    let service = Arc::new(PolicyEnforcementService::new(snapshot));

    let app = with_enforcement_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "policy enforcement engine ready");

    axum::serve(listener, app).await?;
    Ok(())
}
