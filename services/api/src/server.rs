use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAnalysisRepository, InMemoryConsultationPublisher};
use crate::routes::with_chromatic_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use stylist_ai::config::AppConfig;
use stylist_ai::error::AppError;
use stylist_ai::telemetry;
use stylist_ai::workflows::chromatic::ChromaticAnalysisService;
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

    let repository = Arc::new(InMemoryAnalysisRepository::default());
    let consultations = Arc::new(InMemoryConsultationPublisher::default());
    let analysis_service = Arc::new(ChromaticAnalysisService::new(repository, consultations));

    let app = with_chromatic_routes(analysis_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "style consultation orchestrator ready");

    axum::serve(listener, app).await?;
    Ok(())
}
