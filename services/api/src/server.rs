use crate::cli::ServeArgs;
use crate::infra::{analytics_config, AppState, InMemoryApplicationStore};
use crate::routes::with_analytics_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::path::Path;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use recruit_ai::analytics::candidates::CandidateAnalyticsService;
use recruit_ai::config::AppConfig;
use recruit_ai::error::AppError;
use recruit_ai::telemetry;
use tracing::{info, warn};

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

    let store = Arc::new(InMemoryApplicationStore::default());
    let service = Arc::new(CandidateAnalyticsService::new(
        store,
        analytics_config(config.ingestion.enrichment_seed),
    ));

    // Preload any feeds already dropped into the sources directory; the API
    // keeps accepting feeds at runtime either way.
    let sources_dir = Path::new(&config.ingestion.sources_dir);
    if sources_dir.is_dir() {
        match service.ingest_dir(sources_dir) {
            Ok(summary) => info!(
                records = summary.records_ingested,
                dir = %sources_dir.display(),
                "preloaded candidate feeds"
            ),
            Err(err) => warn!(error = %err, "sources directory could not be preloaded"),
        }
    }

    let app = with_analytics_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "recruiter analytics service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
