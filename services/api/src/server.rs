use crate::cli::ServeArgs;
use crate::demo::demo_snapshot;
use crate::infra::{load_snapshot, AppState, InMemoryCatalog};
use crate::routes::with_catalog_routes;
use aqar_catalog::catalog::CatalogService;
use aqar_catalog::config::AppConfig;
use aqar_catalog::error::AppError;
use aqar_catalog::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
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
    if let Some(seed) = args.seed.take() {
        config.catalog.seed_path = Some(seed);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let snapshot = match config.catalog.seed_path.as_deref() {
        Some(path) => load_snapshot(path)?,
        None => {
            info!("no catalog snapshot configured, serving the built-in catalog");
            demo_snapshot()
        }
    };
    let store = Arc::new(InMemoryCatalog::new(snapshot));
    let catalog_service = Arc::new(CatalogService::new(store, config.catalog.page_size));

    let app = with_catalog_routes(catalog_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "catalog service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
