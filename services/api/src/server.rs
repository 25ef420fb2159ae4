use crate::cli::ServeArgs;
use crate::infra::{seed_rooms, AppState};
use crate::routes::with_portal_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

use housing_desk::config::AppConfig;
use housing_desk::error::AppError;
use housing_desk::portal::{ApplicationLedger, MemoryStore, RoomRegistry};
use housing_desk::telemetry;

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let config = resolve_config(args.host, args.port)?;
    telemetry::init(&config.telemetry)?;

    let store = Arc::new(MemoryStore::default());
    let registry = Arc::new(RoomRegistry::new(store.clone()));
    let ledger = Arc::new(ApplicationLedger::new(store));
    if args.seed {
        let seeded = seed_rooms(registry.as_ref())?;
        info!(rooms = seeded.len(), "starter inventory loaded");
    }

    let (metrics_layer, metrics_handle) = PrometheusMetricLayer::pair();
    let readiness = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness.clone(),
        metrics: Arc::new(metrics_handle),
    };

    let app = with_portal_routes(registry, ledger)
        .layer(Extension(state))
        .layer(metrics_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness.store(true, Ordering::Release);
    info!(environment = config.environment.label(), %addr, "student housing desk ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// CLI flags win over the environment-derived configuration.
fn resolve_config(host: Option<String>, port: Option<u16>) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    Ok(config)
}
