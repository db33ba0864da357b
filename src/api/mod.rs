use axum::{Router, http::HeaderValue, middleware, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;
use crate::services::{PaintingService, SeaOrmPaintingService};

mod error;
mod observability;
pub mod paintings;
mod system;
mod types;
mod validation;

pub use error::ApiError;
pub use paintings::canonical_path;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub store: Store,

    pub painting_service: Arc<dyn PaintingService>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

pub fn create_app_state(
    config: Config,
    store: Store,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    let painting_service: Arc<dyn PaintingService> =
        Arc::new(SeaOrmPaintingService::new(store.clone()));

    Arc::new(AppState {
        config: Arc::new(config),
        store,
        painting_service,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;
    Ok(create_app_state(config, store, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = &state.config.server.cors_allowed_origins;

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    let paintings_router = Router::new()
        .route("/{slug}", get(paintings::redirect_combined_slug))
        .route("/{slug}/{painting_slug}", get(paintings::get_painting))
        .route("/by-id/{painting_id}/facts", get(paintings::list_facts));

    Router::new()
        .nest(paintings::PAINTINGS_PATH, paintings_router)
        .route("/health", get(system::health))
        .route("/health/ready", get(system::health_ready))
        .route("/metrics", get(observability::get_metrics))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}
