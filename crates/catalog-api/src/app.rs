//! Application builder — wires state, router, and middleware into an Axum app.

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, Method};
use sqlx::PgPool;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use catalog_core::config::AppConfig;
use catalog_core::config::server::CorsConfig;

use crate::middleware;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(config: AppConfig, db_pool: PgPool) -> Router {
    let cors = build_cors_layer(&config.server.cors);
    let state = AppState::new(config, db_pool);

    build_router(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum::middleware::from_fn(
            middleware::logging::request_logging,
        ))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(cors_config: &CorsConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(AllowOrigin::list(origins));
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(AllowMethods::list(methods));
    cors = cors.allow_headers(Any);

    cors.max_age(Duration::from_secs(cors_config.max_age_seconds))
}
