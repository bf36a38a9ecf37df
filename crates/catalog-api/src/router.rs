//! Route definitions for the catalog HTTP API.
//!
//! All routes are organized by domain. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all catalog routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(collection_routes())
        .merge(data_manager_routes())
        .merge(file_type_routes())
        .merge(version_routes())
        .merge(file_routes())
        .merge(health_routes())
        .with_state(state)
}

/// Collection listing, detail, creation, and description updates
fn collection_routes() -> Router<AppState> {
    Router::new()
        .route("/collections", get(handlers::collection::list_collections))
        .route("/collections", post(handlers::collection::create_collection))
        .route(
            "/collections/{slug}",
            get(handlers::collection::get_collection),
        )
        .route(
            "/collections/{slug}",
            post(handlers::collection::update_description),
        )
        .route(
            "/collections/{slug}/{version_id}",
            get(handlers::collection::get_collection_version),
        )
}

/// Data manager registry
fn data_manager_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/datamanagers",
            get(handlers::data_manager::list_data_managers),
        )
        .route(
            "/datamanagers",
            post(handlers::data_manager::create_data_manager),
        )
}

/// File type taxonomy and groups
fn file_type_routes() -> Router<AppState> {
    Router::new()
        .route("/filetypes", get(handlers::file_type::list_file_types))
        .route(
            "/filetypes/groups",
            get(handlers::file_type::list_file_type_groups),
        )
        .route(
            "/filetypes/groups",
            post(handlers::file_type::create_file_type_group),
        )
        .route(
            "/filetypes/group/{file_type_id}/{file_type_group_id}",
            post(handlers::file_type::assign_file_type_to_group),
        )
}

/// Version ledger and file attachment
fn version_routes() -> Router<AppState> {
    Router::new()
        .route("/versions/{slug}", get(handlers::version::list_versions))
        .route("/versions/{slug}", post(handlers::version::create_version))
        .route(
            "/versions/{version_id}/{file_id}",
            post(handlers::version::attach_file),
        )
}

/// File import and lookup
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files/import", post(handlers::file::import_file))
        .route(
            "/files/{collection_slug}/{version_id}",
            get(handlers::file::list_files_for_version),
        )
        .route("/files/{file_id}", get(handlers::file::get_file))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
