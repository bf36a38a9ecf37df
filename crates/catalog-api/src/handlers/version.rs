//! Version ledger handlers.

use axum::Json;
use axum::extract::{Path, State};

use catalog_core::error::AppError;

use crate::dto::request::CreateVersionRequest;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /versions/{slug}
pub async fn list_versions(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let versions = state.version_service.list_versions(&slug).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": versions }),
    ))
}

/// POST /versions/{slug}
pub async fn create_version(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    Json(req): Json<CreateVersionRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let version = state
        .version_service
        .create_version(auth.context(), &slug, req.name, req.description)
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": { "version_id": version.version_id }
    })))
}

/// POST /versions/{version_id}/{file_id}
pub async fn attach_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((version_id, file_id)): Path<(i64, i64)>,
) -> Result<Json<serde_json::Value>, AppError> {
    state
        .version_service
        .attach_file(auth.context(), version_id, file_id)
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": { "version_id": version_id, "file_id": file_id }
    })))
}
