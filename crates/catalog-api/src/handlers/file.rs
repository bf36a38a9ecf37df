//! File catalog and import handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use catalog_core::error::AppError;
use catalog_service::import::ImportRequest;

use crate::dto::request::ImportFileRequest;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /files/import
pub async fn import_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ImportFileRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let file_id = state
        .import_service
        .import_file(
            auth.context(),
            ImportRequest {
                collection_slug: req.collection_slug,
                data_manager_name: req.data_manager_name,
                external_id: req.external_id,
                mime_type: req.mime_type,
            },
        )
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": { "file_id": file_id }
    })))
}

/// GET /files/{collection_slug}/{version_id}
pub async fn list_files_for_version(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((slug, version_id)): Path<(String, i64)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let files = state
        .file_service
        .list_files_for_version(&slug, version_id)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": files })))
}

/// GET /files/{file_id}
pub async fn get_file(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(file_id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let file = state.file_service.get_file(file_id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": file })))
}
