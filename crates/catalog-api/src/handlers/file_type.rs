//! File type taxonomy handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use catalog_core::error::AppError;

use crate::dto::request::{
    CreateFileTypeGroupRequest, FileTypeGroupListQuery, FileTypeListQuery,
};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /filetypes?mime_type=...
pub async fn list_file_types(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<FileTypeListQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let file_types = state
        .file_type_service
        .list_file_types(query.mime_type.as_deref())
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": file_types }),
    ))
}

/// GET /filetypes/groups?group_name=...
pub async fn list_file_type_groups(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<FileTypeGroupListQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let groups = state
        .file_type_service
        .list_groups(query.group_name.as_deref())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": groups })))
}

/// POST /filetypes/groups
pub async fn create_file_type_group(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFileTypeGroupRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let group = state
        .file_type_service
        .create_group(auth.context(), &req.name)
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": { "file_type_group_id": group.file_type_group_id }
    })))
}

/// POST /filetypes/group/{file_type_id}/{file_type_group_id}
pub async fn assign_file_type_to_group(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((file_type_id, file_type_group_id)): Path<(i64, i64)>,
) -> Result<Json<serde_json::Value>, AppError> {
    state
        .file_type_service
        .assign_to_group(auth.context(), file_type_id, file_type_group_id)
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": { "file_type_id": file_type_id, "file_type_group_id": file_type_group_id }
    })))
}
