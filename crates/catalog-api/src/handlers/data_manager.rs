//! Data manager registry handlers.

use axum::Json;
use axum::extract::{Query, State};
use validator::Validate;

use catalog_core::error::AppError;

use crate::dto::request::{CreateDataManagerRequest, DataManagerListQuery};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /datamanagers?data_manager_name=...
pub async fn list_data_managers(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<DataManagerListQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let managers = state
        .data_manager_service
        .list_data_managers(query.data_manager_name.as_deref())
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": managers }),
    ))
}

/// POST /datamanagers
pub async fn create_data_manager(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateDataManagerRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let manager = state
        .data_manager_service
        .create_data_manager(auth.context(), &req.name)
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": { "data_manager_id": manager.data_manager_id }
    })))
}
