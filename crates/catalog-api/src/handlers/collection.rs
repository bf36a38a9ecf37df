//! Collection registry handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use catalog_core::error::AppError;
use catalog_entity::collection::CreateCollection;

use crate::dto::request::{CollectionListQuery, CreateCollectionRequest, UpdateDescriptionRequest};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /collections?collection_slug=...
pub async fn list_collections(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<CollectionListQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let collections = state
        .collection_service
        .list_collections(query.collection_slug.as_deref())
        .await?;

    Ok(Json(
        serde_json::json!({ "success": true, "data": collections }),
    ))
}

/// GET /collections/{slug}
pub async fn get_collection(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let collection = state.collection_service.get_collection(&slug).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": collection }),
    ))
}

/// GET /collections/{slug}/{version_id}
pub async fn get_collection_version(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((slug, version_id)): Path<(String, i64)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let collection = state
        .collection_service
        .get_collection_version(&slug, version_id)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": collection }),
    ))
}

/// POST /collections
pub async fn create_collection(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateCollectionRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let collection = state
        .collection_service
        .create_collection(
            auth.context(),
            CreateCollection {
                slug: req.slug,
                name: req.name,
                doi: req.doi,
            },
        )
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": { "collection_id": collection.collection_id }
    })))
}

/// POST /collections/{slug}
pub async fn update_description(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    Json(req): Json<UpdateDescriptionRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let collection = state
        .collection_service
        .update_description(auth.context(), &slug, &req.description)
        .await?;

    Ok(Json(
        serde_json::json!({ "success": true, "data": collection }),
    ))
}
