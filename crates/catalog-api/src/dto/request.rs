//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create collection request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCollectionRequest {
    /// URL-safe unique identifier, restricted to `[-_a-zA-Z0-9]+`.
    #[validate(length(min = 1, message = "Slug is required"))]
    pub slug: String,
    /// Human-readable collection name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Digital Object Identifier.
    #[validate(length(min = 1, message = "DOI is required"))]
    pub doi: String,
}

/// Update collection description request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDescriptionRequest {
    /// New description text.
    pub description: String,
}

/// Create version request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVersionRequest {
    /// Optional version name.
    pub name: Option<String>,
    /// Optional version description.
    pub description: Option<String>,
}

/// Create data manager request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDataManagerRequest {
    /// Data manager name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

/// Create file type group request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFileTypeGroupRequest {
    /// Group name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

/// Import file request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ImportFileRequest {
    /// Slug of the target collection.
    #[validate(length(min = 1, message = "Collection slug is required"))]
    pub collection_slug: String,
    /// Name of the supplying data manager.
    #[validate(length(min = 1, message = "Data manager name is required"))]
    pub data_manager_name: String,
    /// Opaque external identifier.
    #[validate(length(min = 1, message = "External id is required"))]
    pub external_id: String,
    /// MIME type of the file.
    #[validate(length(min = 1, message = "Mime type is required"))]
    pub mime_type: String,
}

/// Collection list filter.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionListQuery {
    /// Exact-match slug filter.
    pub collection_slug: Option<String>,
}

/// Data manager list filter.
#[derive(Debug, Clone, Deserialize)]
pub struct DataManagerListQuery {
    /// Exact-match name filter.
    pub data_manager_name: Option<String>,
}

/// File type list filter.
#[derive(Debug, Clone, Deserialize)]
pub struct FileTypeListQuery {
    /// Exact-match mime type filter.
    pub mime_type: Option<String>,
}

/// File type group list filter.
#[derive(Debug, Clone, Deserialize)]
pub struct FileTypeGroupListQuery {
    /// Exact-match group name filter.
    pub group_name: Option<String>,
}
