//! Collection entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named, slugged, DOI-tagged grouping of file versions.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Collection {
    /// Unique collection identifier.
    pub collection_id: i64,
    /// URL-safe unique identifier, restricted to `[-_a-zA-Z0-9]+`.
    pub collection_slug: String,
    /// Human-readable collection name.
    pub collection_name: String,
    /// Digital Object Identifier for the collection.
    pub collection_doi: String,
    /// Free-form description.
    pub description: Option<String>,
}

/// Collection detail with its aggregate file count across all versions.
///
/// The count is `0` for collections with no files, never omitted or null.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CollectionSummary {
    /// Unique collection identifier.
    pub collection_id: i64,
    /// URL-safe unique identifier.
    pub collection_slug: String,
    /// Human-readable collection name.
    pub collection_name: String,
    /// Digital Object Identifier for the collection.
    pub collection_doi: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Number of distinct files attached to any version of this collection.
    pub file_count: i64,
}

/// Data required to create a new collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCollection {
    /// URL-safe unique identifier.
    pub slug: String,
    /// Human-readable collection name.
    pub name: String,
    /// Digital Object Identifier.
    pub doi: String,
}
