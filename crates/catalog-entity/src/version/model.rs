//! Version entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An ordered snapshot of a collection's file set.
///
/// Version ids are monotonically increasing; the latest version of a
/// collection is the one with the maximum `version_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Version {
    /// Unique version identifier.
    pub version_id: i64,
    /// The collection this version belongs to.
    pub collection_id: i64,
    /// Optional version name.
    pub name: Option<String>,
    /// Optional version description.
    pub description: Option<String>,
    /// When this version was created.
    pub created_on: DateTime<Utc>,
}

/// Data required to append a new version to a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVersion {
    /// The collection to append to.
    pub collection_id: i64,
    /// Optional version name.
    pub name: Option<String>,
    /// Optional version description.
    pub description: Option<String>,
}
