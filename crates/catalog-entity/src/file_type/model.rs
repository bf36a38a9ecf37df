//! File type and file type group entity models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A mime-type classification, optionally grouped.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileType {
    /// Unique file type identifier.
    pub file_type_id: i64,
    /// The mime type string (unique).
    pub mime_type: String,
    /// The group this type belongs to, if any.
    pub file_type_group_id: Option<i64>,
}

/// A file type joined with its optional group name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileTypeInfo {
    /// Unique file type identifier.
    pub file_type_id: i64,
    /// The mime type string.
    pub mime_type: String,
    /// Name of the group this type belongs to, if any.
    pub file_type_group_name: Option<String>,
}

/// A named category aggregating related file types.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileTypeGroup {
    /// Unique group identifier.
    pub file_type_group_id: i64,
    /// The group name (unique).
    pub file_type_group_name: String,
}
