//! File entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A record describing one externally-stored object.
///
/// Files are created once via import and never mutated afterwards; they are
/// shared across versions through the `version_file` join table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct File {
    /// Unique file identifier.
    pub file_id: i64,
    /// The data manager that supplied this file.
    pub data_manager_id: i64,
    /// The mime-type classification of this file.
    pub file_type_id: i64,
    /// Opaque identifier in the external storage system.
    pub external_id: String,
}

/// A file joined with its data manager name, mime type, and optional
/// file-type-group name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileInfo {
    /// Unique file identifier.
    pub file_id: i64,
    /// The data manager that supplied this file.
    pub data_manager_id: i64,
    /// Opaque identifier in the external storage system.
    pub external_id: String,
    /// MIME type of the file.
    pub mime_type: String,
    /// Name of the supplying data manager.
    pub data_manager_name: String,
    /// Name of the file-type group, if the type is grouped.
    pub group_name: Option<String>,
}

/// Data required to create a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFile {
    /// The supplying data manager.
    pub data_manager_id: i64,
    /// The mime-type classification.
    pub file_type_id: i64,
    /// Opaque external identifier.
    pub external_id: String,
}
