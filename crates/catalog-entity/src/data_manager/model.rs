//! Data manager entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named source/system that supplies files to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DataManager {
    /// Unique data manager identifier.
    pub data_manager_id: i64,
    /// The data manager name (unique).
    pub data_manager_name: String,
}
