//! Data manager repository implementation.

use sqlx::{PgExecutor, PgPool};

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_entity::data_manager::DataManager;

/// Repository for the data manager registry.
#[derive(Debug, Clone)]
pub struct DataManagerRepository {
    pool: PgPool,
}

impl DataManagerRepository {
    /// Create a new data manager repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new data manager.
    ///
    /// Creation is strict: a duplicate name is a conflict, not a silent
    /// lookup of the existing row.
    pub async fn create(&self, name: &str) -> AppResult<DataManager> {
        sqlx::query_as::<_, DataManager>(
            "INSERT INTO data_manager (data_manager_name) VALUES ($1) RETURNING *",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("data_manager_data_manager_name_key") =>
            {
                AppError::conflict(format!(
                    "Data manager names must be unique and \"{name}\" already exists"
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create data manager", e),
        })
    }

    /// Resolve a data manager id by exact name, using the pool.
    pub async fn resolve_id(&self, name: &str) -> AppResult<Option<i64>> {
        Self::resolve_id_in(&self.pool, name).await
    }

    /// Resolve a data manager id by exact name on an arbitrary executor.
    pub async fn resolve_id_in<'e>(
        executor: impl PgExecutor<'e>,
        name: &str,
    ) -> AppResult<Option<i64>> {
        sqlx::query_scalar::<_, i64>(
            "SELECT data_manager_id FROM data_manager WHERE data_manager_name = $1",
        )
        .bind(name)
        .fetch_optional(executor)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to resolve data manager", e)
        })
    }

    /// List data managers, optionally filtered by exact name.
    pub async fn list(&self, name_filter: Option<&str>) -> AppResult<Vec<DataManager>> {
        if let Some(name) = name_filter {
            sqlx::query_as::<_, DataManager>(
                "SELECT data_manager_id, data_manager_name FROM data_manager \
                 WHERE data_manager_name = $1",
            )
            .bind(name)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, DataManager>(
                "SELECT data_manager_id, data_manager_name FROM data_manager \
                 ORDER BY data_manager_id",
            )
            .fetch_all(&self.pool)
            .await
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list data managers", e))
    }
}
