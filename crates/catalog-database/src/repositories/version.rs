//! Version repository implementation.

use sqlx::{PgExecutor, PgPool};

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_entity::version::{CreateVersion, Version};

/// Repository for version rows and the version-file join table.
#[derive(Debug, Clone)]
pub struct VersionRepository {
    pool: PgPool,
}

impl VersionRepository {
    /// Create a new version repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a new version to a collection.
    pub async fn create(&self, data: &CreateVersion) -> AppResult<Version> {
        sqlx::query_as::<_, Version>(
            "INSERT INTO version (collection_id, name, description) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.collection_id)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::validation(format!(
                    "No collection exists with id {}",
                    data.collection_id
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create version", e),
        })
    }

    /// Resolve the latest version id of a collection using the repository
    /// pool. `None` when the collection has no versions.
    pub async fn latest_id(&self, collection_id: i64) -> AppResult<Option<i64>> {
        Self::latest_id_in(&self.pool, collection_id).await
    }

    /// Resolve the latest version id on an arbitrary executor.
    ///
    /// "Latest" is the maximum version id for the collection.
    pub async fn latest_id_in<'e>(
        executor: impl PgExecutor<'e>,
        collection_id: i64,
    ) -> AppResult<Option<i64>> {
        sqlx::query_scalar::<_, Option<i64>>(
            "SELECT max(version_id) FROM version WHERE collection_id = $1",
        )
        .bind(collection_id)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to resolve latest version", e)
        })
    }

    /// List all versions of a collection, identified by slug.
    pub async fn list_for_collection_slug(&self, slug: &str) -> AppResult<Vec<Version>> {
        sqlx::query_as::<_, Version>(
            "SELECT v.version_id, v.collection_id, v.name, v.description, v.created_on \
             FROM version v \
             JOIN collection c ON c.collection_id = v.collection_id \
             WHERE c.collection_slug = $1 \
             ORDER BY v.version_id",
        )
        .bind(slug)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list versions", e))
    }

    /// Attach a file to a version using the repository pool.
    pub async fn attach_file(&self, version_id: i64, file_id: i64) -> AppResult<()> {
        Self::attach_file_in(&self.pool, version_id, file_id).await
    }

    /// Attach a file to a version on an arbitrary executor.
    ///
    /// A dangling version or file id surfaces as a validation error naming
    /// the offending id, not as a bare database error.
    pub async fn attach_file_in<'e>(
        executor: impl PgExecutor<'e>,
        version_id: i64,
        file_id: i64,
    ) -> AppResult<()> {
        sqlx::query("INSERT INTO version_file (version_id, file_id) VALUES ($1, $2)")
            .bind(version_id)
            .bind(file_id)
            .execute(executor)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("version_file_version_id_fkey") =>
                {
                    AppError::validation(format!("No version exists with id {version_id}"))
                }
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("version_file_file_id_fkey") =>
                {
                    AppError::validation(format!("No file exists with id {file_id}"))
                }
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    AppError::conflict(format!(
                        "File {file_id} is already attached to version {version_id}"
                    ))
                }
                _ => {
                    AppError::with_source(ErrorKind::Database, "Failed to attach file to version", e)
                }
            })?;
        Ok(())
    }
}
