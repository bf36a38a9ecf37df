//! File type taxonomy repository implementation.

use sqlx::{PgExecutor, PgPool};

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_entity::file_type::{FileTypeGroup, FileTypeInfo};

/// Repository for file types and file type groups.
#[derive(Debug, Clone)]
pub struct FileTypeRepository {
    pool: PgPool,
}

impl FileTypeRepository {
    /// Create a new file type repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get or create the file type for a mime string, using the pool.
    pub async fn get_or_create(&self, mime_type: &str) -> AppResult<i64> {
        Self::get_or_create_in(&self.pool, mime_type).await
    }

    /// Get or create the file type for a mime string on an arbitrary
    /// executor.
    ///
    /// A single upsert statement, so concurrent first-use of the same mime
    /// type leaves exactly one row and every caller observes its id. The
    /// no-op DO UPDATE makes the statement return the existing row instead
    /// of returning nothing on conflict.
    pub async fn get_or_create_in<'e>(
        executor: impl PgExecutor<'e>,
        mime_type: &str,
    ) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO file_type (mime_type) VALUES ($1) \
             ON CONFLICT (mime_type) DO UPDATE SET mime_type = EXCLUDED.mime_type \
             RETURNING file_type_id",
        )
        .bind(mime_type)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to get or create file type", e)
        })
    }

    /// List file types joined with their optional group name, optionally
    /// filtered by exact mime type.
    pub async fn list(&self, mime_filter: Option<&str>) -> AppResult<Vec<FileTypeInfo>> {
        if let Some(mime_type) = mime_filter {
            sqlx::query_as::<_, FileTypeInfo>(
                "SELECT ft.file_type_id, ft.mime_type, ftg.file_type_group_name \
                 FROM file_type ft \
                 LEFT JOIN file_type_group ftg \
                     ON ftg.file_type_group_id = ft.file_type_group_id \
                 WHERE ft.mime_type = $1",
            )
            .bind(mime_type)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, FileTypeInfo>(
                "SELECT ft.file_type_id, ft.mime_type, ftg.file_type_group_name \
                 FROM file_type ft \
                 LEFT JOIN file_type_group ftg \
                     ON ftg.file_type_group_id = ft.file_type_group_id \
                 ORDER BY ft.file_type_id",
            )
            .fetch_all(&self.pool)
            .await
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list file types", e))
    }

    /// Create a new file type group.
    pub async fn create_group(&self, name: &str) -> AppResult<FileTypeGroup> {
        sqlx::query_as::<_, FileTypeGroup>(
            "INSERT INTO file_type_group (file_type_group_name) VALUES ($1) RETURNING *",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("file_type_group_file_type_group_name_key") =>
            {
                AppError::conflict(format!(
                    "File type group names must be unique and \"{name}\" already exists"
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create file type group", e),
        })
    }

    /// Assign a file type to a group.
    ///
    /// An unknown group id trips the foreign key; an unknown file type id
    /// updates zero rows. Both are validation errors naming the id.
    pub async fn assign_group(&self, file_type_id: i64, group_id: i64) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE file_type SET file_type_group_id = $2 WHERE file_type_id = $1",
        )
        .bind(file_type_id)
        .bind(group_id)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::validation(format!("No file type group exists with id {group_id}"))
            }
            _ => AppError::with_source(
                ErrorKind::Database,
                "Failed to assign file type to group",
                e,
            ),
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::validation(format!(
                "No file type exists with id {file_type_id}"
            )));
        }
        Ok(())
    }

    /// List file type groups, optionally filtered by exact name.
    pub async fn list_groups(&self, name_filter: Option<&str>) -> AppResult<Vec<FileTypeGroup>> {
        if let Some(name) = name_filter {
            sqlx::query_as::<_, FileTypeGroup>(
                "SELECT file_type_group_id, file_type_group_name \
                 FROM file_type_group WHERE file_type_group_name = $1",
            )
            .bind(name)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, FileTypeGroup>(
                "SELECT file_type_group_id, file_type_group_name \
                 FROM file_type_group ORDER BY file_type_group_id",
            )
            .fetch_all(&self.pool)
            .await
        }
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list file type groups", e)
        })
    }
}
