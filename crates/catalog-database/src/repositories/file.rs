//! File repository implementation.

use sqlx::{PgExecutor, PgPool};

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_entity::file::{CreateFile, File, FileInfo};

/// The joined shape clients see: file plus data manager name, mime type,
/// and optional group name. The group is reached through the file type's
/// own group reference.
const INFO_SELECT: &str = "SELECT f.file_id, f.data_manager_id, f.external_id, \
     ft.mime_type, dm.data_manager_name, \
     ftg.file_type_group_name AS group_name \
     FROM file f \
     JOIN data_manager dm ON dm.data_manager_id = f.data_manager_id \
     JOIN file_type ft ON ft.file_type_id = f.file_type_id \
     LEFT JOIN file_type_group ftg ON ftg.file_type_group_id = ft.file_type_group_id";

/// Repository for file records and their joined query shapes.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new file record using the pool.
    pub async fn create(&self, data: &CreateFile) -> AppResult<File> {
        Self::create_in(&self.pool, data).await
    }

    /// Insert a new file record on an arbitrary executor.
    pub async fn create_in<'e>(
        executor: impl PgExecutor<'e>,
        data: &CreateFile,
    ) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            "INSERT INTO file (data_manager_id, file_type_id, external_id) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.data_manager_id)
        .bind(data.file_type_id)
        .bind(&data.external_id)
        .fetch_one(executor)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("file_data_manager_id_fkey") =>
            {
                AppError::validation(format!(
                    "No data manager exists with id {}",
                    data.data_manager_id
                ))
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("file_file_type_id_fkey") =>
            {
                AppError::validation(format!(
                    "No file type exists with id {}",
                    data.file_type_id
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create file", e),
        })
    }

    /// Find a file by id, joined with its manager, mime type, and group.
    pub async fn find_info(&self, file_id: i64) -> AppResult<Option<FileInfo>> {
        let query = format!("{INFO_SELECT} WHERE f.file_id = $1");
        sqlx::query_as::<_, FileInfo>(&query)
            .bind(file_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    /// List files attached to one version of one collection.
    pub async fn list_for_version(
        &self,
        slug: &str,
        version_id: i64,
    ) -> AppResult<Vec<FileInfo>> {
        let query = format!(
            "{INFO_SELECT} \
             JOIN version_file vf ON vf.file_id = f.file_id \
             JOIN version v ON v.version_id = vf.version_id \
             JOIN collection c ON c.collection_id = v.collection_id \
             WHERE c.collection_slug = $1 AND v.version_id = $2 \
             ORDER BY f.file_id"
        );
        sqlx::query_as::<_, FileInfo>(&query)
            .bind(slug)
            .bind(version_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list files for version", e)
            })
    }
}
