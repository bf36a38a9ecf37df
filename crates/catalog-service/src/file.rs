//! File catalog read operations.

use std::sync::Arc;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_database::repositories::file::FileRepository;
use catalog_entity::file::FileInfo;

/// Read-side queries over registered files.
#[derive(Debug, Clone)]
pub struct FileService {
    /// File repository.
    file_repo: Arc<FileRepository>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(file_repo: Arc<FileRepository>) -> Self {
        Self { file_repo }
    }

    /// Gets a file by id, joined with its data manager name, mime type,
    /// and optional group name.
    pub async fn get_file(&self, file_id: i64) -> AppResult<FileInfo> {
        self.file_repo
            .find_info(file_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No file exists with id {file_id}")))
    }

    /// Lists the files attached to one version of one collection.
    pub async fn list_files_for_version(
        &self,
        slug: &str,
        version_id: i64,
    ) -> AppResult<Vec<FileInfo>> {
        self.file_repo.list_for_version(slug, version_id).await
    }
}
