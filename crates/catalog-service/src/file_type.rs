//! File type taxonomy operations.

use std::sync::Arc;

use tracing::info;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_database::repositories::file_type::FileTypeRepository;
use catalog_entity::file_type::{FileTypeGroup, FileTypeInfo};

use crate::context::RequestContext;

/// Manages the mime-type taxonomy and its groups.
#[derive(Debug, Clone)]
pub struct FileTypeService {
    /// File type repository.
    file_type_repo: Arc<FileTypeRepository>,
}

impl FileTypeService {
    /// Creates a new file type service.
    pub fn new(file_type_repo: Arc<FileTypeRepository>) -> Self {
        Self { file_type_repo }
    }

    /// Returns the id of the file type for `mime_type`, creating the row
    /// on first use.
    ///
    /// The underlying upsert is atomic: concurrent first-use of the same
    /// mime type yields one row and the same id for every caller.
    pub async fn get_or_create_file_type(&self, mime_type: &str) -> AppResult<i64> {
        if mime_type.trim().is_empty() {
            return Err(AppError::validation("Mime type cannot be empty"));
        }
        self.file_type_repo.get_or_create(mime_type).await
    }

    /// Lists file types with their optional group names.
    pub async fn list_file_types(
        &self,
        mime_filter: Option<&str>,
    ) -> AppResult<Vec<FileTypeInfo>> {
        self.file_type_repo.list(mime_filter).await
    }

    /// Creates a named file type group.
    pub async fn create_group(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> AppResult<FileTypeGroup> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Group name cannot be empty"));
        }

        let group = self.file_type_repo.create_group(name).await?;

        info!(
            user = %ctx.user,
            group_id = group.file_type_group_id,
            name = %group.file_type_group_name,
            "File type group created"
        );

        Ok(group)
    }

    /// Assigns a file type to a group.
    pub async fn assign_to_group(
        &self,
        ctx: &RequestContext,
        file_type_id: i64,
        group_id: i64,
    ) -> AppResult<()> {
        self.file_type_repo
            .assign_group(file_type_id, group_id)
            .await?;

        info!(
            user = %ctx.user,
            file_type_id = file_type_id,
            group_id = group_id,
            "File type assigned to group"
        );

        Ok(())
    }

    /// Lists file type groups, optionally filtered by exact name.
    ///
    /// An unmatched filter yields an empty list, the same as the
    /// unfiltered form.
    pub async fn list_groups(&self, name_filter: Option<&str>) -> AppResult<Vec<FileTypeGroup>> {
        self.file_type_repo.list_groups(name_filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::error::ErrorKind;
    use sqlx::postgres::PgPoolOptions;

    fn service() -> FileTypeService {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://postgres@localhost/catalog_test")
            .expect("lazy pool");
        FileTypeService::new(Arc::new(FileTypeRepository::new(pool)))
    }

    #[tokio::test]
    async fn empty_mime_type_is_rejected() {
        let svc = service();
        let err = svc
            .get_or_create_file_type("  ")
            .await
            .expect_err("blank mime type must fail");
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
