//! File import workflow.
//!
//! Registering a file touches four independently-owned registries:
//! collection, version ledger, data manager, and type taxonomy. The whole
//! sequence runs inside one transaction so a failure at any step rolls back
//! every prior insert; the failing step's error propagates unchanged.

use sqlx::PgPool;
use tracing::info;

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_database::repositories::collection::CollectionRepository;
use catalog_database::repositories::data_manager::DataManagerRepository;
use catalog_database::repositories::file::FileRepository;
use catalog_database::repositories::file_type::FileTypeRepository;
use catalog_database::repositories::version::VersionRepository;
use catalog_entity::file::CreateFile;

use crate::context::RequestContext;

/// Request to register a new file and attach it to a collection's latest
/// version.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ImportRequest {
    /// Slug of the target collection.
    pub collection_slug: String,
    /// Name of the data manager that supplied the file.
    pub data_manager_name: String,
    /// Opaque identifier of the file in its external storage system.
    pub external_id: String,
    /// MIME type of the file.
    pub mime_type: String,
}

/// Orchestrates the multi-registry file import workflow.
#[derive(Debug, Clone)]
pub struct ImportService {
    pool: PgPool,
}

impl ImportService {
    /// Creates a new import service.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registers a new file and attaches it to the latest version of the
    /// target collection, returning the new file id.
    ///
    /// Steps, in order, inside one transaction:
    /// 1. resolve the collection id from the slug,
    /// 2. resolve the collection's latest version id,
    /// 3. resolve the data manager id from its name,
    /// 4. get or create the file type for the mime string,
    /// 5. insert the file row,
    /// 6. attach the file to the resolved version.
    pub async fn import_file(
        &self,
        ctx: &RequestContext,
        req: ImportRequest,
    ) -> AppResult<i64> {
        if req.mime_type.trim().is_empty() {
            return Err(AppError::validation("Mime type cannot be empty"));
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin import transaction", e)
        })?;

        let collection_id = CollectionRepository::resolve_id_in(&mut *tx, &req.collection_slug)
            .await?
            .ok_or_else(|| {
                AppError::validation(format!(
                    "No collection exists with slug '{}'",
                    req.collection_slug
                ))
            })?;

        let version_id = VersionRepository::latest_id_in(&mut *tx, collection_id)
            .await?
            .ok_or_else(|| {
                AppError::validation(format!(
                    "No version exists for collection: {}",
                    req.collection_slug
                ))
            })?;

        let data_manager_id =
            DataManagerRepository::resolve_id_in(&mut *tx, &req.data_manager_name)
                .await?
                .ok_or_else(|| {
                    AppError::validation(format!(
                        "No data manager exists with name \"{}\"",
                        req.data_manager_name
                    ))
                })?;

        let file_type_id = FileTypeRepository::get_or_create_in(&mut *tx, &req.mime_type).await?;

        let file = FileRepository::create_in(
            &mut *tx,
            &CreateFile {
                data_manager_id,
                file_type_id,
                external_id: req.external_id.clone(),
            },
        )
        .await?;

        VersionRepository::attach_file_in(&mut *tx, version_id, file.file_id).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit import", e)
        })?;

        info!(
            user = %ctx.user,
            file_id = file.file_id,
            collection = %req.collection_slug,
            version_id = version_id,
            data_manager = %req.data_manager_name,
            mime_type = %req.mime_type,
            "File imported"
        );

        Ok(file.file_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::error::ErrorKind;
    use sqlx::postgres::PgPoolOptions;

    #[tokio::test]
    async fn empty_mime_type_fails_before_the_transaction_starts() {
        // A lazy pool never connects, so reaching the transaction would
        // error with a connection failure rather than a validation error.
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://postgres@localhost/catalog_test")
            .expect("lazy pool");
        let svc = ImportService::new(pool);
        let ctx = RequestContext::new("tester");

        let err = svc
            .import_file(
                &ctx,
                ImportRequest {
                    collection_slug: "demo".to_string(),
                    data_manager_name: "managerA".to_string(),
                    external_id: "ext-1".to_string(),
                    mime_type: "".to_string(),
                },
            )
            .await
            .expect_err("blank mime type must fail");
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
