//! Version ledger operations.

use std::sync::Arc;

use tracing::info;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_database::repositories::collection::CollectionRepository;
use catalog_database::repositories::version::VersionRepository;
use catalog_entity::version::{CreateVersion, Version};

use crate::context::RequestContext;

/// Manages the ordered version ledger of each collection.
#[derive(Debug, Clone)]
pub struct VersionService {
    /// Version repository.
    version_repo: Arc<VersionRepository>,
    /// Collection repository, for slug resolution.
    collection_repo: Arc<CollectionRepository>,
}

impl VersionService {
    /// Creates a new version service.
    pub fn new(
        version_repo: Arc<VersionRepository>,
        collection_repo: Arc<CollectionRepository>,
    ) -> Self {
        Self {
            version_repo,
            collection_repo,
        }
    }

    /// Appends a new version to the collection identified by slug.
    pub async fn create_version(
        &self,
        ctx: &RequestContext,
        slug: &str,
        name: Option<String>,
        description: Option<String>,
    ) -> AppResult<Version> {
        let collection_id = self
            .collection_repo
            .resolve_id(slug)
            .await?
            .ok_or_else(|| {
                AppError::validation(format!("No collection exists with slug '{slug}'"))
            })?;

        let version = self
            .version_repo
            .create(&CreateVersion {
                collection_id,
                name,
                description,
            })
            .await?;

        info!(
            user = %ctx.user,
            slug = %slug,
            version_id = version.version_id,
            "Version created"
        );

        Ok(version)
    }

    /// Resolves the latest version id of a collection.
    ///
    /// Collections are created with an initial version, so an empty ledger
    /// should not occur; it is still treated as a validation error rather
    /// than a panic.
    pub async fn resolve_latest_version(&self, collection_id: i64) -> AppResult<i64> {
        self.version_repo
            .latest_id(collection_id)
            .await?
            .ok_or_else(|| {
                AppError::validation(format!(
                    "No version exists for collection {collection_id}"
                ))
            })
    }

    /// Lists all versions of a collection.
    pub async fn list_versions(&self, slug: &str) -> AppResult<Vec<Version>> {
        self.version_repo.list_for_collection_slug(slug).await
    }

    /// Attaches an existing file to an existing version.
    pub async fn attach_file(
        &self,
        ctx: &RequestContext,
        version_id: i64,
        file_id: i64,
    ) -> AppResult<()> {
        self.version_repo.attach_file(version_id, file_id).await?;

        info!(
            user = %ctx.user,
            version_id = version_id,
            file_id = file_id,
            "File attached to version"
        );

        Ok(())
    }
}
