//! Collection registry operations.

use std::sync::Arc;

use tracing::info;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_database::repositories::collection::CollectionRepository;
use catalog_entity::collection::{
    Collection, CollectionSummary, CreateCollection, is_valid_slug,
};

use crate::context::RequestContext;

/// Manages collection creation, lookup, and description updates.
#[derive(Debug, Clone)]
pub struct CollectionService {
    /// Collection repository.
    collection_repo: Arc<CollectionRepository>,
}

impl CollectionService {
    /// Creates a new collection service.
    pub fn new(collection_repo: Arc<CollectionRepository>) -> Self {
        Self { collection_repo }
    }

    /// Creates a collection together with its initial version.
    ///
    /// The slug must be non-empty and contain only `[-_a-zA-Z0-9]`.
    pub async fn create_collection(
        &self,
        ctx: &RequestContext,
        req: CreateCollection,
    ) -> AppResult<Collection> {
        if !is_valid_slug(&req.slug) {
            return Err(AppError::validation(format!(
                "Collection slug '{}' is malformed; only characters [-_a-zA-Z0-9] are allowed",
                req.slug
            )));
        }

        let collection = self.collection_repo.create(&req).await?;

        info!(
            user = %ctx.user,
            collection_id = collection.collection_id,
            slug = %collection.collection_slug,
            "Collection created"
        );

        Ok(collection)
    }

    /// Gets a collection by slug, with its aggregate file count.
    pub async fn get_collection(&self, slug: &str) -> AppResult<CollectionSummary> {
        self.collection_repo
            .find_summary_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No collection exists with slug '{slug}'")))
    }

    /// Gets a collection by slug, scoped to one of its versions.
    pub async fn get_collection_version(
        &self,
        slug: &str,
        version_id: i64,
    ) -> AppResult<Collection> {
        self.collection_repo
            .find_by_slug_and_version(slug, version_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "No version {version_id} exists for collection '{slug}'"
                ))
            })
    }

    /// Lists collection summaries, optionally filtered by exact slug.
    ///
    /// Collections with no files are included with a file count of zero.
    pub async fn list_collections(
        &self,
        slug_filter: Option<&str>,
    ) -> AppResult<Vec<CollectionSummary>> {
        self.collection_repo.list(slug_filter).await
    }

    /// Updates a collection's description in place.
    pub async fn update_description(
        &self,
        ctx: &RequestContext,
        slug: &str,
        description: &str,
    ) -> AppResult<Collection> {
        let collection = self
            .collection_repo
            .update_description(slug, description)
            .await?
            .ok_or_else(|| {
                AppError::validation(format!("No collection exists with slug '{slug}'"))
            })?;

        info!(
            user = %ctx.user,
            slug = %slug,
            "Collection description updated"
        );

        Ok(collection)
    }

    /// Resolves a collection id from its slug.
    ///
    /// Used by every component that accepts a slug; an unknown slug is a
    /// validation error naming the slug.
    pub async fn resolve_collection_id(&self, slug: &str) -> AppResult<i64> {
        self.collection_repo
            .resolve_id(slug)
            .await?
            .ok_or_else(|| AppError::validation(format!("No collection exists with slug '{slug}'")))
    }
}
