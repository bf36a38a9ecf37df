//! Collection repository implementation.

use sqlx::{PgExecutor, PgPool};

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_entity::collection::{Collection, CollectionSummary, CreateCollection};

/// Columns of the aggregate summary query, shared by the list and detail
/// variants. The LEFT JOINs keep collections with zero files in the result
/// with a `file_count` of 0.
const SUMMARY_SELECT: &str = "SELECT c.collection_id, c.collection_slug, c.collection_name, \
     c.collection_doi, c.description, \
     COUNT(DISTINCT vf.file_id) AS file_count \
     FROM collection c \
     LEFT JOIN version v ON v.collection_id = c.collection_id \
     LEFT JOIN version_file vf ON vf.version_id = v.version_id";

/// Repository for collection rows and their aggregate summaries.
#[derive(Debug, Clone)]
pub struct CollectionRepository {
    pool: PgPool,
}

impl CollectionRepository {
    /// Create a new collection repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new collection together with its initial version.
    ///
    /// Both rows are created in one transaction so a collection can never
    /// be observed without at least one version.
    pub async fn create(&self, data: &CreateCollection) -> AppResult<Collection> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let collection = sqlx::query_as::<_, Collection>(
            "INSERT INTO collection (collection_slug, collection_name, collection_doi) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.slug)
        .bind(&data.name)
        .bind(&data.doi)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("collection_collection_slug_key") =>
            {
                AppError::conflict(format!(
                    "Collection slugs must be unique and '{}' already exists",
                    data.slug
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create collection", e),
        })?;

        sqlx::query("INSERT INTO version (collection_id) VALUES ($1)")
            .bind(collection.collection_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create initial version", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit collection", e)
        })?;

        Ok(collection)
    }

    /// Resolve a collection id by slug using the repository pool.
    pub async fn resolve_id(&self, slug: &str) -> AppResult<Option<i64>> {
        Self::resolve_id_in(&self.pool, slug).await
    }

    /// Resolve a collection id by slug on an arbitrary executor.
    pub async fn resolve_id_in<'e>(
        executor: impl PgExecutor<'e>,
        slug: &str,
    ) -> AppResult<Option<i64>> {
        sqlx::query_scalar::<_, i64>(
            "SELECT collection_id FROM collection WHERE collection_slug = $1",
        )
        .bind(slug)
        .fetch_optional(executor)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to resolve collection id", e)
        })
    }

    /// Find a collection summary (with aggregate file count) by slug.
    pub async fn find_summary_by_slug(&self, slug: &str) -> AppResult<Option<CollectionSummary>> {
        let query = format!(
            "{SUMMARY_SELECT} WHERE c.collection_slug = $1 GROUP BY c.collection_id"
        );
        sqlx::query_as::<_, CollectionSummary>(&query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find collection", e))
    }

    /// Find a collection by slug, scoped to one of its versions.
    ///
    /// Returns `None` when the slug is unknown or the version does not
    /// belong to that collection.
    pub async fn find_by_slug_and_version(
        &self,
        slug: &str,
        version_id: i64,
    ) -> AppResult<Option<Collection>> {
        sqlx::query_as::<_, Collection>(
            "SELECT c.collection_id, c.collection_slug, c.collection_name, \
             c.collection_doi, c.description \
             FROM collection c \
             JOIN version v ON v.collection_id = c.collection_id \
             WHERE c.collection_slug = $1 AND v.version_id = $2",
        )
        .bind(slug)
        .bind(version_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find collection version", e)
        })
    }

    /// List collection summaries, optionally filtered by exact slug.
    pub async fn list(&self, slug_filter: Option<&str>) -> AppResult<Vec<CollectionSummary>> {
        if let Some(slug) = slug_filter {
            let query = format!(
                "{SUMMARY_SELECT} WHERE c.collection_slug = $1 \
                 GROUP BY c.collection_id ORDER BY c.collection_id"
            );
            sqlx::query_as::<_, CollectionSummary>(&query)
                .bind(slug)
                .fetch_all(&self.pool)
                .await
        } else {
            let query =
                format!("{SUMMARY_SELECT} GROUP BY c.collection_id ORDER BY c.collection_id");
            sqlx::query_as::<_, CollectionSummary>(&query)
                .fetch_all(&self.pool)
                .await
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list collections", e))
    }

    /// Update a collection's description in place.
    ///
    /// Returns `None` when no collection with that slug exists.
    pub async fn update_description(
        &self,
        slug: &str,
        description: &str,
    ) -> AppResult<Option<Collection>> {
        sqlx::query_as::<_, Collection>(
            "UPDATE collection SET description = $2 WHERE collection_slug = $1 RETURNING *",
        )
        .bind(slug)
        .bind(description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update description", e)
        })
    }
}
