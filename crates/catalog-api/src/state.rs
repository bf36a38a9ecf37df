//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use catalog_core::config::AppConfig;

use catalog_database::repositories::collection::CollectionRepository;
use catalog_database::repositories::data_manager::DataManagerRepository;
use catalog_database::repositories::file::FileRepository;
use catalog_database::repositories::file_type::FileTypeRepository;
use catalog_database::repositories::version::VersionRepository;

use catalog_service::collection::CollectionService;
use catalog_service::data_manager::DataManagerService;
use catalog_service::file::FileService;
use catalog_service::file_type::FileTypeService;
use catalog_service::import::ImportService;
use catalog_service::version::VersionService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Collection registry service.
    pub collection_service: Arc<CollectionService>,
    /// Version ledger service.
    pub version_service: Arc<VersionService>,
    /// File type taxonomy service.
    pub file_type_service: Arc<FileTypeService>,
    /// Data manager registry service.
    pub data_manager_service: Arc<DataManagerService>,
    /// File catalog read service.
    pub file_service: Arc<FileService>,
    /// File import orchestrator.
    pub import_service: Arc<ImportService>,
}

impl AppState {
    /// Wire repositories and services over a connected pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let collection_repo = Arc::new(CollectionRepository::new(db_pool.clone()));
        let version_repo = Arc::new(VersionRepository::new(db_pool.clone()));
        let file_type_repo = Arc::new(FileTypeRepository::new(db_pool.clone()));
        let data_manager_repo = Arc::new(DataManagerRepository::new(db_pool.clone()));
        let file_repo = Arc::new(FileRepository::new(db_pool.clone()));

        Self {
            config: Arc::new(config),
            collection_service: Arc::new(CollectionService::new(Arc::clone(&collection_repo))),
            version_service: Arc::new(VersionService::new(
                Arc::clone(&version_repo),
                Arc::clone(&collection_repo),
            )),
            file_type_service: Arc::new(FileTypeService::new(Arc::clone(&file_type_repo))),
            data_manager_service: Arc::new(DataManagerService::new(Arc::clone(
                &data_manager_repo,
            ))),
            file_service: Arc::new(FileService::new(Arc::clone(&file_repo))),
            import_service: Arc::new(ImportService::new(db_pool.clone())),
            db_pool,
        }
    }
}
