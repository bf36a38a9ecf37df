//! Data manager registry operations.

use std::sync::Arc;

use tracing::info;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_database::repositories::data_manager::DataManagerRepository;
use catalog_entity::data_manager::DataManager;

use crate::context::RequestContext;

/// Manages the registry of file-supplying data managers.
///
/// Creation and lookup are deliberately separate: registering a duplicate
/// name is a conflict, and importing for an unknown name is a validation
/// error, never an implicit creation.
#[derive(Debug, Clone)]
pub struct DataManagerService {
    /// Data manager repository.
    data_manager_repo: Arc<DataManagerRepository>,
}

impl DataManagerService {
    /// Creates a new data manager service.
    pub fn new(data_manager_repo: Arc<DataManagerRepository>) -> Self {
        Self { data_manager_repo }
    }

    /// Registers a new data manager.
    pub async fn create_data_manager(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> AppResult<DataManager> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Data manager name cannot be empty"));
        }

        let manager = self.data_manager_repo.create(name).await?;

        info!(
            user = %ctx.user,
            data_manager_id = manager.data_manager_id,
            name = %manager.data_manager_name,
            "Data manager created"
        );

        Ok(manager)
    }

    /// Resolves a data manager id from its exact name.
    pub async fn resolve_data_manager_id(&self, name: &str) -> AppResult<i64> {
        self.data_manager_repo
            .resolve_id(name)
            .await?
            .ok_or_else(|| {
                AppError::validation(format!("No data manager exists with name \"{name}\""))
            })
    }

    /// Lists data managers, optionally filtered by exact name.
    pub async fn list_data_managers(
        &self,
        name_filter: Option<&str>,
    ) -> AppResult<Vec<DataManager>> {
        self.data_manager_repo.list(name_filter).await
    }
}
