use std::sync::Arc;

use crate::core::error::AppError;
use crate::core::{CrudEntityService, EntityService};
use crate::modules::warehouses::models::{
    Warehouse, WarehouseCreateRequest, WarehouseResponse, WarehouseUpdateRequest,
};
use crate::modules::warehouses::repositories::WarehouseRepository;

pub type WarehouseEntityService = EntityService<Warehouse, dyn WarehouseRepository>;

/// Service for warehouse business logic
pub struct WarehouseService {
    entities: WarehouseEntityService,
}

impl WarehouseService {
    pub fn new(repository: Arc<dyn WarehouseRepository>) -> Self {
        Self {
            entities: EntityService::new(repository),
        }
    }

    /// Generic CRUD access for collaborators that work on raw entities
    pub fn entities(&self) -> &WarehouseEntityService {
        &self.entities
    }

    pub async fn create(&self, request: WarehouseCreateRequest) -> Result<WarehouseResponse, AppError> {
        let warehouse = request.into_warehouse()?;
        let saved = self.entities.save(warehouse).await?;

        tracing::info!(warehouse_id = ?saved.id, code = %saved.code, "Warehouse created");
        Ok(saved.into())
    }

    /// Merge present request fields onto the stored record, then replace it
    pub async fn update(
        &self,
        id: i64,
        request: WarehouseUpdateRequest,
    ) -> Result<WarehouseResponse, AppError> {
        let stored = self.entities.find_by_id(id).await?;
        let merged = request.apply_to(stored)?;
        let updated = self.entities.update(merged).await?;

        tracing::info!(warehouse_id = id, code = %updated.code, "Warehouse updated");
        Ok(updated.into())
    }

    pub async fn list(&self) -> Result<Vec<WarehouseResponse>, AppError> {
        let warehouses = self.entities.find_all().await?;
        Ok(warehouses.into_iter().map(WarehouseResponse::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<WarehouseResponse, AppError> {
        Ok(self.entities.find_by_id(id).await?.into())
    }

    pub async fn get_by_code(&self, code: &str) -> Result<WarehouseResponse, AppError> {
        self.entities
            .repository()
            .find_by_code(code)
            .await?
            .map(WarehouseResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("Warehouse '{}' not found", code)))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.entities.delete(id).await?;
        tracing::info!(warehouse_id = id, "Warehouse deleted");
        Ok(())
    }
}
