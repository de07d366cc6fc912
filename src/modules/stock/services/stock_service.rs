use std::sync::Arc;

use crate::core::error::AppError;
use crate::core::{CrudEntityService, EntityService};
use crate::modules::stock::models::{
    StockLevel, StockLevelCreateRequest, StockLevelResponse, StockLevelUpdateRequest,
};
use crate::modules::stock::repositories::StockLevelRepository;

pub type StockEntityService = EntityService<StockLevel, dyn StockLevelRepository>;

/// Service for stock level endpoints
pub struct StockService {
    entities: StockEntityService,
}

impl StockService {
    pub fn new(repository: Arc<dyn StockLevelRepository>) -> Self {
        Self {
            entities: EntityService::new(repository),
        }
    }

    pub async fn create(&self, request: StockLevelCreateRequest) -> Result<StockLevelResponse, AppError> {
        let level = request.into_stock_level()?;
        let saved = self.entities.save(level).await?;

        tracing::info!(category = %saved.category, status = %saved.status(), "Stock level created");
        Ok(saved.into())
    }

    pub async fn update(
        &self,
        category: String,
        request: StockLevelUpdateRequest,
    ) -> Result<StockLevelResponse, AppError> {
        let updated = self
            .entities
            .update(request.into_stock_level(category))
            .await?;

        tracing::info!(category = %updated.category, status = %updated.status(), "Stock level updated");
        Ok(updated.into())
    }

    pub async fn list(&self) -> Result<Vec<StockLevelResponse>, AppError> {
        let levels = self.entities.find_all().await?;
        Ok(levels.into_iter().map(StockLevelResponse::from).collect())
    }

    pub async fn get(&self, category: String) -> Result<StockLevelResponse, AppError> {
        Ok(self.entities.find_by_id(category).await?.into())
    }

    pub async fn delete(&self, category: String) -> Result<(), AppError> {
        self.entities.delete(category).await
    }
}
