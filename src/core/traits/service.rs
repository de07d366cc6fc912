use crate::core::Result;
use async_trait::async_trait;

/// Uniform create/update/list/get/delete contract shared by every entity type
#[async_trait]
pub trait CrudEntityService<T, ID>: Send + Sync
where
    T: Send + Sync + 'static,
    ID: Send + Sync + 'static,
{
    /// Insert a new record
    async fn save(&self, entity: T) -> Result<T>;

    /// Replace the stored record matching the entity's identifier
    async fn update(&self, entity: T) -> Result<T>;

    /// Every stored record; empty when the store is empty
    async fn find_all(&self) -> Result<Vec<T>>;

    async fn find_by_id(&self, id: ID) -> Result<T>;

    async fn delete(&self, id: ID) -> Result<()>;
}
