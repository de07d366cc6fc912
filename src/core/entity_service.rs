//! Generic entity service
//!
//! One save/update/list/get/delete implementation reused by every entity type.
//! The service holds no entity state; the record store behind it owns it.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::{AppError, Result};
use crate::core::traits::{CrudEntityService, Entity, Repository};

/// Stateless façade over a [`Repository`] for entity type `T`.
///
/// `R` is usually a trait object (`dyn WarehouseRepository`) so the per-entity
/// repository extensions stay reachable through [`EntityService::repository`].
pub struct EntityService<T, R>
where
    T: Entity,
    R: Repository<T, T::Id> + ?Sized,
{
    repository: Arc<R>,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R> EntityService<T, R>
where
    T: Entity,
    R: Repository<T, T::Id> + ?Sized,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            _entity: PhantomData,
        }
    }

    /// Underlying record store
    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Like `find_by_id` but without turning absence into an error
    pub async fn find_optional(&self, id: &T::Id) -> Result<Option<T>> {
        self.repository.get_by_id(id).await
    }
}

impl<T, R> Clone for EntityService<T, R>
where
    T: Entity,
    R: Repository<T, T::Id> + ?Sized,
{
    fn clone(&self) -> Self {
        Self::new(self.repository.clone())
    }
}

fn not_found<T: Entity>(id: &T::Id) -> AppError {
    AppError::not_found(format!("{} '{}' not found", T::KIND, id))
}

#[async_trait]
impl<T, R> CrudEntityService<T, T::Id> for EntityService<T, R>
where
    T: Entity,
    R: Repository<T, T::Id> + ?Sized,
{
    async fn save(&self, entity: T) -> Result<T> {
        if let Some(id) = entity.id() {
            if self.repository.get_by_id(id).await?.is_some() {
                return Err(AppError::duplicate(format!(
                    "{} '{}' already exists",
                    T::KIND,
                    id
                )));
            }
        }

        let saved = self.repository.insert(entity).await?;
        tracing::debug!(kind = T::KIND, id = ?saved.id(), "Entity saved");
        Ok(saved)
    }

    async fn update(&self, entity: T) -> Result<T> {
        let id = entity.id().cloned().ok_or_else(|| {
            AppError::validation(format!("{} identifier is required for update", T::KIND))
        })?;

        let updated = self
            .repository
            .replace(&id, entity)
            .await?
            .ok_or_else(|| not_found::<T>(&id))?;

        tracing::debug!(kind = T::KIND, id = %id, "Entity updated");
        Ok(updated)
    }

    async fn find_all(&self) -> Result<Vec<T>> {
        self.repository.get_all().await
    }

    async fn find_by_id(&self, id: T::Id) -> Result<T> {
        self.repository
            .get_by_id(&id)
            .await?
            .ok_or_else(|| not_found::<T>(&id))
    }

    async fn delete(&self, id: T::Id) -> Result<()> {
        if !self.repository.delete_by_id(&id).await? {
            return Err(not_found::<T>(&id));
        }

        tracing::debug!(kind = T::KIND, id = %id, "Entity deleted");
        Ok(())
    }
}
