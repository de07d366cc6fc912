use async_trait::async_trait;
use crate::core::error::AppResult;

/// A uniquely identified record managed through a [`Repository`]
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier type; unique within the collection and immutable once assigned
    type Id: Clone + Ord + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static;

    /// Human-readable kind used in error messages and logs
    const KIND: &'static str;

    /// Current identifier, `None` until a store-generated id is assigned
    fn id(&self) -> Option<&Self::Id>;

    /// Store the identifier handed out by the record store
    fn set_id(&mut self, id: Self::Id);

    /// Unique secondary key (warehouse code, user email), if the entity has one
    fn natural_key(&self) -> Option<&str> {
        None
    }
}

/// Outcome of a batch upsert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpsertCounts {
    pub created: usize,
    pub updated: usize,
}

impl UpsertCounts {
    pub fn total(&self) -> usize {
        self.created + self.updated
    }
}

/// Base repository trait for CRUD operations
/// All record stores implement this trait, one per entity type
#[async_trait]
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync + 'static,
    ID: Send + Sync + 'static,
{
    /// Insert a new record, assigning an identifier when the store generates them.
    /// Fails with `DuplicateIdentifier` when the identifier or a unique key is taken.
    async fn insert(&self, entity: T) -> AppResult<T>;

    /// Overwrite the record stored under `id`; `Ok(None)` when there is none
    async fn replace(&self, id: &ID, entity: T) -> AppResult<Option<T>>;

    /// Every stored record, ascending by identifier
    async fn get_all(&self) -> AppResult<Vec<T>>;

    /// Find entity by ID
    async fn get_by_id(&self, id: &ID) -> AppResult<Option<T>>;

    /// Delete an entity by ID, returning whether a record was removed
    async fn delete_by_id(&self, id: &ID) -> AppResult<bool>;
}
