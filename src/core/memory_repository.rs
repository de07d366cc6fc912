//! In-memory record store
//!
//! Backs `STORAGE_BACKEND=memory` and the test suites. Every operation runs
//! under a single `RwLock` guard, so each one is atomic for its record.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::core::traits::{Entity, Repository, UpsertCounts};

type IdGenerator<Id> = Box<dyn Fn(u64) -> Id + Send + Sync>;

struct Table<T: Entity> {
    rows: BTreeMap<T::Id, T>,
    next_seq: u64,
}

/// Keyed storage for one entity type
pub struct InMemoryRepository<T: Entity> {
    table: RwLock<Table<T>>,
    generator: Option<IdGenerator<T::Id>>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Store for caller-assigned identifiers
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_seq: 1,
            }),
            generator: None,
        }
    }

    /// Store that hands out identifiers from a 1-based sequence
    pub fn with_generated_ids(generator: impl Fn(u64) -> T::Id + Send + Sync + 'static) -> Self {
        Self {
            generator: Some(Box::new(generator)),
            ..Self::new()
        }
    }

    /// Lookup by the entity's unique secondary key
    pub async fn find_by_natural_key(&self, key: &str) -> Option<T> {
        let table = self.table.read().await;
        table
            .rows
            .values()
            .find(|row| row.natural_key() == Some(key))
            .cloned()
    }

    /// Insert or overwrite caller-identified entities in order, all or nothing.
    ///
    /// Changes are staged on a copy of the table and swapped in only when
    /// every entity was accepted.
    pub async fn put_all(&self, entities: Vec<T>) -> Result<UpsertCounts> {
        let mut table = self.table.write().await;
        let mut staged = table.rows.clone();
        let mut counts = UpsertCounts::default();

        for entity in entities {
            let id = entity.id().cloned().ok_or_else(|| {
                AppError::validation(format!("{} identifier is required", T::KIND))
            })?;
            if natural_key_taken(&staged, &entity, Some(&id)) {
                return Err(AppError::duplicate(format!(
                    "{} '{}' already exists",
                    T::KIND,
                    entity.natural_key().unwrap_or_default()
                )));
            }
            match staged.insert(id, entity) {
                Some(_) => counts.updated += 1,
                None => counts.created += 1,
            }
        }

        table.rows = staged;
        Ok(counts)
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn natural_key_taken<T: Entity>(
    rows: &BTreeMap<T::Id, T>,
    candidate: &T,
    except: Option<&T::Id>,
) -> bool {
    let Some(key) = candidate.natural_key() else {
        return false;
    };
    rows.iter()
        .any(|(id, row)| Some(id) != except && row.natural_key() == Some(key))
}

#[async_trait]
impl<T: Entity> Repository<T, T::Id> for InMemoryRepository<T> {
    async fn insert(&self, mut entity: T) -> Result<T> {
        let mut table = self.table.write().await;

        let id = match (entity.id().cloned(), &self.generator) {
            (Some(id), _) => id,
            (None, Some(generate)) => {
                let mut id = generate(table.next_seq);
                while table.rows.contains_key(&id) {
                    table.next_seq += 1;
                    id = generate(table.next_seq);
                }
                table.next_seq += 1;
                entity.set_id(id.clone());
                id
            }
            (None, None) => {
                return Err(AppError::validation(format!(
                    "{} identifier is required",
                    T::KIND
                )))
            }
        };

        if table.rows.contains_key(&id) {
            return Err(AppError::duplicate(format!(
                "{} '{}' already exists",
                T::KIND,
                id
            )));
        }
        if natural_key_taken(&table.rows, &entity, None) {
            return Err(AppError::duplicate(format!(
                "{} '{}' already exists",
                T::KIND,
                entity.natural_key().unwrap_or_default()
            )));
        }

        table.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn replace(&self, id: &T::Id, mut entity: T) -> Result<Option<T>> {
        let mut table = self.table.write().await;

        if !table.rows.contains_key(id) {
            return Ok(None);
        }
        entity.set_id(id.clone());
        if natural_key_taken(&table.rows, &entity, Some(id)) {
            return Err(AppError::duplicate(format!(
                "{} '{}' already exists",
                T::KIND,
                entity.natural_key().unwrap_or_default()
            )));
        }

        table.rows.insert(id.clone(), entity.clone());
        Ok(Some(entity))
    }

    async fn get_all(&self) -> Result<Vec<T>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &T::Id) -> Result<Option<T>> {
        Ok(self.table.read().await.rows.get(id).cloned())
    }

    async fn delete_by_id(&self, id: &T::Id) -> Result<bool> {
        Ok(self.table.write().await.rows.remove(id).is_some())
    }
}
