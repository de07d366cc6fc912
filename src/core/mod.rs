pub mod entity_service;
pub mod error;
pub mod memory_repository;
pub mod traits;
pub mod validation;

pub use entity_service::EntityService;
pub use error::{AppError, AppResult, Result};
pub use memory_repository::InMemoryRepository;
pub use traits::{CrudEntityService, Entity, Repository, UpsertCounts};
