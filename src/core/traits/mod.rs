pub mod repository;
pub mod service;

pub use repository::{Entity, Repository, UpsertCounts};
pub use service::CrudEntityService;
