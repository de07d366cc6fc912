// Users module: accounts are created through auth, there are no user routes

pub mod models;
pub mod repositories;

pub use models::{Role, User, UserResponse};
pub use repositories::{MySqlUserRepository, UserRepository};
