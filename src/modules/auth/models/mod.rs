pub mod auth;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
