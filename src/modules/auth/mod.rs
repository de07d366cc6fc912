// Auth module

pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{AuthResponse, LoginRequest, RegisterRequest};
pub use services::{AuthService, OpaqueTokenIssuer, TokenIssuer};
