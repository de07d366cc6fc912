pub mod auth_service;
pub mod password;
pub mod token;

pub use auth_service::{AuthService, UserEntityService};
pub use token::{IssuedToken, OpaqueTokenIssuer, TokenIssuer};
