pub mod error_handler;
pub mod rate_limit;
pub mod request_id;

pub use error_handler::json_error_handler;
pub use rate_limit::RateLimiter;
pub use request_id::{RequestId, RequestIdValue};
