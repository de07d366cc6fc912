use actix_web::{
    error::{InternalError, JsonPayloadError, PayloadError},
    HttpRequest, ResponseError,
};

use crate::core::AppError;

/// Render JSON extractor failures in the same body shape as [`AppError`]
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let app_error = match &err {
        JsonPayloadError::Overflow { limit } | JsonPayloadError::OverflowKnownLength { limit, .. } => {
            AppError::validation(format!("JSON body exceeds {} bytes", limit))
        }
        JsonPayloadError::ContentType => {
            AppError::validation("Content-Type must be application/json")
        }
        JsonPayloadError::Payload(PayloadError::Overflow) => {
            AppError::validation("JSON body is too large")
        }
        _ => AppError::validation(format!("Invalid JSON body: {}", err)),
    };

    tracing::debug!(path = %req.path(), error = %err, "Rejected JSON payload");

    let response = app_error.error_response();
    InternalError::from_response(err, response).into()
}
