use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Alias kept for repository and service signatures
pub type AppResult<T> = Result<T>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for request payloads and uploads
    #[error("Validation error: {0}")]
    Validation(String),

    /// Identifier (or unique secondary key) absent from the store
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller-supplied identifier or unique key already taken
    #[error("Duplicate identifier: {0}")]
    DuplicateIdentifier(String),

    /// Concurrent modification detected
    #[error("Conflict: {0}")]
    Conflict(String),

    /// CSV header missing, misordered or unreadable
    #[error("Malformed CSV header: {0}")]
    MalformedHeader(String),

    /// CSV data row that does not parse to a complete record
    #[error("Malformed CSV row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// Unauthorized access
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Stream read errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable name used in error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::DuplicateIdentifier(_) => "DUPLICATE_IDENTIFIER",
            AppError::Conflict(_) => "CONFLICT",
            AppError::MalformedHeader(_) => "MALFORMED_HEADER",
            AppError::MalformedRow { .. } => "MALFORMED_ROW",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::RateLimitExceeded(_) => "RATE_LIMIT_EXCEEDED",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "INVALID_JSON",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        // Storage details stay in the logs
        let error_message = match self {
            AppError::Database(_) | AppError::Internal(_) | AppError::Io(_) => {
                tracing::error!(error = %self, "Request failed");
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        let mut body = serde_json::json!({
            "error": {
                "code": status_code.as_u16(),
                "kind": self.kind(),
                "message": error_message,
            }
        });
        if let AppError::MalformedRow { line, .. } = self {
            body["error"]["line"] = serde_json::json!(line);
        }

        HttpResponse::build(status_code).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateIdentifier(_) => StatusCode::CONFLICT,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::MalformedHeader(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MalformedRow { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::RateLimitExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn duplicate(resource: impl Into<String>) -> Self {
        AppError::DuplicateIdentifier(resource.into())
    }

    pub fn malformed_row(line: u64, reason: impl Into<String>) -> Self {
        AppError::MalformedRow {
            line,
            reason: reason.into(),
        }
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Map a sqlx error, turning unique-key violations into `DuplicateIdentifier`
    pub fn from_write(err: sqlx::Error, what: impl Into<String>) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return AppError::DuplicateIdentifier(what.into());
            }
        }
        AppError::Database(err)
    }
}
