use thiserror::Error;

/// Self-host client error types
#[derive(Error, Debug)]
pub enum SelfHostError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing failed: {0}")]
    Url(#[from] url::ParseError),

    /// Construction-time error: the client could not resolve a base URL
    /// or a credential pair. Never raised by a request.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad Request")]
    BadRequest,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Conflict")]
    Conflict,

    #[error("Too Many Requests")]
    TooManyRequests,

    /// Catch-all for every error status the API does not enumerate,
    /// 5xx included.
    #[error("Internal Server Error (status {status})")]
    InternalServer { status: u16 },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Result type for Self-host operations
pub type SelfHostResult<T> = Result<T, SelfHostError>;

impl SelfHostError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}
