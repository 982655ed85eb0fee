use std::env;

use base64::{engine::general_purpose, Engine};
use reqwest::header::HeaderValue;

use crate::error::{SelfHostError, SelfHostResult};

/// Environment variable holding the API base URL.
pub const BASE_URL_VAR: &str = "SELF_HOST_BASE_URL";
/// Environment variable holding the API username.
pub const USERNAME_VAR: &str = "SELF_HOST_USERNAME";
/// Environment variable holding the API password.
pub const PASSWORD_VAR: &str = "SELF_HOST_PASSWORD";

/// Basic authentication credential pair, attached to every request.
#[derive(Debug, Clone)]
pub(crate) struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    /// Resolve the credential pair for a new client.
    ///
    /// An explicit pair wins; otherwise both `SELF_HOST_USERNAME` and
    /// `SELF_HOST_PASSWORD` must be set. Anything less is a fatal
    /// configuration error.
    pub(crate) fn resolve(
        username: Option<String>,
        password: Option<String>,
    ) -> SelfHostResult<Self> {
        if let (Some(username), Some(password)) = (username, password) {
            return Ok(Self { username, password });
        }
        match (env::var(USERNAME_VAR).ok(), env::var(PASSWORD_VAR).ok()) {
            (Some(username), Some(password)) => Ok(Self { username, password }),
            _ => Err(SelfHostError::config("No credentials provided to client")),
        }
    }

    /// Authorization header value for this credential pair.
    pub(crate) fn header_value(&self) -> SelfHostResult<HeaderValue> {
        let credentials = format!("{}:{}", self.username, self.password);
        let encoded = general_purpose::STANDARD.encode(credentials.as_bytes());
        format!("Basic {}", encoded)
            .parse()
            .map_err(|e| SelfHostError::config(format!("Invalid auth header: {}", e)))
    }
}
