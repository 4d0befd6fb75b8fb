use std::fmt;

/// Custom error type for TEO operations
#[derive(Debug)]
pub enum TeoError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response (code and message verbatim from the server)
    Api {
        code: String,
        message: String,
        request_id: Option<String>,
    },
    /// Credentials not found in any source
    CredentialsNotFound(String),
    /// Failed to read or parse the credentials file
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for TeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeoError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TeoError::Api {
                code,
                message,
                request_id,
            } => match request_id {
                Some(id) => write!(f, "API error [{}]: {} (RequestId: {})", code, message, id),
                None => write!(f, "API error [{}]: {}", code, message),
            },
            TeoError::CredentialsNotFound(msg) => write!(f, "{}", msg),
            TeoError::Credentials(msg) => write!(f, "{}", msg),
            TeoError::Json(msg) => write!(f, "JSON error: {}", msg),
            TeoError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for TeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TeoError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TeoError {
    fn from(err: reqwest::Error) -> Self {
        TeoError::Http(err)
    }
}

impl From<serde_json::Error> for TeoError {
    fn from(err: serde_json::Error) -> Self {
        TeoError::Json(err.to_string())
    }
}

impl From<std::io::Error> for TeoError {
    fn from(err: std::io::Error) -> Self {
        TeoError::Credentials(err.to_string())
    }
}

/// Result type alias for TEO operations
pub type Result<T> = std::result::Result<T, TeoError>;
