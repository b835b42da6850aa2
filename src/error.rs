use thiserror::Error;

/// Metadata captured from an HTTP response, attached to token errors so the
/// caller can see what the OAuth endpoint actually returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseInfo {
    /// Final URL of the request
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Content-Type header, if any
    pub content_type: Option<String>,
    /// Raw response body
    pub body: String,
}

/// Main error type for REST API operations
#[derive(Debug, Error)]
pub enum RestError {
    /// A caller-supplied parameter failed its type or range check.
    /// Raised before any network call.
    #[error("{0}")]
    Validation(String),

    /// The OAuth token request returned a non-200 status
    #[error("{message}")]
    Auth { message: String, info: ResponseInfo },

    /// An authenticated API call returned a non-200 status
    #[error("request failed with http code {status}")]
    Request { status: u16, body: String },

    /// JSON serialization/deserialization error, including malformed
    /// timestamps and missing response structure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Base64 decoding error
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl RestError {
    /// Create a new token request error
    pub fn auth(info: ResponseInfo) -> Self {
        RestError::Auth {
            message: "Token request failed".to_string(),
            info,
        }
    }

    /// Check if this error was raised by parameter validation
    pub fn is_validation(&self) -> bool {
        matches!(self, RestError::Validation(_))
    }

    /// Check if the remote side rejected our credentials (401)
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }

    /// Get the HTTP status code if the error came from a response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RestError::Auth { info, .. } => Some(info.status),
            RestError::Request { status, .. } => Some(*status),
            RestError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for REST operations
pub type Result<T> = std::result::Result<T, RestError>;
