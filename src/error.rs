use thiserror::Error;

/// Main error type for Nike+ API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error reported by the Nike+ API, normalized from either the
    /// structured `{result, errorCode, errorMessage}` envelope or the
    /// generic `{"error": "..."}` object
    #[error("Nike+ API error: {message}")]
    Api {
        message: String,
        code: Option<String>,
    },

    /// Error response whose shape could not be interpreted; carries the
    /// full body for diagnosis
    #[error("unknown error response: {body}")]
    UnknownErrorResponse { body: String },

    /// Login rejected by the service, signaled through the final redirect
    /// URL; carries that URL's raw query string
    #[error("login rejected: {query}")]
    LoginRejected { query: String },

    /// Token exchange response did not contain an `auth_token` string field
    #[error("cannot obtain access token")]
    TokenMissing,

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Check if this error was reported by the remote API
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Get the API error code, when the remote reported one
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Error::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

/// Result type for Nike+ API operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_helpers() {
        let error = Error::Api {
            message: "access token expired".to_string(),
            code: Some("ACCESS_DENIED".to_string()),
        };

        assert!(error.is_api());
        assert_eq!(error.api_code(), Some("ACCESS_DENIED"));
        assert_eq!(error.to_string(), "Nike+ API error: access token expired");
    }

    #[test]
    fn test_login_rejected_message_names_query() {
        let error = Error::LoginRejected {
            query: "error=invalid_credentials".to_string(),
        };

        assert!(!error.is_api());
        assert!(error.to_string().contains("error=invalid_credentials"));
    }

    #[test]
    fn test_token_missing_message() {
        assert_eq!(Error::TokenMissing.to_string(), "cannot obtain access token");
        assert_eq!(Error::TokenMissing.api_code(), None);
    }
}
