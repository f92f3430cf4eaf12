//! Error types for Ethos API operations.

use thiserror::Error;

/// Errors that can occur during Ethos API operations.
#[derive(Debug, Error)]
pub enum EthosError {
    /// Configuration is missing or incomplete.
    #[error("Ethos configuration required: {0}")]
    ConfigMissing(String),

    /// The proxy refused to issue a session token.
    #[error(
        "Unable to retrieve authorization token ({message}). \
         Check ETHOS_PROXY_URL and ETHOS_API_KEY and try again"
    )]
    Authentication {
        message: String,
        status_code: Option<u16>,
    },

    /// Entity not found.
    #[error("{entity_type} '{id}' not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A caller-supplied payload is missing something the API requires.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The API answered with a non-2xx status.
    #[error("Ethos API error (HTTP {status_code}): {body}")]
    Remote { status_code: u16, body: String },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl EthosError {
    /// Returns true for lookups that matched nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EthosError::NotFound { .. })
    }

    /// HTTP status attached to the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            EthosError::Remote { status_code, .. } => Some(*status_code),
            EthosError::Authentication { status_code, .. } => *status_code,
            EthosError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for Ethos operations.
pub type Result<T> = core::result::Result<T, EthosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = EthosError::NotFound {
            entity_type: "hold type",
            id: "ACC".to_string(),
        };
        assert_eq!(err.to_string(), "hold type 'ACC' not found");
        assert!(err.is_not_found());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_remote_carries_status_and_body() {
        let err = EthosError::Remote {
            status_code: 404,
            body: "no such hold".to_string(),
        };
        assert_eq!(err.status_code(), Some(404));
        assert!(err.to_string().contains("no such hold"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_authentication_points_at_configuration() {
        let err = EthosError::Authentication {
            message: "HTTP 401".to_string(),
            status_code: Some(401),
        };
        let msg = err.to_string();
        assert!(msg.contains("authorization token"));
        assert!(msg.contains("ETHOS_API_KEY"));
        assert_eq!(err.status_code(), Some(401));
    }
}
