//! Client error types

use learnhub_core::{CoreError, Namespace};
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Credential storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] CoreError),

    /// Credentials were rejected and could not be renewed; the stored session
    /// for `namespace` has been cleared
    #[error("Session expired ({namespace}): {source}")]
    SessionInvalidated {
        namespace: Namespace,
        #[source]
        source: Box<ClientError>,
    },
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the caller must authenticate again
    pub fn is_auth_expired(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed(_) | Self::SessionInvalidated { .. }
        )
    }

    /// Namespace whose session was cleared, if this error ended one
    pub fn invalidated_namespace(&self) -> Option<Namespace> {
        match self {
            Self::SessionInvalidated { namespace, .. } => Some(*namespace),
            _ => None,
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request(err) => err.status().map(|s| s.as_u16()),
            Self::ServerError { status, .. } => Some(*status),
            Self::AuthenticationFailed(_) => Some(401),
            Self::NotFound(_) => Some(404),
            Self::BadRequest(_) => Some(400),
            Self::Forbidden(_) => Some(403),
            Self::SessionInvalidated { source, .. } => source.status(),
            Self::Serialization(_) | Self::Configuration(_) | Self::Storage(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status() {
        assert!(matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, "no".into()),
            ClientError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::NOT_FOUND, "gone".into()),
            ClientError::NotFound(_)
        ));
        let err = ClientError::from_status(StatusCode::BAD_GATEWAY, "upstream".into());
        assert_eq!(err.status(), Some(502));
        assert!(!err.is_auth_expired());
    }

    #[test]
    fn test_session_invalidated() {
        let err = ClientError::SessionInvalidated {
            namespace: Namespace::Admin,
            source: Box::new(ClientError::from_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                "refresh broke".into(),
            )),
        };
        assert!(err.is_auth_expired());
        assert_eq!(err.invalidated_namespace(), Some(Namespace::Admin));
        assert_eq!(err.status(), Some(500));
        assert_eq!(
            err.to_string(),
            "Session expired (admin): Server error 500: refresh broke"
        );
    }
}
