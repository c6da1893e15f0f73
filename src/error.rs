//! Error types for the FaceVault SDK.
//!
//! A single taxonomy covers the whole crate: HTTP failures surfaced by
//! the session client, configuration rejections raised before any
//! network call, and the webhook parser's typed failures.
//!
//! Signature verification is the deliberate exception: it never
//! produces an error value. A body that cannot be verified, including
//! one that is not JSON at all, simply verifies as `false`.

use thiserror::Error;

/// Errors surfaced by the FaceVault SDK.
#[derive(Debug, Error)]
pub enum FaceVaultError {
    /// The API key was rejected (HTTP 401).
    #[error("authentication failed: {message}")]
    Authentication {
        /// Message extracted from the API response.
        message: String,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("not found: {message}")]
    NotFound {
        /// Message extracted from the API response.
        message: String,
    },

    /// Too many requests (HTTP 429).
    #[error("rate limit exceeded: {message}")]
    RateLimited {
        /// Message extracted from the API response.
        message: String,
    },

    /// Any other non-success API response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Best-effort message from the response body.
        message: String,
    },

    /// Invalid configuration, rejected before any network call.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Webhook body is not valid JSON.
    #[error("malformed webhook payload: {0}")]
    MalformedPayload(String),

    /// A webhook field is present but holds the wrong JSON type.
    #[error("unexpected webhook field type: {0}")]
    UnexpectedType(String),

    /// Transport-level failure (connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),
}

impl FaceVaultError {
    /// Maps an HTTP status code onto the error taxonomy.
    ///
    /// 401, 404 and 429 get dedicated variants; everything else becomes
    /// [`FaceVaultError::Api`] carrying the status code.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 => Self::Authentication { message },
            404 => Self::NotFound { message },
            429 => Self::RateLimited { message },
            _ => Self::Api { status, message },
        }
    }

    /// The HTTP status associated with this error, when one exists.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::Api { status, .. } => Some(*status),
            Self::Configuration(_)
            | Self::MalformedPayload(_)
            | Self::UnexpectedType(_)
            | Self::Network(_) => None,
        }
    }

    /// The human-readable message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Self::Authentication { message }
            | Self::NotFound { message }
            | Self::RateLimited { message }
            | Self::Api { message, .. } => message,
            Self::Configuration(message)
            | Self::MalformedPayload(message)
            | Self::UnexpectedType(message)
            | Self::Network(message) => message,
        }
    }

    /// Creates a network error.
    pub(crate) fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ══════════════════════════════════════════════════════════════
    // Status Mapping Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn from_status_401_is_authentication() {
        let err = FaceVaultError::from_status(401, "Invalid API key");
        assert!(matches!(err, FaceVaultError::Authentication { .. }));
        assert_eq!(err.message(), "Invalid API key");
    }

    #[test]
    fn from_status_404_is_not_found() {
        let err = FaceVaultError::from_status(404, "Session not found");
        assert!(matches!(err, FaceVaultError::NotFound { .. }));
    }

    #[test]
    fn from_status_429_is_rate_limited() {
        let err = FaceVaultError::from_status(429, "Rate limit exceeded");
        assert!(matches!(err, FaceVaultError::RateLimited { .. }));
    }

    #[test]
    fn from_status_other_is_generic_api_error() {
        let err = FaceVaultError::from_status(503, "upstream unavailable");
        match err {
            FaceVaultError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream unavailable");
            }
            other => panic!("expected Api, got {:?}", other),
        }
    }

    // ══════════════════════════════════════════════════════════════
    // Accessor Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn status_code_follows_variant() {
        assert_eq!(FaceVaultError::from_status(401, "x").status_code(), Some(401));
        assert_eq!(FaceVaultError::from_status(404, "x").status_code(), Some(404));
        assert_eq!(FaceVaultError::from_status(429, "x").status_code(), Some(429));
        assert_eq!(FaceVaultError::from_status(500, "x").status_code(), Some(500));
    }

    #[test]
    fn non_http_errors_have_no_status_code() {
        assert_eq!(
            FaceVaultError::Configuration("bad".to_string()).status_code(),
            None
        );
        assert_eq!(
            FaceVaultError::MalformedPayload("bad".to_string()).status_code(),
            None
        );
        assert_eq!(FaceVaultError::network("down").status_code(), None);
    }

    #[test]
    fn message_is_total_over_variants() {
        assert_eq!(
            FaceVaultError::Configuration("no key".to_string()).message(),
            "no key"
        );
        assert_eq!(
            FaceVaultError::UnexpectedType("score".to_string()).message(),
            "score"
        );
    }

    // ══════════════════════════════════════════════════════════════
    // Display Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn authentication_displays_message() {
        let err = FaceVaultError::from_status(401, "Invalid API key");
        assert_eq!(format!("{}", err), "authentication failed: Invalid API key");
    }

    #[test]
    fn api_error_displays_status_and_message() {
        let err = FaceVaultError::from_status(502, "bad gateway");
        assert_eq!(format!("{}", err), "API error (502): bad gateway");
    }

    #[test]
    fn malformed_payload_displays_reason() {
        let err = FaceVaultError::MalformedPayload("expected value at line 1".to_string());
        assert_eq!(
            format!("{}", err),
            "malformed webhook payload: expected value at line 1"
        );
    }
}
