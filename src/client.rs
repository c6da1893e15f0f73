//! Asynchronous FaceVault API client.
//!
//! A thin wrapper over `reqwest` for the two session endpoints. Each
//! call is a single round trip with the configured timeout; there is no
//! retry, backoff or pooling logic here; retry policy belongs to the
//! host application.

use serde::Deserialize;

use crate::config::FaceVaultConfig;
use crate::error::FaceVaultError;
use crate::models::{Session, SessionStatus};

/// Header carrying the API key on every request.
const API_KEY_HEADER: &str = "X-FaceVault-Api-Key";

/// Async client for the FaceVault verification API.
///
/// # Example
///
/// ```ignore
/// let config = FaceVaultConfig::new("fv_test_abc123");
/// let client = FaceVaultClient::new(config)?;
///
/// let session = client.create_session("user_42").await?;
/// // hand session.webapp_url to the end user, then poll:
/// let status = client.get_session(&session.session_id).await?;
/// ```
pub struct FaceVaultClient {
    config: FaceVaultConfig,
    http: reqwest::Client,
}

/// Wire shape of `POST /api/v1/sessions`.
#[derive(Debug, Deserialize)]
struct CreateSessionResponse {
    session_id: String,
    #[serde(default)]
    session_token: String,
    #[serde(default)]
    steps: Vec<String>,
}

impl FaceVaultClient {
    /// Creates a client, validating the configuration first.
    ///
    /// # Errors
    ///
    /// [`FaceVaultError::Configuration`] for an empty API key or a
    /// non-HTTPS endpoint, raised here before any network call.
    pub fn new(config: FaceVaultConfig) -> Result<Self, FaceVaultError> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                FaceVaultError::Configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self { config, http })
    }

    /// Creates a new verification session.
    ///
    /// `external_user_id` is the host's identifier for the end user
    /// (e.g. a chat ID). The returned [`Session`] carries the
    /// `webapp_url` to hand to the user.
    pub async fn create_session(
        &self,
        external_user_id: &str,
    ) -> Result<Session, FaceVaultError> {
        let url = format!("{}/api/v1/sessions", self.config.base_url());
        tracing::debug!(external_user_id = %external_user_id, "creating verification session");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, self.config.api_key())
            .query(&[("external_user_id", external_user_id)])
            .send()
            .await
            .map_err(map_transport_error)?;

        let created: CreateSessionResponse = read_json(response).await?;
        let webapp_url = webapp_url(
            self.config.webapp_base(),
            &created.session_id,
            &created.session_token,
        );

        Ok(Session {
            session_id: created.session_id,
            session_token: created.session_token,
            steps: created.steps,
            webapp_url,
        })
    }

    /// Gets the current status of a verification session.
    pub async fn get_session(&self, session_id: &str) -> Result<SessionStatus, FaceVaultError> {
        let url = format!("{}/api/v1/sessions/{}", self.config.base_url(), session_id);
        tracing::debug!(session_id = %session_id, "fetching session status");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, self.config.api_key())
            .send()
            .await
            .map_err(map_transport_error)?;

        read_json(response).await
    }
}

/// Checks the response status and decodes the body.
async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, FaceVaultError> {
    let status = response.status().as_u16();

    if !response.status().is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(api_error(status, &body));
    }

    let body = response.text().await.map_err(map_transport_error)?;
    serde_json::from_str(&body).map_err(|e| {
        tracing::warn!(status = status, error = %e, "unparseable API response");
        FaceVaultError::Api {
            status,
            message: format!("unparseable API response: {}", e),
        }
    })
}

/// Builds the hand-off URL the end user opens to start verification.
fn webapp_url(webapp_base: &str, session_id: &str, session_token: &str) -> String {
    format!("{}/?sid={}&st={}", webapp_base, session_id, session_token)
}

/// Maps a non-success response onto the error taxonomy, with a
/// best-effort message from a `detail` or `error` field in the body.
fn api_error(status: u16, body: &str) -> FaceVaultError {
    let message =
        extract_detail(body).unwrap_or_else(|| format!("API error ({})", status));
    tracing::warn!(status = status, message = %message, "FaceVault API request failed");
    FaceVaultError::from_status(status, message)
}

fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["detail", "error"] {
        if let Some(detail) = value.get(key).and_then(|v| v.as_str()) {
            if !detail.is_empty() {
                return Some(detail.to_string());
            }
        }
    }
    None
}

/// Maps reqwest transport failures onto the taxonomy.
fn map_transport_error(e: reqwest::Error) -> FaceVaultError {
    if e.is_timeout() {
        FaceVaultError::network(format!("request timed out: {}", e))
    } else if e.is_connect() {
        FaceVaultError::network(format!("connection failed: {}", e))
    } else {
        FaceVaultError::network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> FaceVaultConfig {
        FaceVaultConfig::new("fv_test_abc123")
    }

    // ══════════════════════════════════════════════════════════════
    // Construction
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn new_accepts_valid_config() {
        assert!(FaceVaultClient::new(test_config()).is_ok());
    }

    #[test]
    fn new_rejects_empty_api_key_before_any_request() {
        let result = FaceVaultClient::new(FaceVaultConfig::new(""));
        assert!(matches!(result, Err(FaceVaultError::Configuration(_))));
    }

    #[test]
    fn new_rejects_plaintext_endpoint_before_any_request() {
        let config = test_config().with_base_url("http://api.facevault.id");
        let result = FaceVaultClient::new(config);
        assert!(matches!(result, Err(FaceVaultError::Configuration(_))));
    }

    // ══════════════════════════════════════════════════════════════
    // Hand-off URL
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn webapp_url_matches_expected_format() {
        assert_eq!(
            webapp_url("https://app.facevault.id", "abc123", "tok_xyz"),
            "https://app.facevault.id/?sid=abc123&st=tok_xyz"
        );
    }

    // ══════════════════════════════════════════════════════════════
    // Error Mapping
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn error_401_carries_detail_message() {
        let err = api_error(401, r#"{"detail":"Invalid API key"}"#);
        match err {
            FaceVaultError::Authentication { message } => {
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("expected Authentication, got {:?}", other),
        }
    }

    #[test]
    fn error_404_maps_to_not_found() {
        let err = api_error(404, r#"{"detail":"Session not found"}"#);
        assert!(matches!(err, FaceVaultError::NotFound { .. }));
        assert_eq!(err.message(), "Session not found");
    }

    #[test]
    fn error_429_maps_to_rate_limited() {
        let err = api_error(429, r#"{"detail":"Rate limit exceeded"}"#);
        assert!(matches!(err, FaceVaultError::RateLimited { .. }));
    }

    #[test]
    fn error_falls_back_to_error_field() {
        let err = api_error(500, r#"{"error":"internal failure"}"#);
        assert_eq!(err.message(), "internal failure");
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn error_with_unreadable_body_uses_generic_message() {
        let err = api_error(503, "<html>Service Unavailable</html>");
        assert_eq!(err.message(), "API error (503)");
    }

    #[test]
    fn empty_detail_falls_through_to_error_field() {
        let err = api_error(500, r#"{"detail":"","error":"real message"}"#);
        assert_eq!(err.message(), "real message");
    }

    #[test]
    fn non_string_detail_is_ignored() {
        let err = api_error(500, r#"{"detail":{"nested":"object"}}"#);
        assert_eq!(err.message(), "API error (500)");
    }

    // ══════════════════════════════════════════════════════════════
    // Transport
    // ══════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn connection_failure_surfaces_as_network_error() {
        // Port 1 on loopback is never listening; the connect fails
        // immediately without leaving the machine.
        let config = test_config().with_base_url("https://127.0.0.1:1");
        let client = FaceVaultClient::new(config).unwrap();

        let result = client.create_session("user_42").await;

        assert!(matches!(result, Err(FaceVaultError::Network(_))));
    }
}
