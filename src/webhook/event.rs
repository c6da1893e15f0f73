//! Typed webhook events.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FaceVaultError;

/// A parsed webhook notification.
///
/// Decoded permissively: unknown keys are ignored and missing optional
/// keys become `None`. The `event`, `session_id` and `status` fields
/// default to the empty string when the key is absent, never to
/// a missing-value marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Event type discriminator (e.g. `"verification.completed"`).
    #[serde(default)]
    pub event: String,

    /// Session the notification refers to.
    #[serde(default)]
    pub session_id: String,

    /// Session status at the time of the event.
    #[serde(default)]
    pub status: String,

    /// Host-side user identifier supplied at session creation.
    pub external_user_id: Option<String>,

    /// Face match outcome; `None` when the check has not run.
    pub face_match_passed: Option<bool>,

    /// Face match score in [0, 1].
    pub face_match_score: Option<f64>,

    /// Anti-spoofing score in [0, 1].
    pub anti_spoofing_score: Option<f64>,

    /// Anti-spoofing outcome.
    pub anti_spoofing_passed: Option<bool>,

    /// Provider-defined confirmed identity attributes.
    pub confirmed_data: Option<Map<String, Value>>,

    /// ISO-8601 completion timestamp, as sent by the provider.
    pub completed_at: Option<String>,

    /// Provider-defined document check results.
    pub document_check: Option<Map<String, Value>>,
}

/// Parses a webhook payload into a [`WebhookEvent`].
///
/// Parsing performs no authentication; verify the signature first with
/// [`verify_signature`](crate::verify_signature).
///
/// # Errors
///
/// - [`FaceVaultError::MalformedPayload`] when the body is not valid
///   JSON. This is a hard failure, unlike the verifier's `false`.
/// - [`FaceVaultError::UnexpectedType`] when a field is present but
///   holds the wrong JSON type (e.g. `face_match_score` as a string).
pub fn parse_event(body: impl AsRef<[u8]>) -> Result<WebhookEvent, FaceVaultError> {
    serde_json::from_slice(body.as_ref()).map_err(|e| {
        tracing::warn!(error = %e, "failed to parse webhook payload");
        match e.classify() {
            serde_json::error::Category::Data => FaceVaultError::UnexpectedType(e.to_string()),
            _ => FaceVaultError::MalformedPayload(e.to_string()),
        }
    })
}
