//! Session API value objects.
//!
//! Shapes mirroring the session endpoints' responses. These carry no
//! behavior; the webhook event type lives in [`crate::webhook`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A newly created verification session.
///
/// Returned by [`FaceVaultClient::create_session`]. `webapp_url` is
/// assembled by the SDK from the configured web-app base and is the
/// URL to hand to the end user.
///
/// [`FaceVaultClient::create_session`]: crate::FaceVaultClient::create_session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Provider-assigned session identifier.
    pub session_id: String,

    /// Short-lived token binding the browser session to this session.
    pub session_token: String,

    /// Verification steps the user will walk through.
    pub steps: Vec<String>,

    /// Hand-off URL for the end user.
    pub webapp_url: String,
}

/// Current state of a verification session.
///
/// Returned by [`FaceVaultClient::get_session`].
///
/// [`FaceVaultClient::get_session`]: crate::FaceVaultClient::get_session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStatus {
    /// Provider-assigned session identifier.
    pub session_id: String,

    /// Session state (e.g. `"pending"`, `"passed"`, `"failed"`).
    pub status: String,

    /// Per-step completion flags.
    #[serde(default)]
    pub steps: HashMap<String, bool>,

    /// Face match outcome; absent until the check has run.
    pub face_match_passed: Option<bool>,

    /// Provider error description; empty when none.
    #[serde(default)]
    pub error: String,

    /// When the session was created.
    pub created_at: Option<DateTime<Utc>>,

    /// When the session completed, if it has.
    pub completed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_status_decodes_full_response() {
        let body = r#"{
            "session_id": "abc123",
            "status": "passed",
            "steps": {"id": true, "straight": true},
            "face_match_passed": true,
            "error": "",
            "created_at": "2026-02-20T10:00:00Z",
            "completed_at": "2026-02-20T10:01:00Z"
        }"#;

        let status: SessionStatus = serde_json::from_str(body).unwrap();

        assert_eq!(status.session_id, "abc123");
        assert_eq!(status.status, "passed");
        assert_eq!(status.steps.get("id"), Some(&true));
        assert_eq!(status.face_match_passed, Some(true));
        assert!(status.error.is_empty());
        assert!(status.created_at.is_some());
        assert!(status.completed_at.is_some());
    }

    #[test]
    fn session_status_defaults_optional_fields() {
        let body = r#"{"session_id": "abc123", "status": "pending"}"#;

        let status: SessionStatus = serde_json::from_str(body).unwrap();

        assert!(status.steps.is_empty());
        assert_eq!(status.face_match_passed, None);
        assert!(status.error.is_empty());
        assert_eq!(status.created_at, None);
        assert_eq!(status.completed_at, None);
    }
}
