//! Webhook signature verification.
//!
//! The FaceVault API signs webhook payloads with HMAC-SHA256 over the
//! canonical re-serialization of the JSON body and delivers the hex
//! digest in the `X-Signature` header. Verification re-derives the
//! canonical form from the request body, so it is insensitive to the
//! key order and whitespace the payload arrived with.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::canonical::canonical_json;

type HmacSha256 = Hmac<Sha256>;

/// Verifies the HMAC-SHA256 signature of a webhook payload.
///
/// `body` is the raw request body (text or its UTF-8 bytes),
/// `signature` the value of the `X-Signature` header, and `secret` the
/// webhook secret from the API dashboard.
///
/// Returns `true` only when the signature matches. A body that does not
/// parse as JSON verifies as `false` rather than failing; callers
/// cannot distinguish an unverifiable body from a failed verification.
/// The final comparison is constant-time.
///
/// # Example
///
/// ```
/// use facevault::verify_signature;
///
/// // A signature that was not produced with this secret does not verify.
/// assert!(!verify_signature(r#"{"event":"x"}"#, "deadbeef", "whsec_secret"));
/// ```
pub fn verify_signature(body: impl AsRef<[u8]>, signature: &str, secret: &str) -> bool {
    let value: serde_json::Value = match serde_json::from_slice(body.as_ref()) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "webhook body is not JSON, treating as unverified");
            return false;
        }
    };

    // Re-serialize to match the server's canonical signing form.
    let canonical = canonical_json(&value);

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key size");
    mac.update(&canonical);
    let expected = hex::encode(mac.finalize().into_bytes());

    constant_time_compare(expected.as_bytes(), signature.as_bytes())
}

/// Constant-time equality for signature strings.
///
/// Length is not secret here; the digest contents are.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
