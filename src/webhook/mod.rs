//! Webhook signature verification and event parsing.
//!
//! The FaceVault API notifies hosts of verification outcomes by POSTing
//! a JSON body signed with HMAC-SHA256; the hex digest arrives in the
//! `X-Signature` header. Hosts call [`verify_signature`] on the raw
//! request body before trusting it, then [`parse_event`] for a typed
//! [`WebhookEvent`].
//!
//! Both functions are pure and stateless: no shared mutable state, no
//! I/O, safe to call concurrently from any number of tasks.

mod canonical;
mod event;
mod verifier;

pub use event::{parse_event, WebhookEvent};
pub use verifier::verify_signature;
