//! Rust SDK for the FaceVault KYC & identity verification API.
//!
//! Three pieces:
//!
//! - [`FaceVaultClient`]: async client for creating verification
//!   sessions and polling their status.
//! - [`verify_signature`]: HMAC-SHA256 webhook signature verification
//!   over the provider's canonical JSON form.
//! - [`parse_event`]: typed decoding of webhook payloads into
//!   [`WebhookEvent`].
//!
//! # Creating a session
//!
//! ```ignore
//! use facevault::{FaceVaultClient, FaceVaultConfig};
//!
//! let client = FaceVaultClient::new(FaceVaultConfig::new(api_key))?;
//! let session = client.create_session("user_42").await?;
//! // hand session.webapp_url to the end user
//! ```
//!
//! # Handling a webhook
//!
//! Always verify before trusting the payload:
//!
//! ```ignore
//! use facevault::{parse_event, verify_signature};
//!
//! if !verify_signature(&body, &x_signature_header, &webhook_secret) {
//!     return reject_unauthorized();
//! }
//! let event = parse_event(&body)?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod webhook;

pub use client::FaceVaultClient;
pub use config::FaceVaultConfig;
pub use error::FaceVaultError;
pub use models::{Session, SessionStatus};
pub use webhook::{parse_event, verify_signature, WebhookEvent};
