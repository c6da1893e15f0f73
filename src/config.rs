//! Client configuration.
//!
//! Holds the API key and endpoint URLs for [`FaceVaultClient`]. The API
//! key lives in a [`secrecy::SecretString`] so it is redacted from
//! `Debug` output and never logged. Validation runs at client
//! construction, so a bad key or a plaintext endpoint fails before any
//! network traffic.
//!
//! [`FaceVaultClient`]: crate::FaceVaultClient

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::FaceVaultError;

/// Default API endpoint.
const DEFAULT_BASE_URL: &str = "https://api.facevault.id";

/// Default web-app endpoint used to build hand-off URLs.
const DEFAULT_WEBAPP_BASE: &str = "https://app.facevault.id";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for [`FaceVaultClient`](crate::FaceVaultClient).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use facevault::FaceVaultConfig;
///
/// let config = FaceVaultConfig::new("fv_test_abc123")
///     .with_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct FaceVaultConfig {
    /// FaceVault API key (fv_live_... or fv_test_...).
    api_key: SecretString,

    /// API base URL. Must use HTTPS.
    base_url: String,

    /// Web-app base URL for constructing hand-off URLs. Must use HTTPS.
    webapp_base: String,

    /// Request timeout.
    timeout: Duration,
}

impl FaceVaultConfig {
    /// Creates a configuration with the given API key and default
    /// endpoints.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            webapp_base: DEFAULT_WEBAPP_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads configuration from environment variables.
    ///
    /// `FACEVAULT_API_KEY` is required. `FACEVAULT_BASE_URL`,
    /// `FACEVAULT_WEBAPP_BASE` and `FACEVAULT_TIMEOUT_SECS` override the
    /// defaults when set.
    pub fn from_env() -> Result<Self, FaceVaultError> {
        let api_key = std::env::var("FACEVAULT_API_KEY").map_err(|_| {
            FaceVaultError::Configuration("FACEVAULT_API_KEY is not set".to_string())
        })?;

        let mut config = Self::new(api_key);

        if let Ok(url) = std::env::var("FACEVAULT_BASE_URL") {
            config = config.with_base_url(url);
        }
        if let Ok(url) = std::env::var("FACEVAULT_WEBAPP_BASE") {
            config = config.with_webapp_base(url);
        }
        if let Ok(secs) = std::env::var("FACEVAULT_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                FaceVaultError::Configuration(
                    "FACEVAULT_TIMEOUT_SECS must be a whole number of seconds".to_string(),
                )
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Sets the API base URL. Trailing slashes are trimmed.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = trim_trailing_slashes(url.into());
        self
    }

    /// Sets the web-app base URL. Trailing slashes are trimmed.
    pub fn with_webapp_base(mut self, url: impl Into<String>) -> Self {
        self.webapp_base = trim_trailing_slashes(url.into());
        self
    }

    /// Sets the request timeout. Defaults to 15 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the configuration.
    ///
    /// Rejects a blank API key and any endpoint that is not `https://`,
    /// so API keys and session tokens never travel over plaintext.
    pub(crate) fn validate(&self) -> Result<(), FaceVaultError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(FaceVaultError::Configuration(
                "api_key must be a non-empty string".to_string(),
            ));
        }
        validate_https(&self.base_url, "base_url")?;
        validate_https(&self.webapp_base, "webapp_base")?;
        Ok(())
    }

    /// Exposes the API key for request headers.
    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// The configured API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured web-app base URL.
    pub fn webapp_base(&self) -> &str {
        &self.webapp_base
    }

    /// The configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn validate_https(url: &str, label: &str) -> Result<(), FaceVaultError> {
    if !url.starts_with("https://") {
        return Err(FaceVaultError::Configuration(format!(
            "{} must use HTTPS (got {:?})",
            label, url
        )));
    }
    Ok(())
}

fn trim_trailing_slashes(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
