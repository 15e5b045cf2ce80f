//! Unified error type for geolocation provider operations.

use serde::Serialize;
use thiserror::Error;

/// Error produced by a single geolocation provider call.
///
/// Every variant carries the `provider` id that produced it, so that the
/// resolver can report which link of the fallback chain failed and why.
/// All variants here are *transient from the caller's point of view*: the
/// resolver recovers by moving on to the next configured provider, and only
/// surfaces the collected reasons once every provider has failed.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ProviderError {
    /// Network-level failure (DNS resolution, connection refused, body read).
    #[error("[{provider}] Network error: {detail}")]
    NetworkError { provider: String, detail: String },

    /// The request exceeded the configured per-call timeout.
    #[error("[{provider}] Request timeout: {detail}")]
    Timeout { provider: String, detail: String },

    /// The endpoint answered with a non-success HTTP status.
    #[error("[{provider}] Unexpected HTTP status: {status}")]
    HttpStatus { provider: String, status: u16 },

    /// The response body could not be parsed into the provider's contract.
    #[error("[{provider}] Parse error: {detail}")]
    ParseError { provider: String, detail: String },

    /// The API answered structurally but reported a failure of its own
    /// (e.g. ipwho.is `success: false`, ip-api.com `status: "fail"`).
    #[error("[{provider}] Lookup rejected: {message}")]
    Rejected { provider: String, message: String },
}

impl ProviderError {
    /// Provider id the error originated from.
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::NetworkError { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::HttpStatus { provider, .. }
            | Self::ParseError { provider, .. }
            | Self::Rejected { provider, .. } => provider,
        }
    }

    /// Whether the error is expected behavior (quota hit, reserved range,
    /// endpoint hiccup) rather than a bug. Used for log level selection:
    /// `warn` when `true`, `error` when `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        !matches!(self, Self::ParseError { .. })
    }
}

/// Convenience alias for `Result<T, ProviderError>`.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
