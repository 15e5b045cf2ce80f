//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use osint_recon_provider::{ProviderError, ProviderResult};

/// One failed provider attempt inside an exhausted resolution.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderFailure {
    /// Provider identifier.
    pub provider: String,
    /// Human-readable failure reason.
    pub reason: String,
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Malformed input subject; raised before any network call.
    #[error("Invalid subject: {0}")]
    InvalidSubject(String),

    /// Validation error (configuration values, option ranges).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Every provider in the fallback chain failed. Carries one reason per
    /// configured provider; diagnostics are never swallowed.
    #[error("All {} provider(s) failed for '{subject}'", failures.len())]
    ResolutionExhausted {
        subject: String,
        failures: Vec<ProviderFailure>,
    },

    /// Cache storage read/write failure. Callers degrade this to a cache
    /// miss / skipped write; it is never fatal to a resolution.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Provider error (converted from the provider library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether the error is expected behavior (bad user input, all sources
    /// down) rather than a bug, used for log level selection.
    ///
    /// Level `warn` should be used when this returns `true`, `error`
    /// otherwise. **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidSubject(_) | Self::ValidationError(_) | Self::ResolutionExhausted { .. } => {
                true
            }
            Self::Provider(e) => e.is_expected(),
            Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_subject() {
        let e = CoreError::InvalidSubject("empty handle".to_string());
        assert_eq!(e.to_string(), "Invalid subject: empty handle");
    }

    #[test]
    fn display_resolution_exhausted_counts_failures() {
        let e = CoreError::ResolutionExhausted {
            subject: "8.8.8.8".to_string(),
            failures: vec![
                ProviderFailure {
                    provider: "ipwhois".to_string(),
                    reason: "timeout".to_string(),
                },
                ProviderFailure {
                    provider: "ip-api".to_string(),
                    reason: "HTTP 503".to_string(),
                },
            ],
        };
        assert_eq!(e.to_string(), "All 2 provider(s) failed for '8.8.8.8'");
    }

    #[test]
    fn exhaustion_is_expected_storage_is_not() {
        let exhausted = CoreError::ResolutionExhausted {
            subject: "x".to_string(),
            failures: vec![],
        };
        assert!(exhausted.is_expected());
        assert!(!CoreError::StorageError("disk".to_string()).is_expected());
    }

    #[test]
    fn serialize_tagged_form() {
        let e = CoreError::StorageError("corrupt row".to_string());
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"StorageError\""));
    }
}
