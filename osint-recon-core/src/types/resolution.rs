//! Resolution result type.

use serde::{Deserialize, Serialize};

/// Outcome of one address resolution call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Normalized subject key the payload describes.
    pub subject: String,
    /// Provider that produced the payload. `None` when the payload was
    /// served from cache (its originating provider is not recorded there).
    pub provider: Option<String>,
    /// The geolocation document, opaque to the cache layer.
    pub payload: serde_json::Value,
    /// `true` when the call was answered from cache without any network
    /// request being issued.
    pub served_from_cache: bool,
}
