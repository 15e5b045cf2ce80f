//! Probe descriptors and per-probe results.

use serde::{Deserialize, Serialize};

/// How a platform signals that a handle does not exist.
///
/// Platforms are inconsistent: some return a clean 404, some serve a 200
/// with a "not found" page, some redirect unknown profiles to their home
/// page. Each [`ProbeSpec`] carries one variant of this closed set; the
/// engine dispatches on the variant, never on the platform name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExistenceRule {
    /// A 2xx status means the profile exists; anything else means it does
    /// not. The strictest rule; deliberately *not* "any non-404".
    StatusOnly,
    /// A 2xx status whose body does **not** contain `marker` means the
    /// profile exists. The platform serves its error page with a 200.
    MarkerAbsent { marker: &'static str },
    /// The platform redirects unknown profiles to `home`; landing anywhere
    /// else with a 2xx means the profile exists.
    RedirectToHome { home: &'static str },
}

/// An immutable probe descriptor: one platform endpoint plus its
/// existence-classification rule. Defined at configuration time and
/// consumed read-only by the probe engine.
#[derive(Debug, Clone, Copy)]
pub struct ProbeSpec {
    /// Platform display name, unique within the catalog.
    pub name: &'static str,
    /// Endpoint template with a single `{}` substitution point.
    pub url_template: &'static str,
    /// Existence classification rule for this platform.
    pub rule: ExistenceRule,
}

impl ProbeSpec {
    /// Render the probe URL for a normalized subject key. The key is
    /// URL-encoded before substitution.
    #[must_use]
    pub fn url_for(&self, subject_key: &str) -> String {
        self.url_template
            .replacen("{}", &urlencoding::encode(subject_key), 1)
    }
}

/// Tri-state probe outcome. `Indeterminate` means "could not determine,
/// due to error" and is distinct from a confirmed negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeOutcome {
    Found,
    NotFound,
    Indeterminate,
}

/// Result of one probe invocation. Every submitted probe produces exactly
/// one of these, errors included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Platform name from the originating [`ProbeSpec`].
    pub probe: String,
    /// The resolved URL that was requested.
    pub url: String,
    pub outcome: ProbeOutcome,
    /// Error detail when `outcome` is `Indeterminate`.
    pub error: Option<String>,
    pub response_time_ms: u64,
}
