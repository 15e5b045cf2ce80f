//! Subject validation and normalization.

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The class of identifier a [`Subject`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    /// An IP address, resolved through the provider fallback chain.
    Ip,
    /// A username/handle, checked across the probe catalog.
    Handle,
}

impl SubjectKind {
    /// Cache namespace for this subject class.
    #[must_use]
    pub fn category(self) -> &'static str {
        match self {
            Self::Ip => "ip",
            Self::Handle => "handle",
        }
    }
}

/// A validated, normalized identifier.
///
/// Construction is the validation boundary: a `Subject` that exists is
/// always safe to use as a cache key or to substitute into an endpoint
/// template. Malformed input fails here with
/// [`CoreError::InvalidSubject`], before any network call is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    kind: SubjectKind,
    key: String,
}

impl Subject {
    /// Build an IP-class subject. Trims whitespace and canonicalizes the
    /// textual form through `IpAddr`.
    pub fn ip(raw: &str) -> CoreResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidSubject(
                "IP address required".to_string(),
            ));
        }
        let addr: IpAddr = trimmed
            .parse()
            .map_err(|_| CoreError::InvalidSubject(format!("Not an IP address: {trimmed}")))?;
        Ok(Self {
            kind: SubjectKind::Ip,
            key: addr.to_string(),
        })
    }

    /// Build a handle-class subject. Trims, lowercases, and restricts the
    /// charset to `[a-z0-9._-]` (the intersection of what the probed
    /// platforms accept in usernames).
    pub fn handle(raw: &str) -> CoreResult<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(CoreError::InvalidSubject("Handle required".to_string()));
        }
        if !normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return Err(CoreError::InvalidSubject(format!(
                "Handle contains unsupported characters: {normalized}"
            )));
        }
        Ok(Self {
            kind: SubjectKind::Handle,
            key: normalized,
        })
    }

    #[must_use]
    pub fn kind(&self) -> SubjectKind {
        self.kind
    }

    /// Normalized string form, used as the cache key and the probe/template
    /// substitution value.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Cache namespace for this subject.
    #[must_use]
    pub fn category(&self) -> &'static str {
        self.kind.category()
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
