//! Core domain logic for the OSINT recon toolkit.
//!
//! This crate is platform-neutral. It defines the subject model, the cache
//! abstraction, and the two investigation services: IP geolocation with
//! provider fallback ([`services::resolver`]) and concurrent handle probing
//! ([`services::probe`]). It does not commit to a storage backend or a
//! user interface; the app crate supplies storage and the CLI supplies the
//! surface.

pub mod config;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use config::ReconConfig;
pub use error::{CoreError, CoreResult, ProviderFailure};
pub use traits::{CacheGate, CacheStore};
pub use types::{
    ExistenceRule, ProbeOutcome, ProbeResult, ProbeSpec, ReportDocument, ReportEntry,
    ResolutionResult, Subject, SubjectKind,
};
