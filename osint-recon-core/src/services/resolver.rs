//! IP geolocation resolution with cache short-circuit and provider fallback.

use std::sync::Arc;

use osint_recon_provider::GeoProvider;

use crate::error::{CoreError, CoreResult, ProviderFailure};
use crate::traits::CacheGate;
use crate::types::{ResolutionResult, Subject, SubjectKind};

/// Resolves an IP subject against an ordered provider chain.
///
/// Order of operations is fixed: cache lookup first, then each provider in
/// chain order until one succeeds. The first successful payload is written
/// back to the cache and returned; if every provider fails, the collected
/// per-provider reasons come back in [`CoreError::ResolutionExhausted`].
pub struct FallbackResolver {
    providers: Vec<Arc<dyn GeoProvider>>,
}

impl FallbackResolver {
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn GeoProvider>>) -> Self {
        Self { providers }
    }

    /// Resolve `subject` to a geolocation document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidSubject`] when the subject is not an IP,
    /// and [`CoreError::ResolutionExhausted`] when every provider in the
    /// chain failed.
    pub async fn resolve(
        &self,
        subject: &Subject,
        cache: &CacheGate,
    ) -> CoreResult<ResolutionResult> {
        if subject.kind() != SubjectKind::Ip {
            return Err(CoreError::InvalidSubject(format!(
                "Expected an IP subject, got '{subject}'"
            )));
        }

        if let Some(payload) = cache.get(subject.category(), subject.key()).await {
            log::debug!("Cache hit for {subject}");
            return Ok(ResolutionResult {
                subject: subject.to_string(),
                provider: None,
                payload,
                served_from_cache: true,
            });
        }

        let mut failures: Vec<ProviderFailure> = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            match provider.lookup(subject.key()).await {
                Ok(geo) => {
                    let payload = serde_json::to_value(&geo)
                        .map_err(|e| CoreError::SerializationError(e.to_string()))?;
                    cache.put(subject.category(), subject.key(), &payload).await;
                    log::info!("Resolved {subject} via provider '{}'", provider.id());
                    return Ok(ResolutionResult {
                        subject: subject.to_string(),
                        provider: Some(provider.id().to_string()),
                        payload,
                        served_from_cache: false,
                    });
                }
                Err(e) => {
                    if e.is_expected() {
                        log::info!("Provider '{}' failed for {subject}: {e}", provider.id());
                    } else {
                        log::warn!("Provider '{}' failed for {subject}: {e}", provider.id());
                    }
                    failures.push(ProviderFailure {
                        provider: provider.id().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Err(CoreError::ResolutionExhausted {
            subject: subject.to_string(),
            failures,
        })
    }
}
