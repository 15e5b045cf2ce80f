//! Concurrent existence probing of a handle across platform profile pages.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use tokio::sync::Semaphore;
use tokio::time::{timeout, Instant};

use crate::types::{ExistenceRule, ProbeOutcome, ProbeResult, ProbeSpec};

/// What one probe fetch observed, after following any redirects.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: u16,
    /// URL the request ended at, redirects applied.
    pub final_url: String,
    pub body: String,
}

/// Transport seam for probe fetches.
///
/// The engine only needs status, final URL, and body; keeping the fetch
/// behind a trait lets tests drive the engine with canned responses and
/// controlled delays.
#[async_trait]
pub trait ProbeTransport: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<ProbeResponse, String>;
}

/// `reqwest`-backed transport used outside of tests.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProbeTransport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<ProbeResponse, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response.text().await.map_err(|e| e.to_string())?;
        Ok(ProbeResponse {
            status,
            final_url,
            body,
        })
    }
}

/// Apply a platform's existence rule to an observed response.
///
/// Pure by construction so each platform's heuristic is testable without
/// any network machinery.
#[must_use]
pub fn classify(rule: &ExistenceRule, response: &ProbeResponse) -> ProbeOutcome {
    let success = (200..300).contains(&response.status);
    match rule {
        ExistenceRule::StatusOnly => {
            if success {
                ProbeOutcome::Found
            } else {
                ProbeOutcome::NotFound
            }
        }
        ExistenceRule::MarkerAbsent { marker } => {
            if success && !response.body.contains(marker) {
                ProbeOutcome::Found
            } else {
                ProbeOutcome::NotFound
            }
        }
        ExistenceRule::RedirectToHome { home } => {
            if response.final_url.trim_end_matches('/') == home.trim_end_matches('/') {
                ProbeOutcome::NotFound
            } else if success {
                ProbeOutcome::Found
            } else {
                ProbeOutcome::NotFound
            }
        }
    }
}

/// Fans a handle out across a probe catalog under a concurrency cap.
///
/// Results come back one per spec, in the same order the specs were given,
/// regardless of completion order. A probe that errors or exceeds the
/// per-call timeout yields [`ProbeOutcome::Indeterminate`] with a detail
/// string rather than aborting the batch.
pub struct ProbeEngine {
    transport: Arc<dyn ProbeTransport>,
    max_concurrent: usize,
    per_call_timeout: Duration,
}

impl ProbeEngine {
    #[must_use]
    pub fn new(
        transport: Arc<dyn ProbeTransport>,
        max_concurrent: usize,
        per_call_timeout: Duration,
    ) -> Self {
        Self {
            transport,
            max_concurrent: max_concurrent.max(1),
            per_call_timeout,
        }
    }

    pub async fn probe_all(&self, handle: &str, specs: &[ProbeSpec]) -> Vec<ProbeResult> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));

        let futures = specs.iter().map(|spec| {
            let semaphore = Arc::clone(&semaphore);
            let transport = Arc::clone(&self.transport);
            let url = spec.url_for(handle);
            let spec = *spec;
            let per_call_timeout = self.per_call_timeout;

            async move {
                // Semaphore is never closed while we hold an Arc to it.
                let Ok(_permit) = semaphore.acquire().await else {
                    return ProbeResult {
                        probe: spec.name.to_string(),
                        url,
                        outcome: ProbeOutcome::Indeterminate,
                        error: Some("Probe pool closed".to_string()),
                        response_time_ms: 0,
                    };
                };

                let start = Instant::now();
                let fetched = timeout(per_call_timeout, transport.fetch(&url)).await;
                let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

                match fetched {
                    Ok(Ok(response)) => ProbeResult {
                        probe: spec.name.to_string(),
                        url,
                        outcome: classify(&spec.rule, &response),
                        error: None,
                        response_time_ms: elapsed_ms,
                    },
                    Ok(Err(detail)) => {
                        log::debug!("Probe '{}' failed: {detail}", spec.name);
                        ProbeResult {
                            probe: spec.name.to_string(),
                            url,
                            outcome: ProbeOutcome::Indeterminate,
                            error: Some(detail),
                            response_time_ms: elapsed_ms,
                        }
                    }
                    Err(_) => {
                        log::debug!("Probe '{}' timed out", spec.name);
                        ProbeResult {
                            probe: spec.name.to_string(),
                            url,
                            outcome: ProbeOutcome::Indeterminate,
                            error: Some(format!(
                                "Timed out after {}s",
                                per_call_timeout.as_secs()
                            )),
                            response_time_ms: elapsed_ms,
                        }
                    }
                }
            }
        });

        join_all(futures).await
    }
}
