//! Endpoint probing with bounded retries.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::types::{ProbeOutcome, ProbeResult};

/// Fixed per-attempt timeout for a single HTTP probe.
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(5);

/// Pause between a connection-level failure and the next attempt.
pub const RETRY_BACKOFF: Duration = Duration::from_millis(250);

/// Executes probe-with-retry sequences against endpoints.
///
/// The underlying client is built once and holds no per-call mutable
/// state, so any number of concurrent probes may share one prober.
pub struct EndpointProber {
    client: reqwest::Client,
}

impl EndpointProber {
    /// Create a prober with its own HTTP client.
    ///
    /// The client enforces [`ATTEMPT_TIMEOUT`] per attempt and follows
    /// redirects.
    pub fn new() -> common::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(ATTEMPT_TIMEOUT)
            .build()
            .map_err(common::Error::probe)?;

        Ok(Self { client })
    }

    /// Probe `endpoint` with a GET request, retrying connection-level
    /// failures (connect refused, timed out before a response).
    ///
    /// `retries` bounds the *total* number of attempts; `0` still makes
    /// exactly one attempt. Any received HTTP response is terminal: error
    /// statuses are reported as [`ProbeOutcome::HttpError`], never
    /// retried. Expected failures come back as outcome variants, not
    /// errors.
    pub async fn probe(&self, endpoint: &str, retries: u32) -> ProbeOutcome {
        let max_attempts = retries.max(1);
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            let start = Instant::now();

            match self.client.get(endpoint).send().await {
                Ok(response) => {
                    let response_time = start.elapsed();
                    let status = response.status();

                    if status.is_success() {
                        return ProbeOutcome::Success(ProbeResult {
                            endpoint: endpoint.to_string(),
                            status_code: status.as_u16(),
                            response_time,
                        });
                    }

                    return ProbeOutcome::HttpError {
                        status: status.as_u16(),
                    };
                }
                Err(e) if e.is_connect() || e.is_timeout() => {
                    debug!(endpoint, attempt, error = %e, "Probe attempt failed at connection level");

                    if attempt >= max_attempts {
                        return ProbeOutcome::RetriesExhausted { attempts: attempt };
                    }

                    tokio::time::sleep(RETRY_BACKOFF).await;
                }
                Err(e) => {
                    return ProbeOutcome::ConnectionFailure {
                        detail: e.to_string(),
                    };
                }
            }
        }
    }
}
