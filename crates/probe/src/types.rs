//! Probe types and structures.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Result of one successful HTTP probe attempt.
///
/// `response_time` is the wall-clock elapsed time of the attempt that
/// produced the response, not of the whole retry sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    /// Endpoint URL that was probed
    pub endpoint: String,

    /// HTTP status code of the response
    pub status_code: u16,

    /// Elapsed time of the successful attempt
    pub response_time: Duration,
}

/// Classified outcome of a probe-with-retry sequence.
///
/// Exactly one outcome is produced per endpoint per cycle. Expected
/// failures (error statuses, unreachable hosts) are variants here rather
/// than errors, so callers switch on the tag instead of catching faults.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// The endpoint answered with a success-range status
    Success(ProbeResult),

    /// The endpoint answered with a non-success status; never retried
    HttpError {
        /// Status code of the response
        status: u16,
    },

    /// A transport failure that retrying cannot help (e.g. the response
    /// stream died mid-body)
    ConnectionFailure {
        /// Human-readable description of the failure
        detail: String,
    },

    /// Every allotted attempt failed at the connection level
    RetriesExhausted {
        /// Number of attempts that were made
        attempts: u32,
    },
}

impl ProbeOutcome {
    /// Check if the outcome is a success
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success(_))
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Success(result) => {
                write!(f, "SUCCESS ({})", result.status_code)
            }
            ProbeOutcome::HttpError { status } => write!(f, "HTTP_ERROR ({status})"),
            ProbeOutcome::ConnectionFailure { .. } => write!(f, "CONNECTION_FAILURE"),
            ProbeOutcome::RetriesExhausted { attempts } => {
                write!(f, "RETRIES_EXHAUSTED ({attempts})")
            }
        }
    }
}

/// Validated probing configuration.
///
/// Produced by the configuration loader before the supervisor starts and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Endpoint URLs to probe each cycle, in configured order
    pub endpoints: Vec<String>,

    /// Idle time between the end of one cycle and the start of the next
    #[serde(with = "humantime_serde")]
    pub check_interval: Duration,

    /// Response time ceiling before a success is flagged as slow
    #[serde(with = "humantime_serde")]
    pub warn_threshold: Duration,

    /// Maximum probe attempts per endpoint per cycle; `0` behaves as `1`
    pub retries: u32,
}
