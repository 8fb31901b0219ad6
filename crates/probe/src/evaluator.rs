//! Outcome evaluation policy.

use std::time::Duration;

use crate::types::ProbeOutcome;

/// Severity of a log action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One observable side effect requested by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Emit a log record
    Log {
        severity: Severity,
        message: String,
    },

    /// Dispatch an out-of-band notification
    Notify { message: String },
}

/// Maps probe outcomes to log and notification actions.
///
/// Latency violations are operationally noisy and stay log-only;
/// error-class outcomes (bad status, unreachable host) additionally page
/// through the notifier. The evaluator performs no I/O and never mutates
/// outcomes.
pub struct HealthEvaluator {
    warn_threshold: Duration,
}

impl HealthEvaluator {
    pub fn new(warn_threshold: Duration) -> Self {
        Self { warn_threshold }
    }

    /// Evaluate one outcome into zero or more actions.
    pub fn evaluate(&self, endpoint: &str, outcome: &ProbeOutcome) -> Vec<Action> {
        match outcome {
            ProbeOutcome::Success(result) => {
                if result.response_time > self.warn_threshold {
                    vec![Action::Log {
                        severity: Severity::Warning,
                        message: format!(
                            "Endpoint {endpoint} took too long to respond: {:.2} seconds",
                            result.response_time.as_secs_f64()
                        ),
                    }]
                } else {
                    Vec::new()
                }
            }
            ProbeOutcome::HttpError { status } => {
                Self::error_actions(format!("Endpoint {endpoint} returned status code {status}"))
            }
            ProbeOutcome::ConnectionFailure { detail } => {
                Self::error_actions(format!("Endpoint {endpoint} is unreachable: {detail}"))
            }
            ProbeOutcome::RetriesExhausted { .. } => Self::error_actions(format!(
                "All retries failed when probing endpoint {endpoint}"
            )),
        }
    }

    /// Error-class outcomes always log and notify with the same message.
    fn error_actions(message: String) -> Vec<Action> {
        vec![
            Action::Log {
                severity: Severity::Error,
                message: message.clone(),
            },
            Action::Notify { message },
        ]
    }
}
