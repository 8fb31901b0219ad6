//! Periodic HTTP health probing for the appwatch monitor.
//!
//! This crate implements the probing-and-supervision engine: a
//! probe-with-retry protocol per endpoint, concurrent fan-out of probes
//! within a polling cycle, outcome classification with a log/notify
//! policy, and a supervisor loop that runs indefinitely without endpoint
//! failures stalling or crashing it.
//!
//! # Features
//!
//! - Async/await based; all endpoints in a cycle probe concurrently
//! - Bounded retries for connection-level failures only
//! - Closed outcome classification (success, slow, HTTP error, unreachable)
//! - Graceful stop that drains the in-flight cycle
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use async_trait::async_trait;
//! use probe::{Notifier, ProbeConfig, Supervisor};
//!
//! struct StdoutNotifier;
//!
//! #[async_trait]
//! impl Notifier for StdoutNotifier {
//!     async fn notify(&self, message: &str) -> common::Result<()> {
//!         println!("{message}");
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> common::Result<()> {
//! let config = ProbeConfig {
//!     endpoints: vec!["https://example.com/status".to_string()],
//!     check_interval: Duration::from_secs(300),
//!     warn_threshold: Duration::from_secs(3),
//!     retries: 3,
//! };
//!
//! let supervisor = Supervisor::new(config, Arc::new(StdoutNotifier))?;
//! supervisor.start().await?;
//! # Ok(())
//! # }
//! ```

pub mod evaluator;
pub mod notifier;
pub mod prober;
pub mod supervisor;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use evaluator::{Action, HealthEvaluator, Severity};
pub use notifier::Notifier;
pub use prober::{ATTEMPT_TIMEOUT, EndpointProber, RETRY_BACKOFF};
pub use supervisor::{CycleRunner, RunState, Supervisor};
pub use types::{ProbeConfig, ProbeOutcome, ProbeResult};
