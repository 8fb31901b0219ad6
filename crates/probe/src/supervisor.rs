//! Cycle execution and run/stop supervision.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Notify, RwLock};
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::evaluator::{Action, HealthEvaluator, Severity};
use crate::notifier::Notifier;
use crate::prober::EndpointProber;
use crate::types::ProbeConfig;

/// Supervisor lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Stopped,
}

/// Executes one polling cycle across all configured endpoints.
pub struct CycleRunner {
    prober: EndpointProber,
    evaluator: HealthEvaluator,
    notifier: Arc<dyn Notifier>,
}

impl CycleRunner {
    pub fn new(
        prober: EndpointProber,
        evaluator: HealthEvaluator,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            prober,
            evaluator,
            notifier,
        }
    }

    /// Probe every endpoint concurrently and dispatch the resulting
    /// actions.
    ///
    /// Returns once the slowest probe-with-retry sequence has finished.
    /// Endpoints share no mutable state, so one endpoint's outcome never
    /// delays or aborts the evaluation of another. All endpoints probe
    /// simultaneously; there is no concurrency cap (a scaling limitation,
    /// not a correctness one).
    pub async fn run_cycle(&self, endpoints: &[String], retries: u32) {
        let checks = endpoints
            .iter()
            .map(|endpoint| self.check_endpoint(endpoint, retries));
        futures::future::join_all(checks).await;
    }

    async fn check_endpoint(&self, endpoint: &str, retries: u32) {
        let outcome = self.prober.probe(endpoint, retries).await;

        for action in self.evaluator.evaluate(endpoint, &outcome) {
            self.dispatch(endpoint, action).await;
        }
    }

    async fn dispatch(&self, endpoint: &str, action: Action) {
        match action {
            Action::Log {
                severity: Severity::Warning,
                message,
            } => {
                warn!(endpoint, "{message}");
            }
            Action::Log {
                severity: Severity::Error,
                message,
            } => {
                error!(endpoint, "{message}");
            }
            Action::Notify { message } => {
                // A faulting notifier must not take the cycle down with it.
                if let Err(e) = self.notifier.notify(&message).await {
                    warn!(endpoint, error = %e, "Failed to deliver notification");
                }
            }
        }
    }
}

/// Drives cycles at the configured interval until stopped.
///
/// The lifecycle is `Idle -> Running -> Stopped`; a stopped supervisor
/// cannot be restarted. The HTTP client lives exactly as long as the
/// supervisor.
pub struct Supervisor {
    config: ProbeConfig,
    runner: CycleRunner,
    state: RwLock<RunState>,
    running: AtomicBool,
    stop_signal: Notify,
}

impl Supervisor {
    /// Create a supervisor owning its HTTP client for the whole run.
    pub fn new(config: ProbeConfig, notifier: Arc<dyn Notifier>) -> common::Result<Self> {
        let prober = EndpointProber::new()?;
        let evaluator = HealthEvaluator::new(config.warn_threshold);

        Ok(Self {
            runner: CycleRunner::new(prober, evaluator, notifier),
            config,
            state: RwLock::new(RunState::Idle),
            running: AtomicBool::new(true),
            stop_signal: Notify::new(),
        })
    }

    /// Run cycles until a stop is requested.
    ///
    /// Each iteration checks the run flag, executes one full cycle, then
    /// sleeps for `check_interval` (idle time between cycles, not a cycle
    /// deadline). The sleep is cut short by [`Supervisor::stop`]. Returns
    /// once the supervisor reaches `Stopped`; starting twice is an error.
    pub async fn start(&self) -> common::Result<()> {
        {
            let mut state = self.state.write().await;
            if *state != RunState::Idle {
                return Err(common::Error::supervisor("supervisor cannot be restarted"));
            }
            *state = RunState::Running;
        }

        info!(
            endpoints = self.config.endpoints.len(),
            interval = ?self.config.check_interval,
            "Supervisor started"
        );

        while self.running.load(Ordering::SeqCst) {
            self.runner
                .run_cycle(&self.config.endpoints, self.config.retries)
                .await;

            tokio::select! {
                _ = sleep(self.config.check_interval) => {}
                _ = self.stop_signal.notified() => {}
            }
        }

        *self.state.write().await = RunState::Stopped;
        info!("Supervisor stopped");
        Ok(())
    }

    /// Request a graceful stop.
    ///
    /// Observable at the next run-flag check: an in-flight cycle drains
    /// its outstanding probes, the inter-cycle sleep is cut short, and no
    /// further cycle starts.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        self.stop_signal.notify_one();
    }

    /// Current lifecycle state.
    pub async fn state(&self) -> RunState {
        *self.state.read().await
    }
}
