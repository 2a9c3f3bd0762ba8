//! Upload status polling as an explicit state machine.
//!
//! The processing pipeline moves an upload through
//! `pending -> processing -> completed | failed`. The client polls the
//! status endpoint at a fixed interval and gives up after a bounded number
//! of attempts, at which point the upload is force-completed (a synthetic
//! `timeout -> completed` transition). The stepper itself is pure; the
//! async driver adds timing on top.

use std::future::Future;
use std::time::Duration;

use shared_types::ProcessingStatus;

/// Fixed-interval retry policy. Defaults match the shipped client:
/// first check after 5 seconds, then every 10 seconds, 30 attempts
/// (5 minutes) before forcing completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub initial_delay: Duration,
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(5),
            interval: Duration::from_secs(10),
            max_attempts: 30,
        }
    }
}

/// What to do after one status observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStep {
    /// Not terminal yet; wait one interval and check again.
    Continue { attempt: u32 },
    /// Upstream reached a terminal status.
    Terminal(ProcessingStatus),
    /// Attempts exhausted; treat the upload as completed.
    TimedOut,
}

/// Pure polling state machine. Feed it observations, it tells you when to
/// stop. A failed status fetch is observed as `None` and spends an attempt
/// without ending the loop.
#[derive(Debug)]
pub struct UploadPoller {
    policy: PollPolicy,
    attempts: u32,
}

impl UploadPoller {
    pub fn new(policy: PollPolicy) -> Self {
        Self { policy, attempts: 0 }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn observe(&mut self, status: Option<ProcessingStatus>) -> PollStep {
        if let Some(status) = status {
            if status.is_terminal() {
                return PollStep::Terminal(status);
            }
        }

        self.attempts += 1;
        if self.attempts >= self.policy.max_attempts {
            PollStep::TimedOut
        } else {
            PollStep::Continue {
                attempt: self.attempts,
            }
        }
    }
}

/// Final outcome of a polling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollResult {
    pub status: ProcessingStatus,
    pub attempts: u32,
    /// True when the status is the synthetic timeout completion rather
    /// than one reported by the pipeline.
    pub timed_out: bool,
}

/// Drive the poller against an async status fetch until it terminates.
///
/// Fetch errors are logged and spend an attempt, matching the original
/// client's behavior of never surfacing transient status-check failures.
/// Cancellation is the usual async story: drop the future (or race it
/// against a shutdown signal) and no further checks happen.
pub async fn poll_until_terminal<F, Fut>(policy: PollPolicy, mut fetch: F) -> PollResult
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<ProcessingStatus>>,
{
    let mut poller = UploadPoller::new(policy);
    tokio::time::sleep(policy.initial_delay).await;

    loop {
        let observed = match fetch().await {
            Ok(status) => Some(status),
            Err(err) => {
                tracing::warn!(error = %err, "upload status check failed");
                None
            }
        };

        match poller.observe(observed) {
            PollStep::Terminal(status) => {
                return PollResult {
                    status,
                    attempts: poller.attempts(),
                    timed_out: false,
                };
            }
            PollStep::TimedOut => {
                tracing::info!(
                    attempts = poller.attempts(),
                    "polling timed out, forcing completion"
                );
                return PollResult {
                    status: ProcessingStatus::Completed,
                    attempts: poller.attempts(),
                    timed_out: true,
                };
            }
            PollStep::Continue { .. } => tokio::time::sleep(policy.interval).await,
        }
    }
}
