//! Fixed-interval job polling
//!
//! Both remote jobs share the same contract: probe the status at a fixed
//! interval until a terminal state or the attempt budget runs out. A failed
//! probe is logged and swallowed; the loop keeps going. A terminal failure
//! status ends the loop immediately rather than burning the remaining budget.

use crate::domain::job::{ExportProbe, JobStatus, MigrationPhase};
use crate::domain::{DashportError, Result};
use std::future::Future;
use std::time::Duration;

/// Polling parameters for one job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay between status probes
    pub interval: Duration,
    /// Probe budget before the job is declared failed or timed out
    pub max_attempts: u32,
}

impl PollPolicy {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Zero-delay policy for tests
    pub fn immediate(max_attempts: u32) -> Self {
        Self::new(Duration::ZERO, max_attempts)
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        // 12 attempts at 10 seconds: up to two minutes per job
        Self::new(Duration::from_secs(10), 12)
    }
}

/// Anything the poll loop can classify by job status
pub trait JobProbe {
    fn status(&self) -> &JobStatus;
}

impl JobProbe for JobStatus {
    fn status(&self) -> &JobStatus {
        self
    }
}

impl JobProbe for ExportProbe {
    fn status(&self) -> &JobStatus {
        &self.status
    }
}

/// Poll a job until it is terminal or the budget is exhausted
///
/// Returns the successful probe, or [`DashportError::JobFailed`] carrying the
/// last observed status (None when every probe errored out).
pub async fn await_terminal<P, F, Fut>(
    policy: &PollPolicy,
    phase: MigrationPhase,
    mut describe: F,
) -> Result<P>
where
    P: JobProbe,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<P>>,
{
    let mut last_status: Option<JobStatus> = None;

    for attempt in 1..=policy.max_attempts {
        match describe().await {
            Ok(probe) => {
                let status = probe.status().clone();
                tracing::info!(
                    phase = %phase,
                    attempt,
                    max_attempts = policy.max_attempts,
                    status = %status,
                    "Job status"
                );

                if status.is_successful() {
                    return Ok(probe);
                }
                if status.is_terminal_failure() {
                    return Err(DashportError::JobFailed {
                        phase,
                        last_status: Some(status.as_str().to_string()),
                    });
                }
                last_status = Some(status);
            }
            Err(e) => {
                // Transient: a single failed check never ends the run
                tracing::warn!(
                    phase = %phase,
                    attempt,
                    error = %e,
                    "Job status check failed, continuing to poll"
                );
            }
        }

        if attempt < policy.max_attempts && !policy.interval.is_zero() {
            tokio::time::sleep(policy.interval).await;
        }
    }

    Err(DashportError::JobFailed {
        phase,
        last_status: last_status.map(|s| s.as_str().to_string()),
    })
}
