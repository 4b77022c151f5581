use std::sync::mpsc;
use std::time::Duration;

use engine_logging::engine_trace;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::{EngineEvent, SubmissionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    pub progress_interval: Duration,
    pub settle_delay: Duration,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            progress_interval: Duration::from_millis(800),
            settle_delay: Duration::from_millis(500),
        }
    }
}

/// Repeating wall-clock tick for the decorative progress bar. At most one
/// ticker runs; starting a new one cancels the previous.
pub(crate) struct ProgressTicker {
    interval: Duration,
    active: Option<(SubmissionId, JoinHandle<()>)>,
}

impl ProgressTicker {
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            interval,
            active: None,
        }
    }

    pub(crate) fn start(
        &mut self,
        runtime: &Handle,
        submission_id: SubmissionId,
        event_tx: mpsc::Sender<EngineEvent>,
    ) {
        self.cancel();
        let period = self.interval;
        let task = runtime.spawn(async move {
            let mut ticks = time::interval_at(Instant::now() + period, period);
            loop {
                ticks.tick().await;
                engine_trace!("progress tick for submission {}", submission_id);
                if event_tx
                    .send(EngineEvent::ProgressTick { submission_id })
                    .is_err()
                {
                    break;
                }
            }
        });
        self.active = Some((submission_id, task));
    }

    /// Safe to call when nothing is running or the ticker belongs to another submission.
    pub(crate) fn stop(&mut self, submission_id: SubmissionId) {
        if matches!(self.active, Some((active_id, _)) if active_id == submission_id) {
            self.cancel();
        }
    }

    #[cfg(test)]
    pub(crate) fn is_running(&self) -> bool {
        self.active.is_some()
    }

    fn cancel(&mut self) {
        if let Some((_, task)) = self.active.take() {
            task.abort();
        }
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub(crate) fn schedule_settle(
    runtime: &Handle,
    delay: Duration,
    submission_id: SubmissionId,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    runtime.spawn(async move {
        time::sleep(delay).await;
        let _ = event_tx.send(EngineEvent::SettleElapsed { submission_id });
    });
}
