//! Polling lifecycle. Owns the repeating refresh timers.

use std::fmt;
use std::time::Duration;

use crate::config::DashboardConfig;
use crate::ports::Scheduler;

/// A periodic refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PollJob {
    Status,
    Logs,
}

impl PollJob {
    /// Every job, in registration order.
    pub const ALL: [Self; 2] = [Self::Status, Self::Logs];
}

impl fmt::Display for PollJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status => f.write_str("status"),
            Self::Logs => f.write_str("logs"),
        }
    }
}

/// Starts and stops the refresh timers.
///
/// Ticks are not coordinated: a tick that fires while the previous refresh is
/// still in flight starts another one.
pub struct Poller<S: Scheduler> {
    scheduler: S,
    periods: Vec<(PollJob, Duration)>,
    handles: Vec<S::Handle>,
}

impl<S: Scheduler> Poller<S> {
    /// Create a stopped poller using the periods from `config`.
    pub fn new(scheduler: S, config: &DashboardConfig) -> Self {
        let periods = PollJob::ALL
            .into_iter()
            .map(|job| (job, config.period(job)))
            .collect();
        Self {
            scheduler,
            periods,
            handles: Vec::new(),
        }
    }

    /// Register every job. Calling `start` on a running poller does nothing.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        for (job, period) in &self.periods {
            tracing::debug!(%job, ?period, "scheduling refresh");
            self.handles.push(self.scheduler.every(*period, *job));
        }
    }

    /// Cancel every timer by dropping its handle.
    pub fn stop(&mut self) {
        if self.is_running() {
            tracing::debug!(timers = self.handles.len(), "stopping refresh timers");
        }
        self.handles.clear();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.handles.is_empty()
    }
}
