//! Scheduler port for repeating timers.

use std::time::Duration;

use crate::poller::PollJob;

/// Registers repeating timers that run a [`PollJob`].
///
/// The timer keeps firing until its handle is dropped.
pub trait Scheduler {
    /// Guard owning a registered timer.
    type Handle;

    /// Run `job` every `period`, starting one period from now.
    fn every(&self, period: Duration, job: PollJob) -> Self::Handle;
}
