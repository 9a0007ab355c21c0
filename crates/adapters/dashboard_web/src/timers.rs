//! [`Scheduler`] over `gloo-timers` intervals.

use std::rc::Rc;
use std::time::Duration;

use botdash_app::poller::PollJob;
use botdash_app::ports::Scheduler;
use gloo_timers::callback::Interval;
use leptos::task::spawn_local;

use crate::Controller;

/// Runs each tick's refresh as a local task on the controller.
///
/// Dropping the returned [`Interval`] clears the browser timer.
pub struct IntervalScheduler {
    controller: Rc<Controller>,
}

impl IntervalScheduler {
    pub fn new(controller: Rc<Controller>) -> Self {
        Self { controller }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, period: Duration, job: PollJob) -> Interval {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        let controller = Rc::clone(&self.controller);
        Interval::new(millis, move || {
            let controller = Rc::clone(&controller);
            spawn_local(async move { controller.poll(job).await });
        })
    }
}
