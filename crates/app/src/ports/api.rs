//! Backend API port: the two read endpoints the dashboard polls.

use std::future::Future;

use botdash_domain::log::LogBatch;
use botdash_domain::status::StatusSnapshot;

use crate::error::FetchError;

/// Read access to the bot-monitoring backend.
pub trait DashboardApi {
    /// `GET` the status endpoint. Any non-2xx answer is a [`FetchError`].
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, FetchError>>;

    /// `GET` the logs endpoint. Any non-2xx answer is a [`FetchError`].
    fn fetch_logs(&self) -> impl Future<Output = Result<LogBatch, FetchError>>;
}

impl<T: DashboardApi> DashboardApi for std::rc::Rc<T> {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, FetchError>> {
        (**self).fetch_status()
    }

    fn fetch_logs(&self) -> impl Future<Output = Result<LogBatch, FetchError>> {
        (**self).fetch_logs()
    }
}
