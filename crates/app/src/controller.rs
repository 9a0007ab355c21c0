//! Dashboard controller. Fetches snapshots and applies rendered patches.

use botdash_domain::notification::{Notification, Severity};

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Endpoint, ViewError};
use crate::patch::Patch;
use crate::poller::PollJob;
use crate::ports::{DashboardApi, Notifier, View};
use crate::render;

/// Keeps the page in sync with the backend.
///
/// The view never holds authoritative state: each successful refresh
/// overwrites its targets wholesale, a failed one leaves them untouched.
pub struct DashboardController<A, V, N> {
    api: A,
    view: V,
    notifier: N,
    max_log_entries: usize,
}

impl<A: DashboardApi, V: View, N: Notifier> DashboardController<A, V, N> {
    /// Create a controller over the given ports.
    pub fn new(api: A, view: V, notifier: N, config: &DashboardConfig) -> Self {
        Self {
            api,
            view,
            notifier,
            max_log_entries: config.logs.max_entries,
        }
    }

    /// Render the page-ready state: an "Unknown" footer badge and the log
    /// panel scrolled to the bottom.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] if the page rejects a patch.
    pub fn initialize(&self) -> Result<(), ViewError> {
        self.apply(&render::initial_patches())
    }

    /// Fetch the status snapshot and re-render every status region.
    ///
    /// Failures are logged and surfaced as an error notification before
    /// being returned; they are never retried.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] when the fetch or a patch fails. Patches
    /// after a failing one are not applied.
    pub async fn refresh_status(&self) -> Result<(), DashboardError> {
        let result = async {
            let snapshot = self.api.fetch_status().await?;
            self.apply(&render::status_patches(&snapshot))?;
            Ok::<_, DashboardError>(())
        }
        .await;
        self.report(Endpoint::Status, result)
    }

    /// Fetch recent log lines and re-render the log panel.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] when the fetch or a patch fails.
    pub async fn refresh_logs(&self) -> Result<(), DashboardError> {
        let result = async {
            let batch = self.api.fetch_logs().await?;
            self.apply(&render::log_patches(&batch, self.max_log_entries))?;
            Ok::<_, DashboardError>(())
        }
        .await;
        self.report(Endpoint::Logs, result)
    }

    /// Run one scheduled refresh. Errors were already reported, so they are
    /// dropped here and never stop later ticks.
    pub async fn poll(&self, job: PollJob) {
        let _ = match job {
            PollJob::Status => self.refresh_status().await,
            PollJob::Logs => self.refresh_logs().await,
        };
    }

    /// Show a banner through the notifier.
    pub fn show_notification(&self, message: impl Into<String>, severity: Severity) {
        self.notifier.notify(Notification::new(message, severity));
    }

    fn apply(&self, patches: &[Patch]) -> Result<(), ViewError> {
        let mut touched = 0;
        for patch in patches {
            touched += self.view.apply(patch)?;
        }
        tracing::debug!(patches = patches.len(), touched, "applied view patches");
        Ok(())
    }

    fn report(
        &self,
        endpoint: Endpoint,
        result: Result<(), DashboardError>,
    ) -> Result<(), DashboardError> {
        if let Err(err) = &result {
            tracing::error!(%endpoint, error = %err, "dashboard refresh failed");
            self.notifier.notify(Notification::error(format!(
                "Failed to update {endpoint}. The bot may be experiencing issues."
            )));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::future::Future;

    use botdash_domain::log::LogBatch;
    use botdash_domain::process::ProcessInfo;
    use botdash_domain::status::{BotStatus, StatusSnapshot};

    use super::*;
    use crate::error::FetchError;
    use crate::patch::{PatchOp, Target, ids};

    struct FakeApi {
        status: Result<StatusSnapshot, FetchError>,
        logs: Result<LogBatch, FetchError>,
    }

    impl Default for FakeApi {
        fn default() -> Self {
            Self {
                status: Ok(StatusSnapshot::default()),
                logs: Ok(LogBatch::default()),
            }
        }
    }

    impl DashboardApi for FakeApi {
        fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, FetchError>> {
            let result = self.status.clone();
            async { result }
        }

        fn fetch_logs(&self) -> impl Future<Output = Result<LogBatch, FetchError>> {
            let result = self.logs.clone();
            async { result }
        }
    }

    #[derive(Default)]
    struct RecordingView {
        applied: RefCell<Vec<Patch>>,
        fail_on: Option<Target>,
    }

    impl View for &RecordingView {
        fn apply(&self, patch: &Patch) -> Result<usize, ViewError> {
            if self.fail_on.as_ref() == Some(&patch.target) {
                return Err(ViewError::Dom("detached node".to_string()));
            }
            self.applied.borrow_mut().push(patch.clone());
            Ok(1)
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        shown: RefCell<Vec<Notification>>,
    }

    impl Notifier for &RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.shown.borrow_mut().push(notification);
        }
    }

    fn http_500() -> FetchError {
        FetchError::Status {
            endpoint: Endpoint::Status,
            code: 500,
        }
    }

    #[tokio::test]
    async fn should_apply_status_patches_on_success() {
        let api = FakeApi {
            status: Ok(StatusSnapshot {
                status: BotStatus::Running,
                uptime: 5400,
                ..StatusSnapshot::default()
            }),
            ..FakeApi::default()
        };
        let view = RecordingView::default();
        let notifier = RecordingNotifier::default();
        let controller =
            DashboardController::new(api, &view, &notifier, &DashboardConfig::default());

        controller.refresh_status().await.unwrap();

        let applied = view.applied.borrow();
        assert!(applied.contains(&Patch::text(Target::Id(ids::UPTIME_DISPLAY), "1h 30m")));
        assert!(applied.contains(&Patch::text(Target::Id(ids::FOOTER_STATUS), "Running")));
        assert!(notifier.shown.borrow().is_empty());
    }

    #[tokio::test]
    async fn should_notify_once_and_leave_view_untouched_on_http_error() {
        let api = FakeApi {
            status: Err(http_500()),
            ..FakeApi::default()
        };
        let view = RecordingView::default();
        let notifier = RecordingNotifier::default();
        let controller =
            DashboardController::new(api, &view, &notifier, &DashboardConfig::default());

        let result = controller.refresh_status().await;

        assert_eq!(result, Err(DashboardError::Fetch(http_500())));
        assert!(view.applied.borrow().is_empty());
        let shown = notifier.shown.borrow();
        assert_eq!(shown.len(), 1);
        assert_eq!(
            shown[0],
            Notification::error("Failed to update status. The bot may be experiencing issues.")
        );
    }

    #[tokio::test]
    async fn should_stop_remaining_patches_after_view_error() {
        let api = FakeApi {
            status: Ok(StatusSnapshot {
                user_processes: vec![ProcessInfo::new("a1", 1, 2)],
                ..StatusSnapshot::default()
            }),
            ..FakeApi::default()
        };
        let view = RecordingView {
            fail_on: Some(Target::Id(ids::ACTIONS_DISPLAY)),
            ..RecordingView::default()
        };
        let notifier = RecordingNotifier::default();
        let controller =
            DashboardController::new(api, &view, &notifier, &DashboardConfig::default());

        let result = controller.refresh_status().await;

        assert!(matches!(result, Err(DashboardError::View(_))));
        assert_eq!(view.applied.borrow().len(), 3);
        assert_eq!(notifier.shown.borrow().len(), 1);
    }

    #[tokio::test]
    async fn should_render_logs_with_configured_cap() {
        let api = FakeApi {
            logs: Ok(LogBatch {
                logs: (0..12).map(|i| format!("INFO line {i}")).collect(),
            }),
            ..FakeApi::default()
        };
        let view = RecordingView::default();
        let notifier = RecordingNotifier::default();
        let mut config = DashboardConfig::default();
        config.logs.max_entries = 3;
        let controller = DashboardController::new(api, &view, &notifier, &config);

        controller.refresh_logs().await.unwrap();

        let applied = view.applied.borrow();
        match &applied[0].op {
            PatchOp::ReplaceLogLines(lines) => assert_eq!(lines.len(), 3),
            other => panic!("unexpected op {other:?}"),
        }
        assert_eq!(applied[1].op, PatchOp::ScrollToBottom);
    }

    #[tokio::test]
    async fn should_leave_log_panel_alone_for_empty_batch() {
        let view = RecordingView::default();
        let notifier = RecordingNotifier::default();
        let controller = DashboardController::new(
            FakeApi::default(),
            &view,
            &notifier,
            &DashboardConfig::default(),
        );

        controller.refresh_logs().await.unwrap();

        assert!(view.applied.borrow().is_empty());
    }

    #[tokio::test]
    async fn should_name_logs_endpoint_in_notification() {
        let api = FakeApi {
            logs: Err(FetchError::Network {
                endpoint: Endpoint::Logs,
                message: "offline".to_string(),
            }),
            ..FakeApi::default()
        };
        let view = RecordingView::default();
        let notifier = RecordingNotifier::default();
        let controller =
            DashboardController::new(api, &view, &notifier, &DashboardConfig::default());

        controller.poll(PollJob::Logs).await;

        assert_eq!(
            notifier.shown.borrow()[0].message,
            "Failed to update logs. The bot may be experiencing issues."
        );
    }

    #[test]
    fn should_render_initial_state() {
        let view = RecordingView::default();
        let notifier = RecordingNotifier::default();
        let controller = DashboardController::new(
            FakeApi::default(),
            &view,
            &notifier,
            &DashboardConfig::default(),
        );

        controller.initialize().unwrap();

        assert_eq!(*view.applied.borrow(), render::initial_patches());
    }

    #[test]
    fn should_pass_notifications_through() {
        let view = RecordingView::default();
        let notifier = RecordingNotifier::default();
        let controller = DashboardController::new(
            FakeApi::default(),
            &view,
            &notifier,
            &DashboardConfig::default(),
        );

        controller.show_notification("Saved", Severity::Success);

        assert_eq!(
            notifier.shown.borrow()[0],
            Notification::new("Saved", Severity::Success)
        );
    }
}
