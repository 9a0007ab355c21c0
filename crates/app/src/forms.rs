//! Submit-time interceptors for the bot control and settings forms.

use botdash_domain::forms::{BotAction, SettingsForm};
use botdash_domain::notification::Notification;

use crate::ports::{Notifier, Prompt};

/// Outcome of a submit interception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the browser submit the form normally.
    Proceed,
    /// Prevent the submission.
    Cancel,
}

impl SubmitDecision {
    #[must_use]
    pub fn is_cancel(self) -> bool {
        self == Self::Cancel
    }
}

/// Decides whether intercepted form submissions go through.
pub struct FormInterceptor<P, N> {
    prompt: P,
    notifier: N,
}

impl<P: Prompt, N: Notifier> FormInterceptor<P, N> {
    pub fn new(prompt: P, notifier: N) -> Self {
        Self { prompt, notifier }
    }

    /// Ask for confirmation before a start/stop form submits.
    pub fn bot_form_submitted(&self, action: &str) -> SubmitDecision {
        let bot_action = BotAction::from_action(action);
        if self.prompt.confirm(bot_action.confirmation_message()) {
            SubmitDecision::Proceed
        } else {
            tracing::debug!(?bot_action, "bot action declined");
            SubmitDecision::Cancel
        }
    }

    /// Validate the settings form; the first failing rule cancels the submit
    /// and is shown as an error notification.
    pub fn settings_submitted(
        &self,
        form: &SettingsForm,
        is_absolute_url: impl Fn(&str) -> bool,
    ) -> SubmitDecision {
        match form.validate(is_absolute_url) {
            Ok(()) => SubmitDecision::Proceed,
            Err(err) => {
                tracing::debug!(error = %err, "settings form rejected");
                self.notifier.notify(Notification::error(err.to_string()));
                SubmitDecision::Cancel
            }
        }
    }
}
