//! Transient on-page notifications.

use std::fmt;

/// Inline style that pins a notification to the top-right corner.
pub const NOTIFICATION_STYLE: &str = "top: 20px; right: 20px; z-index: 9999; min-width: 300px;";

/// Severity of a notification. `error` is shown with the `danger` style; any
/// other value is used as the alert style verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Other(String),
}

impl Severity {
    /// Parse a free-form severity name.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "info" => Self::Info,
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            other => Self::Other(other.to_string()),
        }
    }

    /// Bootstrap alert style suffix (`alert-<style>`).
    #[must_use]
    pub fn alert_style(&self) -> &str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "danger",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            other => f.write_str(other.alert_style()),
        }
    }
}

/// A message banner to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Shorthand for an [`Severity::Error`] notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    /// Class attribute of the banner element.
    #[must_use]
    pub fn alert_classes(&self) -> String {
        format!(
            "alert alert-{} alert-dismissible fade show position-fixed",
            self.severity.alert_style()
        )
    }
}
