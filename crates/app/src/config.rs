//! Dashboard configuration: serde defaults with key/value overrides.
//!
//! Every field has a sensible default so no configuration is required. Hosts
//! inject overrides as `botdash:*` keys (the web adapter reads them from
//! `<meta>` tags); overrides take precedence over deserialized values.

use std::time::Duration;

use serde::Deserialize;

use crate::poller::PollJob;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Backend endpoints.
    pub api: ApiConfig,
    /// Refresh periods.
    pub polling: PollingConfig,
    /// Log panel settings.
    pub logs: LogsConfig,
    /// Notification banner settings.
    pub notifications: NotificationsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Backend endpoint paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub status_endpoint: String,
    pub logs_endpoint: String,
}

/// Timer periods in seconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    pub status_interval_secs: u64,
    pub logs_interval_secs: u64,
}

/// Log panel configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogsConfig {
    /// Maximum number of lines rendered per refresh.
    pub max_entries: usize,
}

/// Notification banner configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Milliseconds before a banner removes itself.
    pub timeout_ms: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl DashboardConfig {
    /// Apply `botdash:*` overrides from `lookup`, then validate.
    ///
    /// Unparsable numeric overrides are ignored and keep the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the resulting configuration is
    /// unusable.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        self.apply_overrides(lookup);
        self.validate()?;
        Ok(self)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("botdash:status-endpoint") {
            self.api.status_endpoint = val;
        }
        if let Some(val) = lookup("botdash:logs-endpoint") {
            self.api.logs_endpoint = val;
        }
        if let Some(secs) = lookup("botdash:status-interval").and_then(|v| v.trim().parse().ok()) {
            self.polling.status_interval_secs = secs;
        }
        if let Some(secs) = lookup("botdash:logs-interval").and_then(|v| v.trim().parse().ok()) {
            self.polling.logs_interval_secs = secs;
        }
        if let Some(max) = lookup("botdash:max-log-entries").and_then(|v| v.trim().parse().ok()) {
            self.logs.max_entries = max;
        }
        if let Some(ms) = lookup("botdash:notification-timeout").and_then(|v| v.trim().parse().ok())
        {
            self.notifications.timeout_ms = ms;
        }
        if let Some(val) = lookup("botdash:log") {
            self.logging.filter = val;
        }
    }

    /// Check semantic constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] describing the first problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.status_endpoint.is_empty() || self.api.logs_endpoint.is_empty() {
            return Err(ConfigError::Validation(
                "endpoints must not be empty".to_string(),
            ));
        }
        if self.polling.status_interval_secs == 0 || self.polling.logs_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "poll intervals must be non-zero".to_string(),
            ));
        }
        if self.logs.max_entries == 0 {
            return Err(ConfigError::Validation(
                "max log entries must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Period of a polling job.
    #[must_use]
    pub fn period(&self, job: PollJob) -> Duration {
        match job {
            PollJob::Status => Duration::from_secs(self.polling.status_interval_secs),
            PollJob::Logs => Duration::from_secs(self.polling.logs_interval_secs),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            status_endpoint: "/api/status".to_string(),
            logs_endpoint: "/api/logs".to_string(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            status_interval_secs: 30,
            logs_interval_secs: 60,
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self { max_entries: 10 }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { timeout_ms: 5000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "botdash=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
