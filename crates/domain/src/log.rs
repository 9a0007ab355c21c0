//! Recent log lines, the payload of `GET /api/logs`.

use serde::{Deserialize, Serialize};

use crate::status::null_as_default;

/// Raw log lines as returned by the backend, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogBatch {
    #[serde(deserialize_with = "null_as_default")]
    pub logs: Vec<String>,
}

impl LogBatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}

/// Severity inferred from a log line's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
}

impl LogLevel {
    /// Classify a line by substring, checking `ERROR`, then `WARNING`, then
    /// `INFO`. The first marker found wins.
    #[must_use]
    pub fn detect(line: &str) -> Option<Self> {
        if line.contains("ERROR") {
            Some(Self::Error)
        } else if line.contains("WARNING") {
            Some(Self::Warning)
        } else if line.contains("INFO") {
            Some(Self::Info)
        } else {
            None
        }
    }

    /// Text color class for the level.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Error => "text-danger",
            Self::Warning => "text-warning",
            Self::Info => "text-info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_detect_single_marker() {
        assert_eq!(LogLevel::detect("12:00 ERROR boom"), Some(LogLevel::Error));
        assert_eq!(LogLevel::detect("12:00 WARNING slow"), Some(LogLevel::Warning));
        assert_eq!(LogLevel::detect("12:00 INFO ok"), Some(LogLevel::Info));
        assert_eq!(LogLevel::detect("12:00 DEBUG noise"), None);
    }

    #[test]
    fn should_prefer_error_over_other_markers() {
        assert_eq!(
            LogLevel::detect("INFO retrying after ERROR"),
            Some(LogLevel::Error)
        );
        assert_eq!(
            LogLevel::detect("INFO WARNING: queue full"),
            Some(LogLevel::Warning)
        );
    }

    #[test]
    fn should_match_case_sensitively() {
        assert_eq!(LogLevel::detect("error in lowercase"), None);
    }

    #[test]
    fn should_treat_missing_logs_as_empty() {
        let batch: LogBatch = serde_json::from_str("{}").unwrap();
        assert!(batch.is_empty());
        let batch: LogBatch = serde_json::from_str(r#"{"logs": null}"#).unwrap();
        assert!(batch.is_empty());
    }
}
