//! Bot status snapshot — the payload of `GET /api/status`.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::game_state::GameState;
use crate::process::ProcessInfo;

/// Lifecycle status reported by the backend.
///
/// Unrecognised values are kept verbatim in [`Other`](Self::Other) so they can
/// still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BotStatus {
    Running,
    Stopped,
    Error,
    #[default]
    Unknown,
    Other(String),
}

impl BotStatus {
    /// Parse a raw status string. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "running" => Self::Running,
            "stopped" => Self::Stopped,
            "error" => Self::Error,
            "unknown" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Error => "error",
            Self::Unknown => "unknown",
            Self::Other(raw) => raw,
        }
    }

    /// Status text for a badge: first letter upper-cased.
    #[must_use]
    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }

    /// Bootstrap background class for the status badge.
    #[must_use]
    pub fn badge_class(&self) -> BadgeClass {
        match self {
            Self::Running => BadgeClass::Success,
            Self::Error => BadgeClass::Danger,
            Self::Stopped | Self::Unknown | Self::Other(_) => BadgeClass::Secondary,
        }
    }
}

impl fmt::Display for BotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BotStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BotStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map_or(Self::Unknown, |raw| Self::parse(&raw)))
    }
}

/// Visual style of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeClass {
    Success,
    Secondary,
    Danger,
}

impl BadgeClass {
    /// Map any raw status string to its badge class. Total: unknown,
    /// empty and missing statuses are all `bg-secondary`.
    #[must_use]
    pub fn for_status(raw: &str) -> Self {
        BotStatus::parse(raw).badge_class()
    }

    /// CSS class name, e.g. `bg-success`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "bg-success",
            Self::Secondary => "bg-secondary",
            Self::Danger => "bg-danger",
        }
    }

    /// Full class attribute for a badge element.
    #[must_use]
    pub fn badge(self) -> String {
        format!("badge {}", self.as_str())
    }
}

impl fmt::Display for BadgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fetched copy of the backend state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusSnapshot {
    pub status: BotStatus,
    /// Seconds since the bot was started.
    #[serde(deserialize_with = "whole_number")]
    pub uptime: u64,
    #[serde(deserialize_with = "whole_number")]
    pub actions_completed: u64,
    pub game_state: Option<GameState>,
    #[serde(deserialize_with = "null_as_default")]
    pub user_processes: Vec<ProcessInfo>,
}

impl StatusSnapshot {
    /// Uptime as `"{hours}h {minutes}m"`; seconds are dropped.
    #[must_use]
    pub fn uptime_label(&self) -> String {
        format_uptime(self.uptime)
    }
}

/// Render an uptime in seconds as `"{hours}h {minutes}m"`.
#[must_use]
pub fn format_uptime(seconds: u64) -> String {
    let duration = i64::try_from(seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX);
    let hours = duration.num_hours();
    let minutes = duration.num_minutes() % 60;
    format!("{hours}h {minutes}m")
}

/// Upper-case the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Deserialize `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any JSON number as a non-negative count.
///
/// Fractions are floored, negatives and non-finite values become zero and
/// `null` is zero.
pub(crate) fn whole_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = match Option::<Number>::deserialize(deserializer)? {
        None => 0,
        Some(Number::Unsigned(value)) => value,
        Some(Number::Signed(value)) => u64::try_from(value).unwrap_or(0),
        // `as` saturates at u64::MAX.
        Some(Number::Float(value)) if value.is_finite() && value > 0.0 => value.floor() as u64,
        Some(Number::Float(_)) => 0,
    };
    T::try_from(count).map_err(|_| {
        serde::de::Error::invalid_value(
            serde::de::Unexpected::Unsigned(count),
            &"a count within range",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_known_statuses_to_badge_classes() {
        assert_eq!(BadgeClass::for_status("running").as_str(), "bg-success");
        assert_eq!(BadgeClass::for_status("stopped").as_str(), "bg-secondary");
        assert_eq!(BadgeClass::for_status("error").as_str(), "bg-danger");
    }

    #[test]
    fn should_map_any_other_status_to_secondary() {
        assert_eq!(BadgeClass::for_status("").as_str(), "bg-secondary");
        assert_eq!(BadgeClass::for_status("paused").as_str(), "bg-secondary");
        assert_eq!(BadgeClass::for_status("Running").as_str(), "bg-secondary");
        assert_eq!(BotStatus::Unknown.badge_class(), BadgeClass::Secondary);
    }

    #[test]
    fn should_capitalize_status_label() {
        assert_eq!(BotStatus::Running.label(), "Running");
        assert_eq!(BotStatus::parse("paused").label(), "Paused");
        assert_eq!(BotStatus::parse("").label(), "");
    }

    #[test]
    fn should_format_uptime_as_hours_and_minutes() {
        assert_eq!(format_uptime(5400), "1h 30m");
        assert_eq!(format_uptime(0), "0h 0m");
        assert_eq!(format_uptime(59), "0h 0m");
        assert_eq!(format_uptime(90_061), "25h 1m");
    }

    #[test]
    fn should_default_missing_fields() {
        let snapshot: StatusSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot.status, BotStatus::Unknown);
        assert_eq!(snapshot.uptime, 0);
        assert_eq!(snapshot.actions_completed, 0);
        assert!(snapshot.game_state.is_none());
        assert!(snapshot.user_processes.is_empty());
    }

    #[test]
    fn should_parse_full_snapshot() {
        let snapshot: StatusSnapshot = serde_json::from_value(serde_json::json!({
            "status": "running",
            "uptime": 5400,
            "actions_completed": 17,
            "game_state": {
                "resources": {"wood": 1500, "stone": 20, "gold": 2500000, "food": 0},
                "power_level": 1234567
            },
            "user_processes": [
                {"instance_id": "a1", "name": "Main", "current_marches": 2, "march_limit": 5}
            ],
            "total_active": 1
        }))
        .unwrap();

        assert_eq!(snapshot.status, BotStatus::Running);
        assert_eq!(snapshot.uptime_label(), "1h 30m");
        assert_eq!(snapshot.actions_completed, 17);
        assert_eq!(snapshot.user_processes.len(), 1);
        let game = snapshot.game_state.unwrap();
        assert_eq!(game.resources.unwrap().gold, 2_500_000);
    }

    #[test]
    fn should_keep_unrecognised_status_verbatim() {
        let snapshot: StatusSnapshot =
            serde_json::from_value(serde_json::json!({"status": "restarting"})).unwrap();
        assert_eq!(snapshot.status, BotStatus::Other("restarting".to_string()));
        assert_eq!(snapshot.status.to_string(), "restarting");
    }

    #[test]
    fn should_floor_fractional_uptime_and_actions() {
        let snapshot: StatusSnapshot = serde_json::from_value(serde_json::json!({
            "status": "running",
            "uptime": 5400.5,
            "actions_completed": 12.0
        }))
        .unwrap();
        assert_eq!(snapshot.uptime, 5400);
        assert_eq!(snapshot.uptime_label(), "1h 30m");
        assert_eq!(snapshot.actions_completed, 12);
    }

    #[test]
    fn should_clamp_negative_uptime_to_zero() {
        let snapshot: StatusSnapshot =
            serde_json::from_value(serde_json::json!({"uptime": -30, "actions_completed": -1.5}))
                .unwrap();
        assert_eq!(snapshot.uptime, 0);
        assert_eq!(snapshot.actions_completed, 0);
    }

    #[test]
    fn should_keep_snapshot_when_process_fields_are_null() {
        let snapshot: StatusSnapshot = serde_json::from_value(serde_json::json!({
            "status": "running",
            "uptime": 60,
            "user_processes": [
                {"instance_id": null, "name": null, "current_marches": 1.0, "march_limit": 3}
            ]
        }))
        .unwrap();
        assert_eq!(snapshot.status, BotStatus::Running);
        let process = &snapshot.user_processes[0];
        assert_eq!(process.instance_id, "");
        assert_eq!(process.name, "Bot Instance");
        assert_eq!(process.march_ratio(), "1/3");
    }

    #[test]
    fn should_treat_null_status_and_processes_as_defaults() {
        let snapshot: StatusSnapshot = serde_json::from_value(serde_json::json!({
            "status": null,
            "actions_completed": null,
            "user_processes": null
        }))
        .unwrap();
        assert_eq!(snapshot.status, BotStatus::Unknown);
        assert_eq!(snapshot.actions_completed, 0);
        assert!(snapshot.user_processes.is_empty());
    }
}
