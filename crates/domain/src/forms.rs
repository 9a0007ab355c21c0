//! Form models for the bot start/stop actions and the settings form.

use crate::error::ValidationError;

/// Marker in a form action path identifying the stop endpoint.
const STOP_MARKER: &str = "stop_bot";

/// Which bot control a form submits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotAction {
    Start,
    Stop,
}

impl BotAction {
    /// Infer the action from a form's `action` URL or path.
    #[must_use]
    pub fn from_action(action: &str) -> Self {
        if action.contains(STOP_MARKER) {
            Self::Stop
        } else {
            Self::Start
        }
    }

    /// Question asked before the form is submitted.
    #[must_use]
    pub fn confirmation_message(self) -> &'static str {
        match self {
            Self::Start => "Are you sure you want to start the bot?",
            Self::Stop => "Are you sure you want to stop the bot?",
        }
    }
}

/// An `<input name="*interval*">` read from the settings form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalField {
    pub name: String,
    pub value: String,
    /// Raw `min` attribute, if any.
    pub min: Option<String>,
    /// Raw `max` attribute, if any.
    pub max: Option<String>,
}

impl IntervalField {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub fn bounded(mut self, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self.max = Some(max.into());
        self
    }

    /// Human label: the first `_` becomes a space (`scan_interval` → `scan interval`).
    #[must_use]
    pub fn label(&self) -> String {
        self.name.replacen('_', " ", 1)
    }

    /// Check the value is an integer inside the inclusive bounds. An absent or
    /// unparsable bound does not constrain.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IntervalOutOfRange`] naming this field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let min = self.min.as_deref().and_then(parse_leading_int);
        let max = self.max.as_deref().and_then(parse_leading_int);
        let in_range = parse_leading_int(&self.value).is_some_and(|value| {
            min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
        });
        if in_range {
            Ok(())
        } else {
            Err(ValidationError::IntervalOutOfRange {
                label: self.label(),
                min,
                max,
            })
        }
    }
}

/// Snapshot of the settings form at submit time.
///
/// `None` means the named field is not present in the form at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub game_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub intervals: Vec<IntervalField>,
}

impl SettingsForm {
    /// Names of the fields that must exist in the form.
    pub const REQUIRED_FIELDS: [&'static str; 3] = ["game_url", "username", "password"];

    /// Run the submit-time checks in order and stop at the first failure:
    /// required fields, game URL, then every interval field.
    ///
    /// `is_absolute_url` decides whether the game URL parses; the browser
    /// adapter passes its native URL parser.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self, is_absolute_url: impl Fn(&str) -> bool) -> Result<(), ValidationError> {
        let (Some(game_url), Some(_), Some(_)) = (&self.game_url, &self.username, &self.password)
        else {
            return Err(ValidationError::MissingRequiredFields);
        };

        if !is_absolute_url(game_url) {
            return Err(ValidationError::InvalidGameUrl);
        }

        self.intervals.iter().try_for_each(IntervalField::validate)
    }
}

/// Parse the leading integer of `raw`, ignoring leading whitespace and any
/// trailing garbage (`" 12s"` → 12, `"1.5"` → 1, `"abc"` → `None`).
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accept_http(url: &str) -> bool {
        url.starts_with("http://") || url.starts_with("https://")
    }

    fn valid_form() -> SettingsForm {
        SettingsForm {
            game_url: Some("https://play.example.com/game".to_string()),
            username: Some("farmer".to_string()),
            password: Some("secret".to_string()),
            intervals: vec![
                IntervalField::new("scan_interval", "60").bounded("10", "300"),
                IntervalField::new("march_interval", "30").bounded("5", "120"),
            ],
        }
    }

    #[test]
    fn should_infer_stop_action_from_path() {
        assert_eq!(BotAction::from_action("/stop_bot"), BotAction::Stop);
        assert_eq!(
            BotAction::from_action("https://host/instances/3/stop_bot"),
            BotAction::Stop
        );
        assert_eq!(BotAction::from_action("/start_bot"), BotAction::Start);
    }

    #[test]
    fn should_pick_confirmation_message_for_action() {
        assert_eq!(
            BotAction::Stop.confirmation_message(),
            "Are you sure you want to stop the bot?"
        );
        assert_eq!(
            BotAction::Start.confirmation_message(),
            "Are you sure you want to start the bot?"
        );
    }

    #[test]
    fn should_accept_valid_settings() {
        assert!(valid_form().validate(accept_http).is_ok());
    }

    #[test]
    fn should_reject_when_required_field_missing() {
        let mut form = valid_form();
        form.password = None;
        assert_eq!(
            form.validate(accept_http),
            Err(ValidationError::MissingRequiredFields)
        );
    }

    #[test]
    fn should_accept_present_but_empty_credentials() {
        let mut form = valid_form();
        form.username = Some(String::new());
        assert!(form.validate(accept_http).is_ok());
    }

    #[test]
    fn should_reject_invalid_url_before_intervals() {
        let mut form = valid_form();
        form.game_url = Some("not a url".to_string());
        form.intervals[0].value = "9999".to_string();
        assert_eq!(
            form.validate(accept_http),
            Err(ValidationError::InvalidGameUrl)
        );
    }

    #[test]
    fn should_reject_interval_outside_bounds() {
        let mut form = valid_form();
        form.intervals[1].value = "500".to_string();
        let err = form.validate(accept_http).unwrap_err();
        assert_eq!(
            err.to_string(),
            "march interval must be between 5 and 120 seconds."
        );
    }

    #[test]
    fn should_accept_interval_on_inclusive_bounds() {
        let mut form = valid_form();
        form.intervals[0].value = "10".to_string();
        form.intervals[1].value = "120".to_string();
        assert!(form.validate(accept_http).is_ok());
    }

    #[test]
    fn should_report_first_failing_interval_only() {
        let mut form = valid_form();
        form.intervals[0].value = "1".to_string();
        form.intervals[1].value = "1".to_string();
        let err = form.validate(accept_http).unwrap_err();
        assert!(err.to_string().starts_with("scan interval"));
    }

    #[test]
    fn should_reject_non_numeric_interval() {
        let field = IntervalField::new("scan_interval", "soon").bounded("10", "300");
        assert!(field.validate().is_err());
    }

    #[test]
    fn should_ignore_missing_bounds() {
        let field = IntervalField::new("retry_interval", "100000");
        assert!(field.validate().is_ok());
    }

    #[test]
    fn should_only_replace_first_underscore_in_label() {
        let field = IntervalField::new("auto_stop_interval", "0");
        assert_eq!(field.label(), "auto stop_interval");
    }

    #[test]
    fn should_parse_leading_integer() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  12s"), Some(12));
        assert_eq!(parse_leading_int("1.9"), Some(1));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("x1"), None);
        assert_eq!(parse_leading_int("-"), None);
    }
}
