//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors; the `Display` text of a
//! [`ValidationError`] is the message shown to the user.

/// Reasons a settings form is refused before submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One of `game_url`, `username` or `password` is missing from the form.
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,

    /// The game URL is not an absolute URL.
    #[error("Please enter a valid game URL.")]
    InvalidGameUrl,

    /// An interval field is not an integer or falls outside its bounds.
    #[error("{}", interval_message(.label, .min, .max))]
    IntervalOutOfRange {
        /// Human label derived from the field name (`scan_interval` → `scan interval`).
        label: String,
        min: Option<i64>,
        max: Option<i64>,
    },
}

#[allow(clippy::ref_option)]
fn interval_message(label: &str, min: &Option<i64>, max: &Option<i64>) -> String {
    match (*min, *max) {
        (Some(min), Some(max)) => format!("{label} must be between {min} and {max} seconds."),
        (Some(min), None) => format!("{label} must be at least {min} seconds."),
        (None, Some(max)) => format!("{label} must be at most {max} seconds."),
        (None, None) => format!("{label} must be a whole number of seconds."),
    }
}
