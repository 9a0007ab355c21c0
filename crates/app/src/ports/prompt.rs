//! Prompt port for blocking yes/no confirmation.

/// Asks the user to confirm an action.
pub trait Prompt {
    /// Show `message` and return whether the user accepted.
    fn confirm(&self, message: &str) -> bool;
}
