//! View patches — pure instructions produced by the renderers and applied by a
//! [`View`](crate::ports::View) adapter.
//!
//! A patch names its target elements, an optional guard each element must
//! pass, and the operation to perform. Targets that match nothing are a
//! no-op, so renderers never check whether an element exists.

use std::fmt::Write as _;

/// Element ids the dashboard page exposes.
pub mod ids {
    pub const STATUS_INDICATOR: &str = "status-indicator";
    pub const UPTIME_DISPLAY: &str = "uptime-display";
    pub const ACTIONS_DISPLAY: &str = "actions-display";
    pub const FOOTER_STATUS: &str = "footer-status";
    pub const RECENT_LOGS: &str = "recent-logs";
}

/// How a patch locates its elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// The element with this id, if any.
    Id(&'static str),
    /// The first element matching a CSS selector, if any.
    First(String),
    /// Every element matching a CSS selector.
    All(String),
}

impl Target {
    #[must_use]
    pub fn first(selector: impl Into<String>) -> Self {
        Self::First(selector.into())
    }

    #[must_use]
    pub fn all(selector: impl Into<String>) -> Self {
        Self::All(selector.into())
    }
}

/// Per-element condition checked before the operation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Always,
    /// Tag name must be one of these, ignoring ASCII case.
    TagIn(&'static [&'static str]),
    /// Current text content must contain this character.
    TextContains(char),
}

impl Guard {
    /// Evaluate the guard against an element's tag name and current text.
    #[must_use]
    pub fn allows(self, tag_name: &str, text: &str) -> bool {
        match self {
            Self::Always => true,
            Self::TagIn(tags) => tags.iter().any(|tag| tag.eq_ignore_ascii_case(tag_name)),
            Self::TextContains(needle) => text.contains(needle),
        }
    }
}

/// One rendered line of the log panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Trimmed line text.
    pub text: String,
    /// Full class attribute of the inner text element.
    pub class: String,
}

/// What to do with each matched element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOp {
    /// Replace the text content.
    Text(String),
    /// Replace the whole class attribute.
    Class(String),
    /// Drop all children and append one entry per line.
    ReplaceLogLines(Vec<LogLine>),
    /// Scroll to the bottom edge.
    ScrollToBottom,
}

/// A single view update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub target: Target,
    pub guard: Guard,
    pub op: PatchOp,
}

impl Patch {
    /// Unguarded patch.
    #[must_use]
    pub fn new(target: Target, op: PatchOp) -> Self {
        Self {
            target,
            guard: Guard::Always,
            op,
        }
    }

    /// Set the text of every matched element.
    #[must_use]
    pub fn text(target: Target, text: impl Into<String>) -> Self {
        Self::new(target, PatchOp::Text(text.into()))
    }

    /// Set the class attribute of every matched element.
    #[must_use]
    pub fn class(target: Target, class: impl Into<String>) -> Self {
        Self::new(target, PatchOp::Class(class.into()))
    }

    #[must_use]
    pub fn guarded(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }
}

/// Quote `value` as a CSS string for use inside an attribute selector.
///
/// Control characters become hex escapes (`\d `); NUL becomes U+FFFD, which
/// is what the CSS parser would substitute anyway.
#[must_use]
pub fn css_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\0' => quoted.push('\u{FFFD}'),
            c if c.is_control() => {
                let _ = write!(quoted, "\\{:x} ", u32::from(c));
            }
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}
