//! Pure renderers: snapshots in, [`Patch`] lists out.
//!
//! Nothing here touches the page. The controller applies the returned patches
//! in order through the [`View`](crate::ports::View) port.

pub mod logs;
pub mod march;
pub mod status;

use botdash_domain::status::{BadgeClass, BotStatus};

use crate::patch::{Patch, PatchOp, Target, ids};

pub use logs::log_patches;
pub use march::march_patches;
pub use status::status_patches;

/// Patches applied once when the page is ready: an "Unknown" footer badge and
/// the log panel scrolled to its bottom.
#[must_use]
pub fn initial_patches() -> Vec<Patch> {
    let mut patches = footer_patches(None);
    patches.push(Patch::new(
        Target::Id(ids::RECENT_LOGS),
        PatchOp::ScrollToBottom,
    ));
    patches
}

/// Footer badge mirroring the main status badge. An absent or empty status
/// shows "Unknown" on a secondary badge.
#[must_use]
pub fn footer_patches(status: Option<&BotStatus>) -> Vec<Patch> {
    let (label, class) = match status {
        Some(status) if !status.as_str().is_empty() => (status.label(), status.badge_class()),
        _ => ("Unknown".to_string(), BadgeClass::Secondary),
    };
    vec![
        Patch::text(Target::Id(ids::FOOTER_STATUS), label),
        Patch::class(Target::Id(ids::FOOTER_STATUS), class.badge()),
    ]
}
