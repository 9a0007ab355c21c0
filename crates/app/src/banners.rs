//! Banner stack behind the on-page notifications.
//!
//! Banners stack in arrival order without limit or deduplication. Each one is
//! removed when its close control is used or when its timeout elapses,
//! whichever comes first; the later of the two is a no-op.

use std::cell::RefCell;
use std::time::Duration;

use botdash_domain::notification::Notification;

use crate::config::NotificationsConfig;
use crate::ports::Notifier;

/// A notification currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Unique within its stack, used as the render key.
    pub id: u32,
    pub notification: Notification,
}

/// Ordered set of visible banners.
#[derive(Debug, Clone)]
pub struct BannerStack {
    banners: Vec<Banner>,
    next_id: u32,
    timeout: Duration,
}

impl BannerStack {
    pub fn new(config: &NotificationsConfig) -> Self {
        Self {
            banners: Vec::new(),
            next_id: 0,
            timeout: Duration::from_millis(u64::from(config.timeout_ms)),
        }
    }

    /// Append a banner and return its id.
    pub fn push(&mut self, notification: Notification) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.banners.push(Banner { id, notification });
        id
    }

    /// Remove a banner. Returns `false` when it was already gone.
    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.banners.len();
        self.banners.retain(|banner| banner.id != id);
        self.banners.len() != before
    }

    /// Visible banners, oldest first.
    #[must_use]
    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.banners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }

    /// How long a banner stays up unless closed earlier.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for BannerStack {
    fn default() -> Self {
        Self::new(&NotificationsConfig::default())
    }
}

/// In-memory notifier without timers; banners stay until dismissed.
impl Notifier for RefCell<BannerStack> {
    fn notify(&self, notification: Notification) {
        self.borrow_mut().push(notification);
    }
}
