//! Notifier port: shows transient banners to the user.

use botdash_domain::notification::Notification;

/// Displays notifications. Each call adds a banner; nothing is deduplicated.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<T: Notifier> Notifier for std::rc::Rc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}
