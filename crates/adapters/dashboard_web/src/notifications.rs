//! Notification banners rendered by a small leptos component.
//!
//! The stack is mounted once into `<body>`; [`LeptosNotifier`] pushes banners
//! into its signal and removes them after the configured timeout.

use botdash_app::banners::{Banner, BannerStack};
use botdash_app::config::NotificationsConfig;
use botdash_app::ports::Notifier;
use botdash_domain::notification::{NOTIFICATION_STYLE, Notification};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// [`Notifier`] backed by a leptos signal holding a [`BannerStack`].
///
/// Signals are `Copy`, so the notifier can be handed to every port owner.
#[derive(Clone, Copy)]
pub struct LeptosNotifier {
    stack: RwSignal<BannerStack>,
}

impl LeptosNotifier {
    /// Mount the banner stack into `<body>` and return its notifier.
    pub fn mount(config: &NotificationsConfig) -> Self {
        let notifier = Self {
            stack: RwSignal::new(BannerStack::new(config)),
        };
        leptos::mount::mount_to_body(move || view! { <NotificationStack notifier/> });
        notifier
    }

    /// Remove a banner immediately. Unknown ids are ignored.
    pub fn dismiss(&self, id: u32) {
        self.stack.update(|stack| {
            stack.dismiss(id);
        });
    }
}

impl Notifier for LeptosNotifier {
    fn notify(&self, notification: Notification) {
        let Some(id) = self.stack.try_update(|stack| stack.push(notification)) else {
            return;
        };
        let timeout = self.stack.with_untracked(BannerStack::timeout);
        let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);

        let notifier = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(millis).await;
            notifier.dismiss(id);
        });
    }
}

#[component]
fn NotificationStack(notifier: LeptosNotifier) -> impl IntoView {
    view! {
        <div class="botdash-notifications">
            <For
                each=move || notifier.stack.with(|stack| stack.banners().to_vec())
                key=|banner| banner.id
                children=move |banner: Banner| {
                    let id = banner.id;
                    view! {
                        <div
                            class=banner.notification.alert_classes()
                            style=NOTIFICATION_STYLE
                            role="alert"
                        >
                            {banner.notification.message}
                            <button
                                type="button"
                                class="btn-close"
                                data-bs-dismiss="alert"
                                aria-label="Close"
                                on:click=move |_| notifier.dismiss(id)
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
