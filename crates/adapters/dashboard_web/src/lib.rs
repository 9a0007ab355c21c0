//! # botdash-adapter-web
//!
//! Browser adapter for the bot dashboard. Implements the `botdash-app` ports
//! against the live page and wires them together on page-ready.
//!
//! ## Ports
//! - `DashboardApi` → [`api::HttpApi`] (`gloo-net`)
//! - `View` → [`dom::DomView`] (`web-sys`)
//! - `Notifier` → [`notifications::LeptosNotifier`] (leptos component)
//! - `Prompt` → [`forms::BrowserPrompt`] (`window.confirm`)
//! - `Scheduler` → [`timers::IntervalScheduler`] (`gloo-timers`)

use std::cell::RefCell;
use std::rc::Rc;

use botdash_app::config::DashboardConfig;
use botdash_app::controller::DashboardController;
use botdash_app::forms::FormInterceptor;
use botdash_app::poller::Poller;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState, Window};

pub mod api;
pub mod dom;
pub mod exports;
pub mod forms;
pub mod logging;
pub mod notifications;
pub mod page_config;
pub mod timers;

use api::HttpApi;
use dom::DomView;
use forms::{BrowserPrompt, FormListeners};
use notifications::LeptosNotifier;
use timers::IntervalScheduler;

/// The controller over the browser ports.
pub type Controller = DashboardController<HttpApi, DomView, LeptosNotifier>;

struct Dashboard {
    controller: Rc<Controller>,
    poller: Poller<IntervalScheduler>,
    _forms: FormListeners,
}

thread_local! {
    static DASHBOARD: RefCell<Option<Dashboard>> = const { RefCell::new(None) };
}

/// Start the dashboard once the document has been parsed.
pub fn run() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        leptos::logging::error!("no window; dashboard not started");
        return;
    };
    let Some(document) = window.document() else {
        leptos::logging::error!("no document; dashboard not started");
        return;
    };

    if document.ready_state() != DocumentReadyState::Loading {
        start(&window, &document);
        return;
    }

    let target = document.clone();
    let on_ready = Closure::once(move || start(&window, &document));
    if let Err(err) = target
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        leptos::logging::error!("failed to wait for DOMContentLoaded: {err:?}");
        return;
    }
    on_ready.forget();
}

/// Wire the ports, render the initial state, start polling and attach the
/// form listeners. A second call while running does nothing.
pub fn start(window: &Window, document: &Document) {
    if DASHBOARD.with(|slot| slot.borrow().is_some()) {
        return;
    }

    let config = match page_config::load(document) {
        Ok(config) => config,
        Err(err) => {
            leptos::logging::warn!("{err}; using default dashboard config");
            DashboardConfig::default()
        }
    };
    logging::init(&config.logging.filter);

    let notifier = LeptosNotifier::mount(&config.notifications);
    let controller = Rc::new(DashboardController::new(
        HttpApi::new(&config.api),
        DomView::new(document.clone()),
        notifier,
        &config,
    ));
    if let Err(err) = controller.initialize() {
        tracing::warn!(error = %err, "initial render failed");
    }

    let mut poller = Poller::new(IntervalScheduler::new(Rc::clone(&controller)), &config);
    poller.start();

    let interceptor = FormInterceptor::new(BrowserPrompt::new(window.clone()), notifier);
    let forms = forms::attach(document, interceptor).unwrap_or_else(|err| {
        tracing::warn!(error = ?err, "failed to attach form listeners");
        FormListeners::default()
    });

    if let Err(err) = exports::install(window) {
        tracing::warn!(error = ?err, "failed to install window.dashboardUtils");
    }

    DASHBOARD.with(|slot| {
        *slot.borrow_mut() = Some(Dashboard {
            controller,
            poller,
            _forms: forms,
        });
    });
    tracing::info!(
        status_interval_secs = config.polling.status_interval_secs,
        logs_interval_secs = config.polling.logs_interval_secs,
        "dashboard started"
    );
}

/// Cancel the refresh timers. Listeners and exports stay in place.
pub fn stop() {
    DASHBOARD.with(|slot| {
        if let Some(dashboard) = slot.borrow_mut().as_mut() {
            dashboard.poller.stop();
        }
    });
}

/// Run `f` with the running controller, if any.
pub(crate) fn with_controller(f: impl FnOnce(Rc<Controller>)) {
    let controller = DASHBOARD.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|dashboard| Rc::clone(&dashboard.controller))
    });
    match controller {
        Some(controller) => f(controller),
        None => tracing::warn!("dashboard is not running"),
    }
}
