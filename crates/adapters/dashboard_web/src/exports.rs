//! `window.dashboardUtils`, the helpers other page scripts call.

use botdash_domain::format;
use botdash_domain::notification::Severity;
use botdash_domain::status::BadgeClass;
use leptos::task::spawn_local;
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use web_sys::Window;
use web_sys::js_sys::{Object, Reflect};

use crate::with_controller;

/// Install `window.dashboardUtils`.
///
/// # Errors
///
/// Returns the exception raised while defining the properties.
pub fn install(window: &Window) -> Result<(), JsValue> {
    let utils = Object::new();
    define(&utils, "updateBotStatus", Closure::<dyn Fn()>::new(update_bot_status))?;
    define(&utils, "updateRecentLogs", Closure::<dyn Fn()>::new(update_recent_logs))?;
    define(
        &utils,
        "showNotification",
        Closure::<dyn Fn(JsValue, JsValue)>::new(show_notification),
    )?;
    define(
        &utils,
        "formatNumber",
        Closure::<dyn Fn(JsValue) -> String>::new(format_number),
    )?;
    define(
        &utils,
        "getStatusBadgeClass",
        Closure::<dyn Fn(JsValue) -> String>::new(status_badge_class),
    )?;
    Reflect::set(window, &JsValue::from_str("dashboardUtils"), &utils)?;
    Ok(())
}

fn define<F: ?Sized + WasmClosure>(
    target: &Object,
    name: &str,
    closure: Closure<F>,
) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(name), closure.as_ref())?;
    // Page-lifetime export.
    closure.forget();
    Ok(())
}

fn update_bot_status() {
    with_controller(|controller| {
        spawn_local(async move {
            let _ = controller.refresh_status().await;
        });
    });
}

fn update_recent_logs() {
    with_controller(|controller| {
        spawn_local(async move {
            let _ = controller.refresh_logs().await;
        });
    });
}

#[allow(clippy::needless_pass_by_value)]
fn show_notification(message: JsValue, kind: JsValue) {
    let message = js_text(&message);
    let severity = kind
        .as_string()
        .map_or(Severity::Info, |kind| Severity::parse(&kind));
    with_controller(|controller| controller.show_notification(message, severity));
}

#[allow(clippy::needless_pass_by_value)]
fn format_number(value: JsValue) -> String {
    format::format_number(value.as_f64().unwrap_or(f64::NAN))
}

#[allow(clippy::needless_pass_by_value)]
fn status_badge_class(status: JsValue) -> String {
    BadgeClass::for_status(&status.as_string().unwrap_or_default())
        .as_str()
        .to_string()
}

fn js_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
