//! Submit listeners for the bot control and settings forms.

use std::rc::Rc;

use botdash_app::forms::FormInterceptor;
use botdash_app::ports::Prompt;
use botdash_domain::forms::{IntervalField, SettingsForm};
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};

use crate::notifications::LeptosNotifier;

const BOT_FORMS: &str = "form[action*=\"bot\"]";
const SETTINGS_FORM: &str = "form[action*=\"settings\"]";
const INTERVAL_INPUTS: &str = "input[name*=\"interval\"]";

type Interceptor = FormInterceptor<BrowserPrompt, LeptosNotifier>;

/// [`Prompt`] backed by `window.confirm`. A blocked dialog counts as "no".
pub struct BrowserPrompt {
    window: Window,
}

impl BrowserPrompt {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Prompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }
}

/// Keeps the submit listeners alive. Dropping it does not detach them from
/// the forms, so it lives as long as the page.
#[derive(Default)]
pub struct FormListeners {
    closures: Vec<Closure<dyn FnMut(Event)>>,
}

/// Attach the confirmation listener to every bot form and the validation
/// listener to the first settings form.
///
/// # Errors
///
/// Returns the DOM exception if a lookup or listener registration fails.
pub fn attach(document: &Document, interceptor: Interceptor) -> Result<FormListeners, JsValue> {
    let interceptor = Rc::new(interceptor);
    let mut listeners = FormListeners::default();

    let bot_forms = document.query_selector_all(BOT_FORMS)?;
    for index in 0..bot_forms.length() {
        let Some(form) = bot_forms
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlFormElement>().ok())
        else {
            continue;
        };
        let interceptor = Rc::clone(&interceptor);
        let target = form.clone();
        let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if interceptor.bot_form_submitted(&target.action()).is_cancel() {
                event.prevent_default();
            }
        });
        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        listeners.closures.push(on_submit);
    }

    if let Some(form) = document
        .query_selector(SETTINGS_FORM)?
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    {
        let target = form.clone();
        let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let settings = read_settings(&target);
            if interceptor
                .settings_submitted(&settings, is_absolute_url)
                .is_cancel()
            {
                event.prevent_default();
            }
        });
        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        listeners.closures.push(on_submit);
    }

    tracing::debug!(listeners = listeners.closures.len(), "form listeners attached");
    Ok(listeners)
}

/// Whether `raw` parses as an absolute URL.
pub fn is_absolute_url(raw: &str) -> bool {
    web_sys::Url::new(raw).is_ok()
}

fn read_settings(form: &HtmlFormElement) -> SettingsForm {
    SettingsForm {
        game_url: field_value(form, "game_url"),
        username: field_value(form, "username"),
        password: field_value(form, "password"),
        intervals: interval_fields(form),
    }
}

fn field_value(form: &HtmlFormElement, name: &str) -> Option<String> {
    form.query_selector(&format!("[name=\"{name}\"]"))
        .ok()
        .flatten()
        .map(|el| element_value(&el))
}

fn element_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        el.get_attribute("value").unwrap_or_default()
    }
}

fn interval_fields(form: &HtmlFormElement) -> Vec<IntervalField> {
    let Ok(inputs) = form.query_selector_all(INTERVAL_INPUTS) else {
        return Vec::new();
    };
    (0..inputs.length())
        .filter_map(|index| inputs.item(index))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .map(|input| IntervalField {
            name: input.name(),
            value: input.value(),
            min: input.get_attribute("min"),
            max: input.get_attribute("max"),
        })
        .collect()
}
