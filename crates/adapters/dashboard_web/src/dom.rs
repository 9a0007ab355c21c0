//! [`View`] implementation over the live document.

use botdash_app::error::ViewError;
use botdash_app::patch::{Guard, LogLine, Patch, PatchOp, Target};
use botdash_app::ports::View;
use botdash_app::render::logs::ENTRY_CLASS;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

/// Applies patches with `getElementById` / `querySelector(All)`.
pub struct DomView {
    document: Document,
}

impl DomView {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn resolve(&self, target: &Target) -> Result<Vec<Element>, ViewError> {
        match target {
            Target::Id(id) => Ok(self.document.get_element_by_id(id).into_iter().collect()),
            Target::First(selector) => self
                .document
                .query_selector(selector)
                .map(|found| found.into_iter().collect())
                .map_err(|err| invalid_selector(selector, &err)),
            Target::All(selector) => {
                let nodes = self
                    .document
                    .query_selector_all(selector)
                    .map_err(|err| invalid_selector(selector, &err))?;
                Ok((0..nodes.length())
                    .filter_map(|index| nodes.item(index))
                    .filter_map(|node| node.dyn_into::<Element>().ok())
                    .collect())
            }
        }
    }

    fn apply_op(&self, element: &Element, op: &PatchOp) -> Result<(), ViewError> {
        match op {
            PatchOp::Text(text) => element.set_text_content(Some(text)),
            PatchOp::Class(class) => element.set_class_name(class),
            PatchOp::ReplaceLogLines(lines) => {
                element.set_inner_html("");
                for line in lines {
                    let entry = self.log_entry(line)?;
                    element.append_child(&entry).map_err(dom_error)?;
                }
            }
            PatchOp::ScrollToBottom => element.set_scroll_top(element.scroll_height()),
        }
        Ok(())
    }

    /// `<div class="log-entry mb-1"><small class="…">text</small></div>`
    fn log_entry(&self, line: &LogLine) -> Result<Element, ViewError> {
        let entry = self.document.create_element("div").map_err(dom_error)?;
        entry.set_class_name(ENTRY_CLASS);
        let content = self.document.create_element("small").map_err(dom_error)?;
        content.set_class_name(&line.class);
        content.set_text_content(Some(&line.text));
        entry.append_child(&content).map_err(dom_error)?;
        Ok(entry)
    }
}

impl View for DomView {
    fn apply(&self, patch: &Patch) -> Result<usize, ViewError> {
        let mut touched = 0;
        for element in self.resolve(&patch.target)? {
            let text = match patch.guard {
                Guard::TextContains(_) => element.text_content().unwrap_or_default(),
                Guard::Always | Guard::TagIn(_) => String::new(),
            };
            if !patch.guard.allows(&element.tag_name(), &text) {
                continue;
            }
            self.apply_op(&element, &patch.op)?;
            touched += 1;
        }
        Ok(touched)
    }
}

fn invalid_selector(selector: &str, err: &JsValue) -> ViewError {
    ViewError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{err:?}"),
    }
}

#[allow(clippy::needless_pass_by_value)]
fn dom_error(err: JsValue) -> ViewError {
    ViewError::Dom(format!("{err:?}"))
}
