//! Dashboard configuration read from `<meta name="botdash:…">` tags.

use botdash_app::config::{ConfigError, DashboardConfig};
use web_sys::Document;

/// Defaults overridden by whatever `botdash:*` meta tags the page carries.
///
/// # Errors
///
/// Returns [`ConfigError`] when the overrides produce an unusable config.
pub fn load(document: &Document) -> Result<DashboardConfig, ConfigError> {
    DashboardConfig::default().with_overrides(|key| meta_content(document, key))
}

fn meta_content(document: &Document, name: &str) -> Option<String> {
    document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}
