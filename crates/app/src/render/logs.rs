//! Log panel renderer.

use botdash_domain::log::{LogBatch, LogLevel};

use crate::patch::{LogLine, Patch, PatchOp, Target, ids};

/// Class of the wrapper element around each log line.
pub const ENTRY_CLASS: &str = "log-entry mb-1";

/// Base class of the text element inside each entry.
const LINE_CLASS: &str = "text-muted font-monospace";

/// Replace the log panel with at most `max_entries` lines, in received order,
/// then scroll it to the bottom. An empty batch renders nothing.
#[must_use]
pub fn log_patches(batch: &LogBatch, max_entries: usize) -> Vec<Patch> {
    if batch.is_empty() {
        return Vec::new();
    }
    let lines = batch
        .logs
        .iter()
        .take(max_entries)
        .map(|raw| log_line(raw))
        .collect();
    vec![
        Patch::new(Target::Id(ids::RECENT_LOGS), PatchOp::ReplaceLogLines(lines)),
        Patch::new(Target::Id(ids::RECENT_LOGS), PatchOp::ScrollToBottom),
    ]
}

/// Render one raw line: trimmed text, color class from its severity marker.
#[must_use]
pub fn log_line(raw: &str) -> LogLine {
    let class = match LogLevel::detect(raw) {
        Some(level) => format!("{LINE_CLASS} {}", level.css_class()),
        None => LINE_CLASS.to_string(),
    };
    LogLine {
        text: raw.trim().to_string(),
        class,
    }
}
