//! March counters: per instance, for the first instance, and aggregated into
//! the notification panels.

use botdash_domain::process::{MarchTotals, ProcessInfo};

use crate::patch::{Patch, Target, css_string};

/// Containers holding the aggregate march counters.
const PANELS: [&str; 2] = [".notification-panel", ".bot-status-panel"];

/// Render all march patches. An empty process list renders nothing, so the
/// counters already on screen stay as they are.
#[must_use]
pub fn march_patches(processes: &[ProcessInfo]) -> Vec<Patch> {
    let Some(first) = processes.first() else {
        return Vec::new();
    };

    let mut patches: Vec<Patch> = processes
        .iter()
        .enumerate()
        .map(|(index, process)| {
            Patch::text(
                Target::all(instance_selector(&process.instance_id, index)),
                format!("{} marches", process.march_ratio()),
            )
        })
        .collect();

    patches.extend([
        Patch::text(
            Target::all(".current-marches, [data-march-current]"),
            first.current_marches.to_string(),
        ),
        Patch::text(
            Target::all(".march-limit, [data-march-limit]"),
            first.march_limit.to_string(),
        ),
        Patch::text(
            Target::all(".march-status-text, [data-march-status-text]"),
            first.march_ratio(),
        ),
    ]);

    patches.extend(panel_patches(MarchTotals::sum(processes)));
    patches
}

/// Aggregate counters inside the panels. An element shows one representation
/// only, chosen by its first marker: `.march-count`, then `.march-status`,
/// then `[data-march-info]`.
#[must_use]
pub fn panel_patches(totals: MarchTotals) -> Vec<Patch> {
    vec![
        Patch::text(
            Target::all(within_panels(".march-count")),
            totals.current.to_string(),
        ),
        Patch::text(
            Target::all(within_panels(".march-status:not(.march-count)")),
            totals.ratio(),
        ),
        Patch::text(
            Target::all(within_panels(
                "[data-march-info]:not(.march-count):not(.march-status)",
            )),
            format!("Marches: {}", totals.ratio()),
        ),
    ]
}

fn instance_selector(instance_id: &str, index: usize) -> String {
    format!(
        "[data-instance={}] .march-info, .march-status-{index}",
        css_string(instance_id)
    )
}

fn within_panels(inner: &str) -> String {
    PANELS
        .iter()
        .map(|panel| format!("{panel} {inner}"))
        .collect::<Vec<_>>()
        .join(", ")
}
