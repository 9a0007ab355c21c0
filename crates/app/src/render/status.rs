//! Status snapshot renderer.

use botdash_domain::format::{format_count, format_number};
use botdash_domain::game_state::{GameState, ResourceKind};
use botdash_domain::status::StatusSnapshot;

use crate::patch::{Guard, Patch, Target, ids};
use crate::render::{footer_patches, march_patches};

/// Tags a resource counter may use; other matches (e.g. an `<input>`) are left alone.
const RESOURCE_TAGS: &[&str] = &["SPAN", "DIV"];

/// Class shared by the power level display and unrelated informational text.
const POWER_SELECTOR: &str = ".text-info";

/// Render a full status refresh, in application order.
#[must_use]
pub fn status_patches(snapshot: &StatusSnapshot) -> Vec<Patch> {
    let mut patches = vec![
        Patch::text(Target::Id(ids::STATUS_INDICATOR), snapshot.status.label()),
        Patch::class(
            Target::Id(ids::STATUS_INDICATOR),
            snapshot.status.badge_class().badge(),
        ),
        Patch::text(Target::Id(ids::UPTIME_DISPLAY), snapshot.uptime_label()),
        Patch::text(
            Target::Id(ids::ACTIONS_DISPLAY),
            snapshot.actions_completed.to_string(),
        ),
    ];
    if let Some(game_state) = &snapshot.game_state {
        patches.extend(game_state_patches(game_state));
    }
    patches.extend(march_patches(&snapshot.user_processes));
    patches.extend(footer_patches(Some(&snapshot.status)));
    patches
}

/// Resource counters and the power level.
///
/// The power level only replaces the first `.text-info` element when that
/// element already shows a comma-grouped number; the class is shared with
/// other text on the page and this is the only tell-apart.
#[must_use]
pub fn game_state_patches(game_state: &GameState) -> Vec<Patch> {
    let mut patches = Vec::new();
    if let Some(resources) = &game_state.resources {
        patches.extend(resources.iter().map(|(kind, amount)| {
            Patch::text(Target::all(resource_selector(kind)), format_count(amount))
                .guarded(Guard::TagIn(RESOURCE_TAGS))
        }));
    }
    if let Some(power) = game_state.displayable_power() {
        patches.push(
            Patch::text(Target::first(POWER_SELECTOR), format_number(power))
                .guarded(Guard::TextContains(',')),
        );
    }
    patches
}

fn resource_selector(kind: ResourceKind) -> String {
    format!("[data-resource=\"{kind}\"], .{kind}-display")
}

#[cfg(test)]
mod tests {
    use botdash_domain::game_state::Resources;
    use botdash_domain::process::ProcessInfo;
    use botdash_domain::status::BotStatus;

    use super::*;
    use crate::patch::PatchOp;

    fn snapshot() -> StatusSnapshot {
        StatusSnapshot {
            status: BotStatus::Running,
            uptime: 5400,
            actions_completed: 42,
            game_state: None,
            user_processes: Vec::new(),
        }
    }

    fn text_for(patches: &[Patch], target: &Target) -> Option<String> {
        patches.iter().find_map(|patch| match (&patch.target, &patch.op) {
            (t, PatchOp::Text(text)) if t == target => Some(text.clone()),
            _ => None,
        })
    }

    #[test]
    fn should_render_badge_uptime_and_actions() {
        let patches = status_patches(&snapshot());
        assert_eq!(
            &patches[..4],
            &[
                Patch::text(Target::Id(ids::STATUS_INDICATOR), "Running"),
                Patch::class(Target::Id(ids::STATUS_INDICATOR), "badge bg-success"),
                Patch::text(Target::Id(ids::UPTIME_DISPLAY), "1h 30m"),
                Patch::text(Target::Id(ids::ACTIONS_DISPLAY), "42"),
            ]
        );
    }

    #[test]
    fn should_end_with_footer_badge() {
        let mut snap = snapshot();
        snap.status = BotStatus::Stopped;
        let patches = status_patches(&snap);
        let footer = &patches[patches.len() - 2..];
        assert_eq!(
            footer,
            &[
                Patch::text(Target::Id(ids::FOOTER_STATUS), "Stopped"),
                Patch::class(Target::Id(ids::FOOTER_STATUS), "badge bg-secondary"),
            ]
        );
    }

    #[test]
    fn should_skip_game_state_when_absent() {
        let patches = status_patches(&snapshot());
        assert_eq!(patches.len(), 6);
    }

    #[test]
    fn should_render_resources_in_order_for_span_and_div_only() {
        let game_state = GameState {
            resources: Some(Resources {
                wood: 1500,
                stone: 42,
                gold: 2_500_000,
                food: 0,
            }),
            power_level: None,
        };
        let patches = game_state_patches(&game_state);
        assert_eq!(patches.len(), 4);
        assert_eq!(
            patches[0],
            Patch::text(
                Target::all("[data-resource=\"wood\"], .wood-display"),
                "1.5K"
            )
            .guarded(Guard::TagIn(RESOURCE_TAGS))
        );
        assert_eq!(
            text_for(&patches, &Target::all("[data-resource=\"stone\"], .stone-display")),
            Some("42".to_string())
        );
        assert_eq!(
            text_for(&patches, &Target::all("[data-resource=\"gold\"], .gold-display")),
            Some("2.5M".to_string())
        );
        assert_eq!(
            text_for(&patches, &Target::all("[data-resource=\"food\"], .food-display")),
            Some("0".to_string())
        );
    }

    // Known quirk: the power level only lands on a `.text-info` element that
    // already contains a comma.
    #[test]
    fn should_guard_power_level_on_existing_comma() {
        let game_state = GameState {
            resources: None,
            power_level: Some(1_234_567.0),
        };
        let patches = game_state_patches(&game_state);
        assert_eq!(
            patches,
            vec![Patch::text(Target::first(".text-info"), "1.2M").guarded(Guard::TextContains(','))]
        );
        assert!(patches[0].guard.allows("SPAN", "1,100,000"));
        assert!(!patches[0].guard.allows("SPAN", "Connected"));
    }

    #[test]
    fn should_skip_zero_power_level() {
        let game_state = GameState {
            resources: None,
            power_level: Some(0.0),
        };
        assert!(game_state_patches(&game_state).is_empty());
    }

    #[test]
    fn should_include_march_patches_between_game_state_and_footer() {
        let mut snap = snapshot();
        snap.user_processes = vec![ProcessInfo::new("a1", 2, 5)];
        let patches = status_patches(&snap);
        assert_eq!(
            text_for(
                &patches,
                &Target::all("[data-instance=\"a1\"] .march-info, .march-status-0")
            ),
            Some("2/5 marches".to_string())
        );
        assert_eq!(
            patches.last().map(|p| &p.target),
            Some(&Target::Id(ids::FOOTER_STATUS))
        );
    }
}
