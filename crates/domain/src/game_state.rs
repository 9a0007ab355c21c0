//! Game state: resources and power level reported for the running bot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::status::whole_number;

/// In-game state attached to a status snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub resources: Option<Resources>,
    pub power_level: Option<f64>,
}

impl GameState {
    /// Power level worth displaying; absent and zero are both skipped.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn displayable_power(&self) -> Option<f64> {
        self.power_level.filter(|power| *power != 0.0 && !power.is_nan())
    }
}

/// Resource stockpile. Missing members count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    #[serde(deserialize_with = "whole_number")]
    pub wood: u64,
    #[serde(deserialize_with = "whole_number")]
    pub stone: u64,
    #[serde(deserialize_with = "whole_number")]
    pub gold: u64,
    #[serde(deserialize_with = "whole_number")]
    pub food: u64,
}

impl Resources {
    /// Amount held of a single resource.
    #[must_use]
    pub fn amount(&self, kind: ResourceKind) -> u64 {
        match kind {
            ResourceKind::Wood => self.wood,
            ResourceKind::Stone => self.stone,
            ResourceKind::Gold => self.gold,
            ResourceKind::Food => self.food,
        }
    }

    /// Iterate `(kind, amount)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, u64)> + '_ {
        ResourceKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.amount(kind)))
    }
}

/// The four tracked resource types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Wood,
    Stone,
    Gold,
    Food,
}

impl ResourceKind {
    /// All kinds in display order.
    pub const ALL: [Self; 4] = [Self::Wood, Self::Stone, Self::Gold, Self::Food];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Stone => "stone",
            Self::Gold => "gold",
            Self::Food => "food",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
