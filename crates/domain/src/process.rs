//! Bot process (instance) information and march accounting.

use serde::{Deserialize, Serialize};

use serde::Deserializer;

use crate::status::{null_as_default, whole_number};

fn default_name() -> String {
    "Bot Instance".to_string()
}

fn name_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_name))
}

/// One running bot instance owned by the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_id: String,
    #[serde(default = "default_name", deserialize_with = "name_or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "whole_number")]
    pub current_marches: u32,
    #[serde(default, deserialize_with = "whole_number")]
    pub march_limit: u32,
}

impl ProcessInfo {
    /// Build a process record with the given march counters.
    #[must_use]
    pub fn new(instance_id: impl Into<String>, current_marches: u32, march_limit: u32) -> Self {
        Self {
            instance_id: instance_id.into(),
            name: default_name(),
            current_marches,
            march_limit,
        }
    }

    /// `"{current}/{limit}"`.
    #[must_use]
    pub fn march_ratio(&self) -> String {
        format!("{}/{}", self.current_marches, self.march_limit)
    }
}

/// March counters summed across all instances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarchTotals {
    pub current: u64,
    pub limit: u64,
}

impl MarchTotals {
    /// Sum `current_marches` and `march_limit` over `processes`.
    #[must_use]
    pub fn sum(processes: &[ProcessInfo]) -> Self {
        processes.iter().fold(Self::default(), |acc, process| Self {
            current: acc.current + u64::from(process.current_marches),
            limit: acc.limit + u64::from(process.march_limit),
        })
    }

    /// `"{current}/{limit}"`.
    #[must_use]
    pub fn ratio(&self) -> String {
        format!("{}/{}", self.current, self.limit)
    }
}
