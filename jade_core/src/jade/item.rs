//! JadeConfig - one configured jade and its effective stat contribution

use crate::jade::slot::JadeStat;
use crate::types::StatKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stat rolls carried by every jade
pub const SLOTS_PER_JADE: usize = 4;

/// One jade in the loadout
///
/// Jades are always active; only the individual rolls can be disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JadeConfig {
    /// Position of this jade in the loadout
    pub index: usize,
    #[serde(default = "default_slots")]
    pub stats: Vec<JadeStat>,
}

impl JadeConfig {
    /// Create a jade with its full set of empty rolls
    pub fn new(index: usize) -> Self {
        JadeConfig {
            index,
            stats: default_slots(),
        }
    }

    /// Effective per-kind contribution of this jade, fusion applied
    ///
    /// Base rolls of the same kind sum before fusion; the summed fusion
    /// rolls then scale every base kind on this jade by `1 + fusion_total`.
    /// A jade carrying only fusion rolls contributes nothing.
    pub fn effective_stats(&self) -> HashMap<StatKind, f64> {
        let mut base_stats: HashMap<StatKind, f64> = HashMap::new();
        let mut fusion_total = 0.0;

        for stat in &self.stats {
            if stat.is_empty() {
                continue;
            }

            if stat.is_fusion() {
                fusion_total += stat.value_fraction();
            } else {
                *base_stats.entry(stat.kind.clone()).or_insert(0.0) += stat.value_fraction();
            }
        }

        let fusion_multiplier = 1.0 + fusion_total;
        base_stats
            .into_iter()
            .map(|(kind, value)| (kind, value * fusion_multiplier))
            .collect()
    }

    /// Reset every roll to its default state
    pub fn reset(&mut self) {
        for stat in &mut self.stats {
            stat.reset();
        }
    }
}

fn default_slots() -> Vec<JadeStat> {
    (0..SLOTS_PER_JADE).map(|_| JadeStat::new()).collect()
}
