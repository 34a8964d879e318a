//! JadeBonuses - loadout-wide aggregated bonus totals

use crate::jade::item::JadeConfig;
use crate::types::StatKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Accumulated bonus fractions per stat kind across the whole loadout
///
/// The four well-known kinds are always present, so pipeline lookups never
/// miss; any other kind encountered on a jade is carried under its own name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JadeBonuses {
    totals: HashMap<StatKind, f64>,
}

impl JadeBonuses {
    /// Create totals with the well-known kinds at zero
    pub fn new() -> Self {
        let mut totals = HashMap::new();
        totals.insert(StatKind::Attack, 0.0);
        totals.insert(StatKind::IceBlast, 0.0);
        totals.insert(StatKind::AttackVsBoss, 0.0);
        totals.insert(StatKind::AttackVsMonster, 0.0);
        JadeBonuses { totals }
    }

    /// Accumulated fraction for a kind; unknown kinds read as zero
    pub fn get(&self, kind: &StatKind) -> f64 {
        self.totals.get(kind).copied().unwrap_or(0.0)
    }

    /// Add a contribution to a kind's total
    pub fn add(&mut self, kind: StatKind, value: f64) {
        *self.totals.entry(kind).or_insert(0.0) += value;
    }

    pub fn attack(&self) -> f64 {
        self.get(&StatKind::Attack)
    }

    pub fn ice_blast(&self) -> f64 {
        self.get(&StatKind::IceBlast)
    }

    pub fn attack_vs_boss(&self) -> f64 {
        self.get(&StatKind::AttackVsBoss)
    }

    pub fn attack_vs_monster(&self) -> f64 {
        self.get(&StatKind::AttackVsMonster)
    }

    /// All accumulated kinds and their totals
    pub fn iter(&self) -> impl Iterator<Item = (&StatKind, &f64)> {
        self.totals.iter()
    }
}

impl Default for JadeBonuses {
    fn default() -> Self {
        JadeBonuses::new()
    }
}

/// Sum every jade's effective contribution into one set of totals
pub fn calculate_jade_bonuses(jades: &[JadeConfig]) -> JadeBonuses {
    let mut bonuses = JadeBonuses::new();

    for jade in jades {
        for (kind, value) in jade.effective_stats() {
            bonuses.add(kind, value);
        }
    }

    bonuses
}
