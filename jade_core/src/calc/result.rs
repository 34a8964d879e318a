//! CalculationResult - the immutable snapshot of one pipeline run

use crate::trace::TraceEntry;
use crate::types::TargetClass;
use serde::{Deserialize, Serialize};

/// Every figure produced by one calculation run
///
/// Field names are the stable cross-language contract the display layer
/// consumes; `calculation_steps` is the newline-joined rendering of `trace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    // === Character figures ===
    pub base_attack: f64,
    pub base_ice_blast_percent: f64,
    pub final_attack: f64,
    pub final_ice_blast_percent: f64,
    pub physical_damage: f64,

    // === Boss figures ===
    pub boss_attack_bonus: f64,
    pub boss_ice_blast_percent: f64,
    pub boss_damage: f64,
    pub boss_flower_damage: f64,
    pub jade_first_blast_boss: i64,
    pub jade_second_blast_boss: i64,
    pub jade_third_blast_boss: i64,
    pub jade_total_damage_boss: i64,

    // === Monster figures ===
    pub monster_attack_bonus: f64,
    pub monster_ice_blast_percent: f64,
    pub monster_damage: f64,
    pub monster_flower_damage: f64,
    pub jade_first_blast_monster: i64,
    pub jade_second_blast_monster: i64,
    pub jade_third_blast_monster: i64,
    pub jade_total_damage_monster: i64,

    /// Full derivation log as display text
    pub calculation_steps: String,
    /// The same log as typed entries, in computation order
    pub trace: Vec<TraceEntry>,
}

impl CalculationResult {
    /// Ice blast percent against the given target class
    pub fn ice_blast_percent(&self, class: TargetClass) -> f64 {
        match class {
            TargetClass::Boss => self.boss_ice_blast_percent,
            TargetClass::Monster => self.monster_ice_blast_percent,
        }
    }

    /// Triple-blast hits and their total against the given target class
    pub fn burst(&self, class: TargetClass) -> (i64, i64, i64, i64) {
        match class {
            TargetClass::Boss => (
                self.jade_first_blast_boss,
                self.jade_second_blast_boss,
                self.jade_third_blast_boss,
                self.jade_total_damage_boss,
            ),
            TargetClass::Monster => (
                self.jade_first_blast_monster,
                self.jade_second_blast_monster,
                self.jade_third_blast_monster,
                self.jade_total_damage_monster,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_selects_target_class() {
        let result = CalculationResult {
            jade_first_blast_boss: 10,
            jade_second_blast_boss: 5,
            jade_third_blast_boss: 5,
            jade_total_damage_boss: 20,
            jade_first_blast_monster: 8,
            jade_second_blast_monster: 4,
            jade_third_blast_monster: 4,
            jade_total_damage_monster: 16,
            ..CalculationResult::default()
        };

        assert_eq!(result.burst(TargetClass::Boss), (10, 5, 5, 20));
        assert_eq!(result.burst(TargetClass::Monster), (8, 4, 4, 16));
    }
}
