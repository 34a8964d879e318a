//! CharacterState - the per-call input snapshot the pipeline reads

use crate::config::EngineConfig;
use serde::{Deserialize, Serialize};

/// Character inputs for one calculation run
///
/// Owned and mutated by the caller between runs; the pipeline only reads
/// it. Flags are plain booleans — whatever collected them has already
/// validated the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterState {
    /// Raw consciousness stat; feeds the attack as `consciousness / 10`
    #[serde(default)]
    pub consciousness: f64,
    #[serde(default)]
    pub hero_level: u32,

    // === Base talents, active in and out of battle ===
    #[serde(default)]
    pub untouchable_talent: bool,
    #[serde(default)]
    pub power: bool,
    #[serde(default)]
    pub ice_root: bool,
    #[serde(default)]
    pub ice_flash: bool,

    // === Combat talents, active only in battle ===
    #[serde(default)]
    pub aroma_aura: bool,
    #[serde(default)]
    pub frost_bloom: bool,
    #[serde(default)]
    pub frost_seal: bool,
    #[serde(default)]
    pub tundra_power: bool,
    #[serde(default)]
    pub frostbound_lotus: bool,
    #[serde(default)]
    pub tessa_f: bool,
    /// Consciousness level matches the stage requirement
    #[serde(default)]
    pub consciousness_match: bool,
}

impl CharacterState {
    /// All stats zero, every talent off
    pub fn new() -> Self {
        CharacterState::default()
    }

    /// Seed consciousness and hero level from the configured defaults
    pub fn from_defaults(config: &EngineConfig) -> Self {
        CharacterState {
            consciousness: config.default_consciousness,
            hero_level: config.default_hero_level,
            ..CharacterState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_defaults_seeds_config_values() {
        let mut config = EngineConfig::default();
        config.default_consciousness = 1500.0;
        config.default_hero_level = 42;

        let character = CharacterState::from_defaults(&config);
        assert!((character.consciousness - 1500.0).abs() < f64::EPSILON);
        assert_eq!(character.hero_level, 42);
        assert!(!character.tessa_f);
    }
}
