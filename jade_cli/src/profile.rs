//! Loadout profile - the on-disk input this front end collects for the engine

use jade_core::{CharacterState, EngineConfig, JadeConfig};
use serde::{Deserialize, Serialize};

/// Character inputs and jade loadout as read from a profile file
///
/// Consciousness and hero level stay raw text here, exactly as a user would
/// type them; anything unparsable falls back to the configured defaults
/// before the engine ever sees it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub consciousness: Option<String>,
    #[serde(default)]
    pub hero_level: Option<String>,
    #[serde(default)]
    pub talents: ProfileTalents,
    #[serde(default)]
    pub jades: Vec<JadeConfig>,
}

/// Talent flags as toggled in the profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileTalents {
    #[serde(default)]
    pub untouchable_talent: bool,
    #[serde(default)]
    pub power: bool,
    #[serde(default)]
    pub ice_root: bool,
    #[serde(default)]
    pub ice_flash: bool,
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
    #[serde(default)]
    pub consciousness_match: bool,
}

impl Profile {
    /// Build the engine's input snapshot, substituting configured defaults
    /// for missing or unparsable numeric text
    pub fn character(&self, config: &EngineConfig) -> CharacterState {
        let talents = &self.talents;
        CharacterState {
            consciousness: parse_or(&self.consciousness, config.default_consciousness),
            hero_level: parse_or(&self.hero_level, config.default_hero_level),
            untouchable_talent: talents.untouchable_talent,
            power: talents.power,
            ice_root: talents.ice_root,
            ice_flash: talents.ice_flash,
            aroma_aura: talents.aroma_aura,
            frost_bloom: talents.frost_bloom,
            frost_seal: talents.frost_seal,
            tundra_power: talents.tundra_power,
            frostbound_lotus: talents.frostbound_lotus,
            tessa_f: talents.tessa_f,
            consciousness_match: talents.consciousness_match,
        }
    }
}

fn parse_or<T: std::str::FromStr>(text: &Option<String>, fallback: T) -> T {
    text.as_deref()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(fallback)
}
