//! Engine constants configuration
//!
//! Every coefficient the damage pipeline consumes lives here, so the engine
//! itself stays free of tuning values and tests can inject their own tables.

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable constants for the damage engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Attack before consciousness and bonuses
    #[serde(default = "default_base_attack")]
    pub base_attack: f64,
    /// Multiplier applied to the ice blast damage
    #[serde(default = "default_explosion_coef")]
    pub explosion_coef: f64,
    /// Multiplier applied to the flower blast damage
    #[serde(default = "default_flower_explosion_coef")]
    pub flower_explosion_coef: f64,
    /// First hit of the triple-blast jade, relative to a plain blast
    #[serde(default = "default_first_blast_multiplier")]
    pub first_blast_multiplier: f64,
    /// Second and third hits of the triple-blast jade
    #[serde(default = "default_other_blast_multiplier")]
    pub other_blast_multiplier: f64,
    /// Jades in a full loadout
    #[serde(default = "default_jade_count")]
    pub jade_count: usize,
    #[serde(default)]
    pub default_consciousness: f64,
    #[serde(default = "default_hero_level")]
    pub default_hero_level: u32,
    #[serde(default)]
    pub talents: TalentValues,
    /// Attack bonus step table; every cleared threshold adds its bonus
    #[serde(default = "default_hero_level_bonuses")]
    pub hero_level_bonuses: Vec<HeroLevelBonus>,
}

/// One step of the hero-level attack bonus table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeroLevelBonus {
    pub level: u32,
    pub bonus: f64,
}

/// Per-talent contribution values
///
/// The first nine are additive fractions; `tessa_f` and
/// `consciousness_match` are whole multipliers applied to the attack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentValues {
    #[serde(default = "default_untouchable_talent")]
    pub untouchable_talent: f64,
    #[serde(default = "default_power")]
    pub power: f64,
    #[serde(default = "default_ice_root")]
    pub ice_root: f64,
    #[serde(default = "default_ice_flash")]
    pub ice_flash: f64,
    #[serde(default = "default_aroma_aura")]
    pub aroma_aura: f64,
    #[serde(default = "default_frost_seal")]
    pub frost_seal: f64,
    #[serde(default = "default_tundra_power")]
    pub tundra_power: f64,
    #[serde(default = "default_frostbound_lotus")]
    pub frostbound_lotus: f64,
    #[serde(default = "default_frost_bloom")]
    pub frost_bloom: f64,
    #[serde(default = "default_tessa_f")]
    pub tessa_f: f64,
    #[serde(default = "default_consciousness_match")]
    pub consciousness_match: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            base_attack: default_base_attack(),
            explosion_coef: default_explosion_coef(),
            flower_explosion_coef: default_flower_explosion_coef(),
            first_blast_multiplier: default_first_blast_multiplier(),
            other_blast_multiplier: default_other_blast_multiplier(),
            jade_count: default_jade_count(),
            default_consciousness: 0.0,
            default_hero_level: default_hero_level(),
            talents: TalentValues::default(),
            hero_level_bonuses: default_hero_level_bonuses(),
        }
    }
}

impl Default for TalentValues {
    fn default() -> Self {
        TalentValues {
            untouchable_talent: default_untouchable_talent(),
            power: default_power(),
            ice_root: default_ice_root(),
            ice_flash: default_ice_flash(),
            aroma_aura: default_aroma_aura(),
            frost_seal: default_frost_seal(),
            tundra_power: default_tundra_power(),
            frostbound_lotus: default_frostbound_lotus(),
            frost_bloom: default_frost_bloom(),
            tessa_f: default_tessa_f(),
            consciousness_match: default_consciousness_match(),
        }
    }
}

impl EngineConfig {
    /// Attack bonus granted by hero level: the sum of every threshold the
    /// level has reached, in ascending threshold order.
    pub fn hero_level_bonus(&self, hero_level: u32) -> f64 {
        let mut table = self.hero_level_bonuses.clone();
        table.sort_by_key(|step| step.level);

        let mut bonus = 0.0;
        for step in &table {
            if hero_level >= step.level {
                bonus += step.bonus;
            }
        }
        bonus
    }

    /// Reject configurations the pipeline cannot meaningfully run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jade_count == 0 {
            return Err(ConfigError::ValidationError(
                "jade_count must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("base_attack", self.base_attack),
            ("explosion_coef", self.explosion_coef),
            ("flower_explosion_coef", self.flower_explosion_coef),
            ("first_blast_multiplier", self.first_blast_multiplier),
            ("other_blast_multiplier", self.other_blast_multiplier),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

fn default_base_attack() -> f64 {
    100.0
}
fn default_explosion_coef() -> f64 {
    2.5
}
fn default_flower_explosion_coef() -> f64 {
    1.25
}
fn default_first_blast_multiplier() -> f64 {
    1.0
}
fn default_other_blast_multiplier() -> f64 {
    0.5
}
fn default_jade_count() -> usize {
    6
}
fn default_hero_level() -> u32 {
    60
}
fn default_hero_level_bonuses() -> Vec<HeroLevelBonus> {
    vec![
        HeroLevelBonus { level: 10, bonus: 0.02 },
        HeroLevelBonus { level: 20, bonus: 0.02 },
        HeroLevelBonus { level: 30, bonus: 0.02 },
        HeroLevelBonus { level: 40, bonus: 0.02 },
        HeroLevelBonus { level: 50, bonus: 0.02 },
        HeroLevelBonus { level: 60, bonus: 0.02 },
    ]
}
fn default_untouchable_talent() -> f64 {
    0.05
}
fn default_power() -> f64 {
    0.10
}
fn default_ice_root() -> f64 {
    0.30
}
fn default_ice_flash() -> f64 {
    0.20
}
fn default_aroma_aura() -> f64 {
    0.20
}
fn default_frost_seal() -> f64 {
    0.15
}
fn default_tundra_power() -> f64 {
    0.20
}
fn default_frostbound_lotus() -> f64 {
    0.25
}
fn default_frost_bloom() -> f64 {
    0.50
}
fn default_tessa_f() -> f64 {
    1.20
}
fn default_consciousness_match() -> f64 {
    1.10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = EngineConfig::default();
        assert!((config.base_attack - 100.0).abs() < f64::EPSILON);
        assert!((config.explosion_coef - 2.5).abs() < f64::EPSILON);
        assert!((config.talents.ice_root - 0.30).abs() < f64::EPSILON);
        assert_eq!(config.jade_count, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_constants() {
        let toml = r#"
base_attack = 120
explosion_coef = 2.0

[talents]
ice_root = 0.25
tessa_f = 1.15

[[hero_level_bonuses]]
level = 10
bonus = 0.03

[[hero_level_bonuses]]
level = 20
bonus = 0.03
"#;

        let config: EngineConfig = toml::from_str(toml).unwrap();
        assert!((config.base_attack - 120.0).abs() < f64::EPSILON);
        assert!((config.explosion_coef - 2.0).abs() < f64::EPSILON);
        // Omitted fields fall back to defaults
        assert!((config.flower_explosion_coef - 1.25).abs() < f64::EPSILON);
        assert!((config.talents.ice_root - 0.25).abs() < f64::EPSILON);
        assert!((config.talents.power - 0.10).abs() < f64::EPSILON);
        assert_eq!(config.hero_level_bonuses.len(), 2);
    }

    #[test]
    fn test_hero_level_bonus_steps() {
        let config = EngineConfig::default();
        assert!((config.hero_level_bonus(0) - 0.0).abs() < f64::EPSILON);
        assert!((config.hero_level_bonus(9) - 0.0).abs() < f64::EPSILON);
        assert!((config.hero_level_bonus(10) - 0.02).abs() < 1e-12);
        // Clearing a threshold adds on top of the ones below it
        assert!((config.hero_level_bonus(35) - 0.06).abs() < 1e-12);
        assert!((config.hero_level_bonus(60) - 0.12).abs() < 1e-12);
        // Levels past the last threshold gain nothing further
        assert!((config.hero_level_bonus(200) - 0.12).abs() < 1e-12);
    }

    #[test]
    fn test_hero_level_bonus_unsorted_table() {
        let mut config = EngineConfig::default();
        config.hero_level_bonuses = vec![
            HeroLevelBonus { level: 30, bonus: 0.05 },
            HeroLevelBonus { level: 10, bonus: 0.01 },
        ];
        assert!((config.hero_level_bonus(30) - 0.06).abs() < 1e-12);
        assert!((config.hero_level_bonus(10) - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_zero_jade_count() {
        let mut config = EngineConfig::default();
        config.jade_count = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_coef() {
        let mut config = EngineConfig::default();
        config.explosion_coef = f64::NAN;
        assert!(config.validate().is_err());
    }
}
