//! jade_core - Stat aggregation and damage calculation library for jade loadouts
//!
//! This library provides:
//! - JadeConfig / JadeStat: per-jade stat rolls with the fusion stacking rule
//! - JadeBonuses: loadout-wide aggregated bonus totals
//! - DamageCalculator: the layered damage derivation for bosses and regular monsters
//! - TraceLog: the ordered, typed derivation log rendered for the display layer

pub mod calc;
pub mod config;
pub mod jade;
pub mod trace;
pub mod types;

// Re-export core types for convenience
pub use calc::{CalculationResult, CharacterState, DamageCalculator};
pub use config::{ConfigError, EngineConfig, HeroLevelBonus, TalentValues};
pub use jade::{calculate_jade_bonuses, JadeBonuses, JadeConfig, JadeStat, SLOTS_PER_JADE};
pub use trace::{TraceEntry, TraceKind, TraceLog};
pub use types::{StatKind, TargetClass};
