//! Core types specific to the jade damage engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a single stat roll on a jade
///
/// The configuring surface only offers the named variants, but the
/// aggregator accumulates any kind it encounters: a label it does not
/// recognize survives as [`StatKind::Other`] and surfaces verbatim in the
/// bonus totals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatKind {
    Empty,
    Attack,
    IceBlast,
    Fusion,
    AttackVsBoss,
    AttackVsMonster,
    /// Any kind the configuring surface never offered
    Other(String),
}

impl StatKind {
    /// Human-readable label, as shown by the configuring surface
    pub fn label(&self) -> &str {
        match self {
            StatKind::Empty => "Пусто",
            StatKind::Attack => "Атака",
            StatKind::IceBlast => "Лед. взрыв",
            StatKind::Fusion => "Слияние",
            StatKind::AttackVsBoss => "Атака по боссу",
            StatKind::AttackVsMonster => "Атака по монстрам",
            StatKind::Other(name) => name,
        }
    }

    /// Kinds offered for selection on a jade slot
    pub fn selectable() -> &'static [StatKind] {
        &[
            StatKind::Empty,
            StatKind::Attack,
            StatKind::IceBlast,
            StatKind::Fusion,
            StatKind::AttackVsBoss,
            StatKind::AttackVsMonster,
        ]
    }
}

impl Default for StatKind {
    fn default() -> Self {
        StatKind::Empty
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for StatKind {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Пусто" => StatKind::Empty,
            "Атака" => StatKind::Attack,
            "Лед. взрыв" => StatKind::IceBlast,
            "Слияние" => StatKind::Fusion,
            "Атака по боссу" => StatKind::AttackVsBoss,
            "Атака по монстрам" => StatKind::AttackVsMonster,
            _ => StatKind::Other(label),
        }
    }
}

impl From<StatKind> for String {
    fn from(kind: StatKind) -> Self {
        kind.label().to_string()
    }
}

/// Class of enemy a damage figure is computed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetClass {
    Boss,
    Monster,
}

impl TargetClass {
    /// Both target classes, in derivation order
    pub fn all() -> &'static [TargetClass] {
        &[TargetClass::Boss, TargetClass::Monster]
    }

    /// Jade bonus kind that feeds this class's attack bonus
    pub fn bonus_kind(&self) -> StatKind {
        match self {
            TargetClass::Boss => StatKind::AttackVsBoss,
            TargetClass::Monster => StatKind::AttackVsMonster,
        }
    }

    /// Upper-case fragment used in the section heading of the trace
    pub fn heading_label(&self) -> &'static str {
        match self {
            TargetClass::Boss => "БОССАМ",
            TargetClass::Monster => "ОБЫЧНЫМ МОНСТРАМ",
        }
    }

    /// Lower-case fragment used in per-class trace lines
    pub fn trace_label(&self) -> &'static str {
        match self {
            TargetClass::Boss => "боссам",
            TargetClass::Monster => "монстрам",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_round_trip() {
        for kind in StatKind::selectable() {
            let back = StatKind::from(kind.label().to_string());
            assert_eq!(&back, kind);
        }
    }

    #[test]
    fn test_unknown_label_passes_through() {
        let kind = StatKind::from("Крит. урон".to_string());
        assert_eq!(kind, StatKind::Other("Крит. урон".to_string()));
        assert_eq!(kind.label(), "Крит. урон");
    }

    #[test]
    fn test_target_class_bonus_kinds() {
        assert_eq!(TargetClass::Boss.bonus_kind(), StatKind::AttackVsBoss);
        assert_eq!(TargetClass::Monster.bonus_kind(), StatKind::AttackVsMonster);
    }
}
