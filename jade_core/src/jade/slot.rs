//! JadeStat - one rollable stat line on a jade

use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// A single stat roll on a jade
///
/// The rolled value is kept as the raw percentage text the configuring
/// surface collected; text that does not parse as a number counts as zero
/// rather than failing the aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JadeStat {
    /// Disabled rolls contribute nothing
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub kind: StatKind,
    /// Raw percentage text, e.g. "4.5" for 4.5%
    #[serde(default = "default_value")]
    pub value: String,
}

impl JadeStat {
    /// Create an enabled, empty roll with a zero value
    pub fn new() -> Self {
        JadeStat {
            enabled: default_enabled(),
            kind: StatKind::default(),
            value: default_value(),
        }
    }

    /// Create a roll of the given kind and percentage text
    pub fn with_kind(kind: StatKind, value: impl Into<String>) -> Self {
        JadeStat {
            enabled: true,
            kind,
            value: value.into(),
        }
    }

    /// Rolled percentage; unparsable text yields 0.0
    pub fn value_percent(&self) -> f64 {
        self.value.trim().parse().unwrap_or(0.0)
    }

    /// Rolled value as a decimal fraction
    pub fn value_fraction(&self) -> f64 {
        self.value_percent() / 100.0
    }

    /// A roll is empty when disabled or when no kind is selected
    pub fn is_empty(&self) -> bool {
        !self.enabled || self.kind == StatKind::Empty
    }

    pub fn is_fusion(&self) -> bool {
        self.kind == StatKind::Fusion
    }

    /// Restore the default state; rolls are never removed, only reset
    pub fn reset(&mut self) {
        *self = JadeStat::new();
    }
}

impl Default for JadeStat {
    fn default() -> Self {
        JadeStat::new()
    }
}

fn default_enabled() -> bool {
    true
}

fn default_value() -> String {
    "0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_parses_percentage() {
        let stat = JadeStat::with_kind(StatKind::Attack, "4.5");
        assert!((stat.value_percent() - 4.5).abs() < f64::EPSILON);
        assert!((stat.value_fraction() - 0.045).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unparsable_value_counts_as_zero() {
        let stat = JadeStat::with_kind(StatKind::Attack, "4,5");
        assert!((stat.value_percent() - 0.0).abs() < f64::EPSILON);

        let stat = JadeStat::with_kind(StatKind::Attack, "");
        assert!((stat.value_percent() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        let stat = JadeStat::with_kind(StatKind::Attack, " 12 ");
        assert!((stat.value_percent() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_when_disabled_or_kindless() {
        let mut stat = JadeStat::with_kind(StatKind::Attack, "10");
        assert!(!stat.is_empty());

        stat.enabled = false;
        assert!(stat.is_empty());

        let stat = JadeStat::with_kind(StatKind::Empty, "10");
        assert!(stat.is_empty());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut stat = JadeStat::with_kind(StatKind::Fusion, "40");
        stat.reset();
        assert!(stat.enabled);
        assert_eq!(stat.kind, StatKind::Empty);
        assert_eq!(stat.value, "0");
    }
}
