//! Property tests for the aggregation and pipeline invariants

use jade_core::{
    CharacterState, DamageCalculator, EngineConfig, JadeConfig, JadeStat, StatKind,
    calculate_jade_bonuses,
};
use proptest::prelude::*;

fn jade_with(stats: Vec<JadeStat>) -> JadeConfig {
    let mut jade = JadeConfig::new(0);
    for (i, stat) in stats.into_iter().enumerate() {
        jade.stats[i] = stat;
    }
    jade
}

proptest! {
    /// Effective contribution for a kind is its base sum scaled by 1 + fusion
    #[test]
    fn fusion_scales_base_sum(
        base_a in 0.0f64..500.0,
        base_b in 0.0f64..500.0,
        fusion in 0.0f64..100.0,
    ) {
        let jade = jade_with(vec![
            JadeStat::with_kind(StatKind::Attack, base_a.to_string()),
            JadeStat::with_kind(StatKind::Attack, base_b.to_string()),
            JadeStat::with_kind(StatKind::Fusion, fusion.to_string()),
        ]);

        let stats = jade.effective_stats();
        let expected = (base_a / 100.0 + base_b / 100.0) * (1.0 + fusion / 100.0);
        prop_assert!((stats[&StatKind::Attack] - expected).abs() < 1e-12 * (1.0 + expected));
    }

    /// A disabled or kindless roll never changes any total, whatever its text
    #[test]
    fn empty_rolls_are_neutral(
        value in "[ -~]{0,12}",
        disabled in any::<bool>(),
    ) {
        let reference = jade_with(vec![JadeStat::with_kind(StatKind::Attack, "10")]);
        let mut with_noise = reference.clone();

        with_noise.stats[1] = if disabled {
            let mut stat = JadeStat::with_kind(StatKind::IceBlast, value.clone());
            stat.enabled = false;
            stat
        } else {
            JadeStat::with_kind(StatKind::Empty, value.clone())
        };

        let a = calculate_jade_bonuses(std::slice::from_ref(&reference));
        let b = calculate_jade_bonuses(std::slice::from_ref(&with_noise));
        prop_assert_eq!(a, b);
    }

    /// A jade carrying only fusion rolls contributes nothing at all
    #[test]
    fn fusion_only_jade_is_inert(fusion in 0.0f64..100.0) {
        let jade = jade_with(vec![JadeStat::with_kind(StatKind::Fusion, fusion.to_string())]);
        prop_assert!(jade.effective_stats().is_empty());
    }

    /// The third blast is assigned from the second, never re-rounded
    #[test]
    fn third_blast_is_second_blast(
        consciousness in 0.0f64..10000.0,
        hero_level in 0u32..120,
        tessa in any::<bool>(),
        bloom in any::<bool>(),
        boss_roll in 0.0f64..50.0,
    ) {
        let config = EngineConfig::default();
        let mut character = CharacterState::new();
        character.consciousness = consciousness;
        character.hero_level = hero_level;
        character.tessa_f = tessa;
        character.frost_bloom = bloom;

        let jade = jade_with(vec![JadeStat::with_kind(
            StatKind::AttackVsBoss,
            boss_roll.to_string(),
        )]);

        let result = DamageCalculator::new(&config).calculate(&character, &[jade]);
        prop_assert_eq!(result.jade_second_blast_boss, result.jade_third_blast_boss);
        prop_assert_eq!(result.jade_second_blast_monster, result.jade_third_blast_monster);
    }

    /// A higher hero level never lowers the level bonus
    #[test]
    fn hero_level_bonus_is_monotonic(a in 0u32..200, b in 0u32..200) {
        let config = EngineConfig::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(config.hero_level_bonus(high) >= config.hero_level_bonus(low));
    }

    /// Unchanged input reruns produce a bit-identical snapshot
    #[test]
    fn reruns_are_deterministic(
        consciousness in 0.0f64..10000.0,
        hero_level in 0u32..120,
        flags in any::<[bool; 11]>(),
        attack_roll in 0.0f64..50.0,
        fusion_roll in 0.0f64..100.0,
    ) {
        let config = EngineConfig::default();
        let character = CharacterState {
            consciousness,
            hero_level,
            untouchable_talent: flags[0],
            power: flags[1],
            ice_root: flags[2],
            ice_flash: flags[3],
            aroma_aura: flags[4],
            frost_bloom: flags[5],
            frost_seal: flags[6],
            tundra_power: flags[7],
            frostbound_lotus: flags[8],
            tessa_f: flags[9],
            consciousness_match: flags[10],
        };
        let jades = vec![jade_with(vec![
            JadeStat::with_kind(StatKind::Attack, attack_roll.to_string()),
            JadeStat::with_kind(StatKind::Fusion, fusion_roll.to_string()),
        ])];

        let calculator = DamageCalculator::new(&config);
        let first = calculator.calculate(&character, &jades);
        let second = calculator.calculate(&character, &jades);
        prop_assert_eq!(first, second);
    }
}
