//! Damage pipeline - turns a character snapshot and jade loadout into final figures
//!
//! The derivation runs as ordered stages: input echo, base parameters,
//! combat parameters with the per-target-class figures, and the triple-blast
//! breakdown. Each stage appends its trace lines at the moment the value is
//! computed, so the log replays the derivation exactly.

use crate::calc::character::CharacterState;
use crate::calc::result::CalculationResult;
use crate::config::EngineConfig;
use crate::jade::{calculate_jade_bonuses, JadeBonuses, JadeConfig};
use crate::trace::TraceLog;
use crate::types::TargetClass;

/// Runs the full damage derivation against one set of engine constants
pub struct DamageCalculator<'a> {
    config: &'a EngineConfig,
}

/// Round a blast figure to the nearest integer; ties go to the even integer
fn round_blast(value: f64) -> i64 {
    value.round_ties_even() as i64
}

impl<'a> DamageCalculator<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        DamageCalculator { config }
    }

    /// Run the pipeline for one character snapshot and jade loadout
    ///
    /// Never fails: bad slot text has already degraded to zero inside the
    /// aggregator, and out-of-range stats flow through the arithmetic as-is.
    pub fn calculate(
        &self,
        character: &CharacterState,
        jades: &[JadeConfig],
    ) -> CalculationResult {
        let mut result = CalculationResult::default();
        let mut trace = TraceLog::new();
        let bonuses = calculate_jade_bonuses(jades);

        self.record_inputs(character, &bonuses, &mut trace);
        self.base_parameters(character, &bonuses, &mut result, &mut trace);
        self.combat_parameters(character, &bonuses, &mut result, &mut trace);
        self.triple_blast(&mut result, &mut trace);

        result.calculation_steps = trace.render();
        result.trace = trace.into_entries();
        result
    }

    fn record_inputs(
        &self,
        character: &CharacterState,
        bonuses: &JadeBonuses,
        trace: &mut TraceLog,
    ) {
        let cfg = self.config;

        trace.heading("ВХОДНЫЕ ДАННЫЕ:");
        trace.info(format!("Сознание: {}", character.consciousness));
        trace.info(format!("Уровень героя: {}", character.hero_level));
        trace.info(format!("База атаки: {}", cfg.base_attack));
        trace.info(format!("Коэффициент взрыва: {}", cfg.explosion_coef));
        trace.info(format!(
            "Коэффициент цветочного взрыва: {}",
            cfg.flower_explosion_coef
        ));
        // The triple-blast jade has no toggle any more
        trace.info("Нефрит (3 взрыва): Активен");
        trace.info(format!(
            "Совпадение уровня сознания: {}",
            if character.consciousness_match {
                "Активно"
            } else {
                "Неактивно"
            }
        ));
        trace.info(format!(
            "Бонус атаки от нефритов: {:.2} ({:.0}%)",
            bonuses.attack(),
            bonuses.attack() * 100.0
        ));
        trace.info(format!(
            "Бонус лед. взрыва от нефритов: {:.2} ({:.0}%)",
            bonuses.ice_blast(),
            bonuses.ice_blast() * 100.0
        ));
        trace.info(format!(
            "Бонус атаки по боссам от нефритов: {:.2} ({:.0}%)",
            bonuses.attack_vs_boss(),
            bonuses.attack_vs_boss() * 100.0
        ));
        trace.info(format!(
            "Бонус атаки по монстрам от нефритов: {:.2} ({:.0}%)",
            bonuses.attack_vs_monster(),
            bonuses.attack_vs_monster() * 100.0
        ));
        trace.blank();
    }

    /// Shared additive attack bonus: hero level, base talents, jade attack stats
    fn accumulate_attack_bonus(
        &self,
        character: &CharacterState,
        bonuses: &JadeBonuses,
        trace: &mut TraceLog,
    ) -> f64 {
        let cfg = self.config;
        let talents = &cfg.talents;
        let mut attack_bonus = 1.0;

        let hero_level_bonus = cfg.hero_level_bonus(character.hero_level);
        if hero_level_bonus > 0.0 {
            attack_bonus += hero_level_bonus;
            trace.info(format!(
                "+ Бонус атаки от уровня героя ({}): {}",
                character.hero_level, hero_level_bonus
            ));
        }

        if character.untouchable_talent {
            attack_bonus += talents.untouchable_talent;
            trace.info(format!(
                "+ Талант неприкосновенности: {}",
                talents.untouchable_talent
            ));
        }

        if character.power {
            attack_bonus += talents.power;
            trace.info(format!("+ Мощь: {}", talents.power));
        }

        if bonuses.attack() > 0.0 {
            attack_bonus += bonuses.attack();
            trace.info(format!("+ Статы атаки на нефритах: {:.2}", bonuses.attack()));
        }

        attack_bonus
    }

    /// Shared additive ice blast percent: ice talents and jade blast stats
    fn accumulate_ice_blast(
        &self,
        character: &CharacterState,
        bonuses: &JadeBonuses,
        trace: &mut TraceLog,
    ) -> f64 {
        let talents = &self.config.talents;
        let mut ice_blast_percent = 1.0;
        trace.info("Базовый % ледяного взрыва: 1.0 (100%)");

        if character.ice_root {
            ice_blast_percent += talents.ice_root;
            trace.info(format!("+ Ледяной корень: {}", talents.ice_root));
        }

        if bonuses.ice_blast() > 0.0 {
            ice_blast_percent += bonuses.ice_blast();
            trace.info(format!(
                "+ Статы %взрыва на нефритах: {:.2}",
                bonuses.ice_blast()
            ));
        }

        if character.ice_flash {
            ice_blast_percent += talents.ice_flash;
            trace.info(format!("+ Ледяная вспышка: {}", talents.ice_flash));
        }

        ice_blast_percent
    }

    /// Out-of-battle baseline: attack and ice blast percent without combat talents
    fn base_parameters(
        &self,
        character: &CharacterState,
        bonuses: &JadeBonuses,
        result: &mut CalculationResult,
        trace: &mut TraceLog,
    ) {
        let cfg = self.config;

        trace.heading("РАСЧЕТ БАЗОВЫХ ПАРАМЕТРОВ:");
        trace.info("Формула атаки: (база атаки + (сознание/10)) * (1 + бонусы)");
        trace.blank();

        trace.info("Базовый бонус атаки: 1.0");
        let attack_bonus = self.accumulate_attack_bonus(character, bonuses, trace);
        trace.result(format!("Итоговый базовый бонус атаки: {:.2}", attack_bonus));
        trace.blank();

        result.base_attack = (cfg.base_attack + character.consciousness / 10.0) * attack_bonus;
        trace.info("Расчет базовой атаки:");
        trace.formula(format!(
            "({} + ({}/10)) * {:.2} = {:.2}",
            cfg.base_attack, character.consciousness, attack_bonus, result.base_attack
        ));
        trace.blank();

        trace.info("Расчет базового % ледяного взрыва:");
        result.base_ice_blast_percent = self.accumulate_ice_blast(character, bonuses, trace);
        trace.result(format!(
            "Итоговый базовый % ледяного взрыва: {:.2} ({:.0}%)",
            result.base_ice_blast_percent,
            result.base_ice_blast_percent * 100.0
        ));
        trace.blank();
    }

    /// In-battle figures: combat talents, the tessa and consciousness-match
    /// multipliers, physical damage, and both target-class derivations
    fn combat_parameters(
        &self,
        character: &CharacterState,
        bonuses: &JadeBonuses,
        result: &mut CalculationResult,
        trace: &mut TraceLog,
    ) {
        let cfg = self.config;
        let talents = &cfg.talents;

        trace.heading("РАСЧЕТ БОЕВЫХ ПАРАМЕТРОВ:");
        trace.info("Формула атаки: (база атаки + (сознание/10)) * (1 + бонусы) * (1 + F тессы)");
        trace.blank();

        trace.info("Боевой бонус атаки: 1.0");
        let mut combat_attack_bonus = self.accumulate_attack_bonus(character, bonuses, trace);

        if character.aroma_aura {
            combat_attack_bonus += talents.aroma_aura;
            trace.info(format!("+ Аура Аромата: {}", talents.aroma_aura));
        }
        if character.frost_seal {
            combat_attack_bonus += talents.frost_seal;
            trace.info(format!("+ Морозная печать: {}", talents.frost_seal));
        }
        if character.tundra_power {
            combat_attack_bonus += talents.tundra_power;
            trace.info(format!("+ Мощь тундры: {}", talents.tundra_power));
        }
        if character.frostbound_lotus {
            combat_attack_bonus += talents.frostbound_lotus;
            trace.info(format!("+ Морозный лотос: {}", talents.frostbound_lotus));
        }

        trace.result(format!(
            "Итоговый боевой бонус атаки: {:.2}",
            combat_attack_bonus
        ));
        trace.blank();

        let tessa_multiplier = if character.tessa_f { talents.tessa_f } else { 1.0 };
        trace.info(format!(
            "Множитель F тессы: {:.2} ({})",
            tessa_multiplier,
            if character.tessa_f {
                "активирован"
            } else {
                "не активирован"
            }
        ));

        // The consciousness-match bonus multiplies the already tessa-adjusted
        // attack; folding it into the combat bonus would change the traced
        // intermediate value.
        let pre_match_attack = (cfg.base_attack + character.consciousness / 10.0)
            * combat_attack_bonus
            * tessa_multiplier;
        let match_multiplier = if character.consciousness_match {
            talents.consciousness_match
        } else {
            1.0
        };

        if character.consciousness_match {
            trace.info(format!(
                "Бонус атаки от совпадения уровня сознания: +{:.0}%",
                (talents.consciousness_match - 1.0) * 100.0
            ));
        }

        result.final_attack = pre_match_attack * match_multiplier;

        trace.info("Расчет боевой атаки:");
        if character.consciousness_match {
            trace.formula(format!(
                "({} + ({}/10)) * {:.2} * {:.2} = {:.2} (базовая атака)",
                cfg.base_attack,
                character.consciousness,
                combat_attack_bonus,
                tessa_multiplier,
                pre_match_attack
            ));
            trace.formula(format!(
                "{:.2} * {:.2} = {:.2} (с учетом совпадения уровня сознания)",
                pre_match_attack, match_multiplier, result.final_attack
            ));
        } else {
            trace.formula(format!(
                "({} + ({}/10)) * {:.2} * {:.2} = {:.2}",
                cfg.base_attack,
                character.consciousness,
                combat_attack_bonus,
                tessa_multiplier,
                result.final_attack
            ));
        }
        trace.blank();

        // No separate physical scaling exists in the current formula set
        result.physical_damage = result.final_attack;
        trace.info("Расчет физического урона:");
        trace.formula(format!(
            "Физический урон = Атака = {:.2}",
            result.final_attack
        ));
        trace.blank();

        trace.info("Расчет боевого % ледяного взрыва:");
        let mut final_ice_blast = self.accumulate_ice_blast(character, bonuses, trace);
        // Frost bloom is combat-only; the base ice blast never sees it
        if character.frost_bloom {
            final_ice_blast += talents.frost_bloom;
            trace.info(format!("+ Морозное цветение: {}", talents.frost_bloom));
        }
        result.final_ice_blast_percent = final_ice_blast;
        trace.result(format!(
            "Итоговый боевой % ледяного взрыва: {:.2} ({:.0}%)",
            result.final_ice_blast_percent,
            result.final_ice_blast_percent * 100.0
        ));
        trace.blank();

        for &class in TargetClass::all() {
            self.target_class_parameters(class, bonuses, result, trace);
        }
    }

    /// Per-target-class derivation, identical in shape for both classes
    fn target_class_parameters(
        &self,
        class: TargetClass,
        bonuses: &JadeBonuses,
        result: &mut CalculationResult,
        trace: &mut TraceLog,
    ) {
        let cfg = self.config;
        let label = class.trace_label();
        let class_bonus = bonuses.get(&class.bonus_kind());

        trace.heading(format!("РАСЧЕТ ПАРАМЕТРОВ ПО {}:", class.heading_label()));
        trace.info(format!(
            "Бонус атаки по {}: {:.2} ({:.0}%)",
            label,
            class_bonus,
            class_bonus * 100.0
        ));

        let class_physical_damage = result.final_attack * (1.0 + class_bonus);
        trace.info(format!("Расчет физического урона по {}:", label));
        trace.formula(format!(
            "{:.2} * (1 + {:.2}) = {:.2}",
            result.final_attack, class_bonus, class_physical_damage
        ));

        // The class attack bonus scales the unit baseline; the excess of the
        // combat ice blast percent is added back on top.
        let ice_blast_percent =
            (1.0 * (1.0 + class_bonus)) + (result.final_ice_blast_percent - 1.0);
        trace.info(format!("Расчет % ледяного взрыва по {}:", label));
        trace.formula(format!(
            "(1 * (1 + {:.2})) + ({:.2} - 1) = {:.2}",
            class_bonus, result.final_ice_blast_percent, ice_blast_percent
        ));

        let damage = result.final_attack * ice_blast_percent * cfg.explosion_coef;
        trace.info(format!("Расчет урона ледяного взрыва по {}:", label));
        trace.formula(format!(
            "{:.2} * {:.2} * {} = {:.2}",
            result.final_attack, ice_blast_percent, cfg.explosion_coef, damage
        ));

        let flower_damage = result.final_attack * ice_blast_percent * cfg.flower_explosion_coef;
        trace.info(format!("Расчет урона цветочного взрыва по {}:", label));
        trace.formula(format!(
            "{:.2} * {:.2} * {} = {:.2}",
            result.final_attack, ice_blast_percent, cfg.flower_explosion_coef, flower_damage
        ));
        trace.blank();

        match class {
            TargetClass::Boss => {
                result.boss_attack_bonus = class_bonus;
                result.boss_ice_blast_percent = ice_blast_percent;
                result.boss_damage = damage;
                result.boss_flower_damage = flower_damage;
            }
            TargetClass::Monster => {
                result.monster_attack_bonus = class_bonus;
                result.monster_ice_blast_percent = ice_blast_percent;
                result.monster_damage = damage;
                result.monster_flower_damage = flower_damage;
            }
        }
    }

    /// Triple-blast jade breakdown for both target classes
    fn triple_blast(&self, result: &mut CalculationResult, trace: &mut TraceLog) {
        let cfg = self.config;

        trace.heading("РАСЧЕТ УРОНА С НЕФРИТОМ (3 ВЗРЫВА):");
        trace.info("Формула для первого взрыва:");
        trace.info(format!(
            "Округлить(Атака * %ЛедВзрыва * {} * {})",
            cfg.explosion_coef, cfg.first_blast_multiplier
        ));
        trace.blank();
        trace.info("Формула для второго/третьего взрыва:");
        trace.info(format!(
            "Округлить(Атака * %ЛедВзрыва * {} * {})",
            cfg.explosion_coef, cfg.other_blast_multiplier
        ));
        trace.blank();

        for &class in TargetClass::all() {
            self.class_triple_blast(class, result, trace);
        }
    }

    fn class_triple_blast(
        &self,
        class: TargetClass,
        result: &mut CalculationResult,
        trace: &mut TraceLog,
    ) {
        let cfg = self.config;
        let label = class.trace_label();
        let ice_blast_percent = result.ice_blast_percent(class);

        trace.info(format!("Расчет урона с нефритом по {}:", label));

        let first = round_blast(
            result.final_attack * ice_blast_percent * cfg.explosion_coef
                * cfg.first_blast_multiplier,
        );
        let second = round_blast(
            result.final_attack * ice_blast_percent * cfg.explosion_coef
                * cfg.other_blast_multiplier,
        );
        // Assigned, not re-rounded: the third hit is the second by definition
        let third = second;
        let total = first + second + third;

        trace.formula(format!(
            "Первый взрыв: округлить({:.2} * {:.2} * {} * {}) = {}",
            result.final_attack,
            ice_blast_percent,
            cfg.explosion_coef,
            cfg.first_blast_multiplier,
            first
        ));
        trace.formula(format!(
            "Второй взрыв: округлить({:.2} * {:.2} * {} * {}) = {}",
            result.final_attack,
            ice_blast_percent,
            cfg.explosion_coef,
            cfg.other_blast_multiplier,
            second
        ));
        trace.formula(format!(
            "Третий взрыв: округлить({:.2} * {:.2} * {} * {}) = {}",
            result.final_attack,
            ice_blast_percent,
            cfg.explosion_coef,
            cfg.other_blast_multiplier,
            third
        ));
        trace.result(format!("Суммарный урон по {}: {}", label, total));
        trace.blank();

        match class {
            TargetClass::Boss => {
                result.jade_first_blast_boss = first;
                result.jade_second_blast_boss = second;
                result.jade_third_blast_boss = third;
                result.jade_total_damage_boss = total;
            }
            TargetClass::Monster => {
                result.jade_first_blast_monster = first;
                result.jade_second_blast_monster = second;
                result.jade_third_blast_monster = third;
                result.jade_total_damage_monster = total;
            }
        }
    }
}
