//! jade_cli - command-line front end for the jade damage calculator
//!
//! Collects a loadout profile, runs the calculation, and renders the result
//! figures together with the full derivation log.

mod profile;

use std::env;
use std::path::Path;
use std::process::ExitCode;

use jade_core::{
    config, CalculationResult, DamageCalculator, EngineConfig, JadeConfig, TargetClass,
};
use profile::Profile;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    ExitCode::from(run(&args))
}

fn run(args: &[String]) -> u8 {
    let mut config_path: Option<String> = None;
    let mut profile_path: Option<String> = None;
    let mut as_json = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => match iter.next() {
                Some(path) => config_path = Some(path.clone()),
                None => return usage(),
            },
            "--json" => as_json = true,
            "--help" | "-h" => return usage(),
            _ if arg.starts_with('-') => return usage(),
            _ if profile_path.is_none() => profile_path = Some(arg.clone()),
            _ => return usage(),
        }
    }

    let engine_config = match &config_path {
        Some(path) => match config::load_engine_config(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("failed to load engine config {}: {}", path, err);
                return 1;
            }
        },
        None => EngineConfig::default(),
    };

    let profile = match &profile_path {
        Some(path) => match config::load_toml::<Profile>(Path::new(path)) {
            Ok(profile) => profile,
            Err(err) => {
                eprintln!("failed to load profile {}: {}", path, err);
                return 1;
            }
        },
        None => Profile::default(),
    };

    let character = profile.character(&engine_config);

    // Pad the loadout to the configured size; empty jades contribute nothing
    let mut jades = profile.jades.clone();
    for index in jades.len()..engine_config.jade_count {
        jades.push(JadeConfig::new(index));
    }

    let calculator = DamageCalculator::new(&engine_config);
    let result = calculator.calculate(&character, &jades);

    if as_json {
        match serde_json::to_string_pretty(&result) {
            Ok(payload) => println!("{payload}"),
            Err(err) => {
                eprintln!("failed to serialize result: {err}");
                return 1;
            }
        }
    } else {
        print_result(&result);
    }

    0
}

fn usage() -> u8 {
    eprintln!("usage: jade_cli [--config <engine.toml>] [--json] [profile.toml]");
    2
}

fn print_result(result: &CalculationResult) {
    println!("Атака: {:.2}", result.final_attack);
    println!(
        "% лед. взрыва: {:.2} ({:.0}%)",
        result.final_ice_blast_percent,
        result.final_ice_blast_percent * 100.0
    );
    println!("Физический урон: {:.2}", result.physical_damage);
    println!();

    for &class in TargetClass::all() {
        let (damage, flower) = match class {
            TargetClass::Boss => (result.boss_damage, result.boss_flower_damage),
            TargetClass::Monster => (result.monster_damage, result.monster_flower_damage),
        };
        let (first, second, third, total) = result.burst(class);

        println!("Урон по {}:", class.trace_label());
        println!("  Урон лед. взрыва: {:.2}", damage);
        println!("  Урон цветочного взрыва: {:.2}", flower);
        println!("  Взрывы x3: {} / {} / {} (суммарно {})", first, second, third, total);
        println!();
    }

    println!("{}", result.calculation_steps);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("jade_cli")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_unknown_flag_is_a_usage_error() {
        assert_eq!(run(&args(&["--frobnicate"])), 2);
    }

    #[test]
    fn test_missing_config_value_is_a_usage_error() {
        assert_eq!(run(&args(&["--config"])), 2);
    }

    #[test]
    fn test_runs_with_defaults_and_no_profile() {
        assert_eq!(run(&args(&[])), 0);
    }

    #[test]
    fn test_missing_profile_file_fails() {
        assert_eq!(run(&args(&["/nonexistent/profile.toml"])), 1);
    }
}
