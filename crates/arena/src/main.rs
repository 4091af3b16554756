//! Arena CLI
//!
//! Pit two engines against each other and report the result.

use std::env;
use std::path::PathBuf;
use std::process;

use arena::{ArenaError, MatchConfig, MatchReport, MatchRunner};
use game_core::{Engine, EngineDriver};
use material_engine::MaterialEngine;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;

fn print_usage() {
    println!("Engine Lab Arena");
    println!();
    println!("Usage:");
    println!("  arena <engine1> <engine2> [--games N] [--depth D] [--config FILE] [--out FILE]");
    println!();
    println!("Engines:");
    println!("  random        - uniform random legal moves");
    println!("  material      - one-ply greedy material grabber");
    println!("  minimax[:D]   - alpha-beta search (optional depth override)");
    println!();
    println!("Examples:");
    println!("  arena minimax random --games 20 --depth 4");
    println!("  arena minimax:3 material --games 50 --out results.json");
}

fn create_engine(spec: &str, default_depth: u8) -> Result<Box<dyn Engine>, ArenaError> {
    let mut parts = spec.split(':');
    let name = parts.next().unwrap_or(spec);
    match name.to_lowercase().as_str() {
        "random" => Ok(Box::new(RandomEngine::new())),
        "material" => Ok(Box::new(MaterialEngine::new())),
        "minimax" => {
            let depth = match parts.next() {
                Some(d) => d
                    .parse()
                    .map_err(|_| ArenaError::UnknownEngine(spec.to_string()))?,
                None => default_depth,
            };
            Ok(Box::new(MinimaxEngine::with_depth(depth)))
        }
        _ => Err(ArenaError::UnknownEngine(spec.to_string())),
    }
}

fn run(args: &[String]) -> Result<(), ArenaError> {
    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    let mut config = MatchConfig::default();
    let mut out_path: Option<PathBuf> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.num_games = args[i + 1].parse().unwrap_or(config.num_games);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    config.depth = args[i + 1].parse().unwrap_or(config.depth);
                    i += 1;
                }
            }
            "--config" => {
                if i + 1 < args.len() {
                    config = MatchConfig::from_toml_file(&PathBuf::from(&args[i + 1]))?;
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            other => {
                eprintln!("Warning: ignoring unknown argument '{}'", other);
            }
        }
        i += 1;
    }

    let mut engine1 = EngineDriver::new(create_engine(engine1_spec, config.depth)?);
    let mut engine2 = EngineDriver::new(create_engine(engine2_spec, config.depth)?);

    println!("=== Match: {} vs {} ===", engine1.name(), engine2.name());
    println!("Games: {}, Depth: {}", config.num_games, config.depth);
    println!();

    let result = MatchRunner::new(config.clone()).run_match(&mut engine1, &mut engine2);

    let report = MatchReport::new(engine1.name(), engine2.name(), config, result);
    println!();
    report.print_report();

    if let Some(path) = out_path {
        report.save(&path)?;
        println!("Saved results to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_specs_parse() {
        assert!(create_engine("random", 4).is_ok());
        assert!(create_engine("material", 4).is_ok());
        assert!(create_engine("minimax", 4).is_ok());
        assert!(create_engine("minimax:2", 4).is_ok());
        assert!(matches!(
            create_engine("stockfish", 4),
            Err(ArenaError::UnknownEngine(_))
        ));
        assert!(matches!(
            create_engine("minimax:deep", 4),
            Err(ArenaError::UnknownEngine(_))
        ));
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.len() < 2 {
        print_usage();
        process::exit(2);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
