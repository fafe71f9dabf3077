// src/main.rs

use std::process;
use log::{error, info, warn};
use env_logger::Env;
use modsolve::config::SolverConfig;
use modsolve::core::batch;
use modsolve::core::linear_system::LinearSystem;
use modsolve::core::serialization::{load, save};

const USAGE: &str = "usage: modsolve <system.json>... [--out <report.json>]";

struct Args {
    inputs: Vec<String>,
    out: Option<String>,
}

/// `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<Args>, String> {
    let mut inputs = Vec::new();
    let mut out = None;
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--out" | "-o" => match iter.next() {
                Some(path) => out = Some(path.clone()),
                None => return Err("--out needs a path".to_string()),
            },
            "--help" | "-h" => return Ok(None),
            _ => inputs.push(arg.clone()),
        }
    }

    if inputs.is_empty() {
        return Err(USAGE.to_string());
    }
    Ok(Some(Args { inputs, out }))
}

fn main() {
    let config = SolverConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration ({}), using defaults", e);
        SolverConfig::default()
    });

    // Initialize the logger
    let env = Env::default()
        .filter_or("MODSOLVE_LOG_LEVEL", config.log_level.as_str())
        .write_style_or("MODSOLVE_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    let args: Vec<String> = std::env::args().collect();
    let args = match parse_args(&args) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{}", USAGE);
            return;
        }
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        }
    };

    if let Some(threads) = config.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global() {
            warn!("Could not configure {} rayon threads: {}", threads, e);
        }
    }

    let mut systems: Vec<LinearSystem> = Vec::new();
    for input in &args.inputs {
        match load::systems(input) {
            Ok(loaded) => systems.extend(loaded),
            Err(e) => {
                error!("Failed to load {}: {}", input, e);
                process::exit(1);
            }
        }
    }
    info!("Loaded {} systems from {} files", systems.len(), args.inputs.len());

    let outcomes = batch::solve_batch(&systems, &config);

    for (system, outcome) in systems.iter().zip(&outcomes) {
        match &outcome.result {
            Ok(classification) => println!("{} (mod {}): {}", system.label(), system.modulus, classification),
            Err(e) => println!("{} (mod {}): error: {}", system.label(), system.modulus, e),
        }
    }

    if let Some(out) = &args.out {
        if let Err(e) = save::reports(&outcomes, out, config.report.pretty) {
            error!("Failed to write report: {}", e);
            process::exit(1);
        }
        info!("Report written to {}", out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("modsolve").chain(list.iter().copied()).map(String::from).collect()
    }

    #[test]
    fn test_help_is_not_an_error() {
        assert!(matches!(parse_args(&args(&["--help"])), Ok(None)));
        assert!(matches!(parse_args(&args(&["a.json", "-h"])), Ok(None)));
    }

    #[test]
    fn test_usage_errors() {
        assert_eq!(parse_args(&args(&[])).err(), Some(USAGE.to_string()));
        assert!(parse_args(&args(&["a.json", "--out"])).is_err());
    }

    #[test]
    fn test_inputs_and_out() {
        let parsed = parse_args(&args(&["a.json", "b.json", "--out", "r.json"])).unwrap().unwrap();
        assert_eq!(parsed.inputs, vec!["a.json", "b.json"]);
        assert_eq!(parsed.out.as_deref(), Some("r.json"));
    }
}
