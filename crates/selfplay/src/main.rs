//! Self-play CLI
//!
//! Plays two engines against each other, each behind its own fog.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use selfplay::{EngineSpec, MatchReport, MatchRunner, SelfPlayConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Fog-of-war self-play runner");
    println!();
    println!("Usage:");
    println!("  selfplay [config.toml] [--white SPEC] [--black SPEC] [--games N]");
    println!("           [--depth D] [--max-plies N] [--report out.json] [--no-alternate]");
    println!();
    println!("Engines:");
    println!("  alphabeta          - Alpha-beta at the configured depth");
    println!("  alphabeta:D        - Alpha-beta at depth D");
    println!("  random[:SEED]      - Seeded random mover");
    println!();
    println!("Logging is controlled with RUST_LOG (default: info).");
}

fn parse_args(args: &[String]) -> Result<Option<SelfPlayConfig>> {
    let mut config = SelfPlayConfig::default();
    let mut i = 0;

    // A leading non-flag argument names a config file
    if let Some(first) = args.first() {
        if !first.starts_with('-') {
            config = SelfPlayConfig::load(&PathBuf::from(first))?;
            i = 1;
        }
    }

    while i < args.len() {
        let flag = args[i].as_str();
        if matches!(flag, "help" | "--help" | "-h") {
            return Ok(None);
        }
        if flag == "--no-alternate" {
            config.alternate_colors = false;
            i += 1;
            continue;
        }
        let Some(value) = args.get(i + 1) else {
            bail!("{flag} needs a value");
        };
        match flag {
            "--white" | "-w" => config.white = value.parse::<EngineSpec>()?,
            "--black" | "-b" => config.black = value.parse::<EngineSpec>()?,
            "--games" | "-g" => {
                config.games = value
                    .parse()
                    .with_context(|| format!("bad game count {value:?}"))?;
            }
            "--depth" | "-d" => {
                config.depth = value
                    .parse()
                    .with_context(|| format!("bad depth {value:?}"))?;
            }
            "--max-plies" => {
                config.max_plies = value
                    .parse()
                    .with_context(|| format!("bad ply cap {value:?}"))?;
            }
            "--report" | "-o" => config.report = Some(PathBuf::from(value)),
            other => bail!("unknown option {other}"),
        }
        i += 2;
    }
    Ok(Some(config))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(config) = parse_args(&args)? else {
        print_usage();
        return Ok(());
    };

    let mut engine1 = config.white.create();
    let mut engine2 = config.black.create();
    info!(
        white = %config.white,
        black = %config.black,
        games = config.games,
        depth = config.depth,
        "starting self-play"
    );

    let runner = MatchRunner::new(config.match_config());
    let (result, games) = runner.run_match(engine1.as_mut(), engine2.as_mut());

    let report = MatchReport {
        engine1: config.white.to_string(),
        engine2: config.black.to_string(),
        config: config.clone(),
        result,
        games,
    };
    println!("{}", report.generate_report());

    if let Some(path) = &config.report {
        report
            .save(path)
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!(path = %path.display(), "report saved");
    }
    Ok(())
}
