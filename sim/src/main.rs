//! Fact-check simulation: runs rounds of polls over a population of
//! trustworthy, less trustworthy and malicious voters.

mod config;
mod population;
mod report;
mod runner;

use anyhow::Context;
use clap::Parser;
use config::SimConfig;
use factcheck_types::Category;
use factcheck_utils::LogFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "factcheck-sim", about = "Fact-check staking simulation")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "FACTCHECK_SIM_CONFIG")]
    config: Option<PathBuf>,

    /// Number of voting actors.
    #[arg(short = 'n', long, env = "FACTCHECK_SIM_ACTORS")]
    actors: Option<usize>,

    /// Share of honest actors that are trustworthy (p).
    #[arg(short = 'p', long)]
    trustworthy_ratio: Option<f64>,

    /// Share of all actors that are malicious (q).
    #[arg(short = 'q', long)]
    malicious_ratio: Option<f64>,

    /// Number of polls to run.
    #[arg(long, env = "FACTCHECK_SIM_ROUNDS")]
    rounds: Option<u32>,

    /// RNG seed.
    #[arg(long, env = "FACTCHECK_SIM_SEED")]
    seed: Option<u64>,

    /// Category of every poll, e.g. "politics".
    #[arg(long)]
    category: Option<Category>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "FACTCHECK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "FACTCHECK_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Subcommand (defaults to `run`).
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the simulation and print the report.
    Run,
    /// Print the effective configuration as TOML.
    PrintConfig,
}

impl Cli {
    /// Apply CLI overrides on top of the file (or default) configuration.
    fn apply(&self, config: &mut SimConfig) {
        if let Some(actors) = self.actors {
            config.population.actors = actors;
        }
        if let Some(p) = self.trustworthy_ratio {
            config.population.trustworthy_ratio = p;
        }
        if let Some(q) = self.malicious_ratio {
            config.population.malicious_ratio = q;
        }
        if let Some(rounds) = self.rounds {
            config.round.rounds = rounds;
        }
        if let Some(seed) = self.seed {
            config.round.seed = seed;
        }
        if let Some(category) = self.category {
            config.round.category = category;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SimConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::default(),
    };
    cli.apply(&mut config);

    factcheck_utils::init_tracing_with(&config.logging.level, config.logging.format);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }
    config.validate().context("invalid simulation config")?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let report = runner::run_simulation(&config)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
        }
        Command::PrintConfig => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}
