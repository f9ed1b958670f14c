use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};
use wordshift_types::Method;

mod commands;
mod settings;

/// Lexicon-based affect scoring and word shift analysis
#[derive(Parser)]
#[command(name = "wordshift")]
#[command(version)]
#[command(about = "Score text on affect dimensions and explain differences word by word")]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    settings: SettingsArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Default)]
struct SettingsArgs {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Hedonometer table
    #[arg(long, global = true)]
    happiness_lexicon: Option<PathBuf>,

    /// ANEW table
    #[arg(long, global = true)]
    anew_lexicon: Option<PathBuf>,

    /// Methods to score with (happiness, anew)
    #[arg(long, global = true, value_delimiter = ',', value_parser = parse_method)]
    methods: Vec<Method>,

    /// Lower bound of the neutral happiness range
    #[arg(long, global = true)]
    happiness_min: Option<f64>,

    /// Upper bound of the neutral happiness range
    #[arg(long, global = true)]
    happiness_max: Option<f64>,
}

#[derive(Subcommand)]
enum Command {
    /// Score a text file ("-" reads stdin)
    Score {
        input: PathBuf,

        /// Include per-word counts and probabilities (also enabled by config)
        #[arg(long)]
        counts: bool,

        /// Include the kernel-smoothed distribution (also enabled by config)
        #[arg(long)]
        distribution: bool,
    },
    /// Attribute the difference between two texts to their words
    Shift {
        comparison: PathBuf,
        reference: PathBuf,

        /// Only keep the N largest shifts per dimension
        #[arg(long)]
        top: Option<usize>,
    },
}

fn parse_method(s: &str) -> Result<Method, String> {
    Method::parse(s).ok_or_else(|| format!("unknown method '{s}', expected happiness or anew"))
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = settings::resolve(&cli.settings)?;

    let output = match cli.command {
        Command::Score {
            input,
            counts,
            distribution,
        } => {
            let score = settings::score_outputs(&config.score, counts, distribution);
            commands::score(&config, &score, &input)?
        }
        Command::Shift {
            comparison,
            reference,
            top,
        } => commands::shift(&config, &comparison, &reference, top)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
