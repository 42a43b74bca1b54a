//! Command-line interface definitions.
//!
//! Defines the CLI structure for the oddsarb application using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG: &str = "config.toml";

/// Largest bankroll accepted on the command line.
pub const MAX_BANKROLL: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Bankroll must be positive and no larger than [`MAX_BANKROLL`].
fn parse_bankroll(raw: &str) -> Result<Decimal, String> {
    let amount: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a decimal amount"))?;
    if amount <= Decimal::ZERO {
        return Err("bankroll must be greater than zero".to_string());
    }
    if amount > MAX_BANKROLL {
        return Err(format!("bankroll must be at most {MAX_BANKROLL}"));
    }
    Ok(amount)
}

/// Cross-book sports betting arbitrage detection CLI
#[derive(Parser, Debug)]
#[command(name = "oddsarb")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch live odds once and report arbitrage opportunities
    Scan(ScanArgs),

    /// Run detection over a saved feed dump
    Replay(ReplayArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `oddsarb config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value = DEFAULT_CONFIG)]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Detection overrides shared by `scan` and `replay`.
///
/// Anything given here wins over the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct DetectionArgs {
    /// Path to the configuration file (defaults apply when it is absent).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sport key to scan; repeat for several.
    #[arg(long = "sport", value_name = "KEY")]
    pub sports: Vec<String>,

    /// Largest margin (percent) still reported.
    #[arg(long, value_name = "PCT")]
    pub max_arb_pct: Option<Decimal>,

    /// Ignore prices whose magnitude exceeds this.
    #[arg(long, value_name = "ODDS")]
    pub max_abs_odds: Option<u32>,

    /// Only consider this book; repeat for several.
    #[arg(long = "book", value_name = "NAME")]
    pub books: Vec<String>,

    /// Print stake amounts for this bankroll.
    #[arg(long, value_name = "AMOUNT", value_parser = parse_bankroll)]
    pub bankroll: Option<Decimal>,
}

/// Arguments for `scan`.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub detection: DetectionArgs,
}

/// Arguments for `replay`.
#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// JSON dump: an array of events or an object keyed by sport.
    pub file: PathBuf,

    #[command(flatten)]
    pub detection: DetectionArgs,
}
