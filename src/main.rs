use clap::Parser;
use oddsarb::adapter::inbound::cli::command::{Cli, ColorChoice, Commands, ConfigCommand};
use oddsarb::adapter::inbound::cli::output::{self, OutputConfig};
use oddsarb::adapter::inbound::cli::{config, scan};
use oddsarb::error::Result;
use tokio::signal;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::set_color(match cli.color {
        ColorChoice::Always => Some(true),
        ColorChoice::Never => Some(false),
        ColorChoice::Auto => None,
    });
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    tokio::select! {
        result = dispatch(cli.command) => {
            if let Err(e) = result {
                output::error(&e.to_string());
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            output::warning("Interrupted");
            std::process::exit(130);
        }
    }
}

async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Scan(args) => scan::execute_scan(&args).await,
        Commands::Replay(args) => scan::execute_replay(&args).await,
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
    }
}
