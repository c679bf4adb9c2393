use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser, Subcommand};
use regioncheck_core::{ProviderName, settings::load_settings};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod error;
mod providers;
#[cfg(test)]
mod test_support;
mod commands {
    pub mod check;
    pub mod list;
}

#[derive(Parser)]
#[command(name = "regioncheck")]
#[command(about = "Check cloud provider regions against the scanner's known list", long_about = None)]
struct Cli {
    #[arg(long, global = true, help = "Settings file (default: ~/.regioncheck/config)")]
    config: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count, global = true, help = "Increase log verbosity")]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the live region list of each provider
    List {
        #[arg(short, long = "provider", help = "digitalocean, linode or dreamhost (default: all)")]
        providers: Vec<ProviderName>,
    },
    /// Compare live regions with the known regions table
    Check {
        #[arg(short, long = "provider", help = "digitalocean, linode or dreamhost (default: all)")]
        providers: Vec<ProviderName>,

        #[arg(long, help = "Exit with an error when any drift is found")]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    initialize_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(cli.config.as_deref()).await?;
    debug!(?settings, "settings loaded");

    match cli.command {
        Commands::List { providers: selection } => {
            let selected = providers::build_providers(&settings, &selection)?;
            commands::list::list(&providers::as_dyn(&selected)).await?
        }
        Commands::Check {
            providers: selection,
            strict,
        } => {
            let selected = providers::build_providers(&settings, &selection)?;
            commands::check::check(&providers::as_dyn(&selected), strict).await?
        }
    }
    Ok(())
}

fn initialize_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
