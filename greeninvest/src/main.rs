//! GreenInvest CLI
//!
//! # Commands
//!
//! - `analyze`: one-shot metrics, ESG score, chart, and report export
//! - `interactive`: line-oriented session over stdin
//! - `setup-lexicon`: download the VADER lexicon
//!
//! Set `GREENINVEST_USE_MOCK` to serve fixture data instead of Yahoo Finance.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

mod commands;

/// GreenInvest: ESG sentiment and financial snapshot dashboard
#[derive(Parser)]
#[command(name = "greeninvest")]
#[command(version)]
#[command(about = "Pair a company's financial snapshot with an ESG score from its report text")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    global: commands::GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch metrics and prices, score ESG text, and export the report
    Analyze(commands::analyze::AnalyzeArgs),
    /// Start an interactive session reading commands from stdin
    Interactive(commands::interactive::InteractiveArgs),
    /// Download the VADER sentiment lexicon
    ///
    /// Without a lexicon the keyword fallback scorer is used.
    SetupLexicon(commands::setup::SetupArgs),
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::handle_analyze(&cli.global, args).await,
        Commands::Interactive(args) => {
            commands::interactive::handle_interactive(&cli.global, args).await
        }
        Commands::SetupLexicon(args) => commands::setup::handle_setup(&cli.global, args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
