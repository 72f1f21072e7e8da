use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use greeninvest::GreenInvestError;
use greeninvest::setup::{DEFAULT_LEXICON_URL, download_lexicon};

use super::GlobalArgs;

#[derive(Args, Debug)]
pub struct SetupArgs {
    /// Source URL of the lexicon
    #[arg(long, default_value = DEFAULT_LEXICON_URL)]
    url: String,

    /// Destination file (defaults to the configured lexicon path)
    #[arg(long)]
    dest: Option<PathBuf>,

    /// Download timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

pub async fn handle_setup(global: &GlobalArgs, args: SetupArgs) -> Result<(), GreenInvestError> {
    let dest = match args.dest {
        Some(d) => d,
        None => global.load_config()?.lexicon_path,
    };
    let entries =
        download_lexicon(&args.url, &dest, Duration::from_secs(args.timeout_secs)).await?;
    println!(
        "Successfully downloaded VADER lexicon ({entries} entries) to {}",
        dest.display()
    );
    Ok(())
}
