//! One-time download of the VADER lexicon.

use std::path::Path;
use std::time::Duration;

use greeninvest_core::GreenInvestError;
use greeninvest_core::sentiment::VaderLexicon;

use crate::write_text_file;

/// Upstream location of the VADER lexicon.
pub const DEFAULT_LEXICON_URL: &str =
    "https://raw.githubusercontent.com/cjhutto/vaderSentiment/master/vaderSentiment/vader_lexicon.txt";

const CONNECTOR: &str = "lexicon-download";

/// Download the lexicon from `url` and store it at `dest`.
///
/// The body is parsed before anything is written, so a failed or garbled
/// download never replaces a working lexicon. Returns the number of entries.
///
/// # Errors
/// Returns `Connector` for transport failures or non-success statuses,
/// `Lexicon` if the body is not a valid lexicon, or `Io` if `dest` cannot be
/// written.
#[tracing::instrument(skip(dest), fields(dest = %dest.display()))]
pub async fn download_lexicon(
    url: &str,
    dest: &Path,
    timeout: Duration,
) -> Result<usize, GreenInvestError> {
    let http = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GreenInvestError::connector(CONNECTOR, e.to_string()))?;
    let resp = http
        .get(url)
        .send()
        .await
        .map_err(|e| GreenInvestError::connector(CONNECTOR, e.to_string()))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(GreenInvestError::connector(
            CONNECTOR,
            format!("HTTP {status} from {url}"),
        ));
    }
    let body = resp
        .text()
        .await
        .map_err(|e| GreenInvestError::connector(CONNECTOR, e.to_string()))?;

    let lexicon = VaderLexicon::parse(&body, url)?;
    write_text_file(dest, &body)?;
    tracing::info!(entries = lexicon.len(), "lexicon downloaded");
    Ok(lexicon.len())
}
