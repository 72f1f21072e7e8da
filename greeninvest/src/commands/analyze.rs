use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Args;
use greeninvest::{GreenInvestError, Session, Ticker};

use super::{GlobalArgs, out_err, print_assessment, print_benchmark, print_metrics};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Company ticker symbol
    #[arg(short, long, default_value = "AAPL")]
    ticker: String,

    /// File holding the corporate ESG report text
    #[arg(long, conflicts_with = "stdin")]
    text_file: Option<PathBuf>,

    /// Read the ESG report text from stdin
    #[arg(long)]
    stdin: bool,

    /// Where to write the report (defaults to the configured report path)
    #[arg(long)]
    report_out: Option<PathBuf>,
}

fn read_text(args: &AnalyzeArgs) -> Result<String, GreenInvestError> {
    if let Some(path) = &args.text_file {
        return std::fs::read_to_string(path)
            .map_err(|e| GreenInvestError::io(path.display().to_string(), &e));
    }
    if args.stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| GreenInvestError::io("<stdin>", &e))?;
        return Ok(text);
    }
    Ok(String::new())
}

pub async fn handle_analyze(global: &GlobalArgs, args: AnalyzeArgs) -> Result<(), GreenInvestError> {
    let ticker = Ticker::parse(&args.ticker)?;
    let text = read_text(&args)?;
    if text.trim().is_empty() {
        tracing::info!("no ESG report text supplied; the score will be neutral");
    }
    let dashboard = global.dashboard()?;
    let mut session = Session::new(&dashboard, ticker);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let metrics = session.metrics().await.clone();
    print_metrics(&mut out, session.ticker(), &metrics).map_err(out_err)?;
    writeln!(out).map_err(out_err)?;

    let assessment = *session.analyze(&text);
    print_assessment(&mut out, &assessment).map_err(out_err)?;
    writeln!(out).map_err(out_err)?;

    let prices = session.price_history().await;
    writeln!(out, "{}", dashboard.render_chart(&prices.series)).map_err(out_err)?;
    writeln!(out).map_err(out_err)?;

    print_benchmark(&mut out, dashboard.config().benchmark_esg, Some(&assessment))
        .map_err(out_err)?;

    let path = session.export_report(args.report_out.as_deref()).await?;
    writeln!(out, "Report written to {}", path.display()).map_err(out_err)?;
    Ok(())
}
