use std::io::{BufRead, Write};
use std::path::Path;

use clap::Args;
use greeninvest::{Dashboard, GreenInvestError, Session, Ticker};

use super::{GlobalArgs, out_err, print_assessment, print_benchmark, print_metrics};

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Ticker selected when the session starts
    #[arg(short, long, default_value = "AAPL")]
    ticker: String,
}

const HELP: &str = "\
Commands:
  ticker <SYMBOL>   select a company
  metrics           show financial metrics
  chart             show the price chart
  paste             enter ESG report text, finish with a line holding only '.'
  analyze           score the pasted text
  report [PATH]     export the analysis report
  benchmark         compare the last score with the benchmark
  help              show this help
  quit              leave the session";

pub async fn handle_interactive(
    global: &GlobalArgs,
    args: InteractiveArgs,
) -> Result<(), GreenInvestError> {
    let ticker = Ticker::parse(&args.ticker)?;
    let dashboard = global.dashboard()?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&dashboard, ticker, stdin.lock(), &mut stdout.lock()).await
}

/// Drive a session from `input` until `quit` or end of input.
///
/// Command mistakes are reported on stderr and the session continues.
pub async fn run<R: BufRead, W: Write>(
    dashboard: &Dashboard,
    ticker: Ticker,
    input: R,
    out: &mut W,
) -> Result<(), GreenInvestError> {
    let mut session = Session::new(dashboard, ticker);
    let mut text = String::new();
    let mut lines = input.lines();

    writeln!(out, "GreenInvest ESG Analyzer. Type `help` for commands.").map_err(out_err)?;
    loop {
        write!(out, "greeninvest [{}]> ", session.ticker()).map_err(out_err)?;
        out.flush().map_err(out_err)?;
        let Some(line) = lines.next() else {
            writeln!(out).map_err(out_err)?;
            break;
        };
        let line = line.map_err(|e| GreenInvestError::io("<stdin>", &e))?;
        let (cmd, rest) = line
            .trim()
            .split_once(char::is_whitespace)
            .map_or((line.trim(), ""), |(c, r)| (c, r.trim()));

        match cmd {
            "" => {}
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}").map_err(out_err)?,
            "ticker" => match Ticker::parse(rest) {
                Ok(t) => {
                    session.set_ticker(t);
                    writeln!(out, "Selected {}.", session.ticker()).map_err(out_err)?;
                }
                Err(e) => eprintln!("error: {e}"),
            },
            "metrics" => {
                let ticker = session.ticker().clone();
                let metrics = session.metrics().await;
                print_metrics(out, &ticker, metrics).map_err(out_err)?;
            }
            "chart" => {
                let prices = session.price_history().await;
                writeln!(out, "{}", dashboard.render_chart(&prices.series)).map_err(out_err)?;
            }
            "paste" => {
                writeln!(out, "Paste corporate ESG report text; end with a line containing only '.'")
                    .map_err(out_err)?;
                text.clear();
                for l in lines.by_ref() {
                    let l = l.map_err(|e| GreenInvestError::io("<stdin>", &e))?;
                    if l.trim() == "." {
                        break;
                    }
                    text.push_str(&l);
                    text.push('\n');
                }
                writeln!(out, "Captured {} characters.", text.trim_end().chars().count())
                    .map_err(out_err)?;
            }
            "analyze" => {
                let assessment = *session.analyze(&text);
                print_assessment(out, &assessment).map_err(out_err)?;
            }
            "report" => {
                let path = (!rest.is_empty()).then(|| Path::new(rest));
                match session.export_report(path).await {
                    Ok(written) => {
                        writeln!(out, "Report written to {}", written.display()).map_err(out_err)?;
                    }
                    Err(e) => eprintln!("error: {e}"),
                }
            }
            "benchmark" => {
                print_benchmark(out, dashboard.config().benchmark_esg, session.last_assessment())
                    .map_err(out_err)?;
            }
            other => eprintln!("error: unknown command `{other}`; type `help`"),
        }
    }
    Ok(())
}
