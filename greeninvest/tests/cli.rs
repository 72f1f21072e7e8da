//! End-to-end runs of the `greeninvest` binary against the mock connector.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ESG_TEXT: &str = "Our sustainable and ethical sourcing shows great improvement.\n\
Last year one scandal was resolved.\n";

/// Binary wired to fixtures and the keyword fallback, run inside `dir`.
fn greeninvest(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("greeninvest").unwrap();
    cmd.current_dir(dir.path())
        .env("GREENINVEST_USE_MOCK", "1")
        .env("GREENINVEST_LEXICON", dir.path().join("no_lexicon.txt"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn analyze_prints_all_sections_and_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let text = dir.path().join("esg.txt");
    std::fs::write(&text, ESG_TEXT).unwrap();
    let report = dir.path().join("reports").join("aapl.txt");

    greeninvest(&dir)
        .args(["analyze", "--ticker", "aapl", "--text-file"])
        .arg(&text)
        .arg("--report-out")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("AAPL - Company Financial Data"))
        .stdout(predicate::str::contains("$2.95T"))
        .stdout(predicate::str::contains("Calculated ESG Score: 0.80"))
        .stdout(predicate::str::contains("Method: a keyword-overlap fallback scorer"))
        .stdout(predicate::str::contains("AAPL Stock Price (Last 1 Year)"))
        .stdout(predicate::str::contains("meets or exceeds the benchmark"))
        .stdout(predicate::str::contains("Report written to"));

    let written = std::fs::read_to_string(&report).unwrap();
    assert!(written.starts_with("ESG Investment Analysis Report for AAPL"));
}

#[test]
fn analyze_reads_text_from_stdin_and_honors_benchmark() {
    let dir = tempfile::tempdir().unwrap();
    greeninvest(&dir)
        .args(["--benchmark", "0.9", "analyze", "--ticker", "MSFT", "--stdin"])
        .write_stdin(ESG_TEXT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Benchmark ESG Score: 0.90"))
        .stdout(predicate::str::contains("is below the benchmark"));
    assert!(dir.path().join("esg_report.txt").exists());
}

#[test]
fn analyze_with_failing_provider_still_completes() {
    let dir = tempfile::tempdir().unwrap();
    greeninvest(&dir)
        .args(["analyze", "--ticker", "FAIL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No financial data available."))
        .stdout(predicate::str::contains("Unable to retrieve stock data."))
        .stdout(predicate::str::contains("Calculated ESG Score: 0.50"));
}

#[test]
fn invalid_ticker_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    greeninvest(&dir)
        .args(["analyze", "--ticker", "not a ticker"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error:"));
}

#[test]
fn missing_text_file_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    greeninvest(&dir)
        .args(["analyze", "--text-file", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.txt"));
}

#[test]
fn malformed_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("cfg.json");
    std::fs::write(&cfg, "{ not json").unwrap();
    greeninvest(&dir)
        .arg("--config")
        .arg(&cfg)
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn interactive_report_requires_analysis() {
    let dir = tempfile::tempdir().unwrap();
    greeninvest(&dir)
        .arg("interactive")
        .write_stdin("report\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("error:"));
    assert!(!dir.path().join("esg_report.txt").exists());
}

#[test]
fn interactive_paste_analyze_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let script = format!(
        "ticker tsla\nmetrics\npaste\n{ESG_TEXT}.\nanalyze\nbenchmark\nreport out.txt\nquit\n"
    );
    greeninvest(&dir)
        .arg("interactive")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected TSLA."))
        .stdout(predicate::str::contains("TSLA - Company Financial Data"))
        .stdout(predicate::str::contains("N/A"))
        .stdout(predicate::str::contains("Captured"))
        .stdout(predicate::str::contains("Calculated ESG Score: 0.80"))
        .stdout(predicate::str::contains("ESG score 0.80 meets or exceeds the benchmark."))
        .stdout(predicate::str::contains("Report written to out.txt"));

    let written = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert!(written.contains("ESG Investment Analysis Report for TSLA"));
}

#[test]
fn interactive_unknown_command_keeps_session_alive() {
    let dir = tempfile::tempdir().unwrap();
    greeninvest(&dir)
        .arg("interactive")
        .write_stdin("frobnicate\nhelp\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown command `frobnicate`"))
        .stdout(predicate::str::contains("Commands:"));
}
