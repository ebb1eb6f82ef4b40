//! Suite report runner.
//!
//! Reads a results file, prints the console report, and writes
//! `suite-report.txt` and `suite-report.json` into the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use suite_shared::aggregator::ResultAggregator;
use suite_shared::config::ReportConfig;
use suite_shared::input::SuiteResults;
use tracing::info;

pub const USAGE: &str = "usage: suite-report <results.json> [--config report.json] [--out DIR]";
pub const DEFAULT_OUT_DIR: &str = "test-reports";
pub const TEXT_REPORT: &str = "suite-report.txt";
pub const JSON_REPORT: &str = "suite-report.json";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    pub results: PathBuf,
    pub config: Option<PathBuf>,
    pub out_dir: PathBuf,
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> anyhow::Result<RunArgs>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut results = None;
    let mut config = None;
    let mut out_dir = PathBuf::from(DEFAULT_OUT_DIR);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let Some(value) = args.next() else {
                    bail!("missing value for --config\n{USAGE}");
                };
                config = Some(PathBuf::from(value));
            }
            "--out" => {
                let Some(value) = args.next() else {
                    bail!("missing value for --out\n{USAGE}");
                };
                out_dir = PathBuf::from(value);
            }
            other if results.is_none() && !other.starts_with("--") => {
                results = Some(PathBuf::from(other));
            }
            other => bail!("unexpected argument: {other}\n{USAGE}"),
        }
    }
    let Some(results) = results else {
        bail!("{USAGE}");
    };
    Ok(RunArgs {
        results,
        config,
        out_dir,
    })
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ReportConfig> {
    let Some(path) = path else {
        return Ok(ReportConfig::default());
    };
    let raw = fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    ReportConfig::from_json_str(&raw).with_context(|| format!("parse config {}", path.display()))
}

/// Builds, prints, and saves the report. Returns whether every test passed.
pub fn run(args: &RunArgs) -> anyhow::Result<bool> {
    let cfg = load_config(args.config.as_deref())?;
    info!(results = %args.results.display(), out = %args.out_dir.display(), "Building suite report");

    let mut aggregator = ResultAggregator::with_config(cfg);
    SuiteResults::load(&args.results)?.apply_to(&mut aggregator);

    let report = aggregator.generate_report();
    println!("{}", report);

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output directory {}", args.out_dir.display()))?;
    let text_path = args.out_dir.join(TEXT_REPORT);
    let json_path = args.out_dir.join(JSON_REPORT);

    let snapshot = aggregator.snapshot();
    snapshot
        .save_text(aggregator.config(), &text_path)
        .with_context(|| format!("write {}", text_path.display()))?;
    snapshot
        .save_json(&json_path)
        .with_context(|| format!("write {}", json_path.display()))?;
    info!(text = %text_path.display(), json = %json_path.display(), "Reports saved");

    Ok(aggregator.all_passed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_out_dir() {
        let args = parse_args(["results.json"]).unwrap();
        assert_eq!(args.results, PathBuf::from("results.json"));
        assert_eq!(args.config, None);
        assert_eq!(args.out_dir, PathBuf::from("test-reports"));
    }

    #[test]
    fn flags_in_any_position() {
        let args = parse_args(["--out", "dist", "r.json", "--config", "cfg.json"]).unwrap();
        assert_eq!(args.results, PathBuf::from("r.json"));
        assert_eq!(args.config, Some(PathBuf::from("cfg.json")));
        assert_eq!(args.out_dir, PathBuf::from("dist"));
    }

    #[test]
    fn trailing_flag_reports_missing_value() {
        let err = parse_args(["r.json", "--config"]).unwrap_err();
        assert!(err.to_string().starts_with("missing value for --config"));
        let err = parse_args(["r.json", "--out"]).unwrap_err();
        assert!(err.to_string().starts_with("missing value for --out"));
    }

    #[test]
    fn rejects_unknown_and_extra_arguments() {
        assert!(parse_args(["r.json", "--verbose"])
            .unwrap_err()
            .to_string()
            .starts_with("unexpected argument: --verbose"));
        assert!(parse_args(["a.json", "b.json"]).is_err());
        assert_eq!(parse_args(Vec::<String>::new()).unwrap_err().to_string(), USAGE);
    }
}
