use std::fs;
use std::path::Path;
use std::process::Command;

use suite_runner::{parse_args, run, JSON_REPORT, TEXT_REPORT};

const PASSING: &str = r#"{
    "categories": [{ "name": "unit", "passed": 100, "failed": 0, "total": 100 }],
    "coverage_percentage": 99.5
}"#;

const FAILING: &str = r#"{
    "categories": [{ "name": "integration", "passed": 80, "failed": 20, "total": 100 }]
}"#;

fn write_results(dir: &Path, name: &str, body: &str) -> anyhow::Result<String> {
    let path = dir.join(name);
    fs::write(&path, body)?;
    Ok(path.display().to_string())
}

#[test]
fn run_writes_both_reports() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let results = write_results(dir.path(), "results.json", PASSING)?;
    let out = dir.path().join("out");
    let out_str = out.display().to_string();

    let passed = run(&parse_args([results.as_str(), "--out", out_str.as_str()])?)?;
    assert!(passed);

    let text = fs::read_to_string(out.join(TEXT_REPORT))?;
    assert!(text.contains("Total Tests: 100"));
    assert!(text.contains("🎉 SUCCESS!"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(out.join(JSON_REPORT))?)?;
    assert_eq!(json["total_tests"], 100);
    assert!(json["end_time"].is_string());
    Ok(())
}

#[test]
fn run_reports_failures_and_applies_config() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let results = write_results(dir.path(), "results.json", FAILING)?;
    let config = write_results(dir.path(), "report.json", r#"{"title": "NIGHTLY RUN"}"#)?;
    let out = dir.path().join("out");
    let out_str = out.display().to_string();

    let args = parse_args([
        results.as_str(),
        "--config",
        config.as_str(),
        "--out",
        out_str.as_str(),
    ])?;
    assert!(!run(&args)?);

    let text = fs::read_to_string(out.join(TEXT_REPORT))?;
    assert!(text.contains("NIGHTLY RUN"));
    assert!(text.contains("20 tests failed"));
    Ok(())
}

#[test]
fn run_fails_on_missing_results() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("absent.json").display().to_string();
    let out_str = dir.path().join("out").display().to_string();

    let err = run(&parse_args([missing.as_str(), "--out", out_str.as_str()])?).unwrap_err();
    assert!(format!("{err:#}").contains("read results file"));
    Ok(())
}

#[test]
fn binary_exit_status_follows_failures() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let passing = write_results(dir.path(), "pass.json", PASSING)?;
    let failing = write_results(dir.path(), "fail.json", FAILING)?;

    let status = Command::new(env!("CARGO_BIN_EXE_suite-report"))
        .arg(&passing)
        .arg("--out")
        .arg(dir.path().join("pass-out"))
        .output()?;
    assert!(status.status.success());
    assert!(String::from_utf8_lossy(&status.stdout).contains("Total Tests: 100"));

    let status = Command::new(env!("CARGO_BIN_EXE_suite-report"))
        .arg(&failing)
        .arg("--out")
        .arg(dir.path().join("fail-out"))
        .output()?;
    assert_eq!(status.status.code(), Some(1));
    assert!(dir.path().join("fail-out").join(TEXT_REPORT).exists());
    Ok(())
}

#[test]
fn binary_default_out_dir() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let passing = write_results(dir.path(), "pass.json", PASSING)?;

    let output = Command::new(env!("CARGO_BIN_EXE_suite-report"))
        .arg(&passing)
        .current_dir(dir.path())
        .output()?;
    assert!(output.status.success());
    assert!(dir.path().join("test-reports").join(JSON_REPORT).exists());
    Ok(())
}

#[test]
fn binary_rejects_dangling_flag() -> anyhow::Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_suite-report"))
        .args(["results.json", "--out"])
        .output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing value for --out"));
    Ok(())
}
