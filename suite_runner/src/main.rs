//! Standalone report binary.
//!
//! Usage:
//!   cargo run -p suite_runner -- <results.json> [--config report.json] [--out test-reports]
//!
//! Exits with status 1 when any test failed.

use suite_runner::{parse_args, run};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    if !run(&args)? {
        std::process::exit(1);
    }
    Ok(())
}
