//! Console report rendering and export.
//!
//! Rendering is a pure function of a [`ReportSnapshot`], so two snapshots
//! taken at different times can be rendered and compared side by side.
//! The layout is fixed:
//! - Boxed title banner
//! - Execution period
//! - Overall statistics with pass status
//! - Per-category breakdown in recording order
//! - Critical failures (only when any were flagged)
//! - Coverage against the configured target
//! - Closing success or attention banner

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::aggregator::{format_timestamp, AggregateState, CategoryEntry};
use crate::config::ReportConfig;

const BANNER_WIDTH: usize = 76;

const ACHIEVED: &str = "✅ ACHIEVED";
const NOT_ACHIEVED: &str = "❌ NOT ACHIEVED";

/// Frozen aggregator state plus derived figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSnapshot {
    #[serde(flatten)]
    pub state: AggregateState,
    pub overall_pass_rate: f64,
}

impl ReportSnapshot {
    pub fn from_state(state: AggregateState) -> Self {
        let overall_pass_rate = state.overall_pass_rate();
        ReportSnapshot {
            state,
            overall_pass_rate,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.state.total_failed == 0
    }

    pub fn coverage_met(&self, config: &ReportConfig) -> bool {
        self.state.coverage_percentage >= config.coverage_target
    }

    /// Save rendered report to file.
    pub fn save_text(&self, config: &ReportConfig, path: &Path) -> std::io::Result<()> {
        fs::write(path, render_report(self, config))
    }

    /// Save snapshot as JSON.
    pub fn save_json(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }
}

/// Render the full console report.
pub fn render_report(snapshot: &ReportSnapshot, config: &ReportConfig) -> String {
    let mut report = String::new();
    report.push_str(&banner(config));
    report.push_str(&period(snapshot));
    report.push_str(&overall(snapshot));
    report.push_str("\nTest Category Breakdown:\n");
    for entry in &snapshot.state.categories {
        report.push_str(&category_block(entry));
    }
    report.push_str(&critical_failures(&snapshot.state.critical_failures));
    report.push_str(&coverage(snapshot, config));
    report.push_str(&closing(snapshot));
    report
}

fn status(achieved: bool) -> &'static str {
    if achieved {
        ACHIEVED
    } else {
        NOT_ACHIEVED
    }
}

fn banner(config: &ReportConfig) -> String {
    let edge = "═".repeat(BANNER_WIDTH);
    let blank = " ".repeat(BANNER_WIDTH);
    format!(
        "\n╔{edge}╗\n║{blank}║\n║{title:^w$}║\n║{subtitle:^w$}║\n║{blank}║\n╚{edge}╝\n",
        title = config.title,
        subtitle = config.subtitle,
        w = BANNER_WIDTH,
    )
}

fn period(snapshot: &ReportSnapshot) -> String {
    let end = snapshot
        .state
        .end_time
        .as_ref()
        .map(format_timestamp)
        .unwrap_or_else(|| "in progress".to_string());
    format!(
        "\nTest Execution Period:\n  Start: {}\n  End: {}\n",
        format_timestamp(&snapshot.state.start_time),
        end
    )
}

fn overall(snapshot: &ReportSnapshot) -> String {
    let state = &snapshot.state;
    format!(
        "\nOverall Statistics:\n  Total Tests: {}\n  Passed: {} ({:.2}%)\n  Failed: {}\n  Target: 100% Pass Rate\n  Status: {}\n",
        state.total_tests,
        state.total_passed,
        snapshot.overall_pass_rate,
        state.total_failed,
        status(snapshot.all_passed()),
    )
}

fn category_block(entry: &CategoryEntry) -> String {
    let glyph = if entry.result.all_passed() { "✅" } else { "❌" };
    format!(
        "\n  {} {}:\n     Total: {}\n     Passed: {}\n     Failed: {}\n     Pass Rate: {:.2}%\n",
        glyph,
        entry.name,
        entry.result.total,
        entry.result.passed,
        entry.result.failed,
        entry.result.pass_rate,
    )
}

fn critical_failures(failures: &[String]) -> String {
    if failures.is_empty() {
        return String::new();
    }
    let mut block = String::from("\nCritical Failures:\n");
    for failure in failures {
        block.push_str(&format!("  - {}\n", failure));
    }
    block
}

fn coverage(snapshot: &ReportSnapshot, config: &ReportConfig) -> String {
    format!(
        "\nCode Coverage:\n  Target: >{}%\n  Achieved: {:.2}%\n  Status: {}\n\n{}\n",
        config.coverage_target,
        snapshot.state.coverage_percentage,
        status(snapshot.coverage_met(config)),
        "=".repeat(config.rule_width),
    )
}

fn closing(snapshot: &ReportSnapshot) -> String {
    if snapshot.all_passed() {
        "\n🎉 SUCCESS! All tests passed\n✅ 100% Pass Rate Achieved\n✅ Ready for Production Deployment\n"
            .to_string()
    } else {
        format!(
            "\n⚠️ ATTENTION REQUIRED\n{} tests failed - Review and fix required\n",
            snapshot.state.total_failed
        )
    }
}
