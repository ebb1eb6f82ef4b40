//! Per-category result aggregation.
//!
//! A [`ResultAggregator`] collects `(category, passed, failed, total)` tuples
//! from whatever ran the tests, keeps running totals, and renders the
//! console report on demand.
//!
//! # Usage
//! ```ignore
//! let mut agg = ResultAggregator::new();
//! agg.record("unit", 100, 0, 100);
//! agg.record("integration", 80, 20, 100);
//! agg.set_coverage_percentage(99.2);
//! println!("{}", agg.generate_report());
//! ```

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ReportConfig;
use crate::report::{render_report, ReportSnapshot};

/// Local wall-clock time without offset, as printed in reports.
pub type Timestamp = NaiveDateTime;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Current local time.
pub fn now() -> Timestamp {
    Local::now().naive_local()
}

/// ISO-8601 rendering with microseconds, e.g. `2024-05-01T12:30:00.000000`.
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Percentage of `total` that passed; 0 when `total` is 0.
pub fn pass_rate(passed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (passed as f64 / total as f64) * 100.0
}

/// Counts for one category, as reported by the test runner.
///
/// `passed + failed <= total` is the caller's business; nothing here checks it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub passed: u64,
    pub failed: u64,
    pub total: u64,
    pub pass_rate: f64,
}

impl CategoryResult {
    pub fn new(passed: u64, failed: u64, total: u64) -> Self {
        CategoryResult {
            passed,
            failed,
            total,
            pass_rate: pass_rate(passed, total),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// A named category in recording order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    #[serde(flatten)]
    pub result: CategoryResult,
}

/// Everything the aggregator has seen so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateState {
    pub start_time: Timestamp,
    /// Set by the most recent report generation.
    pub end_time: Option<Timestamp>,
    pub categories: Vec<CategoryEntry>,
    pub total_tests: u64,
    pub total_passed: u64,
    pub total_failed: u64,
    pub coverage_percentage: f64,
    pub critical_failures: Vec<String>,
}

impl AggregateState {
    fn new(start_time: Timestamp) -> Self {
        AggregateState {
            start_time,
            end_time: None,
            categories: Vec::new(),
            total_tests: 0,
            total_passed: 0,
            total_failed: 0,
            coverage_percentage: 0.0,
            critical_failures: Vec::new(),
        }
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Option<&CategoryResult> {
        self.categories
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.result)
    }

    pub fn overall_pass_rate(&self) -> f64 {
        pass_rate(self.total_passed, self.total_tests)
    }
}

/// Accumulates category results and renders the suite report.
///
/// No internal locking: `record` and `generate_report` take `&mut self`, so
/// sharing one across threads means wrapping it in the caller's own mutex.
#[derive(Debug, Clone)]
pub struct ResultAggregator {
    state: AggregateState,
    config: ReportConfig,
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultAggregator {
    /// Starts the clock now with the default report config.
    pub fn new() -> Self {
        Self::with_config(ReportConfig::default())
    }

    pub fn with_config(config: ReportConfig) -> Self {
        Self::started_at(now(), config)
    }

    /// Uses an explicit start time instead of the wall clock.
    pub fn started_at(start_time: Timestamp, config: ReportConfig) -> Self {
        ResultAggregator {
            state: AggregateState::new(start_time),
            config,
        }
    }

    /// Records one category and adds its counts to the running totals.
    ///
    /// Recording a name twice replaces the stored entry in place, but both
    /// calls stay counted in the totals.
    pub fn record(&mut self, category: &str, passed: u64, failed: u64, total: u64) {
        let result = CategoryResult::new(passed, failed, total);

        match self.state.categories.iter_mut().find(|e| e.name == category) {
            Some(existing) => {
                warn!(
                    category,
                    previous_total = existing.result.total,
                    total,
                    "Category recorded twice; entry replaced, totals keep both"
                );
                existing.result = result;
            }
            None => self.state.categories.push(CategoryEntry {
                name: category.to_string(),
                result,
            }),
        }

        let state = &mut self.state;
        let (tests, passed_sum, failed_sum) = (
            state.total_tests.checked_add(total),
            state.total_passed.checked_add(passed),
            state.total_failed.checked_add(failed),
        );
        if tests.is_none() || passed_sum.is_none() || failed_sum.is_none() {
            warn!(category, "Running totals saturated at u64::MAX");
        }
        state.total_tests = tests.unwrap_or(u64::MAX);
        state.total_passed = passed_sum.unwrap_or(u64::MAX);
        state.total_failed = failed_sum.unwrap_or(u64::MAX);

        debug!(
            category,
            passed,
            failed,
            total,
            pass_rate = result.pass_rate,
            "Recorded category"
        );
    }

    pub fn set_coverage_percentage(&mut self, percent: f64) {
        self.state.coverage_percentage = percent;
    }

    pub fn record_critical_failure(&mut self, description: &str) {
        self.state.critical_failures.push(description.to_string());
    }

    pub fn state(&self) -> &AggregateState {
        &self.state
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn overall_pass_rate(&self) -> f64 {
        self.state.overall_pass_rate()
    }

    /// True when no test in any category failed.
    pub fn all_passed(&self) -> bool {
        self.state.total_failed == 0
    }

    /// Copy of the current state for rendering or export.
    pub fn snapshot(&self) -> ReportSnapshot {
        ReportSnapshot::from_state(self.state.clone())
    }

    /// Stamps the end time with the wall clock and renders the report.
    ///
    /// Counters are untouched, so repeated calls differ only in `End:`.
    pub fn generate_report(&mut self) -> String {
        self.generate_report_at(now())
    }

    pub fn generate_report_at(&mut self, end_time: Timestamp) -> String {
        self.state.end_time = Some(end_time);
        info!(
            categories = self.state.categories.len(),
            total = self.state.total_tests,
            failed = self.state.total_failed,
            coverage = self.state.coverage_percentage,
            "Generating suite report"
        );
        render_report(&self.snapshot(), &self.config)
    }
}
