//! Results file loading.
//!
//! Whatever executes the suites writes one JSON document per run:
//!
//! ```json
//! {
//!   "categories": [
//!     { "name": "unit", "passed": 3000, "failed": 0, "total": 3000 }
//!   ],
//!   "coverage_percentage": 99.4,
//!   "critical_failures": []
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregator::ResultAggregator;

/// Counts for one category as written by the test runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub name: String,
    pub passed: u64,
    pub failed: u64,
    pub total: u64,
}

/// One run's worth of results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuiteResults {
    pub categories: Vec<CategoryCounts>,
    #[serde(default)]
    pub coverage_percentage: f64,
    #[serde(default)]
    pub critical_failures: Vec<String>,
}

impl SuiteResults {
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read results file {}", path.display()))?;
        let results = Self::from_json_str(&raw)
            .with_context(|| format!("parse results file {}", path.display()))?;
        debug!(path = %path.display(), categories = results.categories.len(), "Loaded results");
        Ok(results)
    }

    /// Feed every category, in file order, plus coverage and critical failures.
    pub fn apply_to(&self, aggregator: &mut ResultAggregator) {
        for c in &self.categories {
            aggregator.record(&c.name, c.passed, c.failed, c.total);
        }
        aggregator.set_coverage_percentage(self.coverage_percentage);
        for failure in &self.critical_failures {
            aggregator.record_critical_failure(failure);
        }
    }
}
