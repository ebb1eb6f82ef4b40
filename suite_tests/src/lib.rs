//! Fixtures shared by the integration tests.

use chrono::NaiveDate;
use suite_shared::aggregator::{ResultAggregator, Timestamp};
use suite_shared::config::ReportConfig;

/// Fixed instant on 2024-05-01.
pub fn at(h: u32, m: u32, s: u32) -> Timestamp {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .expect("valid fixture time")
}

/// Aggregator started at 09:00 with the default config.
pub fn fixed_aggregator() -> ResultAggregator {
    ResultAggregator::started_at(at(9, 0, 0), ReportConfig::default())
}

/// A results document covering the usual suite categories.
pub const NIGHTLY_RESULTS: &str = r#"{
    "categories": [
        { "name": "Unit Tests", "passed": 3000, "failed": 0, "total": 3000 },
        { "name": "Integration Tests", "passed": 1990, "failed": 10, "total": 2000 },
        { "name": "E2E Tests", "passed": 1000, "failed": 0, "total": 1000 },
        { "name": "Security Tests", "passed": 1000, "failed": 0, "total": 1000 },
        { "name": "Chaos Tests", "passed": 0, "failed": 0, "total": 0 }
    ],
    "coverage_percentage": 98.7
}"#;
