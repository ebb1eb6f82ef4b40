//! Report configuration.
//!
//! Loads report configuration from JSON strings (file IO left to app).

use serde::{Deserialize, Serialize};

/// Presentation settings for a rendered report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// First banner line.
    #[serde(default = "default_title")]
    pub title: String,
    /// Second banner line.
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    /// Coverage at or above this percentage counts as achieved.
    #[serde(default = "default_coverage_target")]
    pub coverage_target: f64,
    /// Width of the `=` rule before the closing banner.
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,
}

fn default_title() -> String {
    "MASTER TEST SUITE - COMPREHENSIVE RESULTS".to_string()
}

fn default_subtitle() -> String {
    "Production Test Suite".to_string()
}

fn default_coverage_target() -> f64 {
    99.0
}

fn default_rule_width() -> usize {
    80
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            coverage_target: default_coverage_target(),
            rule_width: default_rule_width(),
        }
    }
}

impl ReportConfig {
    /// Parses config from JSON. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
