//! Configuration types for cloud-db-advisor.

use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// File values override defaults and CLI flags override file values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Workload volumes to evaluate
    pub workload: WorkloadConfig,
    /// Raw priority weights
    pub priorities: PriorityConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the stored data volume in GB.
    pub const fn storage_gb(mut self, storage_gb: f64) -> Self {
        self.config.workload.storage_gb = storage_gb;
        self
    }

    /// Set the monthly request volume in millions.
    pub const fn requests_millions(mut self, requests_millions: f64) -> Self {
        self.config.workload.requests_millions = requests_millions;
        self
    }

    /// Set all three raw priority weights.
    pub const fn priorities(mut self, cost: f64, carbon: f64, security: f64) -> Self {
        self.config.priorities = PriorityConfig {
            cost,
            carbon,
            security,
        };
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Fail when the winning score is below this threshold.
    pub const fn min_score(mut self, min_score: Option<f64>) -> Self {
        self.config.behavior.min_score = min_score;
        self
    }

    /// Set the projection horizons.
    pub const fn projection(mut self, months: u32, years: u32) -> Self {
        self.config.behavior.projection_months = months;
        self.config.behavior.tco_years = years;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Default stored data volume (GB)
pub const DEFAULT_STORAGE_GB: f64 = 1000.0;
/// Default monthly request volume (millions)
pub const DEFAULT_REQUESTS_MILLIONS: f64 = 100.0;
/// Default raw weight for each priority
pub const DEFAULT_PRIORITY_WEIGHT: f64 = 5.0;
/// Default cumulative-cost horizon in months
pub const DEFAULT_PROJECTION_MONTHS: u32 = 12;
/// Default total-cost-of-ownership horizon in years
pub const DEFAULT_TCO_YEARS: u32 = 5;
/// Longest cumulative-cost horizon accepted (100 years)
pub const MAX_PROJECTION_MONTHS: u32 = 1200;

/// Workload volumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Stored data volume in GB (must be > 0)
    pub storage_gb: f64,
    /// Monthly requests in millions (must be > 0)
    pub requests_millions: f64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            storage_gb: DEFAULT_STORAGE_GB,
            requests_millions: DEFAULT_REQUESTS_MILLIONS,
        }
    }
}

/// Raw priority weights; normalized at evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PriorityConfig {
    /// Importance of low cost (>= 0)
    #[schemars(range(min = 0.0))]
    pub cost: f64,
    /// Importance of low carbon footprint (>= 0)
    #[schemars(range(min = 0.0))]
    pub carbon: f64,
    /// Importance of security and compliance (>= 0)
    #[schemars(range(min = 0.0))]
    pub security: f64,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            cost: DEFAULT_PRIORITY_WEIGHT,
            carbon: DEFAULT_PRIORITY_WEIGHT,
            security: DEFAULT_PRIORITY_WEIGHT,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (stdout if not set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 when the recommended option scores below this (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0.0, max = 100.0))]
    pub min_score: Option<f64>,
    /// Months covered by the cumulative cost projection
    pub projection_months: u32,
    /// Years covered by the total cost of ownership
    pub tco_years: u32,
    /// Suppress non-essential output
    pub quiet: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            min_score: None,
            projection_months: DEFAULT_PROJECTION_MONTHS,
            tco_years: DEFAULT_TCO_YEARS,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard() {
        let config = AppConfig::default();
        assert_eq!(config.workload.storage_gb, 1000.0);
        assert_eq!(config.workload.requests_millions, 100.0);
        assert_eq!(config.priorities.cost, 5.0);
        assert_eq!(config.priorities.carbon, 5.0);
        assert_eq!(config.priorities.security, 5.0);
        assert_eq!(config.behavior.projection_months, 12);
        assert_eq!(config.behavior.tco_years, 5);
        assert_eq!(config.output.format, ReportFormat::Auto);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .storage_gb(250.0)
            .requests_millions(10.0)
            .priorities(1.0, 2.0, 3.0)
            .output_format(ReportFormat::Json)
            .min_score(Some(75.0))
            .projection(24, 3)
            .build();
        assert_eq!(config.workload.storage_gb, 250.0);
        assert_eq!(config.priorities.security, 3.0);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.behavior.min_score, Some(75.0));
        assert_eq!(config.behavior.projection_months, 24);
        assert_eq!(config.behavior.tco_years, 3);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: AppConfig = serde_yaml::from_str("priorities:\n  security: 8\n").unwrap();
        assert_eq!(config.priorities.security, 8.0);
        assert_eq!(config.priorities.cost, 5.0);
        assert_eq!(config.workload.storage_gb, 1000.0);
    }
}
