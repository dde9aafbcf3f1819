//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Auto-detect: summary if TTY, JSON otherwise
    #[default]
    Auto,
    /// Human-readable terminal summary
    Summary,
    /// Aligned columns, one row per option
    Table,
    /// Structured JSON output
    Json,
    /// Markdown tables
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Summary => write!(f, "summary"),
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// What a report is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Winner, rationale, comparison and insights
    Recommendation,
    /// Per-option metric snapshots only
    Metrics,
    /// Cumulative cost and total cost of ownership
    Projection,
}

impl ReportKind {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Recommendation => "Database Architecture Recommendation",
            Self::Metrics => "Architecture Metrics",
            Self::Projection => "Cost Projection",
        }
    }
}

/// Rendering options shared by all reporters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Which report to render
    pub kind: ReportKind,
    /// Include the insights section (recommendation reports)
    pub include_insights: bool,
}

impl ReportConfig {
    #[must_use]
    pub const fn new(kind: ReportKind) -> Self {
        Self {
            kind,
            include_insights: true,
        }
    }

    #[must_use]
    pub const fn without_insights(mut self) -> Self {
        self.include_insights = false;
        self
    }
}
