//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ReportKind};
use crate::model::{Architecture, ArchitectureProfile, PriorityWeights, Workload};
use crate::pipeline::Evaluation;
use crate::scoring::{
    BENCHMARK_SCORE, CostProjection, EfficiencyProfile, Insights, MetricSnapshot, Recommendation,
};
use chrono::Utc;
use indexmap::IndexMap;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, report: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        }?;
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_evaluation_report(
        &self,
        evaluation: &Evaluation,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let recommendation_section = matches!(config.kind, ReportKind::Recommendation);

        let report = JsonEvaluationReport {
            metadata: JsonReportMetadata::new(config.kind),
            workload: &evaluation.workload,
            weights: WeightsInfo::from_weights(&evaluation.weights),
            recommendation: recommendation_section.then(|| RecommendationInfo {
                result: &evaluation.recommendation,
                benchmark: BENCHMARK_SCORE,
                delta_from_benchmark: evaluation.recommendation.delta_from_benchmark(),
            }),
            metrics: match config.kind {
                ReportKind::Projection => None,
                _ => Some(&evaluation.metrics),
            },
            insights: (recommendation_section && config.include_insights)
                .then_some(&evaluation.insights),
            efficiency: recommendation_section.then_some(&evaluation.efficiency),
            projections: match config.kind {
                ReportKind::Metrics => None,
                _ => Some(&evaluation.projections),
            },
        };

        self.render(&report)
    }

    fn generate_options_report(
        &self,
        profiles: &[ArchitectureProfile],
    ) -> Result<String, ReportError> {
        let report = JsonOptionsReport {
            metadata: JsonReportMetadata::options(),
            options: profiles,
        };
        self.render(&report)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON report structures

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    report: &'static str,
}

impl JsonReportMetadata {
    fn new(kind: ReportKind) -> Self {
        Self {
            tool: ToolInfo::current(),
            generated_at: Utc::now().to_rfc3339(),
            report: match kind {
                ReportKind::Recommendation => "recommendation",
                ReportKind::Metrics => "metrics",
                ReportKind::Projection => "projection",
            },
        }
    }

    fn options() -> Self {
        Self {
            tool: ToolInfo::current(),
            generated_at: Utc::now().to_rfc3339(),
            report: "options",
        }
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

impl ToolInfo {
    const fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Serialize)]
struct WeightsInfo {
    cost: f64,
    carbon: f64,
    security: f64,
    /// Whole-number percentages in (cost, carbon, security) order
    percentages: [f64; 3],
}

impl WeightsInfo {
    fn from_weights(weights: &PriorityWeights) -> Self {
        Self {
            cost: weights.cost(),
            carbon: weights.carbon(),
            security: weights.security(),
            percentages: weights.as_percentages(),
        }
    }
}

#[derive(Serialize)]
struct RecommendationInfo<'a> {
    #[serde(flatten)]
    result: &'a Recommendation,
    benchmark: f64,
    delta_from_benchmark: f64,
}

#[derive(Serialize)]
struct JsonEvaluationReport<'a> {
    metadata: JsonReportMetadata,
    workload: &'a Workload,
    weights: WeightsInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendation: Option<RecommendationInfo<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<&'a IndexMap<Architecture, MetricSnapshot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    insights: Option<&'a Insights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    efficiency: Option<&'a IndexMap<Architecture, EfficiencyProfile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    projections: Option<&'a Vec<CostProjection>>,
}

#[derive(Serialize)]
struct JsonOptionsReport<'a> {
    metadata: JsonReportMetadata,
    options: &'a [ArchitectureProfile],
}
