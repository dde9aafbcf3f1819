//! Evaluation stage: build the engine from configuration and collect
//! everything the reporters render.

use crate::config::{AppConfig, MAX_PROJECTION_MONTHS};
use crate::error::AdvisorError;
use crate::model::{Architecture, PriorityWeights, Workload};
use crate::scoring::{
    CostProjection, EfficiencyProfile, Insights, MetricSnapshot, Recommendation, ScoringEngine,
};
use indexmap::IndexMap;
use serde::Serialize;

/// Complete result of one evaluation run.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub workload: Workload,
    /// Normalized weights actually used for scoring
    pub weights: PriorityWeights,
    pub metrics: IndexMap<Architecture, MetricSnapshot>,
    pub recommendation: Recommendation,
    pub insights: Insights,
    pub efficiency: IndexMap<Architecture, EfficiencyProfile>,
    pub projections: Vec<CostProjection>,
}

/// Build a scoring engine from the workload and priority sections.
pub fn build_engine(config: &AppConfig) -> crate::Result<ScoringEngine> {
    ScoringEngine::new(
        config.workload.storage_gb,
        config.workload.requests_millions,
        config.priorities.cost,
        config.priorities.carbon,
        config.priorities.security,
    )
}

/// Run the full evaluation for a configuration.
pub fn evaluate(config: &AppConfig) -> crate::Result<Evaluation> {
    let engine = build_engine(config)?;
    if config.behavior.projection_months > MAX_PROJECTION_MONTHS {
        return Err(AdvisorError::config(format!(
            "projection horizon of {} months exceeds {MAX_PROJECTION_MONTHS}",
            config.behavior.projection_months
        )));
    }

    tracing::debug!(
        "Evaluating {} GB / {}M requests",
        config.workload.storage_gb,
        config.workload.requests_millions
    );

    let efficiency = Architecture::ALL
        .iter()
        .map(|&arch| (arch, engine.efficiency_profile(arch)))
        .collect();

    Ok(Evaluation {
        workload: *engine.workload(),
        weights: *engine.weights(),
        metrics: engine.all_metrics(),
        recommendation: engine.recommend(),
        insights: engine.insights(),
        efficiency,
        projections: engine.cost_projection(
            config.behavior.projection_months,
            config.behavior.tco_years,
        ),
    })
}

impl Evaluation {
    /// Snapshot of the recommended option
    #[must_use]
    pub fn recommended_snapshot(&self) -> Option<&MetricSnapshot> {
        self.metrics.get(&self.recommendation.architecture_key)
    }
}
