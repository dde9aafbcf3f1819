//! Scoring and recommendation engine.
//!
//! Turns a workload and three priority weights into per-option metrics, a
//! weighted overall score, and a recommendation.
//!
//! # Usage
//!
//! ```
//! use cloud_db_advisor::scoring::ScoringEngine;
//! use cloud_db_advisor::model::Architecture;
//!
//! let engine = ScoringEngine::new(1000.0, 100.0, 5.0, 5.0, 5.0)?;
//! assert_eq!(engine.monthly_cost(Architecture::AuroraServerless), 285.0);
//!
//! let rec = engine.recommend();
//! println!("{} ({:.2}/100): {}", rec.recommended_name, rec.score, rec.reason);
//! # Ok::<(), cloud_db_advisor::AdvisorError>(())
//! ```
//!
//! The cost and carbon scales are capped at fixed values
//! ([`COST_SCORE_CAP`], [`CARBON_SCORE_CAP`]) rather than derived from the
//! option set; anything at or beyond a cap scores 0 on that axis.

mod engine;
mod insights;
mod snapshot;

pub use engine::{
    CARBON_SCORE_CAP, COST_SCORE_CAP, ScoringEngine, carbon_score_for, cost_score_for,
};
pub use insights::{
    CostProjection, EfficiencyProfile, Insights, KG_CO2_PER_TREE_YEAR, trees_to_offset,
};
pub use snapshot::{BENCHMARK_SCORE, MetricSnapshot, Rationale, Recommendation, ScoreBand};
