//! Value objects produced by the scoring engine.

use crate::model::Architecture;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reference score the dashboard gauge measures deltas against.
pub const BENCHMARK_SCORE: f64 = 70.0;

/// Every computed value for one option under one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    /// Option identifier
    pub architecture: Architecture,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Monthly cost in USD
    pub monthly_cost: f64,
    /// Annual cost in USD (monthly × 12)
    pub annual_cost: f64,
    /// Monthly emissions in kg CO₂
    pub monthly_carbon: f64,
    /// Annual emissions in kg CO₂ (monthly × 12)
    pub annual_carbon: f64,
    /// Security total (0-100)
    pub security_score: u8,
    /// SLA availability percentage
    pub availability: f64,
    /// Weighted overall score (0-100)
    pub overall_score: f64,
}

/// Why a recommendation was made, chosen by the dominant priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rationale {
    /// Normalized security weight above 0.5
    SecurityFocused,
    /// Normalized carbon weight above 0.5
    CarbonFocused,
    /// Normalized cost weight above 0.5
    CostFocused,
    /// No single priority dominates
    Balanced,
}

impl Rationale {
    /// Human-readable justification
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::SecurityFocused => {
                "Based on your high security priority, this option provides the best protection while managing costs."
            }
            Self::CarbonFocused => {
                "This option minimizes environmental impact while maintaining security standards."
            }
            Self::CostFocused => {
                "This option provides the best value for money with acceptable security and sustainability."
            }
            Self::Balanced => {
                "This option provides the best balanced solution across all your priorities."
            }
        }
    }
}

/// Coarse band for an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 80 and above
    High,
    /// 60 up to 80
    Medium,
    /// Below 60
    Low,
}

impl ScoreBand {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::High
        } else if score >= 60.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// The winning option and the scores it beat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Recommendation {
    /// Display name of the winner
    pub recommended_name: String,
    /// Identifier of the winner
    pub architecture_key: Architecture,
    /// Winner's overall score
    pub score: f64,
    /// Overall score of every option, in canonical order
    pub all_scores: IndexMap<Architecture, f64>,
    /// Justification text
    pub reason: String,
    /// Which priority drove the justification
    pub rationale: Rationale,
    /// Band of the winning score
    pub band: ScoreBand,
}

impl Recommendation {
    /// Winner's score minus [`BENCHMARK_SCORE`]
    #[must_use]
    pub fn delta_from_benchmark(&self) -> f64 {
        crate::utils::round2(self.score - BENCHMARK_SCORE)
    }

    /// Options other than the winner, with their scores
    pub fn runners_up(&self) -> impl Iterator<Item = (Architecture, f64)> + '_ {
        self.all_scores
            .iter()
            .filter(|(arch, _)| **arch != self.architecture_key)
            .map(|(arch, score)| (*arch, *score))
    }
}
