//! Weighted scoring engine.
//!
//! Combines cost, carbon and security into one overall score per option and
//! picks the winner.

use crate::error::Result;
use crate::model::{Architecture, PriorityWeights, Workload, profile, reference};
use crate::utils::round2;
use indexmap::IndexMap;

use super::snapshot::{MetricSnapshot, Rationale, Recommendation, ScoreBand};

/// Monthly cost at which the cost score reaches 0 (USD)
pub const COST_SCORE_CAP: f64 = 1000.0;

/// Monthly emissions at which the carbon score reaches 0 (kg CO₂)
pub const CARBON_SCORE_CAP: f64 = 100.0;

/// Weight above which a priority is considered dominant
const DOMINANT_WEIGHT: f64 = 0.5;

/// One evaluation session: a workload and a set of normalized priorities.
///
/// Every operation is a pure function of the construction inputs and the
/// reference tables. Build one engine per request; there is no interior state
/// to share.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringEngine {
    workload: Workload,
    weights: PriorityWeights,
}

impl ScoringEngine {
    /// Validate inputs, normalize weights, and build an engine.
    pub fn new(
        storage_gb: f64,
        requests_millions: f64,
        cost_weight: f64,
        carbon_weight: f64,
        security_weight: f64,
    ) -> Result<Self> {
        let workload = Workload::new(storage_gb, requests_millions)?;
        let weights = PriorityWeights::normalize(cost_weight, carbon_weight, security_weight)?;
        Self::from_parts(workload, weights)
    }

    /// Build from already-validated inputs.
    pub fn from_parts(workload: Workload, weights: PriorityWeights) -> Result<Self> {
        reference::validate_reference_data()?;
        tracing::debug!(
            storage_gb = workload.storage_gb,
            requests_millions = workload.requests_millions,
            cost = weights.cost(),
            carbon = weights.carbon(),
            security = weights.security(),
            "Scoring engine initialized"
        );
        Ok(Self { workload, weights })
    }

    #[must_use]
    pub const fn workload(&self) -> &Workload {
        &self.workload
    }

    #[must_use]
    pub const fn weights(&self) -> &PriorityWeights {
        &self.weights
    }

    // ========================================================================
    // Per-option metrics
    // ========================================================================

    /// Monthly cost in USD, rounded to 2 dp.
    #[must_use]
    pub fn monthly_cost(&self, arch: Architecture) -> f64 {
        let p = profile(arch).pricing;
        round2(
            p.base_cost
                + p.cost_per_gb * self.workload.storage_gb
                + p.cost_per_million_requests * self.workload.requests_millions,
        )
    }

    #[must_use]
    pub fn annual_cost(&self, arch: Architecture) -> f64 {
        round2(self.monthly_cost(arch) * 12.0)
    }

    /// Monthly emissions in kg CO₂, rounded to 2 dp.
    #[must_use]
    pub fn monthly_carbon(&self, arch: Architecture) -> f64 {
        let c = profile(arch).carbon;
        round2(
            c.base_carbon
                + c.carbon_per_gb * self.workload.storage_gb
                + c.carbon_per_million_requests * self.workload.requests_millions,
        )
    }

    #[must_use]
    pub fn annual_carbon(&self, arch: Architecture) -> f64 {
        round2(self.monthly_carbon(arch) * 12.0)
    }

    #[must_use]
    pub const fn security_score(&self, arch: Architecture) -> u8 {
        profile(arch).security.total
    }

    #[must_use]
    pub const fn availability(&self, arch: Architecture) -> f64 {
        profile(arch).availability
    }

    /// Cost on a 0-100 "higher is better" scale, floored at 0 from
    /// [`COST_SCORE_CAP`] upwards.
    #[must_use]
    pub fn cost_score(&self, arch: Architecture) -> f64 {
        cost_score_for(self.monthly_cost(arch))
    }

    /// Carbon on a 0-100 "higher is better" scale, floored at 0 from
    /// [`CARBON_SCORE_CAP`] upwards.
    #[must_use]
    pub fn carbon_score(&self, arch: Architecture) -> f64 {
        carbon_score_for(self.monthly_carbon(arch))
    }

    /// Weighted combination of the cost, carbon and security scores.
    #[must_use]
    pub fn overall_score(&self, arch: Architecture) -> f64 {
        let overall = self.weights.cost() * self.cost_score(arch)
            + self.weights.carbon() * self.carbon_score(arch)
            + self.weights.security() * f64::from(self.security_score(arch));
        round2(overall)
    }

    /// Full snapshot for one option.
    #[must_use]
    pub fn snapshot(&self, arch: Architecture) -> MetricSnapshot {
        let p = profile(arch);
        MetricSnapshot {
            architecture: arch,
            name: p.name.to_string(),
            description: p.description.to_string(),
            monthly_cost: self.monthly_cost(arch),
            annual_cost: self.annual_cost(arch),
            monthly_carbon: self.monthly_carbon(arch),
            annual_carbon: self.annual_carbon(arch),
            security_score: self.security_score(arch),
            availability: self.availability(arch),
            overall_score: self.overall_score(arch),
        }
    }

    /// Snapshots for every option, in canonical order.
    #[must_use]
    pub fn all_metrics(&self) -> IndexMap<Architecture, MetricSnapshot> {
        Architecture::ALL
            .into_iter()
            .map(|arch| (arch, self.snapshot(arch)))
            .collect()
    }

    // ========================================================================
    // Recommendation
    // ========================================================================

    /// Pick the highest-scoring option and justify it.
    pub fn recommend(&self) -> Recommendation {
        let all_scores: IndexMap<Architecture, f64> = Architecture::ALL
            .into_iter()
            .map(|arch| (arch, self.overall_score(arch)))
            .collect();

        for (arch, score) in &all_scores {
            tracing::debug!(architecture = %arch, score, "Scored option");
        }

        let (winner, score) = select_winner(&all_scores);
        let rationale = self.rationale();

        tracing::info!(
            architecture = %winner,
            score,
            rationale = ?rationale,
            "Recommendation selected"
        );

        Recommendation {
            recommended_name: profile(winner).name.to_string(),
            architecture_key: winner,
            score,
            all_scores,
            reason: rationale.message().to_string(),
            rationale,
            band: ScoreBand::from_score(score),
        }
    }

    /// Rationale cascade: security, then carbon, then cost, then balanced.
    #[must_use]
    pub fn rationale(&self) -> Rationale {
        if self.weights.security() > DOMINANT_WEIGHT {
            Rationale::SecurityFocused
        } else if self.weights.carbon() > DOMINANT_WEIGHT {
            Rationale::CarbonFocused
        } else if self.weights.cost() > DOMINANT_WEIGHT {
            Rationale::CostFocused
        } else {
            Rationale::Balanced
        }
    }
}

/// Cost score for a monthly cost figure
#[must_use]
pub fn cost_score_for(monthly_cost: f64) -> f64 {
    (100.0 - (monthly_cost / COST_SCORE_CAP) * 100.0).max(0.0)
}

/// Carbon score for a monthly emissions figure
#[must_use]
pub fn carbon_score_for(monthly_carbon: f64) -> f64 {
    (100.0 - (monthly_carbon / CARBON_SCORE_CAP) * 100.0).max(0.0)
}

/// Strict maximum; the first option seen wins a tie.
fn select_winner(scores: &IndexMap<Architecture, f64>) -> (Architecture, f64) {
    let mut best = (Architecture::ALL[0], f64::NEG_INFINITY);
    for (arch, score) in scores {
        if *score > best.1 {
            best = (*arch, *score);
        }
    }
    best
}
