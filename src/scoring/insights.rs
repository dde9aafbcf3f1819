//! Comparative insights, projections and efficiency profiles.
//!
//! These are derived from the same snapshots the recommendation uses and
//! never feed back into scoring.

use super::engine::ScoringEngine;
use super::snapshot::MetricSnapshot;
use crate::model::Architecture;
use crate::utils::round2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// kg CO₂ one tree absorbs per year
pub const KG_CO2_PER_TREE_YEAR: f64 = 21.0;

/// Cross-option comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    /// Lowest monthly cost
    pub cheapest: Architecture,
    /// Highest monthly cost
    pub most_expensive: Architecture,
    /// Highest annual cost minus lowest annual cost
    pub potential_annual_savings: f64,
    /// Lowest monthly emissions
    pub greenest: Architecture,
    /// Highest monthly emissions
    pub highest_emitter: Architecture,
    /// Highest annual emissions minus lowest annual emissions (kg CO₂)
    pub annual_carbon_savings: f64,
    /// Trees needed to absorb the carbon savings
    pub trees_equivalent_to_savings: f64,
    /// Trees needed to offset each option's annual emissions
    pub tree_offsets: IndexMap<Architecture, f64>,
}

/// Radar-style normalized view of one option, each axis 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyProfile {
    pub cost_efficiency: f64,
    pub carbon_efficiency: f64,
    pub security: f64,
    pub availability: f64,
}

/// Cost over time for one option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostProjection {
    pub architecture: Architecture,
    /// Cumulative cost at the end of month 1..=n
    pub cumulative_monthly: Vec<f64>,
    /// Horizon for `total_cost_of_ownership`, in years
    pub years: u32,
    /// Annual cost × years
    pub total_cost_of_ownership: f64,
}

impl ScoringEngine {
    /// Compare every option on cost and carbon.
    #[must_use]
    pub fn insights(&self) -> Insights {
        let metrics = self.all_metrics();

        let cheapest = extreme_by(&metrics, |m| m.monthly_cost, |a, b| a < b);
        let most_expensive = extreme_by(&metrics, |m| m.monthly_cost, |a, b| a > b);
        let greenest = extreme_by(&metrics, |m| m.monthly_carbon, |a, b| a < b);
        let highest_emitter = extreme_by(&metrics, |m| m.monthly_carbon, |a, b| a > b);

        let annual_costs = metrics.values().map(|m| m.annual_cost);
        let potential_annual_savings = round2(spread(annual_costs));
        let annual_carbon = metrics.values().map(|m| m.annual_carbon);
        let annual_carbon_savings = round2(spread(annual_carbon));

        let tree_offsets = metrics
            .iter()
            .map(|(arch, m)| (*arch, trees_to_offset(m.annual_carbon)))
            .collect();

        Insights {
            cheapest,
            most_expensive,
            potential_annual_savings,
            greenest,
            highest_emitter,
            annual_carbon_savings,
            trees_equivalent_to_savings: trees_to_offset(annual_carbon_savings),
            tree_offsets,
        }
    }

    /// Normalized per-axis view of an option.
    #[must_use]
    pub fn efficiency_profile(&self, arch: Architecture) -> EfficiencyProfile {
        EfficiencyProfile {
            cost_efficiency: (100.0 - self.monthly_cost(arch) / 10.0).max(0.0),
            carbon_efficiency: (100.0 - self.monthly_carbon(arch)).max(0.0),
            security: f64::from(self.security_score(arch)),
            availability: self.availability(arch),
        }
    }

    /// Annual cost multiplied by `years`, rounded to 2 dp.
    #[must_use]
    pub fn total_cost_of_ownership(&self, arch: Architecture, years: u32) -> f64 {
        round2(self.annual_cost(arch) * f64::from(years))
    }

    /// Cumulative cost for each of the first `months` months and the TCO
    /// over `years`, for every option in canonical order.
    #[must_use]
    pub fn cost_projection(&self, months: u32, years: u32) -> Vec<CostProjection> {
        Architecture::ALL
            .into_iter()
            .map(|arch| {
                let monthly = self.monthly_cost(arch);
                CostProjection {
                    architecture: arch,
                    cumulative_monthly: (1..=months)
                        .map(|m| round2(monthly * f64::from(m)))
                        .collect(),
                    years,
                    total_cost_of_ownership: self.total_cost_of_ownership(arch, years),
                }
            })
            .collect()
    }
}

/// Trees needed to absorb `annual_kg` of CO₂
#[must_use]
pub fn trees_to_offset(annual_kg: f64) -> f64 {
    round2(annual_kg / KG_CO2_PER_TREE_YEAR)
}

/// First option whose value beats every earlier one under `better`.
fn extreme_by(
    metrics: &IndexMap<Architecture, MetricSnapshot>,
    value: impl Fn(&MetricSnapshot) -> f64,
    better: impl Fn(f64, f64) -> bool,
) -> Architecture {
    let mut iter = metrics.iter();
    let Some((first_arch, first)) = iter.next() else {
        return Architecture::ALL[0];
    };
    let mut best = (*first_arch, value(first));
    for (arch, m) in iter {
        let v = value(m);
        if better(v, best.1) {
            best = (*arch, v);
        }
    }
    best.0
}

fn spread(values: impl Iterator<Item = f64>) -> f64 {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min.is_finite() && max.is_finite() {
        max - min
    } else {
        0.0
    }
}
