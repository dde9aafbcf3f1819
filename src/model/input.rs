//! Evaluation inputs: workload volumes and priority weights.

use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};

/// Monthly workload characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    /// Stored data volume in GB
    pub storage_gb: f64,
    /// Monthly request volume in millions
    pub requests_millions: f64,
}

impl Workload {
    /// Validate and build a workload. Both volumes must be finite and > 0.
    pub fn new(storage_gb: f64, requests_millions: f64) -> Result<Self> {
        for (field, value) in [
            ("storage_gb", storage_gb),
            ("requests_millions", requests_millions),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AdvisorError::InvalidWorkload { field, value });
            }
        }
        Ok(Self {
            storage_gb,
            requests_millions,
        })
    }
}

/// Priority weights normalized to sum to 1.0.
///
/// Only the normalized form is stored; the raw values are discarded once
/// [`PriorityWeights::normalize`] succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriorityWeights {
    cost: f64,
    carbon: f64,
    security: f64,
}

impl PriorityWeights {
    /// Normalize raw weights by dividing each by their sum.
    ///
    /// Fails when any weight is negative or non-finite, or when the sum is
    /// not strictly positive.
    pub fn normalize(cost: f64, carbon: f64, security: f64) -> Result<Self> {
        let raw = [cost, carbon, security];
        if raw.iter().any(|w| !w.is_finite()) {
            return Err(AdvisorError::invalid_weight(
                cost,
                carbon,
                security,
                "weights must be finite numbers",
            ));
        }
        if raw.iter().any(|w| *w < 0.0) {
            return Err(AdvisorError::invalid_weight(
                cost,
                carbon,
                security,
                "weights must not be negative",
            ));
        }
        let total = cost + carbon + security;
        if total <= 0.0 || !total.is_finite() {
            return Err(AdvisorError::invalid_weight(
                cost,
                carbon,
                security,
                "weights must sum to a positive number",
            ));
        }
        Ok(Self {
            cost: cost / total,
            carbon: carbon / total,
            security: security / total,
        })
    }

    #[must_use]
    pub const fn cost(&self) -> f64 {
        self.cost
    }

    #[must_use]
    pub const fn carbon(&self) -> f64 {
        self.carbon
    }

    #[must_use]
    pub const fn security(&self) -> f64 {
        self.security
    }

    /// Weights as whole-number percentages (cost, carbon, security)
    #[must_use]
    pub fn as_percentages(&self) -> [f64; 3] {
        [
            (self.cost * 100.0).round(),
            (self.carbon * 100.0).round(),
            (self.security * 100.0).round(),
        ]
    }
}
