//! Reference data store.
//!
//! Static pricing, carbon, security and availability tables for every
//! [`Architecture`]. The tables are `const` arrays indexed by
//! [`Architecture::index`], so every option has exactly one row in each
//! table and a lookup can never miss.

use super::architecture::Architecture;
use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};

/// Monthly pricing coefficients (USD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingCoefficients {
    /// Fixed monthly cost
    pub base_cost: f64,
    /// Cost per GB stored per month
    pub cost_per_gb: f64,
    /// Cost per million requests
    pub cost_per_million_requests: f64,
}

/// Monthly carbon coefficients (kg CO₂)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonCoefficients {
    /// Fixed monthly emissions from running instances
    pub base_carbon: f64,
    /// Emissions per GB stored per month
    pub carbon_per_gb: f64,
    /// Emissions per million requests
    pub carbon_per_million_requests: f64,
}

/// Security and compliance sub-scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityBreakdown {
    pub encryption: u8,
    pub backup: u8,
    pub access_control: u8,
    pub monitoring: u8,
    pub compliance: u8,
    /// Precomputed total (mean of the five dimensions)
    pub total: u8,
}

impl SecurityBreakdown {
    /// Named dimensions in display order, excluding the total.
    #[must_use]
    pub const fn dimensions(&self) -> [(&'static str, u8); 5] {
        [
            ("Encryption", self.encryption),
            ("Backup", self.backup),
            ("Access Control", self.access_control),
            ("Monitoring", self.monitoring),
            ("Compliance", self.compliance),
        ]
    }

    /// Mean of the five dimensions, rounded to the nearest integer
    #[must_use]
    pub fn rounded_mean(&self) -> u8 {
        let sum: u32 = self.dimensions().iter().map(|(_, v)| u32::from(*v)).sum();
        // (sum + 2) / 5 rounds half up for a divisor of 5
        ((sum + 2) / 5) as u8
    }
}

/// Every reference attribute of one option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArchitectureProfile {
    pub architecture: Architecture,
    pub name: &'static str,
    pub description: &'static str,
    pub pricing: PricingCoefficients,
    pub carbon: CarbonCoefficients,
    pub security: SecurityBreakdown,
    /// SLA availability percentage
    pub availability: f64,
    /// Typical workloads this option suits
    pub use_cases: &'static [&'static str],
}

// ============================================================================
// Tables
// ============================================================================

const NAMES: [&str; 3] = ["RDS Multi-AZ", "DynamoDB On-Demand", "Aurora Serverless v2"];

const DESCRIPTIONS: [&str; 3] = [
    "High availability database with automatic failover",
    "Serverless NoSQL database with automatic scaling",
    "MySQL-compatible serverless database",
];

const PRICING: [PricingCoefficients; 3] = [
    PricingCoefficients {
        base_cost: 450.0,
        cost_per_gb: 0.115,
        cost_per_million_requests: 0.20,
    },
    PricingCoefficients {
        base_cost: 0.0,
        cost_per_gb: 0.25,
        cost_per_million_requests: 1.25,
    },
    PricingCoefficients {
        base_cost: 150.0,
        cost_per_gb: 0.10,
        cost_per_million_requests: 0.35,
    },
];

// us-east-1
const CARBON: [CarbonCoefficients; 3] = [
    CarbonCoefficients {
        base_carbon: 45.0,
        carbon_per_gb: 0.002,
        carbon_per_million_requests: 0.008,
    },
    CarbonCoefficients {
        base_carbon: 5.0,
        carbon_per_gb: 0.001,
        carbon_per_million_requests: 0.003,
    },
    CarbonCoefficients {
        base_carbon: 20.0,
        carbon_per_gb: 0.0015,
        carbon_per_million_requests: 0.005,
    },
];

const SECURITY: [SecurityBreakdown; 3] = [
    SecurityBreakdown {
        encryption: 100,
        backup: 100,
        access_control: 95,
        monitoring: 90,
        compliance: 95,
        total: 96,
    },
    SecurityBreakdown {
        encryption: 95,
        backup: 85,
        access_control: 90,
        monitoring: 85,
        compliance: 80,
        total: 87,
    },
    SecurityBreakdown {
        encryption: 100,
        backup: 95,
        access_control: 95,
        monitoring: 95,
        compliance: 90,
        total: 95,
    },
];

const AVAILABILITY: [f64; 3] = [99.95, 99.99, 99.95];

const USE_CASES: [&[&str]; 3] = [
    &[
        "Mission-critical applications",
        "Financial data processing",
        "Healthcare systems requiring HIPAA compliance",
    ],
    &[
        "IoT data ingestion",
        "Real-time analytics",
        "Variable/unpredictable workloads",
    ],
    &[
        "Web applications",
        "Development/testing environments",
        "Balanced production workloads",
    ],
];

// ============================================================================
// Lookup
// ============================================================================

/// Full reference profile for an option.
#[must_use]
pub const fn profile(arch: Architecture) -> ArchitectureProfile {
    let i = arch.index();
    ArchitectureProfile {
        architecture: arch,
        name: NAMES[i],
        description: DESCRIPTIONS[i],
        pricing: PRICING[i],
        carbon: CARBON[i],
        security: SECURITY[i],
        availability: AVAILABILITY[i],
        use_cases: USE_CASES[i],
    }
}

/// Look up a profile by its string identifier.
pub fn lookup(key: &str) -> Result<ArchitectureProfile> {
    key.parse::<Architecture>().map(profile)
}

/// Iterate all profiles in canonical order.
pub fn profiles() -> impl Iterator<Item = ArchitectureProfile> {
    Architecture::ALL.into_iter().map(profile)
}

/// Check the reference tables for internal consistency.
///
/// Checked whenever an engine is built.
pub fn validate_reference_data() -> Result<()> {
    for p in profiles() {
        for (label, value) in p.security.dimensions() {
            if value > 100 {
                return Err(AdvisorError::ReferenceData(format!(
                    "{}: security sub-score '{label}' is {value}, above 100",
                    p.architecture
                )));
            }
        }
        if p.security.total != p.security.rounded_mean() {
            return Err(AdvisorError::ReferenceData(format!(
                "{}: security total {} does not match sub-score mean {}",
                p.architecture,
                p.security.total,
                p.security.rounded_mean()
            )));
        }
        if !(0.0..=100.0).contains(&p.availability) {
            return Err(AdvisorError::ReferenceData(format!(
                "{}: availability {} is not a percentage",
                p.architecture, p.availability
            )));
        }
        let coefficients = [
            p.pricing.base_cost,
            p.pricing.cost_per_gb,
            p.pricing.cost_per_million_requests,
            p.carbon.base_carbon,
            p.carbon.carbon_per_gb,
            p.carbon.carbon_per_million_requests,
        ];
        if coefficients.iter().any(|c| !c.is_finite() || *c < 0.0) {
            return Err(AdvisorError::ReferenceData(format!(
                "{}: pricing and carbon coefficients must be finite and non-negative",
                p.architecture
            )));
        }
    }
    Ok(())
}
