//! Domain model: architecture options, their reference data, and the
//! per-evaluation inputs.

mod architecture;
mod input;
pub mod reference;

pub use architecture::Architecture;
pub use input::{PriorityWeights, Workload};
pub use reference::{
    ArchitectureProfile, CarbonCoefficients, PricingCoefficients, SecurityBreakdown, lookup,
    profile, profiles,
};
