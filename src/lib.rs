//! **Cost, carbon and security aware database architecture advisor.**
//!
//! `cloud-db-advisor` compares three managed AWS database architectures
//! (RDS Multi-AZ, DynamoDB On-Demand and Aurora Serverless v2) for a given
//! workload and recommends one according to how much you care about cost,
//! carbon emissions and security.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The closed set of [`Architecture`] options, their static
//!   reference data, and the per-evaluation inputs ([`Workload`],
//!   [`PriorityWeights`]).
//! - **[`scoring`]**: The [`ScoringEngine`], which computes monthly/annual cost
//!   and carbon, normalized sub-scores, the weighted overall score and the
//!   [`Recommendation`]. Also derives comparative insights and projections.
//! - **[`config`]**: YAML configuration files, presets, validation and CLI
//!   overrides.
//! - **[`pipeline`]**: Glue from configuration to an [`Evaluation`] and to
//!   the output target.
//! - **[`reports`]**: Summary, JSON and Markdown renderers.
//!
//! ## Getting Started
//!
//! ```
//! use cloud_db_advisor::{Architecture, ScoringEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1000 GB, 100M requests/month, security weighted heavily
//!     let engine = ScoringEngine::new(1000.0, 100.0, 1.0, 1.0, 8.0)?;
//!
//!     let rds = engine.snapshot(Architecture::RdsMultiAz);
//!     println!("RDS: ${}/month, {} kg CO2/month", rds.monthly_cost, rds.monthly_carbon);
//!
//!     let rec = engine.recommend();
//!     println!("{} ({:.2}): {}", rec.recommended_name, rec.score, rec.reason);
//!     Ok(())
//! }
//! ```
//!
//! ### From a configuration
//!
//! ```
//! use cloud_db_advisor::{AppConfig, PriorityPreset, evaluate};
//!
//! let config = AppConfig::from_preset(PriorityPreset::Green);
//! let evaluation = evaluate(&config)?;
//! assert_eq!(evaluation.metrics.len(), 3);
//! # Ok::<(), cloud_db_advisor::AdvisorError>(())
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::unused_self
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod scoring;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, PriorityPreset, Validatable};
pub use error::{AdvisorError, Result};
pub use model::{Architecture, ArchitectureProfile, PriorityWeights, Workload};
pub use pipeline::{Evaluation, evaluate};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{MetricSnapshot, Rationale, Recommendation, ScoreBand, ScoringEngine};
