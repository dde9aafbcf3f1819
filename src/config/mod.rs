//! Configuration module for cloud-db-advisor.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named priority presets
//! - YAML config file loading and discovery
//! - CLI argument overrides
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cloud_db_advisor::config::{AppConfig, PriorityPreset};
//!
//! let config = AppConfig::default();
//! let config = AppConfig::from_preset(PriorityPreset::Green);
//! let config = AppConfig::builder()
//!     .storage_gb(500.0)
//!     .priorities(1.0, 1.0, 8.0)
//!     .build();
//!
//! use cloud_db_advisor::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.cloud-db-advisor.yaml` file in your project root or
//! `~/.config/cloud-db-advisor/`:
//!
//! ```yaml
//! workload:
//!   storage_gb: 2500
//!   requests_millions: 40
//! priorities:
//!   cost: 2
//!   carbon: 6
//!   security: 2
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::PriorityPreset;
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, DEFAULT_PRIORITY_WEIGHT,
    DEFAULT_PROJECTION_MONTHS, DEFAULT_REQUESTS_MILLIONS, DEFAULT_STORAGE_GB, DEFAULT_TCO_YEARS,
    MAX_PROJECTION_MONTHS, OutputConfig, PriorityConfig, WorkloadConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    ConfigFileError, ConfigOverrides, discover_config_file, generate_example_config,
    generate_full_example_config, load_config_file, load_or_default,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it for validation and autocompletion of
/// `.cloud-db-advisor.yaml` files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
