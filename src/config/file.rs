//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".cloud-db-advisor.yaml",
    ".cloud-db-advisor.yml",
    "cloud-db-advisor.yaml",
    "cloud-db-advisor.yml",
];

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "cloud-db-advisor";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/cloud-db-advisor/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path
        && path.exists()
    {
        return Some(path.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(path) = find_config_in_dir(&cwd)
    {
        return Some(path);
    }

    if let Some(git_root) = find_git_root()
        && let Some(path) = find_config_in_dir(&git_root)
    {
        return Some(path);
    }

    if let Some(config_dir) = dirs::config_dir()
        && let Some(path) = find_config_in_dir(&config_dir.join(CONFIG_DIR_NAME))
    {
        return Some(path);
    }

    if let Some(home) = dirs::home_dir()
        && let Some(path) = find_config_in_dir(&home)
    {
        return Some(path);
    }

    None
}

/// Directories searched by [`discover_config_file`], in order.
#[must_use]
pub fn search_paths() -> Vec<PathBuf> {
    [
        std::env::current_dir().ok(),
        find_git_root(),
        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME)),
        dirs::home_dir(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

/// Values given explicitly on the command line. `None` leaves the file or
/// default value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub storage_gb: Option<f64>,
    pub requests_millions: Option<f64>,
    pub cost_weight: Option<f64>,
    pub carbon_weight: Option<f64>,
    pub security_weight: Option<f64>,
    pub format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    pub no_color: bool,
    pub min_score: Option<f64>,
    pub projection_months: Option<u32>,
    pub tco_years: Option<u32>,
    pub quiet: bool,
}

impl AppConfig {
    /// Layer CLI overrides on top of this config.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.storage_gb {
            self.workload.storage_gb = v;
        }
        if let Some(v) = overrides.requests_millions {
            self.workload.requests_millions = v;
        }
        if let Some(v) = overrides.cost_weight {
            self.priorities.cost = v;
        }
        if let Some(v) = overrides.carbon_weight {
            self.priorities.carbon = v;
        }
        if let Some(v) = overrides.security_weight {
            self.priorities.security = v;
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.output_file.is_some() {
            self.output.file.clone_from(&overrides.output_file);
        }
        if overrides.no_color {
            self.output.no_color = true;
        }
        if overrides.min_score.is_some() {
            self.behavior.min_score = overrides.min_score;
        }
        if let Some(months) = overrides.projection_months {
            self.behavior.projection_months = months;
        }
        if let Some(years) = overrides.tco_years {
            self.behavior.tco_years = years;
        }
        if overrides.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and layer CLI overrides on top.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.apply(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content from the defaults.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# cloud-db-advisor configuration
# Place this file at .cloud-db-advisor.yaml in your project root or ~/.config/cloud-db-advisor/

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# cloud-db-advisor Configuration File
# ===================================
#
# Place it at:
#   - .cloud-db-advisor.yaml in your project root
#   - ~/.config/cloud-db-advisor/cloud-db-advisor.yaml for global config
#
# CLI arguments always override file settings.

# Workload to evaluate
workload:
  # Stored data volume in GB (> 0)
  storage_gb: 1000
  # Monthly requests in millions (> 0)
  requests_millions: 100

# Relative importance of each factor (>= 0, at least one > 0).
# Weights are normalized, so only their ratios matter.
priorities:
  cost: 5
  carbon: 5
  security: 5

# Output configuration
output:
  # Format: auto, summary, table, json, markdown
  format: auto
  # Output file path (omit for stdout)
  # file: recommendation.json
  no_color: false

# Behavior flags
behavior:
  # Exit with code 1 if the recommended option scores below this
  # min_score: 75
  # Months shown in the cumulative cost projection (at most 1200)
  projection_months: 12
  # Years used for total cost of ownership
  tco_years: 5
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
