//! Configuration validation for cloud-db-advisor.

use super::types::{
    AppConfig, BehaviorConfig, MAX_PROJECTION_MONTHS, OutputConfig, PriorityConfig,
    WorkloadConfig,
};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.workload.validate());
        errors.extend(self.priorities.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for WorkloadConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (field, value) in [
            ("workload.storage_gb", self.storage_gb),
            ("workload.requests_millions", self.requests_millions),
        ] {
            if !value.is_finite() || value <= 0.0 {
                errors.push(ConfigError::new(
                    field,
                    format!("Must be a positive number, got {value}"),
                ));
            }
        }
        errors
    }
}

impl Validatable for PriorityConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (field, value) in [
            ("priorities.cost", self.cost),
            ("priorities.carbon", self.carbon),
            ("priorities.security", self.security),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(ConfigError::new(
                    field,
                    format!("Must be a non-negative number, got {value}"),
                ));
            }
        }
        if errors.is_empty() && self.cost + self.carbon + self.security <= 0.0 {
            errors.push(ConfigError::new(
                "priorities",
                "At least one priority weight must be greater than 0",
            ));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file
            && let Some(parent) = file_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            errors.push(ConfigError::new(
                "output.file",
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(min_score) = self.min_score
            && !(0.0..=100.0).contains(&min_score)
        {
            errors.push(ConfigError::new(
                "behavior.min_score",
                format!("Minimum score must be between 0 and 100, got {min_score}"),
            ));
        }

        if self.projection_months > MAX_PROJECTION_MONTHS {
            errors.push(ConfigError::new(
                "behavior.projection_months",
                format!(
                    "Projection horizon must be at most {MAX_PROJECTION_MONTHS} months, got {}",
                    self.projection_months
                ),
            ));
        }

        if self.tco_years == 0 {
            errors.push(ConfigError::new(
                "behavior.tco_years",
                "Total cost of ownership horizon must be at least 1 year",
            ));
        }

        errors
    }
}
