//! Named priority presets.

use super::types::{AppConfig, PriorityConfig};

// ============================================================================
// Priority Presets
// ============================================================================

/// Named priority weightings for common decision styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityPreset {
    /// Equal weight on cost, carbon and security
    Balanced,
    /// Cost dominates
    CostFirst,
    /// Carbon footprint dominates
    Green,
    /// Security and compliance dominate
    SecurityFirst,
}

impl PriorityPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::CostFirst => "cost-first",
            Self::Green => "green",
            Self::SecurityFirst => "security-first",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "balanced" | "default" => Some(Self::Balanced),
            "cost-first" | "cost" | "budget" => Some(Self::CostFirst),
            "green" | "carbon" | "sustainable" => Some(Self::Green),
            "security-first" | "security" | "compliance" => Some(Self::SecurityFirst),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Balanced => "Cost, carbon and security weighted equally",
            Self::CostFirst => "Lowest monthly bill first, other factors as tie-breakers",
            Self::Green => "Lowest carbon footprint first",
            Self::SecurityFirst => "Strongest security and compliance posture first",
        }
    }

    /// Raw weights for this preset (dashboard 1-10 scale).
    #[must_use]
    pub const fn priorities(&self) -> PriorityConfig {
        let (cost, carbon, security) = match self {
            Self::Balanced => (5.0, 5.0, 5.0),
            Self::CostFirst => (8.0, 1.0, 1.0),
            Self::Green => (1.0, 8.0, 1.0),
            Self::SecurityFirst => (1.0, 1.0, 8.0),
        };
        PriorityConfig {
            cost,
            carbon,
            security,
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Balanced,
            Self::CostFirst,
            Self::Green,
            Self::SecurityFirst,
        ]
    }
}

impl std::fmt::Display for PriorityPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl AppConfig {
    /// Create an `AppConfig` whose priorities come from a preset.
    #[must_use]
    pub fn from_preset(preset: PriorityPreset) -> Self {
        Self {
            priorities: preset.priorities(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_roundtrip() {
        for preset in PriorityPreset::all() {
            assert_eq!(PriorityPreset::from_name(preset.name()), Some(*preset));
            assert!(!preset.description().is_empty());
        }
    }

    #[test]
    fn test_preset_aliases() {
        assert_eq!(PriorityPreset::from_name("Security"), Some(PriorityPreset::SecurityFirst));
        assert_eq!(PriorityPreset::from_name("carbon"), Some(PriorityPreset::Green));
        assert_eq!(PriorityPreset::from_name("budget"), Some(PriorityPreset::CostFirst));
        assert_eq!(PriorityPreset::from_name("unknown"), None);
    }

    #[test]
    fn test_from_preset_keeps_other_defaults() {
        let config = AppConfig::from_preset(PriorityPreset::Green);
        assert_eq!(config.priorities.carbon, 8.0);
        assert_eq!(config.workload.storage_gb, 1000.0);
    }
}
