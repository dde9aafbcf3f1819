//! Architecture option identifiers.

use crate::error::AdvisorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed set of deployable database patterns.
///
/// Declaration order is the canonical evaluation order: metrics are listed in
/// this order and recommendation ties go to the earlier variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Architecture {
    /// Provisioned relational database with synchronous standby
    RdsMultiAz,
    /// Serverless key-value store, billed per request
    Dynamodb,
    /// Relational database with autoscaling capacity
    AuroraServerless,
}

impl Architecture {
    /// Every option, in canonical order.
    pub const ALL: [Self; 3] = [Self::RdsMultiAz, Self::Dynamodb, Self::AuroraServerless];

    /// Stable identifier used in config files, JSON output and CLI flags
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::RdsMultiAz => "rds_multi_az",
            Self::Dynamodb => "dynamodb",
            Self::AuroraServerless => "aurora_serverless",
        }
    }

    /// Position in [`Architecture::ALL`]
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::RdsMultiAz => 0,
            Self::Dynamodb => 1,
            Self::AuroraServerless => 2,
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Architecture {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "rds_multi_az" | "rds" => Ok(Self::RdsMultiAz),
            "dynamodb" | "dynamo" => Ok(Self::Dynamodb),
            "aurora_serverless" | "aurora" => Ok(Self::AuroraServerless),
            _ => Err(AdvisorError::UnknownArchitecture(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let keys: Vec<_> = Architecture::ALL.iter().map(Architecture::key).collect();
        assert_eq!(keys, ["rds_multi_az", "dynamodb", "aurora_serverless"]);
        for (i, arch) in Architecture::ALL.iter().enumerate() {
            assert_eq!(arch.index(), i);
        }
    }

    #[test]
    fn test_parse_keys_and_aliases() {
        assert_eq!("rds_multi_az".parse::<Architecture>().unwrap(), Architecture::RdsMultiAz);
        assert_eq!("RDS-Multi-AZ".parse::<Architecture>().unwrap(), Architecture::RdsMultiAz);
        assert_eq!("dynamo".parse::<Architecture>().unwrap(), Architecture::Dynamodb);
        assert_eq!(
            " aurora ".parse::<Architecture>().unwrap(),
            Architecture::AuroraServerless
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "cosmosdb".parse::<Architecture>().unwrap_err();
        assert!(matches!(err, AdvisorError::UnknownArchitecture(ref id) if id == "cosmosdb"));
    }

    #[test]
    fn test_display_roundtrips_through_key() {
        for arch in Architecture::ALL {
            assert_eq!(arch.to_string().parse::<Architecture>().unwrap(), arch);
        }
    }

    #[test]
    fn test_serde_uses_snake_case_key() {
        let json = serde_json::to_string(&Architecture::AuroraServerless).unwrap();
        assert_eq!(json, "\"aurora_serverless\"");
    }
}
