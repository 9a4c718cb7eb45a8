//! The closed set of reactor archetypes and the parameter keys each accepts.

use crate::params::fields::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reactor archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactorKind {
    /// Closed vessel, design quantity is reaction time
    Batch,
    /// Continuous stirred tank, design quantity is volume
    Cstr,
    /// Plug flow, design quantity is volume
    Pfr,
    /// Packed bed, design quantity is catalyst mass
    Pbr,
}

const COMMON_FIELDS: &[&str] = &[
    CONVERSION,
    OUTLET_CONCENTRATION,
    INLET_CONCENTRATION,
    REACTION_ORDER,
    TEMPERATURE,
    RATE_CONSTANT,
    ACTIVATION_ENERGY,
    REFERENCE_TEMPERATURE,
    EPSILON,
    PRESSURE_RATIO,
];

impl ReactorKind {
    pub const ALL: [ReactorKind; 4] = [
        ReactorKind::Batch,
        ReactorKind::Cstr,
        ReactorKind::Pfr,
        ReactorKind::Pbr,
    ];

    /// Short lowercase identifier used in case files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Batch => "batch",
            Self::Cstr => "cstr",
            Self::Pfr => "pfr",
            Self::Pbr => "pbr",
        }
    }

    pub fn is_flow_reactor(self) -> bool {
        !matches!(self, Self::Batch)
    }

    /// Whether `key` is a parameter this reactor understands.
    pub fn accepts(self, key: &str) -> bool {
        if COMMON_FIELDS.contains(&key) {
            return true;
        }
        match self {
            Self::Batch => false,
            Self::Cstr | Self::Pfr => key == FLOW_RATE,
            Self::Pbr => matches!(key, FLOW_RATE | ALPHA | BULK_DENSITY),
        }
    }
}

impl fmt::Display for ReactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Batch => write!(f, "Batch"),
            Self::Cstr => write!(f, "CSTR"),
            Self::Pfr => write!(f, "PFR"),
            Self::Pbr => write!(f, "PBR"),
        }
    }
}

impl FromStr for ReactorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "batch" => Ok(Self::Batch),
            "cstr" => Ok(Self::Cstr),
            "pfr" => Ok(Self::Pfr),
            "pbr" => Ok(Self::Pbr),
            other => Err(format!(
                "unknown reactor '{other}' (expected batch, cstr, pfr or pbr)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("CSTR".parse::<ReactorKind>().unwrap(), ReactorKind::Cstr);
        assert_eq!(" pbr ".parse::<ReactorKind>().unwrap(), ReactorKind::Pbr);
        assert!("fluidized".parse::<ReactorKind>().is_err());
    }

    #[test]
    fn field_sets_per_reactor() {
        assert!(!ReactorKind::Batch.accepts(FLOW_RATE));
        assert!(ReactorKind::Pfr.accepts(FLOW_RATE));
        assert!(!ReactorKind::Cstr.accepts(ALPHA));
        assert!(ReactorKind::Pbr.accepts(ALPHA));
        assert!(ReactorKind::Pbr.accepts(BULK_DENSITY));
        for kind in ReactorKind::ALL {
            assert!(kind.accepts(EPSILON));
            assert!(!kind.accepts("catalyst_colour"));
        }
    }

    #[test]
    fn as_str_round_trips_through_from_str() {
        for kind in ReactorKind::ALL {
            assert_eq!(kind.as_str().parse::<ReactorKind>().unwrap(), kind);
        }
    }
}
