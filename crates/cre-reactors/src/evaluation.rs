//! Result of one reactor evaluation.

use crate::kind::ReactorKind;
use serde::{Deserialize, Serialize};

/// Design quantity in reporting units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DesignQuantity {
    ReactionTime {
        seconds: f64,
    },
    Volume {
        liters: f64,
    },
    CatalystMass {
        kilograms: f64,
        /// Bed volume when a bulk density was supplied
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bed_volume_liters: Option<f64>,
    },
}

impl DesignQuantity {
    pub fn value(&self) -> f64 {
        match *self {
            Self::ReactionTime { seconds } => seconds,
            Self::Volume { liters } => liters,
            Self::CatalystMass { kilograms, .. } => kilograms,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ReactionTime { .. } => "Reaction time",
            Self::Volume { .. } => "Reactor volume",
            Self::CatalystMass { .. } => "Catalyst mass",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::ReactionTime { .. } => "s",
            Self::Volume { .. } => "L",
            Self::CatalystMass { .. } => "kg",
        }
    }
}

/// Which numerical route produced the design quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionPath {
    /// Direct algebraic design equation (CSTR)
    Algebraic,
    /// Analytic inversion of the design integral
    ClosedForm,
    /// Composite trapezoidal quadrature
    Trapezoid,
    /// Explicit stepping of the coupled pressure-drop ODE
    ForwardEuler,
}

/// Design quantity and outlet concentration for one reactor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub reactor: ReactorKind,
    /// Target conversion the design was computed for
    pub conversion: f64,
    pub design: DesignQuantity,
    /// Outlet concentration of the limiting species, mol/L
    pub outlet_concentration: f64,
    /// Rate constant at the operating temperature, SI basis
    pub rate_constant: f64,
    pub path: SolutionPath,
}

impl Evaluation {
    /// The fixed-shape (design quantity, outlet concentration) pair.
    pub fn as_pair(&self) -> (f64, f64) {
        (self.design.value(), self.outlet_concentration)
    }
}
