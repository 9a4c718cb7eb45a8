//! Parameter map supplied by callers and the typed inputs it validates into.

use cre_core::units::{Concentration, Density, Temperature, VolumeRate};
use cre_kinetics::{Arrhenius, FeedPhase, MarchOptions, DEFAULT_SUBINTERVALS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical parameter keys.
///
/// Boundary units are the caller's: mol/L, L/hr, kJ/mol, kg/L, kelvin.
pub mod fields {
    pub const CONVERSION: &str = "conversion";
    pub const OUTLET_CONCENTRATION: &str = "outlet_concentration";
    pub const INLET_CONCENTRATION: &str = "inlet_concentration";
    pub const FLOW_RATE: &str = "flow_rate";
    pub const REACTION_ORDER: &str = "reaction_order";
    pub const TEMPERATURE: &str = "temperature";
    pub const RATE_CONSTANT: &str = "rate_constant";
    pub const ACTIVATION_ENERGY: &str = "activation_energy";
    pub const REFERENCE_TEMPERATURE: &str = "reference_temperature";
    pub const EPSILON: &str = "epsilon";
    pub const PRESSURE_RATIO: &str = "pressure_ratio";
    pub const ALPHA: &str = "alpha";
    pub const BULK_DENSITY: &str = "bulk_density";
}

/// Flat mapping from field name to value, as collected from a form.
///
/// Absent fields are removed from the map, never stored as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(BTreeMap<String, f64>);

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: f64) {
        self.0.insert(key.to_string(), value);
    }

    /// Mark a field absent. Returns the previous value if there was one.
    pub fn remove(&mut self, key: &str) -> Option<f64> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Rate law of the limiting species after validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KineticsInput {
    /// Reaction order n ≥ 0
    pub order: f64,
    /// Rate constant in SI, per m³ of fluid or per kg of catalyst
    pub arrhenius: Arrhenius,
    pub temperature: Temperature,
}

impl KineticsInput {
    /// Rate constant at the operating temperature.
    pub fn rate_constant(&self) -> f64 {
        self.arrhenius.at(self.temperature)
    }
}

/// Validated batch reactor input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchInput {
    pub conversion: f64,
    pub inlet_concentration: Concentration,
    pub kinetics: KineticsInput,
    pub phase: FeedPhase,
}

/// Validated continuous-flow input, shared by the CSTR and the PFR.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowInput {
    pub conversion: f64,
    pub inlet_concentration: Concentration,
    pub flow_rate: VolumeRate,
    pub kinetics: KineticsInput,
    pub phase: FeedPhase,
}

impl FlowInput {
    /// Molar feed rate of the limiting species, FA0 = F0·C0 (mol/s).
    pub fn molar_feed(&self) -> f64 {
        self.flow_rate.value * self.inlet_concentration.value
    }
}

/// Validated CSTR input.
pub type CstrInput = FlowInput;

/// Validated PFR input.
pub type PfrInput = FlowInput;

/// Validated packed bed input.
///
/// The rate constant inside `feed.kinetics` is per kilogram of catalyst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PbrInput {
    pub feed: FlowInput,
    /// Pressure-drop coefficient α (1/kg); zero disables the pressure-drop branch
    pub alpha: f64,
    pub bulk_density: Option<Density>,
}

/// How the design integral is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegralMethod {
    /// Closed form for a liquid feed, trapezoidal quadrature otherwise
    #[default]
    Auto,
    /// Always use quadrature
    Trapezoid,
}

/// Numerical settings shared by the evaluators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Numerics {
    pub method: IntegralMethod,
    /// Trapezoidal subintervals over [0, X]
    pub subintervals: usize,
    /// Catalyst-mass stepping for the pressure-drop branch (step in kg)
    pub march: MarchOptions,
}

impl Default for Numerics {
    fn default() -> Self {
        Self {
            method: IntegralMethod::Auto,
            subintervals: DEFAULT_SUBINTERVALS,
            march: MarchOptions::default(),
        }
    }
}

impl Numerics {
    pub fn quadrature_only() -> Self {
        Self {
            method: IntegralMethod::Trapezoid,
            ..Self::default()
        }
    }
}
