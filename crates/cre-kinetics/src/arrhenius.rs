//! Arrhenius temperature correction.

use cre_core::constants::{R_GAS, T_REF_K};
use cre_core::units::{MolarEnergy, Temperature, k};

/// Correct a rate constant from `t_ref_k` to `t_k`.
///
/// `k_T = k_ref · exp((−Ea/R)·(1/T − 1/T_ref))` with Ea in J/mol and both
/// temperatures in kelvin. Inputs are assumed validated upstream.
pub fn rate_constant(k_ref: f64, ea_j_per_mol: f64, t_k: f64, t_ref_k: f64) -> f64 {
    k_ref * ((-ea_j_per_mol / R_GAS) * (1.0 / t_k - 1.0 / t_ref_k)).exp()
}

/// Rate constant quoted at a reference temperature together with its
/// activation energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrhenius {
    /// Rate constant at `t_ref`, in whatever SI basis the rate law uses
    pub k_ref: f64,
    pub activation_energy: MolarEnergy,
    pub t_ref: Temperature,
}

impl Arrhenius {
    /// Rate constant quoted at the default 300 K reference.
    pub fn new(k_ref: f64, activation_energy: MolarEnergy) -> Self {
        Self {
            k_ref,
            activation_energy,
            t_ref: k(T_REF_K),
        }
    }

    pub fn with_reference(mut self, t_ref: Temperature) -> Self {
        self.t_ref = t_ref;
        self
    }

    /// Rate constant at operating temperature `t`.
    pub fn at(&self, t: Temperature) -> f64 {
        rate_constant(
            self.k_ref,
            self.activation_energy.value,
            t.value,
            self.t_ref.value,
        )
    }
}
