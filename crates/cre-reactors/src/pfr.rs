//! Plug flow reactor: volume from the integrated design equation.

use crate::common::{check_design, outlet_concentration, residence_integral};
use crate::error::ReactorResult;
use crate::evaluation::{DesignQuantity, Evaluation};
use crate::kind::ReactorKind;
use crate::params::{Numerics, PfrInput};
use cre_core::units::boundary::volume_to_liters;
use cre_core::units::m3;

/// PFR volume, `V = ∫₀^X FA0 / (k_T·C_A(X')ⁿ) dX'`.
///
/// Since `FA0 = F0·C0` the integral is the batch integral scaled by the
/// volumetric feed, with the same closed-form / quadrature split.
pub fn evaluate(input: &PfrInput, numerics: &Numerics) -> ReactorResult<Evaluation> {
    let c0 = input.inlet_concentration.value;
    let x = input.conversion;
    let k = input.kinetics.rate_constant();

    let (tau, path) = residence_integral(c0, x, input.kinetics.order, k, &input.phase, numerics)?;
    let volume = check_design(input.flow_rate.value * tau, x, "reactor volume")?;

    Ok(Evaluation {
        reactor: ReactorKind::Pfr,
        conversion: x,
        design: DesignQuantity::Volume {
            liters: volume_to_liters(m3(volume)),
        },
        outlet_concentration: outlet_concentration(c0, x, &input.phase)?,
        rate_constant: k,
        path,
    })
}
