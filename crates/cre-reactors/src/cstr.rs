//! Continuous stirred tank: algebraic design equation.

use crate::common::{check_design, outlet_concentration};
use crate::error::ReactorResult;
use crate::evaluation::{DesignQuantity, Evaluation, SolutionPath};
use crate::kind::ReactorKind;
use crate::params::{CstrInput, Numerics};
use cre_core::units::boundary::volume_to_liters;
use cre_core::units::m3;

/// CSTR volume for steady single-pass conversion.
///
/// `V = F0·C0·X / (k_T·C_eⁿ)` with `C_e = C_A(X)`. Purely algebraic for any
/// phase, so `numerics` is not consulted.
pub fn evaluate(input: &CstrInput, _numerics: &Numerics) -> ReactorResult<Evaluation> {
    let c0 = input.inlet_concentration.value;
    let x = input.conversion;
    let k = input.kinetics.rate_constant();

    let c_exit = input.phase.concentration(c0, x);
    let volume = input.molar_feed() * x / (k * c_exit.powf(input.kinetics.order));
    let volume = check_design(volume, x, "reactor volume")?;

    Ok(Evaluation {
        reactor: ReactorKind::Cstr,
        conversion: x,
        design: DesignQuantity::Volume {
            liters: volume_to_liters(m3(volume)),
        },
        outlet_concentration: outlet_concentration(c0, x, &input.phase)?,
        rate_constant: k,
        path: SolutionPath::Algebraic,
    })
}
