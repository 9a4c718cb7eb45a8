//! Batch reactor: time to reach the target conversion.

use crate::common::{check_design, outlet_concentration, residence_integral};
use crate::error::ReactorResult;
use crate::evaluation::{DesignQuantity, Evaluation};
use crate::kind::ReactorKind;
use crate::params::{BatchInput, Numerics};

/// Batch reaction time, `t = ∫₀^X C0 / (k_T·C_A(X')ⁿ) dX'`.
///
/// Closed form for a liquid charge, trapezoidal quadrature when the phase
/// carries expansion or a pressure factor.
pub fn evaluate(input: &BatchInput, numerics: &Numerics) -> ReactorResult<Evaluation> {
    let c0 = input.inlet_concentration.value;
    let x = input.conversion;
    let k = input.kinetics.rate_constant();

    let (t, path) = residence_integral(c0, x, input.kinetics.order, k, &input.phase, numerics)?;
    let seconds = check_design(t, x, "reaction time")?;

    Ok(Evaluation {
        reactor: ReactorKind::Batch,
        conversion: x,
        design: DesignQuantity::ReactionTime { seconds },
        outlet_concentration: outlet_concentration(c0, x, &input.phase)?,
        rate_constant: k,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::SolutionPath;
    use crate::params::fields::*;
    use crate::params::ParameterSet;
    use crate::validate::batch_input;

    fn zero_order() -> ParameterSet {
        ParameterSet::new()
            .with(CONVERSION, 0.5)
            .with(INLET_CONCENTRATION, 2.0)
            .with(REACTION_ORDER, 0.0)
            .with(TEMPERATURE, 300.0)
            .with(RATE_CONSTANT, 0.5)
    }

    #[test]
    fn zero_order_time() {
        let eval = evaluate(&batch_input(&zero_order()).unwrap(), &Numerics::default()).unwrap();
        // t = C0·X/k = 2·0.5/0.5
        assert!((eval.design.value() - 2.0).abs() < 1e-12);
        assert_eq!(eval.path, SolutionPath::ClosedForm);
        assert_eq!(eval.outlet_concentration, 1.0);
    }

    #[test]
    fn zero_order_quadrature_agrees() {
        let input = batch_input(&zero_order()).unwrap();
        let analytic = evaluate(&input, &Numerics::default()).unwrap();
        let numeric = evaluate(&input, &Numerics::quadrature_only()).unwrap();
        assert_eq!(numeric.path, SolutionPath::Trapezoid);
        assert!((numeric.design.value() - analytic.design.value()).abs() < 1e-9);
    }

    #[test]
    fn first_order_time_is_log() {
        let params = zero_order()
            .with(REACTION_ORDER, 1.0)
            .with(RATE_CONSTANT, 0.01)
            .with(CONVERSION, 0.9);
        let eval = evaluate(&batch_input(&params).unwrap(), &Numerics::default()).unwrap();
        let expected = -(0.1_f64).ln() / 0.01;
        assert!((eval.design.value() - expected).abs() < 1e-9);
    }

    #[test]
    fn gas_phase_uses_quadrature() {
        let params = zero_order().with(REACTION_ORDER, 1.0).with(EPSILON, 1.0);
        let eval = evaluate(&batch_input(&params).unwrap(), &Numerics::default()).unwrap();
        assert_eq!(eval.path, SolutionPath::Trapezoid);
        // Outlet: C0·(1−X)/(1+εX) = 2·0.5/1.5
        assert!((eval.outlet_concentration - 2.0 / 3.0).abs() < 1e-12);
    }
}
