//! Packed bed reactor: catalyst mass, optionally with Ergun-type pressure drop.
//!
//! Without pressure drop the catalyst mass is the PFR integral with a
//! mass-based rate constant. With `alpha > 0` the conversion and the
//! dimensionless pressure `p = P/P₀` are marched together along the bed:
//!
//! ```text
//! dX/dW = k'·C_A(X, p)ⁿ / FA0
//! dp/dW = −(α / 2p)·(1 + εX)
//! ```
//!
//! where `C_A(X, p) = C0·φ·p·(1−X)/(1+εX)`. The same profile gives the
//! outlet concentration at the exit pressure.

use crate::common::{check_design, outlet_concentration, residence_integral};
use crate::error::ReactorResult;
use crate::evaluation::{DesignQuantity, Evaluation, SolutionPath};
use crate::kind::ReactorKind;
use crate::params::{Numerics, PbrInput};
use cre_core::units::boundary::volume_to_liters;
use cre_core::units::m3;
use cre_kinetics::{
    FeedPhase, ForwardEuler, KineticsError, KineticsResult, OdeModel, march_until,
};
use nalgebra::Vector2;
use tracing::debug;

/// Coupled conversion / pressure model of a bed with pressure drop.
///
/// State is `[X, p]`.
struct PressureDropBed {
    c0: f64,
    order: f64,
    k: f64,
    molar_feed: f64,
    alpha: f64,
    phase: FeedPhase,
}

impl OdeModel for PressureDropBed {
    type State = Vector2<f64>;

    fn initial_state(&self) -> Self::State {
        Vector2::new(0.0, 1.0)
    }

    fn rhs(&self, _w: f64, state: &Self::State) -> KineticsResult<Self::State> {
        let (x, p) = (state[0], state[1]);
        let ca = self.phase.with_pressure_factor(p).concentration(self.c0, x);
        let dx_dw = self.k * ca.powf(self.order) / self.molar_feed;
        let dp_dw = -(self.alpha / (2.0 * p)) * (1.0 + self.phase.epsilon * x);
        Ok(Vector2::new(dx_dw, dp_dw))
    }

    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State {
        a + b
    }

    fn scale(&self, a: &Self::State, scale: f64) -> Self::State {
        a * scale
    }

    fn check_state(&self, state: &Self::State) -> KineticsResult<()> {
        let p = state[1];
        if !(p > 0.0) {
            return Err(KineticsError::NonPhysical {
                what: "bed pressure ratio dropped to zero before the target conversion",
                value: p,
            });
        }
        if !state[0].is_finite() {
            return Err(KineticsError::NonPhysical {
                what: "conversion",
                value: state[0],
            });
        }
        Ok(())
    }
}

/// March the pressure-drop model to `x_target`.
///
/// Returns catalyst mass and exit pressure ratio, interpolated linearly inside
/// the step that crosses the target. The bed only has to hold pressure up to
/// the interpolated exit, not to the end of the overshooting step.
fn march_with_pressure_drop(
    bed: &PressureDropBed,
    x_target: f64,
    numerics: &Numerics,
) -> ReactorResult<(f64, f64)> {
    let out = march_until(bed, &ForwardEuler, &numerics.march, |s| s[0] >= x_target)?;
    if out.steps == 0 {
        return Ok((0.0, out.after[1]));
    }

    let frac = (x_target - out.before[0]) / (out.after[0] - out.before[0]);
    let w = out.w_before + frac * (out.w_after - out.w_before);
    let p = out.before[1] + frac * (out.after[1] - out.before[1]);
    bed.check_state(&Vector2::new(x_target, p))?;
    debug!(steps = out.steps, w, p, "pressure-drop march finished");
    Ok((w, p))
}

/// Catalyst mass for the target conversion.
pub fn evaluate(input: &PbrInput, numerics: &Numerics) -> ReactorResult<Evaluation> {
    let feed = &input.feed;
    let c0 = feed.inlet_concentration.value;
    let x = feed.conversion;
    let k = feed.kinetics.rate_constant();

    let (mass, exit_phase, path) = if input.alpha > 0.0 {
        let bed = PressureDropBed {
            c0,
            order: feed.kinetics.order,
            k,
            molar_feed: feed.molar_feed(),
            alpha: input.alpha,
            phase: feed.phase,
        };
        let (w, p_exit) = march_with_pressure_drop(&bed, x, numerics)?;
        (
            w,
            feed.phase.with_pressure_factor(p_exit),
            SolutionPath::ForwardEuler,
        )
    } else {
        let (tau, path) = residence_integral(c0, x, feed.kinetics.order, k, &feed.phase, numerics)?;
        (feed.flow_rate.value * tau, feed.phase, path)
    };

    let kilograms = check_design(mass, x, "catalyst mass")?;
    let bed_volume_liters = input
        .bulk_density
        .map(|rho| volume_to_liters(m3(kilograms / rho.value)));

    Ok(Evaluation {
        reactor: ReactorKind::Pbr,
        conversion: x,
        design: DesignQuantity::CatalystMass {
            kilograms,
            bed_volume_liters,
        },
        outlet_concentration: outlet_concentration(c0, x, &exit_phase)?,
        rate_constant: k,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReactorError;
    use crate::params::ParameterSet;
    use crate::params::fields::*;
    use crate::validate::pbr_input;
    use cre_core::numeric::relative_error;

    /// FA0 = 1 mol/s and k'·C0 = 1 per kg, so dX/dW = (1−X)·p.
    fn params() -> ParameterSet {
        ParameterSet::new()
            .with(CONVERSION, 0.5)
            .with(INLET_CONCENTRATION, 1.0)
            .with(FLOW_RATE, 3600.0)
            .with(REACTION_ORDER, 1.0)
            .with(TEMPERATURE, 300.0)
            .with(RATE_CONSTANT, 1.0)
    }

    #[test]
    fn no_pressure_drop_matches_pfr_form() {
        let eval = evaluate(&pbr_input(&params()).unwrap(), &Numerics::default()).unwrap();
        assert!(relative_error(eval.design.value(), 2.0_f64.ln()) < 1e-12);
        assert_eq!(eval.path, SolutionPath::ClosedForm);
        assert!((eval.outlet_concentration - 0.5).abs() < 1e-12);
    }

    #[test]
    fn tiny_alpha_approaches_no_drop() {
        let eval = evaluate(
            &pbr_input(&params().with(ALPHA, 1e-6)).unwrap(),
            &Numerics::default(),
        )
        .unwrap();
        assert_eq!(eval.path, SolutionPath::ForwardEuler);
        assert!(relative_error(eval.design.value(), 2.0_f64.ln()) < 2e-3);
    }

    #[test]
    fn first_order_with_pressure_drop_matches_analytic() {
        let alpha = 0.5;
        let eval = evaluate(
            &pbr_input(&params().with(ALPHA, alpha)).unwrap(),
            &Numerics::default(),
        )
        .unwrap();
        // −ln(1−X) = (2/3α)·(1 − (1 − αW)^{3/2})
        let expected = (1.0 - (1.0 - 1.5 * alpha * 2.0_f64.ln()).powf(2.0 / 3.0)) / alpha;
        assert!(relative_error(eval.design.value(), expected) < 5e-3);

        // Outlet sees the exit pressure: C0·p·(1−X)
        let p_exit = (1.0 - alpha * expected).sqrt();
        assert!(relative_error(eval.outlet_concentration, 0.5 * p_exit) < 5e-3);
    }

    #[test]
    fn pressure_exhausted_before_target() {
        let err = evaluate(
            &pbr_input(&params().with(ALPHA, 2.0)).unwrap(),
            &Numerics::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ReactorError::NonPhysical { .. }));
    }

    #[test]
    fn zero_conversion_with_pressure_drop() {
        let eval = evaluate(
            &pbr_input(&params().with(ALPHA, 0.5).with(CONVERSION, 0.0)).unwrap(),
            &Numerics::default(),
        )
        .unwrap();
        assert_eq!(eval.design.value(), 0.0);
        assert_eq!(eval.outlet_concentration, 1.0);
    }

    #[test]
    fn overshooting_step_uses_interpolated_exit_pressure() {
        // One 1 kg step: X 0 → 1, p 1 → 1 − α/2. Interpolating to X = 0.5
        // gives W = 0.5 kg and p = 1 − α/4.
        let mut numerics = Numerics::default();
        numerics.march.step = 1.0;

        let eval = evaluate(&pbr_input(&params().with(ALPHA, 3.0)).unwrap(), &numerics).unwrap();
        assert!((eval.design.value() - 0.5).abs() < 1e-9);
        // C0·p·(1−X) = 0.25·0.5
        assert!((eval.outlet_concentration - 0.125).abs() < 1e-9);

        let err = evaluate(&pbr_input(&params().with(ALPHA, 5.0)).unwrap(), &numerics).unwrap_err();
        assert!(matches!(err, ReactorError::NonPhysical { .. }));
    }

    #[test]
    fn step_budget_exhaustion_is_reported() {
        let mut numerics = Numerics::default();
        numerics.march.max_steps = 10;
        let err = evaluate(&pbr_input(&params().with(ALPHA, 0.1)).unwrap(), &numerics).unwrap_err();
        assert_eq!(err, ReactorError::StepLimit { steps: 10 });
    }

    #[test]
    fn bed_volume_from_bulk_density() {
        let eval = evaluate(
            &pbr_input(&params().with(BULK_DENSITY, 0.5)).unwrap(),
            &Numerics::default(),
        )
        .unwrap();
        match eval.design {
            DesignQuantity::CatalystMass {
                kilograms,
                bed_volume_liters: Some(liters),
            } => assert!(relative_error(liters, 2.0 * kilograms) < 1e-12),
            other => panic!("unexpected design quantity {other:?}"),
        }
    }
}
