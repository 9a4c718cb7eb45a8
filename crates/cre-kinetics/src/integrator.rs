//! Fixed-step explicit integrators and the marching loop.

use crate::error::{KineticsError, KineticsResult};
use crate::model::OdeModel;
use cre_core::numeric::ensure_positive;
use tracing::debug;

/// Trait for fixed-step integrators.
pub trait Integrator {
    /// Advance state by one step of size `dw`.
    fn step<M: OdeModel>(&self, model: &M, w: f64, x: &M::State, dw: f64)
    -> KineticsResult<M::State>;
}

/// Forward Euler (explicit, 1st order).
/// Calls rhs() once per step.
#[derive(Clone, Debug)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<M: OdeModel>(
        &self,
        model: &M,
        w: f64,
        x: &M::State,
        dw: f64,
    ) -> KineticsResult<M::State> {
        // x_new = x + dw * rhs(w, x)
        let xdot = model.rhs(w, x)?;
        Ok(model.add(x, &model.scale(&xdot, dw)))
    }
}

/// Step size and budget for [`march_until`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarchOptions {
    /// Fixed step in the independent variable
    pub step: f64,
    /// Steps allowed before giving up
    pub max_steps: usize,
}

impl Default for MarchOptions {
    fn default() -> Self {
        Self {
            step: 1e-3,
            max_steps: 10_000_000,
        }
    }
}

/// The last step of a march: the state before and after the stop condition
/// became true.
///
/// When the condition already holds for the initial state, `before` and
/// `after` coincide and `w_before == w_after == 0`.
#[derive(Clone, Debug)]
pub struct MarchOutcome<S> {
    pub w_before: f64,
    pub before: S,
    pub w_after: f64,
    pub after: S,
    pub steps: usize,
}

/// March from the initial state until `done` returns true.
///
/// Every state that does not finish the march goes through
/// [`OdeModel::check_state`], so a non-physical state aborts it. The crossing
/// state (`after` in the outcome) is returned unchecked: callers that
/// interpolate inside the last step check the interpolated state instead.
pub fn march_until<M, I, F>(
    model: &M,
    integrator: &I,
    options: &MarchOptions,
    mut done: F,
) -> KineticsResult<MarchOutcome<M::State>>
where
    M: OdeModel,
    I: Integrator,
    F: FnMut(&M::State) -> bool,
{
    ensure_positive(options.step, "march step must be positive")?;

    let mut x = model.initial_state();
    if done(&x) {
        return Ok(MarchOutcome {
            w_before: 0.0,
            before: x.clone(),
            w_after: 0.0,
            after: x,
            steps: 0,
        });
    }

    let mut w = 0.0;
    for i in 0..options.max_steps {
        let x_new = integrator.step(model, w, &x, options.step)?;
        // Recompute from the index to avoid drift in w over long marches.
        let w_new = (i + 1) as f64 * options.step;

        if done(&x_new) {
            debug!(steps = i + 1, w = w_new, "march reached target");
            return Ok(MarchOutcome {
                w_before: w,
                before: x,
                w_after: w_new,
                after: x_new,
                steps: i + 1,
            });
        }

        model.check_state(&x_new)?;
        x = x_new;
        w = w_new;
    }

    Err(KineticsError::StepLimit {
        steps: options.max_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// dx/dw = r, linear growth.
    struct Linear {
        rate: f64,
    }

    impl OdeModel for Linear {
        type State = f64;

        fn initial_state(&self) -> f64 {
            0.0
        }

        fn rhs(&self, _w: f64, _x: &f64) -> KineticsResult<f64> {
            Ok(self.rate)
        }

        fn add(&self, a: &f64, b: &f64) -> f64 {
            a + b
        }

        fn scale(&self, a: &f64, scale: f64) -> f64 {
            a * scale
        }
    }

    /// dx/dw = -1 starting at 1, rejects negative states.
    struct Draining;

    impl OdeModel for Draining {
        type State = f64;

        fn initial_state(&self) -> f64 {
            1.0
        }

        fn rhs(&self, _w: f64, _x: &f64) -> KineticsResult<f64> {
            Ok(-1.0)
        }

        fn add(&self, a: &f64, b: &f64) -> f64 {
            a + b
        }

        fn scale(&self, a: &f64, scale: f64) -> f64 {
            a * scale
        }

        fn check_state(&self, x: &f64) -> KineticsResult<()> {
            if *x <= 0.0 {
                Err(KineticsError::NonPhysical {
                    what: "level",
                    value: *x,
                })
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn euler_step_is_exact_for_constant_rhs() {
        let model = Linear { rate: 2.0 };
        let x = ForwardEuler.step(&model, 0.0, &1.0, 0.25).unwrap();
        assert_eq!(x, 1.5);
    }

    #[test]
    fn march_brackets_the_target() {
        let model = Linear { rate: 1.0 };
        let opts = MarchOptions {
            step: 0.1,
            max_steps: 100,
        };
        let out = march_until(&model, &ForwardEuler, &opts, |x| *x >= 0.35).unwrap();
        assert_eq!(out.steps, 4);
        assert!(out.before < 0.35 && out.after >= 0.35);
        assert!((out.w_after - 0.4).abs() < 1e-12);
    }

    #[test]
    fn march_already_done() {
        let model = Linear { rate: 1.0 };
        let out = march_until(&model, &ForwardEuler, &MarchOptions::default(), |_| true).unwrap();
        assert_eq!(out.steps, 0);
        assert_eq!(out.w_after, 0.0);
    }

    #[test]
    fn march_stops_on_non_physical_state() {
        let opts = MarchOptions {
            step: 0.3,
            max_steps: 100,
        };
        let err = march_until(&Draining, &ForwardEuler, &opts, |_| false).unwrap_err();
        assert!(matches!(err, KineticsError::NonPhysical { what: "level", .. }));
    }

    #[test]
    fn crossing_state_is_left_to_the_caller() {
        // 1.0 → 0.7 → 0.4 → 0.1 → -0.2: the last state crosses the target
        // and is non-physical, but the march still brackets it.
        let opts = MarchOptions {
            step: 0.3,
            max_steps: 100,
        };
        let out = march_until(&Draining, &ForwardEuler, &opts, |x| *x <= -0.1).unwrap();
        assert_eq!(out.steps, 4);
        assert!(out.before > 0.0);
        assert!(out.after < 0.0);
    }

    #[test]
    fn march_honours_step_budget() {
        let model = Linear { rate: 1.0 };
        let opts = MarchOptions {
            step: 0.1,
            max_steps: 5,
        };
        let err = march_until(&model, &ForwardEuler, &opts, |x| *x > 10.0).unwrap_err();
        assert_eq!(err, KineticsError::StepLimit { steps: 5 });
    }

    #[test]
    fn march_rejects_bad_step() {
        let model = Linear { rate: 1.0 };
        let opts = MarchOptions {
            step: 0.0,
            max_steps: 5,
        };
        assert!(march_until(&model, &ForwardEuler, &opts, |_| false).is_err());

        let opts = MarchOptions {
            step: f64::NAN,
            max_steps: 5,
        };
        let err = march_until(&model, &ForwardEuler, &opts, |_| false).unwrap_err();
        assert!(matches!(err, KineticsError::InvalidArg { .. }));
    }
}
