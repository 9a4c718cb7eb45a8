//! OdeModel trait for explicit marching along a design coordinate.

use crate::error::KineticsResult;

/// Trait for first-order ODE systems `dx/dw = f(w, x)`.
///
/// The independent variable is whatever the reactor integrates over
/// (catalyst mass for a packed bed). An OdeModel must implement:
/// - State type (Clone, for the bracketing step)
/// - Initial state
/// - RHS computation
/// - Scalar field arithmetic for integration: add states, scale by scalar
pub trait OdeModel {
    /// State type (must be Clone).
    type State: Clone;

    /// Return the state at w = 0.
    fn initial_state(&self) -> Self::State;

    /// Compute the state derivative dx/dw = f(w, x).
    fn rhs(&self, w: f64, x: &Self::State) -> KineticsResult<Self::State>;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = scale * a.
    fn scale(&self, a: &Self::State, scale: f64) -> Self::State;

    /// Reject states that cannot occur physically.
    ///
    /// Called after every accepted step. Default accepts everything.
    fn check_state(&self, _x: &Self::State) -> KineticsResult<()> {
        Ok(())
    }
}
