//! Fixed-step composite trapezoidal quadrature.

use crate::error::{KineticsError, KineticsResult};

/// Subinterval count used by every design integral.
///
/// Not adaptive and not convergence-checked. Raising it trades speed for
/// accuracy; the endpoint weighting stays ½ either way.
pub const DEFAULT_SUBINTERVALS: usize = 1000;

/// Integrate `f` over `[a, b]` with `n` equal subintervals.
///
/// `h·(f(a)/2 + f(x₁) + … + f(x_{n−1}) + f(b)/2)`. A degenerate interval
/// returns exactly zero without evaluating `f`, so integrands that are
/// singular at the far end are never touched when nothing has to be
/// integrated.
pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> KineticsResult<f64>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Err(KineticsError::InvalidArg {
            what: "trapezoid needs at least one subinterval",
        });
    }
    if a == b {
        return Ok(0.0);
    }

    let h = (b - a) / n as f64;
    let mut sum = 0.5 * (f(a) + f(b));
    for i in 1..n {
        sum += f(a + i as f64 * h);
    }
    Ok(sum * h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_for_linear_integrands() {
        let v = trapezoid(|x| 3.0 * x + 1.0, 0.0, 2.0, 7).unwrap();
        assert!((v - 8.0).abs() < 1e-12);
    }

    #[test]
    fn endpoints_weighted_half() {
        // Single interval: h * (f(a) + f(b)) / 2
        let v = trapezoid(|x| x * x, 0.0, 1.0, 1).unwrap();
        assert_eq!(v, 0.5);
    }

    #[test]
    fn degenerate_interval_is_zero() {
        let v = trapezoid(|_| f64::INFINITY, 0.3, 0.3, DEFAULT_SUBINTERVALS).unwrap();
        assert_eq!(v, 0.0);
    }

    #[test]
    fn rejects_zero_subintervals() {
        assert!(trapezoid(|x| x, 0.0, 1.0, 0).is_err());
    }

    #[test]
    fn first_order_integral_accuracy() {
        let exact = -(1.0_f64 - 0.9).ln();
        let v = trapezoid(|x| 1.0 / (1.0 - x), 0.0, 0.9, DEFAULT_SUBINTERVALS).unwrap();
        assert!(((v - exact) / exact).abs() < 1e-4);
    }
}
