//! Shared design-integral machinery and result checks.

use crate::error::{ReactorError, ReactorResult};
use crate::evaluation::SolutionPath;
use crate::params::{IntegralMethod, Numerics};
use cre_core::numeric::ensure_finite;
use cre_core::units::boundary::LITERS_PER_M3;
use cre_kinetics::{FeedPhase, trapezoid};
use tracing::{debug, warn};

/// `∫₀^X C0 / (k·C_A(X')ⁿ) dX'` in closed form for a liquid feed.
///
/// Orders 0, 1 and 2 use their textbook inversions; any other order uses the
/// general power-law form. All branches return exactly zero at X = 0.
pub fn closed_form_integral(c0: f64, x: f64, order: f64, k: f64) -> f64 {
    if order == 0.0 {
        c0 * x / k
    } else if order == 1.0 {
        -(-x).ln_1p() / k
    } else if order == 2.0 {
        x / (k * c0 * (1.0 - x))
    } else {
        c0.powf(1.0 - order) * ((1.0 - x).powf(1.0 - order) - 1.0) / (k * (order - 1.0))
    }
}

/// `∫₀^X C0 / (k·C_A(X')ⁿ) dX'` by composite trapezoid over the profile of `phase`.
pub fn quadrature_integral(
    c0: f64,
    x: f64,
    order: f64,
    k: f64,
    phase: &FeedPhase,
    subintervals: usize,
) -> ReactorResult<f64> {
    let integrand = |xi: f64| c0 / (k * phase.concentration(c0, xi).powf(order));
    Ok(trapezoid(integrand, 0.0, x, subintervals)?)
}

/// The design integral shared by batch, PFR and PBR.
///
/// Result has units of time when `k` is volumetric; flow reactors scale it by
/// the volumetric feed.
pub(crate) fn residence_integral(
    c0: f64,
    x: f64,
    order: f64,
    k: f64,
    phase: &FeedPhase,
    numerics: &Numerics,
) -> ReactorResult<(f64, SolutionPath)> {
    if numerics.method == IntegralMethod::Auto && phase.is_liquid() {
        return Ok((closed_form_integral(c0, x, order, k), SolutionPath::ClosedForm));
    }
    debug!(
        subintervals = numerics.subintervals,
        epsilon = phase.epsilon,
        pressure_ratio = phase.pressure_ratio,
        "design integral by quadrature"
    );
    let value = quadrature_integral(c0, x, order, k, phase, numerics.subintervals)?;
    Ok((value, SolutionPath::Trapezoid))
}

/// Reject non-finite, negative, or zero-for-nonzero-conversion outputs.
pub(crate) fn check_design(value: f64, conversion: f64, what: &'static str) -> ReactorResult<f64> {
    let value = ensure_finite(value, what).inspect_err(|_| {
        warn!(what, value, "design quantity is not finite");
    })?;
    if value < 0.0 || (value == 0.0 && conversion > 0.0) {
        warn!(what, value, conversion, "design quantity is not positive");
        return Err(ReactorError::InvalidResult { what, value });
    }
    Ok(value)
}

/// Outlet concentration in mol/L from an SI inlet concentration.
pub(crate) fn outlet_concentration(c0: f64, x: f64, phase: &FeedPhase) -> ReactorResult<f64> {
    let ca = phase.concentration(c0, x) / LITERS_PER_M3;
    let ca = ensure_finite(ca, "outlet concentration")?;
    if ca < 0.0 {
        return Err(ReactorError::InvalidResult {
            what: "outlet concentration",
            value: ca,
        });
    }
    Ok(ca)
}
