use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

/// Relative deviation of `a` from the reference `b`.
///
/// Falls back to the absolute difference when the reference is zero.
pub fn relative_error(a: Real, b: Real) -> Real {
    if b == 0.0 {
        (a - b).abs()
    } else {
        ((a - b) / b).abs()
    }
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive, otherwise `InvalidArg`.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::InvalidArg { what })
    }
}
