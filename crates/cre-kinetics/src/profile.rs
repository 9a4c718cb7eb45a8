//! Concentration of the limiting species along the conversion coordinate.

/// Inlet phase description for the concentration profile.
///
/// `epsilon` is the fractional change in total moles per unit conversion and
/// `pressure_ratio` is φ = P/P₀. A liquid feed has ε = 0 and φ = 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedPhase {
    pub epsilon: f64,
    pub pressure_ratio: f64,
}

impl Default for FeedPhase {
    fn default() -> Self {
        Self::LIQUID
    }
}

impl FeedPhase {
    pub const LIQUID: FeedPhase = FeedPhase {
        epsilon: 0.0,
        pressure_ratio: 1.0,
    };

    pub fn gas(epsilon: f64, pressure_ratio: f64) -> Self {
        Self {
            epsilon,
            pressure_ratio,
        }
    }

    /// True when the profile reduces to `C0·(1−X)`.
    pub fn is_liquid(&self) -> bool {
        self.epsilon == 0.0 && self.pressure_ratio == 1.0
    }

    /// Same phase with φ scaled by an additional pressure factor `p`.
    pub fn with_pressure_factor(&self, p: f64) -> Self {
        Self {
            epsilon: self.epsilon,
            pressure_ratio: self.pressure_ratio * p,
        }
    }

    pub fn concentration(&self, c0: f64, x: f64) -> f64 {
        concentration_at_conversion(c0, x, self.epsilon, self.pressure_ratio)
    }

    pub fn conversion(&self, c0: f64, ca: f64) -> f64 {
        conversion_at_concentration(c0, ca, self.epsilon, self.pressure_ratio)
    }
}

/// `C_A = C0·φ·(1−X)/(1+ε·X)`
#[inline]
pub fn concentration_at_conversion(c0: f64, x: f64, epsilon: f64, phi: f64) -> f64 {
    c0 * phi * (1.0 - x) / (1.0 + epsilon * x)
}

/// Inverse of [`concentration_at_conversion`]: `X = (C0·φ − C_A)/(C0·φ + ε·C_A)`.
#[inline]
pub fn conversion_at_concentration(c0: f64, ca: f64, epsilon: f64, phi: f64) -> f64 {
    (c0 * phi - ca) / (c0 * phi + epsilon * ca)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liquid_profile_is_linear() {
        let phase = FeedPhase::LIQUID;
        assert!(phase.is_liquid());
        assert_eq!(phase.concentration(2000.0, 0.25), 1500.0);
        assert_eq!(phase.concentration(2000.0, 0.0), 2000.0);
        assert_eq!(phase.concentration(2000.0, 1.0), 0.0);
    }

    #[test]
    fn expansion_dilutes_gas() {
        let liquid = concentration_at_conversion(1000.0, 0.5, 0.0, 1.0);
        let expanding = concentration_at_conversion(1000.0, 0.5, 1.0, 1.0);
        assert_eq!(expanding, 1000.0 * 0.5 / 1.5);
        assert!(expanding < liquid);
    }

    #[test]
    fn pressure_ratio_scales_concentration() {
        let phase = FeedPhase::gas(0.0, 0.5);
        assert!(!phase.is_liquid());
        assert_eq!(phase.concentration(1000.0, 0.2), 400.0);
        let dropped = phase.with_pressure_factor(0.5);
        assert_eq!(dropped.pressure_ratio, 0.25);
        assert_eq!(dropped.concentration(1000.0, 0.2), 200.0);
    }

    #[test]
    fn inverse_recovers_conversion() {
        let phase = FeedPhase::gas(0.5, 0.9);
        let ca = phase.concentration(800.0, 0.6);
        assert!((phase.conversion(800.0, ca) - 0.6).abs() < 1e-12);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn profile_decreases_with_conversion(
                eps in -0.9_f64..3.0,
                phi in 0.1_f64..5.0,
                x1 in 0.0_f64..0.99,
                dx in 1e-4_f64..0.01,
            ) {
                let phase = FeedPhase::gas(eps, phi);
                let c1 = phase.concentration(1000.0, x1);
                let c2 = phase.concentration(1000.0, x1 + dx);
                prop_assert!(c2 < c1);
            }

            #[test]
            fn inverse_matches_forward(
                eps in -0.9_f64..3.0,
                phi in 0.1_f64..5.0,
                x in 0.0_f64..0.999,
            ) {
                let phase = FeedPhase::gas(eps, phi);
                let ca = phase.concentration(500.0, x);
                prop_assert!((phase.conversion(500.0, ca) - x).abs() < 1e-9);
            }
        }
    }
}
