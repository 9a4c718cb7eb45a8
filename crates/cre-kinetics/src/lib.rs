//! cre-kinetics: rate laws and numerical building blocks for reactor design.
//!
//! Provides:
//! - Arrhenius correction of a rate constant quoted at a reference temperature
//! - Concentration of the limiting species as a function of conversion,
//!   including gas-phase expansion and pressure effects
//! - Fixed-step composite trapezoidal quadrature
//! - Explicit fixed-step ODE marching (forward Euler) with a state check hook
//!
//! Everything here is a pure function of its arguments; nothing is cached.
//!
//! # Example
//!
//! ```
//! use cre_kinetics::{FeedPhase, rate_constant, trapezoid, DEFAULT_SUBINTERVALS};
//!
//! let k = rate_constant(0.1, 0.0, 300.0, 300.0);
//! let phase = FeedPhase::LIQUID;
//! let c0 = 1000.0;
//! let t = trapezoid(|x| c0 / (k * phase.concentration(c0, x)), 0.0, 0.5, DEFAULT_SUBINTERVALS)
//!     .unwrap();
//! assert!((t - (2.0_f64).ln() / k).abs() / t < 1e-4);
//! ```

pub mod arrhenius;
pub mod error;
pub mod integrator;
pub mod model;
pub mod profile;
pub mod quadrature;

// Re-exports
pub use arrhenius::{Arrhenius, rate_constant};
pub use error::{KineticsError, KineticsResult};
pub use integrator::{ForwardEuler, Integrator, MarchOptions, MarchOutcome, march_until};
pub use model::OdeModel;
pub use profile::{FeedPhase, concentration_at_conversion, conversion_at_concentration};
pub use quadrature::{DEFAULT_SUBINTERVALS, trapezoid};
