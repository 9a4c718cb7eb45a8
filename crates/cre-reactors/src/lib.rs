//! cre-reactors: design equations for ideal reactors.
//!
//! A caller builds a [`ParameterSet`] (flat map of named values in boundary
//! units), picks a [`ReactorKind`] and calls [`evaluate`]. The map is checked
//! once by the validator and turned into a typed SI input; the evaluator for
//! that reactor then returns an [`Evaluation`] carrying the design quantity
//! (reaction time, volume or catalyst mass) and the outlet concentration.
//!
//! | Reactor | Design quantity | Method |
//! |---|---|---|
//! | Batch | time, s | closed form or trapezoid |
//! | CSTR | volume, L | algebraic |
//! | PFR | volume, L | closed form or trapezoid |
//! | PBR | catalyst mass, kg | closed form, trapezoid, or forward Euler with pressure drop |
//!
//! # Example
//!
//! ```
//! use cre_reactors::{ParameterSet, ReactorKind, evaluate, fields::*};
//!
//! let params = ParameterSet::new()
//!     .with(CONVERSION, 0.5)
//!     .with(INLET_CONCENTRATION, 1.0)
//!     .with(FLOW_RATE, 10.0)
//!     .with(REACTION_ORDER, 1.0)
//!     .with(TEMPERATURE, 300.0)
//!     .with(RATE_CONSTANT, 0.1);
//!
//! let eval = evaluate(ReactorKind::Cstr, &params).unwrap();
//! assert!((eval.design.value() - 1.0 / 36.0).abs() < 1e-12);
//! assert!((eval.outlet_concentration - 0.5).abs() < 1e-12);
//! ```

pub mod batch;
pub mod common;
pub mod cstr;
pub mod error;
pub mod evaluation;
pub mod kind;
pub mod params;
pub mod pbr;
pub mod pfr;
pub mod reactor;
pub mod sweep;
pub mod validate;

// Re-exports
pub use error::{ReactorError, ReactorResult};
pub use evaluation::{DesignQuantity, Evaluation, SolutionPath};
pub use kind::ReactorKind;
pub use params::{
    BatchInput, CstrInput, FlowInput, IntegralMethod, KineticsInput, Numerics, ParameterSet,
    PbrInput, PfrInput, fields,
};
pub use reactor::{Reactor, evaluate, evaluate_with};
pub use sweep::{ConversionSweep, SweepPoint, run_sweep};
pub use validate::{batch_input, cstr_input, pbr_input, pfr_input};
