//! Closed set of reactor evaluators behind one entry point.

use crate::error::ReactorResult;
use crate::evaluation::Evaluation;
use crate::kind::ReactorKind;
use crate::params::{BatchInput, CstrInput, Numerics, ParameterSet, PbrInput, PfrInput};
use crate::{batch, cstr, pbr, pfr, validate};
use tracing::{debug, warn};

/// A validated reactor configuration, ready to evaluate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reactor {
    Batch(BatchInput),
    Cstr(CstrInput),
    Pfr(PfrInput),
    Pbr(PbrInput),
}

impl Reactor {
    /// Validate a parameter map for `kind`.
    pub fn from_parameters(kind: ReactorKind, params: &ParameterSet) -> ReactorResult<Self> {
        Ok(match kind {
            ReactorKind::Batch => Reactor::Batch(validate::batch_input(params)?),
            ReactorKind::Cstr => Reactor::Cstr(validate::cstr_input(params)?),
            ReactorKind::Pfr => Reactor::Pfr(validate::pfr_input(params)?),
            ReactorKind::Pbr => Reactor::Pbr(validate::pbr_input(params)?),
        })
    }

    pub fn kind(&self) -> ReactorKind {
        match self {
            Reactor::Batch(_) => ReactorKind::Batch,
            Reactor::Cstr(_) => ReactorKind::Cstr,
            Reactor::Pfr(_) => ReactorKind::Pfr,
            Reactor::Pbr(_) => ReactorKind::Pbr,
        }
    }

    pub fn evaluate(&self, numerics: &Numerics) -> ReactorResult<Evaluation> {
        match self {
            Reactor::Batch(input) => batch::evaluate(input, numerics),
            Reactor::Cstr(input) => cstr::evaluate(input, numerics),
            Reactor::Pfr(input) => pfr::evaluate(input, numerics),
            Reactor::Pbr(input) => pbr::evaluate(input, numerics),
        }
    }
}

/// Validate and evaluate with default numerics.
pub fn evaluate(kind: ReactorKind, params: &ParameterSet) -> ReactorResult<Evaluation> {
    evaluate_with(kind, params, &Numerics::default())
}

/// Validate and evaluate with explicit numerics.
pub fn evaluate_with(
    kind: ReactorKind,
    params: &ParameterSet,
    numerics: &Numerics,
) -> ReactorResult<Evaluation> {
    debug!(reactor = %kind, fields = params.len(), "evaluating");
    let result = Reactor::from_parameters(kind, params).and_then(|r| r.evaluate(numerics));
    match &result {
        Ok(eval) => debug!(
            reactor = %kind,
            design = eval.design.value(),
            outlet = eval.outlet_concentration,
            path = ?eval.path,
            "evaluation complete"
        ),
        Err(e) if e.is_input_error() => debug!(reactor = %kind, error = %e, "input rejected"),
        Err(e) => warn!(reactor = %kind, error = %e, "evaluation failed"),
    }
    result
}
