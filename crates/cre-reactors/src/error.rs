//! Error types for reactor evaluation.

use crate::kind::ReactorKind;
use cre_core::CoreError;
use cre_kinetics::KineticsError;
use thiserror::Error;

/// Why an evaluation produced no result.
///
/// Every variant carries enough context to be shown to a user as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReactorError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Field {field} is not a finite number: {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("Out of domain: {field} = {value} ({reason})")]
    OutOfDomain {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Unknown field '{field}' for {reactor} reactor")]
    UnknownField { field: String, reactor: ReactorKind },

    #[error("Mutually exclusive configuration: {what}")]
    MutuallyExclusive { what: &'static str },

    #[error("Non-physical state during integration: {what} (value={value})")]
    NonPhysical { what: &'static str, value: f64 },

    #[error("Integration did not reach the target within {steps} steps")]
    StepLimit { steps: usize },

    #[error("Invalid result: {what} = {value}")]
    InvalidResult { what: &'static str, value: f64 },

    #[error("Invalid numerical setting: {what}")]
    InvalidNumerics { what: &'static str },

    #[error("Invalid sweep: {what}")]
    InvalidSweep { what: &'static str },
}

pub type ReactorResult<T> = Result<T, ReactorError>;

impl ReactorError {
    /// True for errors detected before any computation ran.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::NotFinite { .. }
                | Self::OutOfDomain { .. }
                | Self::UnknownField { .. }
                | Self::MutuallyExclusive { .. }
        )
    }
}

impl From<KineticsError> for ReactorError {
    fn from(e: KineticsError) -> Self {
        match e {
            KineticsError::InvalidArg { what } => ReactorError::InvalidNumerics { what },
            KineticsError::NonPhysical { what, value } => ReactorError::NonPhysical { what, value },
            KineticsError::StepLimit { steps } => ReactorError::StepLimit { steps },
        }
    }
}

impl From<CoreError> for ReactorError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NonFinite { what, value } => ReactorError::InvalidResult { what, value },
            CoreError::InvalidArg { what } => ReactorError::InvalidNumerics { what },
        }
    }
}
