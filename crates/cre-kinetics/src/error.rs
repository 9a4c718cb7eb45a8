//! Error types for kinetics and numerical integration.

use cre_core::CoreError;
use thiserror::Error;

/// Errors raised by the numerical building blocks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KineticsError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical state: {what} (value={value})")]
    NonPhysical { what: &'static str, value: f64 },

    #[error("Step limit reached after {steps} steps before the target was met")]
    StepLimit { steps: usize },
}

pub type KineticsResult<T> = Result<T, KineticsError>;

impl From<CoreError> for KineticsError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NonFinite { what, value } => KineticsError::NonPhysical { what, value },
            CoreError::InvalidArg { what } => KineticsError::InvalidArg { what },
        }
    }
}
