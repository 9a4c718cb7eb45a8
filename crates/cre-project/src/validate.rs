//! Case file validation logic.

use crate::schema::CaseFile;
use cre_reactors::{ConversionSweep, Reactor, ReactorError};
use std::collections::HashSet;

pub const SUPPORTED_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Case #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("Duplicate ID: {id} in cases")]
    DuplicateId { id: String },

    #[error("Case '{id}': {source}")]
    InvalidCase { id: String, source: ReactorError },

    #[error("Case '{id}' sweep: {source}")]
    InvalidSweep { id: String, source: ReactorError },
}

/// Check the file version, case ids, and every case's parameter map.
///
/// Parameters go through the same validator the evaluator uses, so a file
/// that passes here only fails at run time for computational reasons.
pub fn validate_case_file(file: &CaseFile) -> Result<(), ValidationError> {
    if file.version != SUPPORTED_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    let mut ids = HashSet::new();
    for (index, case) in file.cases.iter().enumerate() {
        if case.id.trim().is_empty() {
            return Err(ValidationError::EmptyId { index });
        }
        if !ids.insert(case.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: case.id.clone(),
            });
        }

        Reactor::from_parameters(case.reactor, &case.parameters).map_err(|source| {
            ValidationError::InvalidCase {
                id: case.id.clone(),
                source,
            }
        })?;

        if let Some(sweep) = &case.sweep {
            ConversionSweep::new(sweep.start, sweep.end, sweep.points).map_err(|source| {
                ValidationError::InvalidSweep {
                    id: case.id.clone(),
                    source,
                }
            })?;
        }
    }

    Ok(())
}
