//! Error type for the command-line front end.

use cre_project::ProjectError;
use cre_reactors::ReactorError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    #[error("Calculation error: {0}")]
    Reactor(#[from] ReactorError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{failed} of {total} calculations failed")]
    Failed { failed: usize, total: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
