//! Text input → parameter map.
//!
//! Mirrors a form: every field arrives as text, blank text means the field is
//! absent, anything else must parse as a number.

use crate::error::{AppError, AppResult};
use cre_reactors::ParameterSet;

/// Parse one field's text. Blank is `None`.
pub fn parse_field(key: &str, text: &str) -> AppResult<Option<f64>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<f64>()
        .map(Some)
        .map_err(|_| AppError::InvalidInput(format!("{key}: '{text}' is not a number")))
}

/// Split `key=value`.
pub fn parse_assignment(item: &str) -> AppResult<(String, Option<f64>)> {
    let (key, value) = item
        .split_once('=')
        .ok_or_else(|| AppError::InvalidInput(format!("expected key=value, got '{item}'")))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(AppError::InvalidInput(format!("missing key in '{item}'")));
    }
    Ok((key.to_string(), parse_field(key, value)?))
}

/// Apply assignments in order onto `base`; later ones win, blanks remove.
pub fn apply_assignments<S: AsRef<str>>(
    mut base: ParameterSet,
    items: &[S],
) -> AppResult<ParameterSet> {
    for item in items {
        match parse_assignment(item.as_ref())? {
            (key, Some(value)) => base.set(&key, value),
            (key, None) => {
                base.remove(&key);
            }
        }
    }
    Ok(base)
}
