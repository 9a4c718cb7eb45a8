//! cre-project: case file format, load/save and validation.
//!
//! A case file is YAML (or JSON, chosen by extension) holding named reactor
//! calculations. Loading always validates.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{SUPPORTED_VERSION, ValidationError, validate_case_file};

use std::path::Path;
use tracing::debug;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("No case with id '{id}'")]
    UnknownCase { id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encoding of a case file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// `.json` is JSON, anything else is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Yaml,
        }
    }
}

impl CaseFile {
    /// Case lookup that fails with a reportable error.
    pub fn find_case(&self, id: &str) -> ProjectResult<&CaseDef> {
        self.case(id)
            .ok_or_else(|| ProjectError::UnknownCase { id: id.to_string() })
    }
}

pub fn load_yaml(path: &Path) -> ProjectResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let file: CaseFile = serde_yaml::from_str(&content)?;
    validate_case_file(&file)?;
    Ok(file)
}

pub fn save_yaml(path: &Path, file: &CaseFile) -> ProjectResult<()> {
    validate_case_file(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let file: CaseFile = serde_json::from_str(&content)?;
    validate_case_file(&file)?;
    Ok(file)
}

pub fn save_json(path: &Path, file: &CaseFile) -> ProjectResult<()> {
    validate_case_file(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension.
pub fn load_case_file(path: &Path) -> ProjectResult<CaseFile> {
    let format = FileFormat::from_path(path);
    debug!(path = %path.display(), ?format, "loading case file");
    match format {
        FileFormat::Json => load_json(path),
        FileFormat::Yaml => load_yaml(path),
    }
}

/// Save by extension.
pub fn save_case_file(path: &Path, file: &CaseFile) -> ProjectResult<()> {
    match FileFormat::from_path(path) {
        FileFormat::Json => save_json(path, file),
        FileFormat::Yaml => save_yaml(path, file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(FileFormat::from_path(Path::new("a.json")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("a.JSON")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("a.yaml")), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(Path::new("cases")), FileFormat::Yaml);
    }

    #[test]
    fn parses_documented_layout() {
        let yaml = r#"
version: 1
name: Homework 3
cases:
  - id: cstr-liquid
    name: Liquid-phase CSTR
    reactor: cstr
    parameters:
      conversion: 0.5
      inlet_concentration: 1.0
      flow_rate: 10.0
      reaction_order: 1
      temperature: 300
      rate_constant: 0.1
"#;
        let file: CaseFile = serde_yaml::from_str(yaml).unwrap();
        validate_case_file(&file).unwrap();
        let case = file.find_case("cstr-liquid").unwrap();
        assert_eq!(case.reactor, cre_reactors::ReactorKind::Cstr);
        assert_eq!(case.parameters.get("reaction_order"), Some(1.0));
        assert!(matches!(
            file.find_case("nope"),
            Err(ProjectError::UnknownCase { .. })
        ));
    }
}
