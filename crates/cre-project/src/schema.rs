//! Case file schema definitions.

use cre_reactors::{ConversionSweep, ParameterSet, ReactorKind};
use serde::{Deserialize, Serialize};

/// A named collection of reactor calculations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub cases: Vec<CaseDef>,
}

/// One calculation: reactor type plus its parameter map in boundary units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub id: String,
    pub name: String,
    pub reactor: ReactorKind,
    #[serde(default)]
    pub parameters: ParameterSet,
    /// Default conversion grid for design curves of this case
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<ConversionSweep>,
}

impl CaseFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: crate::validate::SUPPORTED_VERSION,
            name: name.into(),
            description: None,
            cases: Vec::new(),
        }
    }

    pub fn case(&self, id: &str) -> Option<&CaseDef> {
        self.cases.iter().find(|c| c.id == id)
    }
}
