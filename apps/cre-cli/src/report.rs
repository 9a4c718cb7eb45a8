//! Result formatting: design quantity to 8 decimals, concentration to 4.

use cre_reactors::{DesignQuantity, Evaluation, ReactorError, ReactorKind, SolutionPath, SweepPoint};
use serde::Serialize;

pub fn path_label(path: SolutionPath) -> &'static str {
    match path {
        SolutionPath::Algebraic => "algebraic",
        SolutionPath::ClosedForm => "closed form",
        SolutionPath::Trapezoid => "trapezoidal quadrature",
        SolutionPath::ForwardEuler => "forward Euler",
    }
}

/// Indented text block for one evaluation.
pub fn evaluation_lines(eval: &Evaluation) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{}: {:.8} {}",
            eval.design.label(),
            eval.design.value(),
            eval.design.unit()
        ),
        format!("Outlet concentration: {:.4} mol/L", eval.outlet_concentration),
    ];
    if let DesignQuantity::CatalystMass {
        bed_volume_liters: Some(liters),
        ..
    } = eval.design
    {
        lines.push(format!("Bed volume: {liters:.8} L"));
    }
    lines.push(format!(
        "Conversion: {:.4} ({})",
        eval.conversion,
        path_label(eval.path)
    ));
    lines
}

/// One calculation for machine-readable output.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub reactor: ReactorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Evaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> Report<'a> {
    pub fn new(
        id: &'a str,
        name: &'a str,
        reactor: ReactorKind,
        outcome: &Result<Evaluation, ReactorError>,
    ) -> Self {
        let (result, error) = match outcome {
            Ok(eval) => (Some(*eval), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            id,
            name,
            reactor,
            result,
            error,
        }
    }
}

/// Fixed-width sweep table, one row per conversion.
pub fn sweep_table(kind: ReactorKind, points: &[SweepPoint]) -> Vec<String> {
    let header = match kind {
        ReactorKind::Batch => "Time (s)",
        ReactorKind::Cstr | ReactorKind::Pfr => "Volume (L)",
        ReactorKind::Pbr => "Mass (kg)",
    };
    let mut rows = vec![format!("{:>8}  {:>18}  {:>12}", "X", header, "C_A (mol/L)")];
    for point in points {
        rows.push(match &point.result {
            Ok(eval) => format!(
                "{:>8.4}  {:>18.8}  {:>12.4}",
                point.conversion,
                eval.design.value(),
                eval.outlet_concentration
            ),
            Err(e) => format!("{:>8.4}  error: {e}", point.conversion),
        });
    }
    rows
}

#[derive(Debug, Serialize)]
pub struct SweepRow {
    pub conversion: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Evaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&SweepPoint> for SweepRow {
    fn from(point: &SweepPoint) -> Self {
        Self {
            conversion: point.conversion,
            result: point.result.as_ref().ok().copied(),
            error: point.result.as_ref().err().map(|e| e.to_string()),
        }
    }
}
