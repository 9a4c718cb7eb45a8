//! Conversion sweeps: one reactor configuration over a grid of target conversions.
//!
//! Used for design curves (volume or mass against conversion). Points are
//! independent pure evaluations and run on the rayon pool; results keep the
//! grid order. A failing point is reported in place and does not stop the
//! sweep.

use crate::error::{ReactorError, ReactorResult};
use crate::evaluation::Evaluation;
use crate::kind::ReactorKind;
use crate::params::fields::{CONVERSION, OUTLET_CONCENTRATION};
use crate::params::{Numerics, ParameterSet};
use crate::reactor::evaluate_with;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Linear grid of target conversions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionSweep {
    pub start: f64,
    pub end: f64,
    pub points: usize,
}

impl ConversionSweep {
    pub fn new(start: f64, end: f64, points: usize) -> ReactorResult<Self> {
        if !(start.is_finite() && end.is_finite()) {
            return Err(ReactorError::InvalidSweep {
                what: "bounds must be finite",
            });
        }
        if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) {
            return Err(ReactorError::InvalidSweep {
                what: "bounds must lie in [0, 1]",
            });
        }
        if points < 2 {
            return Err(ReactorError::InvalidSweep {
                what: "sweep must have at least 2 points",
            });
        }
        if (start - end).abs() < 1e-12 {
            return Err(ReactorError::InvalidSweep {
                what: "start and end must differ",
            });
        }
        Ok(Self { start, end, points })
    }

    /// Evenly spaced conversions from `start` to `end`, endpoints exact.
    pub fn generate_points(&self) -> Vec<f64> {
        if self.points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.points - 1) as f64;
        let mut points: Vec<f64> = (0..self.points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.points - 1] = self.end;
        points
    }
}

impl fmt::Display for ConversionSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X from {} to {} ({} points)",
            self.start, self.end, self.points
        )
    }
}

/// One grid point and its outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub conversion: f64,
    pub result: ReactorResult<Evaluation>,
}

/// Evaluate `base` at every conversion of `sweep`.
///
/// `conversion` in `base` is overridden per point; `outlet_concentration` is
/// dropped since the grid fixes the target.
pub fn run_sweep(
    kind: ReactorKind,
    base: &ParameterSet,
    sweep: &ConversionSweep,
    numerics: &Numerics,
) -> Vec<SweepPoint> {
    debug!(reactor = %kind, %sweep, "running conversion sweep");
    let mut template = base.clone();
    template.remove(OUTLET_CONCENTRATION);

    sweep
        .generate_points()
        .into_par_iter()
        .map(|x| {
            let params = template.clone().with(CONVERSION, x);
            SweepPoint {
                conversion: x,
                result: evaluate_with(kind, &params, numerics),
            }
        })
        .collect()
}
