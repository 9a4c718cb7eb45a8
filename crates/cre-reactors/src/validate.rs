//! Boundary validation: parameter map → typed SI input.
//!
//! All range checks happen here, once. Evaluators trust their input and only
//! check what they compute.

use crate::error::{ReactorError, ReactorResult};
use crate::kind::ReactorKind;
use crate::params::fields::*;
use crate::params::{
    BatchInput, CstrInput, FlowInput, KineticsInput, ParameterSet, PbrInput, PfrInput,
};
use cre_core::constants::{T_MAX_K, T_REF_K};
use cre_core::units::boundary::{
    LITERS_PER_M3, concentration_from_mol_per_l, density_from_kg_per_l, energy_from_kj_per_mol,
    flow_from_l_per_hr,
};
use cre_core::units::k;
use cre_kinetics::{Arrhenius, FeedPhase};

/// Basis of the user-supplied rate constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RateBasis {
    /// Rate per unit fluid volume, k in (mol/L)^(1−n)/s
    Volume,
    /// Rate per unit catalyst mass, k' in (L/mol)^n·mol/(kg·s)
    CatalystMass,
}

impl RateBasis {
    /// Exponent of the litre → m³ rescaling of the rate constant.
    fn si_exponent(self, order: f64) -> f64 {
        match self {
            Self::Volume => 1.0 - order,
            Self::CatalystMass => -order,
        }
    }
}

/// Read access to a parameter map already checked against its reactor's keys.
struct Fields<'a> {
    params: &'a ParameterSet,
}

impl<'a> Fields<'a> {
    fn new(params: &'a ParameterSet, kind: ReactorKind) -> ReactorResult<Self> {
        if let Some(unknown) = params.keys().find(|key| !kind.accepts(key)) {
            return Err(ReactorError::UnknownField {
                field: unknown.to_string(),
                reactor: kind,
            });
        }
        Ok(Self { params })
    }

    fn optional(&self, field: &'static str) -> ReactorResult<Option<f64>> {
        match self.params.get(field) {
            None => Ok(None),
            Some(value) if value.is_finite() => Ok(Some(value)),
            Some(value) => Err(ReactorError::NotFinite { field, value }),
        }
    }

    fn required(&self, field: &'static str) -> ReactorResult<f64> {
        self.optional(field)?
            .ok_or(ReactorError::MissingField { field })
    }

    fn or_default(&self, field: &'static str, default: f64) -> ReactorResult<f64> {
        Ok(self.optional(field)?.unwrap_or(default))
    }
}

fn positive(field: &'static str, value: f64) -> ReactorResult<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ReactorError::OutOfDomain {
            field,
            value,
            reason: "must be positive",
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> ReactorResult<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ReactorError::OutOfDomain {
            field,
            value,
            reason: "must not be negative",
        })
    }
}

fn temperature(field: &'static str, value: f64) -> ReactorResult<f64> {
    if value <= 0.0 {
        return Err(ReactorError::OutOfDomain {
            field,
            value,
            reason: "absolute temperature must be positive",
        });
    }
    if value > T_MAX_K {
        return Err(ReactorError::OutOfDomain {
            field,
            value,
            reason: "above the 2000 K sanity ceiling",
        });
    }
    Ok(value)
}

fn unit_interval(field: &'static str, value: f64) -> ReactorResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ReactorError::OutOfDomain {
            field,
            value,
            reason: "must lie in [0, 1]",
        })
    }
}

fn phase(fields: &Fields<'_>) -> ReactorResult<FeedPhase> {
    let epsilon = fields.or_default(EPSILON, 0.0)?;
    if epsilon <= -1.0 {
        return Err(ReactorError::OutOfDomain {
            field: EPSILON,
            value: epsilon,
            reason: "must be greater than -1",
        });
    }
    let pressure_ratio = positive(PRESSURE_RATIO, fields.or_default(PRESSURE_RATIO, 1.0)?)?;
    Ok(FeedPhase::gas(epsilon, pressure_ratio))
}

fn kinetics(fields: &Fields<'_>, basis: RateBasis) -> ReactorResult<KineticsInput> {
    let order = non_negative(REACTION_ORDER, fields.required(REACTION_ORDER)?)?;
    let t = temperature(TEMPERATURE, fields.required(TEMPERATURE)?)?;
    let k_ref = positive(RATE_CONSTANT, fields.required(RATE_CONSTANT)?)?;
    let ea = non_negative(ACTIVATION_ENERGY, fields.or_default(ACTIVATION_ENERGY, 0.0)?)?;
    let t_ref = temperature(
        REFERENCE_TEMPERATURE,
        fields.or_default(REFERENCE_TEMPERATURE, T_REF_K)?,
    )?;

    let k_ref_si = k_ref * LITERS_PER_M3.powf(basis.si_exponent(order));
    if !(k_ref_si.is_finite() && k_ref_si > 0.0) {
        return Err(ReactorError::OutOfDomain {
            field: RATE_CONSTANT,
            value: k_ref,
            reason: "not representable in SI for this reaction order",
        });
    }

    Ok(KineticsInput {
        order,
        arrhenius: Arrhenius::new(k_ref_si, energy_from_kj_per_mol(ea)).with_reference(k(t_ref)),
        temperature: k(t),
    })
}

/// Resolve the target conversion from either `conversion` or
/// `outlet_concentration` (mol/L). Exactly one must be present.
fn conversion(
    fields: &Fields<'_>,
    c0_mol_per_l: f64,
    phase: &FeedPhase,
    order: f64,
) -> ReactorResult<f64> {
    let x = match (
        fields.optional(CONVERSION)?,
        fields.optional(OUTLET_CONCENTRATION)?,
    ) {
        (Some(_), Some(_)) => {
            return Err(ReactorError::MutuallyExclusive {
                what: "give either conversion or outlet_concentration, not both",
            });
        }
        (None, None) => return Err(ReactorError::MissingField { field: CONVERSION }),
        (Some(x), None) => unit_interval(CONVERSION, x)?,
        (None, Some(ca)) => {
            let ca = non_negative(OUTLET_CONCENTRATION, ca)?;
            let x = phase.conversion(c0_mol_per_l, ca);
            if !(0.0..=1.0).contains(&x) {
                return Err(ReactorError::OutOfDomain {
                    field: OUTLET_CONCENTRATION,
                    value: ca,
                    reason: "implies a conversion outside [0, 1]",
                });
            }
            x
        }
    };

    if x == 1.0 && order >= 1.0 {
        return Err(ReactorError::OutOfDomain {
            field: CONVERSION,
            value: x,
            reason: "complete conversion diverges for reaction order >= 1",
        });
    }
    Ok(x)
}

fn flow_input(fields: &Fields<'_>, basis: RateBasis) -> ReactorResult<FlowInput> {
    let c0 = positive(INLET_CONCENTRATION, fields.required(INLET_CONCENTRATION)?)?;
    let f0 = positive(FLOW_RATE, fields.required(FLOW_RATE)?)?;
    let kinetics = kinetics(fields, basis)?;
    let phase = phase(fields)?;
    let conversion = conversion(fields, c0, &phase, kinetics.order)?;
    Ok(FlowInput {
        conversion,
        inlet_concentration: concentration_from_mol_per_l(c0),
        flow_rate: flow_from_l_per_hr(f0),
        kinetics,
        phase,
    })
}

pub fn batch_input(params: &ParameterSet) -> ReactorResult<BatchInput> {
    let fields = Fields::new(params, ReactorKind::Batch)?;
    let c0 = positive(INLET_CONCENTRATION, fields.required(INLET_CONCENTRATION)?)?;
    let kinetics = kinetics(&fields, RateBasis::Volume)?;
    let phase = phase(&fields)?;
    let conversion = conversion(&fields, c0, &phase, kinetics.order)?;
    Ok(BatchInput {
        conversion,
        inlet_concentration: concentration_from_mol_per_l(c0),
        kinetics,
        phase,
    })
}

pub fn cstr_input(params: &ParameterSet) -> ReactorResult<CstrInput> {
    let fields = Fields::new(params, ReactorKind::Cstr)?;
    flow_input(&fields, RateBasis::Volume)
}

pub fn pfr_input(params: &ParameterSet) -> ReactorResult<PfrInput> {
    let fields = Fields::new(params, ReactorKind::Pfr)?;
    flow_input(&fields, RateBasis::Volume)
}

pub fn pbr_input(params: &ParameterSet) -> ReactorResult<PbrInput> {
    let fields = Fields::new(params, ReactorKind::Pbr)?;
    let alpha = non_negative(ALPHA, fields.or_default(ALPHA, 0.0)?)?;
    let epsilon = fields.or_default(EPSILON, 0.0)?;
    if alpha > 0.0 && epsilon != 0.0 {
        return Err(ReactorError::MutuallyExclusive {
            what: "gas-phase expansion (epsilon) and pressure drop (alpha) cannot both be active",
        });
    }
    // Exit concentration depends on the exit pressure, known only after the march.
    if alpha > 0.0 && fields.optional(OUTLET_CONCENTRATION)?.is_some() {
        return Err(ReactorError::MutuallyExclusive {
            what: "outlet_concentration cannot be targeted with pressure drop (alpha); give conversion",
        });
    }

    let feed = flow_input(&fields, RateBasis::CatalystMass)?;
    let bulk_density = fields
        .optional(BULK_DENSITY)?
        .map(|rho| positive(BULK_DENSITY, rho))
        .transpose()?
        .map(density_from_kg_per_l);

    Ok(PbrInput {
        feed,
        alpha,
        bulk_density,
    })
}
