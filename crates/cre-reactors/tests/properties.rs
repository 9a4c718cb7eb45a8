//! Property tests: repeatability and monotonicity of the design quantity.

use cre_reactors::fields::*;
use cre_reactors::{ParameterSet, ReactorKind, evaluate};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = ReactorKind> {
    prop::sample::select(ReactorKind::ALL.to_vec())
}

fn params(kind: ReactorKind, x: f64, c0: f64, order: f64, k: f64, epsilon: f64) -> ParameterSet {
    let params = ParameterSet::new()
        .with(CONVERSION, x)
        .with(INLET_CONCENTRATION, c0)
        .with(REACTION_ORDER, order)
        .with(TEMPERATURE, 350.0)
        .with(RATE_CONSTANT, k)
        .with(ACTIVATION_ENERGY, 20.0)
        .with(EPSILON, epsilon);
    if kind.is_flow_reactor() {
        params.with(FLOW_RATE, 120.0)
    } else {
        params
    }
}

proptest! {
    #[test]
    fn identical_inputs_give_identical_results(
        kind in kind_strategy(),
        x in 0.0_f64..0.95,
        c0 in 0.1_f64..5.0,
        order in 0.0_f64..3.0,
        k in 0.01_f64..10.0,
        epsilon in -0.5_f64..2.0,
    ) {
        let p = params(kind, x, c0, order, k, epsilon);
        let a = evaluate(kind, &p).unwrap();
        let b = evaluate(kind, &p).unwrap();
        prop_assert_eq!(a.design.value().to_bits(), b.design.value().to_bits());
        prop_assert_eq!(a.outlet_concentration.to_bits(), b.outlet_concentration.to_bits());
    }

    #[test]
    fn design_quantity_grows_with_conversion(
        kind in kind_strategy(),
        x1 in 0.0_f64..0.9,
        dx in 0.01_f64..0.09,
        c0 in 0.1_f64..5.0,
        order in 0.0_f64..3.0,
        k in 0.01_f64..10.0,
    ) {
        let x2 = x1 + dx;
        let lower = evaluate(kind, &params(kind, x1, c0, order, k, 0.0)).unwrap();
        let upper = evaluate(kind, &params(kind, x2, c0, order, k, 0.0)).unwrap();
        prop_assert!(
            upper.design.value() > lower.design.value(),
            "{} at X={} gave {} but X={} gave {}",
            kind, x2, upper.design.value(), x1, lower.design.value()
        );
        prop_assert!(upper.outlet_concentration < lower.outlet_concentration);
    }
}
