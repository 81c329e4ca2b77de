//! Property-based checks of the isentropic relations across gases and Mach numbers.

use approx::assert_relative_eq;
use proptest::prelude::*;
use symgas_symbolic::{
    Bindings, RatioKind, area_mach_relation, expressions_for_gamma, gamma_symbol, mach_symbol,
};

fn gamma() -> impl Strategy<Value = f64> {
    1.01_f64..=2.0
}

fn eval(kind: RatioKind, gamma: f64, mach: f64) -> f64 {
    expressions_for_gamma(gamma)[kind]
        .eval(&Bindings::new().with(mach_symbol(), mach))
        .expect("should evaluate for gamma > 1 and mach > 0")
}

proptest! {
    #[test]
    fn stagnation_ratios_are_one_at_rest(g in gamma()) {
        for kind in [RatioKind::TemperatureRatio, RatioKind::PressureRatio, RatioKind::DensityRatio] {
            let value = eval(kind, g, 0.0);
            prop_assert!((value - 1.0).abs() < 1e-9, "{kind} at rest = {value}");
        }
    }

    #[test]
    fn area_ratio_is_one_at_the_throat(g in gamma()) {
        let value = eval(RatioKind::AreaRatio, g, 1.0);
        prop_assert!((value - 1.0).abs() < 1e-9, "A/A* at M = 1 is {value}");
    }

    #[test]
    fn stagnation_ratios_decrease_with_mach(g in gamma(), m in 0.0_f64..5.0, dm in 0.01_f64..1.0) {
        for kind in [RatioKind::TemperatureRatio, RatioKind::PressureRatio, RatioKind::DensityRatio] {
            prop_assert!(eval(kind, g, m + dm) < eval(kind, g, m), "{kind} is not decreasing");
        }
    }

    #[test]
    fn area_ratio_exceeds_one_away_from_the_throat(g in gamma(), m in 0.05_f64..5.0) {
        prop_assume!((m - 1.0).abs() > 1e-3);
        prop_assert!(eval(RatioKind::AreaRatio, g, m) > 1.0);
    }

    #[test]
    fn simplified_and_symbolic_forms_agree(g in gamma(), m in 0.05_f64..5.0) {
        let bindings = Bindings::new().with(gamma_symbol(), g).with(mach_symbol(), m);
        let symbolic = area_mach_relation(gamma_symbol()).eval(&bindings).unwrap();
        let simplified = eval(RatioKind::AreaRatio, g, m);
        prop_assert!((symbolic - simplified).abs() <= 1e-10 * symbolic.abs());
    }
}

#[test]
fn area_ratio_has_its_minimum_at_the_throat() {
    let g = 1.4;
    assert!(eval(RatioKind::AreaRatio, g, 0.5) > 1.0);
    assert_relative_eq!(eval(RatioKind::AreaRatio, g, 1.0), 1.0, epsilon = 1e-9);
    assert!(eval(RatioKind::AreaRatio, g, 2.0) > 1.0);

    // The slope of A/A* vanishes at M = 1.
    let slope = expressions_for_gamma(g)[RatioKind::AreaRatio].diff(mach_symbol());
    let at_throat = slope
        .eval(&Bindings::new().with(mach_symbol(), 1.0))
        .unwrap();
    assert_relative_eq!(at_throat, 0.0, epsilon = 1e-9);
}

#[test]
fn air_at_rest_and_at_the_throat() {
    for kind in [
        RatioKind::TemperatureRatio,
        RatioKind::PressureRatio,
        RatioKind::DensityRatio,
    ] {
        assert_relative_eq!(eval(kind, 1.4, 0.0), 1.0, epsilon = 1e-9);
    }
    assert_relative_eq!(eval(RatioKind::AreaRatio, 1.4, 1.0), 1.0, epsilon = 1e-9);
}

#[test]
fn repeated_builds_evaluate_identically() {
    let first = expressions_for_gamma(1.4);
    let second = expressions_for_gamma(1.4);
    let bindings = Bindings::new().with(mach_symbol(), 1.7);

    for kind in RatioKind::ALL {
        assert_eq!(
            first[kind].eval(&bindings).unwrap(),
            second[kind].eval(&bindings).unwrap()
        );
    }
}
