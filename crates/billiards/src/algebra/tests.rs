use super::approx::{approx_margin, approx_value};
use super::*;
use crate::error::{AlgebraError, ParseError};
use nalgebra::Vector2;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn eq(s: &str) -> Equation {
    s.parse().unwrap()
}

fn flat(e: &Equation) -> FlattenedEquation {
    FlattenedEquation::try_from(e).unwrap()
}

#[test]
fn lincom_display_omits_unit_coefficients() {
    assert_eq!(LinXYEta::xy_eta(3, -4, 5).to_string(), "3x-4y+5eta");
    assert_eq!(LinXYEta::xy_eta(-1, 1, 0).to_string(), "-x+y");
    assert_eq!(LinXYEta::zero().to_string(), "0");
    assert_eq!(LinXYPi::new([0, 2, -1]).to_string(), "2y-pi");
    assert_eq!(LinST::new([1, -3]).to_string(), "s-3t");
}

#[test]
fn lincom_content_and_unit() {
    let mut l = LinXYEta::xy_eta(-6, 4, 10);
    assert_eq!(l.content(), 2);
    assert_eq!(l.unit(), -1);
    l.divide_content();
    assert_eq!(l, LinXYEta::xy_eta(-3, 2, 5));
    l.divide_unit();
    assert_eq!(l, LinXYEta::xy_eta(3, -2, -5));

    let mut z = LinXYEta::zero();
    assert_eq!(z.content(), 0);
    assert_eq!(z.unit(), 0);
    z.divide_content();
    assert!(z.is_zero());

    assert_eq!(ArgXY::xy(0, -2).unit(), -1);
}

#[test]
fn lincom_parse_round_trip() {
    for s in ["3x-4y+5eta", "-x+y", "0", "eta", "-2x-eta"] {
        let l: LinXYEta = s.parse().unwrap();
        assert_eq!(l.to_string(), s);
    }
    let l: LinXYEta = "x+x-y".parse().unwrap();
    assert_eq!(l, LinXYEta::xy_eta(2, -1, 0));
    assert!("3q".parse::<LinXYEta>().is_err());
    assert!("pi".parse::<LinXYEta>().is_err());
    assert_eq!("".parse::<LinXYEta>(), Err(ParseError::Empty));
}

#[test]
fn xyz_angles() {
    assert_eq!(XYZ::other_angle(XYZ::X, XYZ::Y), Some(XYZ::Z));
    assert_eq!(XYZ::other_angle(XYZ::Z, XYZ::X), Some(XYZ::Y));
    assert_eq!(XYZ::other_angle(XYZ::Y, XYZ::Y), None);
    assert_eq!(XYZ::Z.to_eta(), LinXYEta::xy_eta(-1, -1, 2));
}

#[test]
fn pi_conversions() {
    let l = LinXYEta::xy_eta(1, 2, 4);
    assert_eq!(l.to_pi().unwrap(), LinXYPi::new([1, 2, 2]));
    assert_eq!(l.to_pi().unwrap().to_eta(), l);
    assert!(matches!(
        LinXYEta::xy_eta(1, 0, 3).to_pi(),
        Err(AlgebraError::EtaParity { eta: 3, .. })
    ));
}

#[test]
fn equation_add_sub_keep_no_zero_terms() {
    let mut e = eq("sin(x)+2sin(y)");
    e.add(&eq("-sin(x)")).unwrap();
    assert_eq!(e.len(), 1);
    assert_eq!(e.to_string(), "2sin(y)");
    e.sub_term(ArgXY::xy(0, 1), 2);
    assert!(e.is_zero());
    assert_eq!(e.to_string(), "0");
    e.add_term(ArgXY::xy(1, 0), 0);
    assert!(e.is_zero());
}

#[test]
fn equation_display_and_parse() {
    let e = Equation::from_terms(
        TrigKind::Sin,
        [(ArgXY::xy(14, 1), 1), (ArgXY::xy(22, -1), 1)],
    );
    assert_eq!(e.to_string(), "sin(14x+y)+sin(22x-y)");
    assert_eq!(eq("sin(14x+y)+sin(22x-y)"), e);
    assert_eq!(eq("-2cos(3x)").to_string(), "-2cos(3x)");
    assert_eq!(
        Equation::parse(TrigKind::Cos, "0").unwrap(),
        Equation::zero(TrigKind::Cos)
    );
    assert_eq!(
        "sin(x)+cos(y)".parse::<Equation>(),
        Err(ParseError::MixedKinds)
    );
    assert_eq!(
        Equation::parse(TrigKind::Cos, "sin(x)"),
        Err(ParseError::MixedKinds)
    );
    assert!(matches!(
        "sin(x))".parse::<Equation>(),
        Err(ParseError::Unexpected { position: 6, .. })
    ));
    assert_eq!("0".parse::<Equation>(), Ok(Equation::zero(TrigKind::Cos)));
    let sine_zero = Equation::zero(TrigKind::Sin);
    assert_eq!(
        Equation::parse(TrigKind::Sin, &sine_zero.to_string()),
        Ok(sine_zero)
    );
}

#[test]
fn constants_fold_while_parsing() {
    assert_eq!(eq("sin(x+eta)"), eq("cos(x)"));
    assert_eq!(eq("2cos(-x+2eta)"), eq("-2cos(x)"));
    assert_eq!(eq("sin(x+pi)-sin(y)"), eq("-sin(x)-sin(y)"));
    assert_eq!(eq("cos(y-eta)+sin(x)"), eq("sin(x)+sin(y)"));
    // sin(2eta) = sin(pi) = 0 drops out and does not fix the kind.
    assert_eq!(eq("sin(2eta)+cos(x)"), eq("cos(x)"));
    // Without a constant, arguments stay as written.
    assert_eq!(eq("sin(-x)").to_string(), "sin(-x)");
    assert_eq!(
        "cos(x+eta)+cos(y)".parse::<Equation>(),
        Err(ParseError::MixedKinds)
    );
    assert!("sin(x+eta+pi)".parse::<Equation>().is_err());
}

#[test]
fn mixed_kinds_are_an_error() {
    let mut a = eq("sin(x)");
    assert_eq!(
        a.add(&eq("cos(x)")),
        Err(AlgebraError::KindMismatch {
            expected: "sin",
            found: "cos"
        })
    );
    assert_eq!(a, eq("sin(x)"));
    assert!(a.sub(&eq("cos(y)")).is_err());
    assert!(a.add_trig(Trig::cos(ArgXY::xy(0, 1)), 1).is_err());
    a.add_trig(Trig::sin(ArgXY::xy(0, 1)), 2).unwrap();
    a.sub(&eq("sin(x)")).unwrap();
    assert_eq!(a.to_string(), "2sin(y)");
}

#[test]
fn gradient_bounds_sum_coefficient_weighted_arguments() {
    assert_eq!(eq("2sin(3x-5y)-8sin(5x+6y)").gradient_bound(), 104);
    assert_eq!(eq("-2sin(2x)").gradient_bound(), 4);
    assert_eq!(eq("sin(0)").gradient_bound(), 0);
    let g = eq("2cos(3x-5y)-8cos(5x+6y)").gradient_bounds();
    assert_eq!(g, GradientBound { x: 46, y: 58 });
}

#[test]
fn canonical_forms_apply_rotations_and_parity() {
    let x = ArgXY::xy(1, 0);
    assert_eq!(canonical_xy(TrigKind::Sin, -x), (-1, Trig::sin(x)));
    assert_eq!(canonical_xy(TrigKind::Cos, -x), (1, Trig::cos(x)));
    assert_eq!(
        canonical_xy(TrigKind::Sin, ArgXY::zero()),
        (0, Trig::sin(ArgXY::zero()))
    );
    assert_eq!(
        canonical_eta(TrigKind::Sin, LinXYEta::xy_eta(1, 0, 1)),
        (1, Trig::cos(x))
    );
    assert_eq!(
        canonical_eta(TrigKind::Cos, LinXYEta::xy_eta(-1, 0, 2)),
        (-1, Trig::cos(x))
    );
    assert_eq!(
        canonical_eta(TrigKind::Sin, LinXYEta::xy_eta(-1, -1, 3)),
        (-1, Trig::cos(ArgXY::xy(1, 1)))
    );
    assert_eq!(
        canonical_eta(TrigKind::Cos, LinXYEta::xy_eta(0, 2, -1)),
        (1, Trig::sin(ArgXY::xy(0, 2)))
    );
    assert_eq!(
        canonical_pi(TrigKind::Sin, LinXYPi::new([1, 0, 1])),
        (-1, Trig::sin(x))
    );
}

#[test]
fn canonical_forms_agree_numerically() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let l = LinXYEta::xy_eta(
            rng.gen_range(-9..=9),
            rng.gen_range(-9..=9),
            rng.gen_range(-9..=9),
        );
        let p = Vector2::new(rng.gen::<f64>(), rng.gen::<f64>());
        let angle = std::f64::consts::FRAC_PI_2
            * (f64::from(l.coeff(XYEta::X)) * p.x
                + f64::from(l.coeff(XYEta::Y)) * p.y
                + f64::from(l.coeff(XYEta::Eta)));
        for (kind, direct) in [(TrigKind::Sin, angle.sin()), (TrigKind::Cos, angle.cos())] {
            let (sign, term) = canonical_eta(kind, l);
            let canonical = Equation::term(term.kind, term.arg, 1);
            let value = f64::from(sign) * approx_value(&flat(&canonical), p);
            assert!((value - direct).abs() < 1e-9, "{kind}({l}) at {p:?}");
        }
    }
}

#[test]
fn products_expand_to_sums() {
    assert_eq!(
        product(&eq("cos(x)"), &eq("sin(y)")).unwrap().to_string(),
        "-sin(x-y)+sin(x+y)"
    );
    assert_eq!(
        product(&eq("sin(y)"), &eq("cos(x)")).unwrap(),
        product(&eq("cos(x)"), &eq("sin(y)")).unwrap()
    );
    assert_eq!(
        product(&eq("sin(x)"), &eq("sin(x)")).unwrap().to_string(),
        "cos(0)-cos(2x)"
    );
    assert_eq!(
        product(&eq("cos(x)"), &eq("cos(y)")).unwrap().to_string(),
        "cos(x-y)+cos(x+y)"
    );
    // sin(x) * sin(-x) style cancellations leave no zero terms behind
    assert!(product(&eq("sin(0)"), &eq("cos(x)")).unwrap().is_zero());
}

#[test]
fn products_agree_numerically() {
    let a = eq("3cos(2x-y)-cos(x+4y)");
    let b = eq("sin(x)+2sin(3y)");
    let p = Vector2::new(0.3, 0.45);
    let lhs = 2.0 * approx_value(&flat(&a), p) * approx_value(&flat(&b), p);
    let rhs = approx_value(&flat(&product(&a, &b).unwrap()), p);
    assert!((lhs - rhs).abs() < 1e-9);
}

#[test]
fn flattening_checks_range() {
    let e = eq("2sin(3x-5y)-8sin(5x+6y)");
    let f = flat(&e);
    assert_eq!(f.len(), 2);
    assert_eq!(f.to_equation(), e);
    assert_eq!(f.to_string(), e.to_string());
    let big = Equation::term(TrigKind::Cos, ArgXY::xy(40_000, 1), 1);
    assert_eq!(
        FlattenedEquation::try_from(&big),
        Err(AlgebraError::Narrowing { value: 40_000 })
    );
}

#[test]
fn approx_margin_subtracts_budget() {
    let e = flat(&eq("cos(x)"));
    let m = approx_margin(
        &e,
        GradientBound { x: 1, y: 0 },
        Vector2::new(0.0, 0.0),
        Vector2::new(0.5, 0.5),
    );
    assert!((m - (1.0 - std::f64::consts::FRAC_PI_4)).abs() < 1e-12);
}

fn small_equation() -> impl Strategy<Value = Equation> {
    (
        any::<bool>(),
        proptest::collection::vec((-20i32..20, -20i32..20, -50i32..50), 0..6),
    )
        .prop_map(|(sin, terms)| {
            let kind = if sin { TrigKind::Sin } else { TrigKind::Cos };
            Equation::from_terms(kind, terms.into_iter().map(|(x, y, c)| (ArgXY::xy(x, y), c)))
        })
}

proptest! {
    #[test]
    fn divide_content_ignores_scaling(e in small_equation(), k in (1i32..30).prop_union(-30i32..0)) {
        let mut base = e.clone();
        base.divide_content();
        let mut scaled = e.scaled(k);
        scaled.divide_content();
        prop_assert_eq!(scaled, base.scaled(k.signum()));
    }

    #[test]
    fn divide_content_is_idempotent(e in small_equation()) {
        let mut once = e.clone();
        once.divide_content();
        let mut twice = once.clone();
        twice.divide_content();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn display_then_parse_round_trips(e in small_equation()) {
        let text = e.to_string();
        prop_assert_eq!(Equation::parse(e.kind(), &text).unwrap(), e);
    }
}
