use super::*;
use crate::algebra::{product, Equation, EquationSet, LinST, LinXYEta, TrigKind, XYZ};
use crate::error::DivisionError;

fn eq(s: &str) -> Equation {
    s.parse().unwrap()
}

fn quotient(e: &str, f: &str) -> Option<String> {
    divide_once(&eq(e), &eq(f)).unwrap().map(|q| q.to_string())
}

#[test]
fn encode_shifts_by_largest_magnitudes() {
    let enc = encode(&eq("sin(2x-y)+3sin(y)")).unwrap();
    assert_eq!(enc.denom, LinST::new([2, 1]));
    // sin(2x-y): +s^4 t^0, -s^0 t^2; 3sin(y): +3 s^2 t^2, -3 s^2 t^0
    let terms: Vec<_> = enc.numer.terms_desc().map(|(&m, &c)| (m, c)).collect();
    assert_eq!(
        terms,
        vec![
            (LinST::new([4, 0]), 1),
            (LinST::new([2, 2]), 3),
            (LinST::new([2, 0]), -3),
            (LinST::new([0, 2]), -1),
        ]
    );
    assert_eq!(decode_sin(&enc.numer, enc.denom).unwrap(), eq("sin(2x-y)+3sin(y)"));
}

#[test]
fn polynomial_long_division() {
    // (s^2 - 1) = (s - 1)(s + 1)
    let mut a = Polynomial::zero();
    a.add_term(LinST::new([2, 0]), 1).unwrap();
    a.add_term(LinST::new([0, 0]), -1).unwrap();
    let mut b = Polynomial::zero();
    b.add_term(LinST::new([1, 0]), 1).unwrap();
    b.add_term(LinST::new([0, 0]), -1).unwrap();
    let q = divide(&a, &b).unwrap().unwrap();
    assert_eq!(q.to_string(), "1*s+1");
    // s + 2 does not divide s^2 - 1
    let mut c = Polynomial::zero();
    c.add_term(LinST::new([1, 0]), 1).unwrap();
    c.add_term(LinST::new([0, 0]), 2).unwrap();
    assert_eq!(divide(&a, &c), Ok(None));
    assert_eq!(divide(&a, &Polynomial::zero()), Ok(None));
    assert!(monomial_divides(&LinST::new([1, 0]), &LinST::new([1, 3])));
    assert!(!monomial_divides(&LinST::new([1, 1]), &LinST::new([2, 0])));
}

#[test]
fn sine_sum_over_sine_gives_cosine() {
    assert_eq!(
        quotient("sin(14x+y)+sin(22x-y)", "sin(18x)").as_deref(),
        Some("cos(4x-y)")
    );
}

#[test]
fn sine_sum_over_cosine_gives_sine() {
    assert_eq!(
        quotient("sin(14x+y)+sin(22x-y)", "cos(4x-y)").as_deref(),
        Some("sin(18x)")
    );
}

#[test]
fn cosine_sum_over_sine_gives_sine() {
    assert_eq!(
        quotient(
            "-cos(x+2y)-cos(9x)+cos(11x+2y)-cos(25x-2y)+cos(27x)+cos(35x-2y)",
            "sin(18x)"
        )
        .as_deref(),
        Some("sin(7x-2y)-sin(9x)-sin(17x-2y)")
    );
}

#[test]
fn cosine_sum_over_cosine_gives_cosine() {
    assert_eq!(
        quotient("cos(5x+4y)+cos(31x-8y)", "cos(13x-6y)").as_deref(),
        Some("cos(18x-2y)")
    );
}

#[test]
fn non_factor_does_not_divide() {
    assert_eq!(quotient("sin(14x+y)+sin(22x-y)", "sin(5x)"), None);
    assert_eq!(quotient("cos(x)", "cos(2x)"), None);
}

#[test]
fn repeated_factor_is_an_error() {
    let square = product(&eq("sin(18x)"), &eq("sin(18x)")).unwrap();
    assert_eq!(square.to_string(), "cos(0)-cos(36x)");
    assert!(matches!(
        divide_once(&square, &eq("sin(18x)")),
        Err(DivisionError::RepeatedFactor { .. })
    ));
}

#[test]
fn zero_divides_to_zero() {
    let q = divide_once(&Equation::zero(TrigKind::Sin), &eq("cos(x)")).unwrap();
    assert_eq!(q, Some(Equation::zero(TrigKind::Sin)));
}

#[test]
fn decode_rejects_non_mirrored_polynomials() {
    let mut p = Polynomial::zero();
    p.add_term(LinST::new([3, 0]), 1).unwrap();
    p.add_term(LinST::new([0, 0]), -1).unwrap();
    assert!(matches!(
        decode_sin(&p, LinST::new([1, 0])),
        Err(DivisionError::Decode { kind: "sin", .. })
    ));
    assert!(matches!(
        decode_cos(&p, LinST::new([1, 0])),
        Err(DivisionError::Decode { kind: "cos", .. })
    ));
    p.add_term(LinST::new([1, 0]), 1).unwrap();
    assert!(decode_sin(&p, LinST::new([1, 0])).is_err());
}

#[test]
fn decode_cos_handles_constant_term() {
    // s^2 + c s + 1 over s is 2cos(x) + c
    for (c, expected) in [(2, "cos(0)+cos(x)"), (1, "cos(0)+2cos(x)")] {
        let mut p = Polynomial::zero();
        p.add_term(LinST::new([2, 0]), 1).unwrap();
        p.add_term(LinST::new([1, 0]), c).unwrap();
        p.add_term(LinST::new([0, 0]), 1).unwrap();
        assert_eq!(decode_cos(&p, LinST::new([1, 0])).unwrap().to_string(), expected);
    }
}

#[test]
fn quotient_kinds() {
    use TrigKind::{Cos, Sin};
    assert_eq!(quotient_kind(Sin, Sin), Cos);
    assert_eq!(quotient_kind(Sin, Cos), Sin);
    assert_eq!(quotient_kind(Cos, Sin), Sin);
    assert_eq!(quotient_kind(Cos, Cos), Cos);
}

#[test]
fn line_factor_polarity() {
    let (f, same) = line_factor(&LinXYEta::xy_eta(1, -1, 0));
    assert_eq!(f, eq("sin(x-y)"));
    assert!(same);
    let (f, same) = line_factor(&LinXYEta::xy_eta(1, 1, -1));
    assert_eq!(f, eq("cos(x+y)"));
    assert!(!same);
    let (f, same) = line_factor(&LinXYEta::xy_eta(0, 1, -2));
    assert_eq!(f, eq("sin(y)"));
    assert!(!same);
    let (_, same) = line_factor(&LinXYEta::xy_eta(2, 1, 1));
    assert!(same);
    let (_, same) = line_factor(&LinXYEta::xy_eta(2, 1, 3));
    assert!(!same);
}

#[test]
fn remove_line_factor_replaces_divisible_equations() {
    // Both sides carry a multiple of sin(18x); the line 18x + 0y + 0eta gives
    // that factor with same = true.
    let line = LinXYEta::xy_eta(18, 0, 0);
    let mut neg: EquationSet = [eq("sin(14x+y)+sin(22x-y)"), eq("cos(x)")].into_iter().collect();
    let mut pos: EquationSet = [eq("sin(14x+y)+sin(22x-y)")].into_iter().collect();
    remove_line_factor(&mut neg, &line, &mut pos).unwrap();

    let neg_expected: EquationSet = [eq("-cos(4x-y)"), eq("cos(x)")].into_iter().collect();
    let pos_expected: EquationSet = [eq("cos(4x-y)")].into_iter().collect();
    assert_eq!(neg, neg_expected);
    assert_eq!(pos, pos_expected);
}

#[test]
fn remove_factor_counts_replacements() {
    let mut set: EquationSet = [eq("cos(5x+4y)+cos(31x-8y)"), eq("sin(x)")].into_iter().collect();
    let n = remove_factor(&mut set, &eq("cos(13x-6y)"), true).unwrap();
    assert_eq!(n, 1);
    assert!(set.cosines.contains(&eq("cos(18x-2y)")));
    assert!(set.sines.contains(&eq("sin(x)")));
    assert_eq!(set.len(), 2);
}

#[test]
fn strip_removes_triangle_angle_sines() {
    let cases = [
        ("cos(x-y)-cos(x+y)", "cos(0)"),
        ("sin(x)", "cos(0)"),
        ("-sin(x+y)", "-cos(0)"),
        ("cos(x)", "cos(x)"),
        ("sin(2x)", "cos(x)"),
    ];
    for (input, expected) in cases {
        for (first, second) in [(XYZ::X, XYZ::Y), (XYZ::Y, XYZ::X)] {
            let out = strip_line_factors(&eq(input), first, second).unwrap();
            assert_eq!(out.to_string(), expected, "{input} order {first}{second}");
        }
    }
    assert!(matches!(
        strip_line_factors(&eq("sin(x)"), XYZ::Z, XYZ::Z),
        Err(DivisionError::SameAngles(_))
    ));
    let zero = Equation::zero(TrigKind::Cos);
    assert_eq!(strip_line_factors(&zero, XYZ::X, XYZ::Y).unwrap(), zero);
}

#[test]
fn square_minus_one_division() {
    // s^4 - 1 = (s^2 - 1)(s^2 + 1)
    let mut p = Polynomial::zero();
    p.add_term(LinST::new([4, 0]), 1).unwrap();
    p.add_term(LinST::new([0, 0]), -1).unwrap();
    let q = divide_square_minus_one(&p, LinST::new([1, 0]), 2).unwrap().unwrap();
    assert_eq!(q.to_string(), "1*s^2+1");
    // s^4 + 1 is not divisible; the remainder reaches s^0
    let mut r = Polynomial::zero();
    r.add_term(LinST::new([4, 0]), 1).unwrap();
    r.add_term(LinST::new([0, 0]), 1).unwrap();
    assert_eq!(divide_square_minus_one(&r, LinST::new([1, 0]), 2), Ok(None));
}

#[test]
fn coefficient_overflow_is_an_error() {
    // cos(0) lands on a single monomial twice.
    assert!(matches!(
        encode(&eq("2000000000cos(0)")),
        Err(DivisionError::Overflow(_))
    ));
    // The second reduction step doubles the constant term.
    assert!(matches!(
        divide_once(&eq("2000000000cos(2x)"), &eq("cos(x)")),
        Err(DivisionError::Overflow(_))
    ));
    assert!(matches!(
        strip_line_factors(&eq("2000000000cos(0)"), XYZ::X, XYZ::Y),
        Err(DivisionError::Overflow(_))
    ));
    let mut p = Polynomial::zero();
    p.add_term(LinST::new([1, 0]), i32::MAX).unwrap();
    assert!(p.clone().scaled(2).is_err());
    assert!(p.sub_term(LinST::new([1, 0]), i32::MIN).is_err());
    // Small coefficients still divide.
    assert_eq!(quotient("2cos(2x)", "cos(x)"), None);
}

#[test]
fn growth_cap_trips_on_the_smallest_first_scan() {
    // (s^2 - 1)(s^8 + t^2): the smallest divisible term is s^2 t^2, after
    // which the s^8 chain briefly grows the quotient to six terms.
    let mut p = Polynomial::zero();
    p.add_term(LinST::new([10, 0]), 1).unwrap();
    p.add_term(LinST::new([2, 2]), 1).unwrap();
    p.add_term(LinST::new([8, 0]), -1).unwrap();
    p.add_term(LinST::new([0, 2]), -1).unwrap();
    let s = LinST::new([1, 0]);
    assert_eq!(divide_square_minus_one(&p, s, 1), Ok(None));
    let q = divide_square_minus_one(&p, s, 2).unwrap().unwrap();
    assert_eq!(q.to_string(), "1*s^8+1*t^2");

    // Not divisible: s^10 + 1 leaves the constant 2 behind whatever the cap.
    let mut r = Polynomial::zero();
    r.add_term(LinST::new([10, 0]), 1).unwrap();
    r.add_term(LinST::new([0, 0]), 1).unwrap();
    for cap in [0, 2, 100] {
        assert_eq!(divide_square_minus_one(&r, s, cap), Ok(None), "cap {cap}");
    }
    // s^12 - 1 divides, but its six-term quotient only fits a cap of 3.
    let mut d = Polynomial::zero();
    d.add_term(LinST::new([12, 0]), 1).unwrap();
    d.add_term(LinST::new([0, 0]), -1).unwrap();
    assert_eq!(divide_square_minus_one(&d, s, 2), Ok(None));
    assert_eq!(divide_square_minus_one(&d, s, 3).unwrap().unwrap().len(), 6);
}
