//! Canonical forms of trig terms and product-to-sum identities.
//!
//! A canonical term has an `x`/`y`-only argument whose leading nonzero
//! coefficient (x first, else y) is positive. Every canonicalization returns
//! `(sign, term)` with `sign * term` equal to the input; `sign` is 0 only for
//! `sin(0)`.

use super::equation::{Equation, Trig, TrigKind, TrigXY};
use super::lincom::{ArgXY, LinXYEta, LinXYPi};
use super::symbols::XYEta;
use crate::error::AlgebraError;

/// Apply `sin(-a) = -sin(a)` and `cos(-a) = cos(a)`.
pub fn canonical_xy(kind: TrigKind, arg: ArgXY) -> (i32, TrigXY) {
    let unit = arg.unit();
    let arg = if unit == 0 { arg } else { arg * unit };
    match kind {
        TrigKind::Sin => (unit, Trig::sin(arg)),
        TrigKind::Cos => (1, Trig::cos(arg)),
    }
}

/// Reduce `kind(bx + cy + k*eta)` by the quarter-turn rotation identities,
/// then canonicalize the sign.
pub fn canonical_eta(kind: TrigKind, arg: LinXYEta) -> (i32, TrigXY) {
    let base = arg.arg();
    let quadrant = arg.coeff(XYEta::Eta).rem_euclid(4);
    let (sign, rotated) = match (kind, quadrant) {
        (TrigKind::Sin, 0) => (1, TrigKind::Sin),
        (TrigKind::Sin, 1) => (1, TrigKind::Cos),
        (TrigKind::Sin, 2) => (-1, TrigKind::Sin),
        (TrigKind::Sin, _) => (-1, TrigKind::Cos),
        (TrigKind::Cos, 0) => (1, TrigKind::Cos),
        (TrigKind::Cos, 1) => (-1, TrigKind::Sin),
        (TrigKind::Cos, 2) => (-1, TrigKind::Cos),
        (TrigKind::Cos, _) => (1, TrigKind::Sin),
    };
    let (inner, term) = canonical_xy(rotated, base);
    (sign * inner, term)
}

/// As [`canonical_eta`] with the constant given in multiples of pi.
pub fn canonical_pi(kind: TrigKind, arg: LinXYPi) -> (i32, TrigXY) {
    canonical_eta(kind, arg.to_eta())
}

/// `a * b` as a sum of trig terms, dropping the common factor 1/2.
///
/// - `cos(a) sin(b) = sin(a+b) - sin(a-b)`
/// - `sin(a) sin(b) = cos(a-b) - cos(a+b)`
/// - `cos(a) cos(b) = cos(a-b) + cos(a+b)`
pub fn product(a: &Equation, b: &Equation) -> Result<Equation, AlgebraError> {
    match (a.kind(), b.kind()) {
        (TrigKind::Sin, TrigKind::Cos) => product(b, a),
        (TrigKind::Cos, TrigKind::Sin) => expand(a, b, TrigKind::Sin, [1, -1]),
        (TrigKind::Sin, TrigKind::Sin) => expand(a, b, TrigKind::Cos, [-1, 1]),
        (TrigKind::Cos, TrigKind::Cos) => expand(a, b, TrigKind::Cos, [1, 1]),
    }
}

/// Sum over all term pairs of `signs[0] * kind(a+b) + signs[1] * kind(a-b)`.
fn expand(
    a: &Equation,
    b: &Equation,
    kind: TrigKind,
    signs: [i32; 2],
) -> Result<Equation, AlgebraError> {
    let mut out = Equation::zero(kind);
    for (&arg_a, &ca) in a.terms() {
        for (&arg_b, &cb) in b.terms() {
            let prod = ca * cb;
            for (arg, s) in [(arg_a + arg_b, signs[0]), (arg_a - arg_b, signs[1])] {
                let (sign, term) = canonical_xy(kind, arg);
                out.add_trig(term, prod * sign * s)?;
            }
        }
    }
    Ok(out)
}
