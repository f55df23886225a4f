//! Laurent encoding of trig sums via Euler's formula.
//!
//! With `s = e^{ix}` and `t = e^{iy}`:
//! - `sin(bx + cy) = (s^b t^c - s^-b t^-c) / 2i`
//! - `cos(bx + cy) = (s^b t^c + s^-b t^-c) / 2`
//!
//! Exponents are shifted by the largest magnitudes present so the numerator is
//! a true polynomial; the shift is kept as an explicit monomial denominator.
//! The constant factors `1/2i` and `1/2` are tracked by the caller.

use super::poly::Polynomial;
use crate::algebra::arith::abs;
use crate::algebra::{ArgXY, Equation, LinST, TrigKind};
use crate::error::DivisionError;

/// Numerator and monomial denominator of an encoded equation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoded {
    pub numer: Polynomial,
    pub denom: LinST,
}

pub fn encode(eq: &Equation) -> Result<Encoded, DivisionError> {
    let (x_max, y_max) = eq.terms().fold((0, 0), |(xm, ym), (arg, _)| {
        (xm.max(abs(arg.x())), ym.max(abs(arg.y())))
    });
    let denom = LinST::new([x_max, y_max]);
    let mut numer = Polynomial::zero();
    for (arg, &c) in eq.terms() {
        let e = LinST::new([arg.x(), arg.y()]);
        numer.add_term(denom + e, c)?;
        match eq.kind() {
            TrigKind::Sin => numer.sub_term(denom - e, c)?,
            TrigKind::Cos => numer.add_term(denom - e, c)?,
        }
    }
    Ok(Encoded { numer, denom })
}

fn decode_error(kind: TrigKind, reason: String) -> DivisionError {
    DivisionError::Decode {
        kind: kind.name(),
        reason,
    }
}

/// Pair the `i`-th largest term with the `i`-th smallest; each pair must be
/// mirror images around `denom`. Returns `(argument, front coefficient, back
/// coefficient)` per pair and the unpaired middle term, if any.
fn mirror_pairs(
    kind: TrigKind,
    numer: &Polynomial,
    denom: LinST,
) -> Result<(Vec<(ArgXY, i32, i32)>, Option<(LinST, i32)>), DivisionError> {
    let terms: Vec<(LinST, i32)> = numer.terms_desc().map(|(&m, &c)| (m, c)).collect();
    let n = terms.len();
    let mut pairs = Vec::with_capacity(n / 2);
    for i in 0..n / 2 {
        let (front, cf) = terms[i];
        let (back, cb) = terms[n - 1 - i];
        let arg = front - denom;
        if back - denom != -arg {
            return Err(decode_error(
                kind,
                format!("monomials {front} and {back} are not mirrored around {denom}"),
            ));
        }
        pairs.push((ArgXY::xy(arg.coeffs()[0], arg.coeffs()[1]), cf, cb));
    }
    let middle = (n % 2 == 1).then(|| terms[n / 2]);
    Ok((pairs, middle))
}

/// Read an encoded numerator back as a sine sum.
pub fn decode_sin(numer: &Polynomial, denom: LinST) -> Result<Equation, DivisionError> {
    let kind = TrigKind::Sin;
    if numer.len() % 2 != 0 {
        return Err(decode_error(kind, format!("odd number of terms in {numer}")));
    }
    let (pairs, _) = mirror_pairs(kind, numer, denom)?;
    let mut eq = Equation::zero(kind);
    for (arg, cf, cb) in pairs {
        if cf != -cb {
            return Err(decode_error(
                kind,
                format!("coefficients {cf} and {cb} at {arg} are not negatives"),
            ));
        }
        eq.add_term(arg, cf);
    }
    Ok(eq)
}

/// Read an encoded numerator back as a cosine sum.
///
/// An unpaired middle term must sit at `denom` and stands for `cos(0)`; an odd
/// coefficient there doubles the whole sum to stay integral.
pub fn decode_cos(numer: &Polynomial, denom: LinST) -> Result<Equation, DivisionError> {
    let kind = TrigKind::Cos;
    let (pairs, middle) = mirror_pairs(kind, numer, denom)?;
    let mut terms = Vec::with_capacity(pairs.len() + 1);
    for (arg, cf, cb) in pairs {
        if cf != cb {
            return Err(decode_error(
                kind,
                format!("coefficients {cf} and {cb} at {arg} differ"),
            ));
        }
        terms.push((arg, cf));
    }
    if let Some((m, c)) = middle {
        if m != denom {
            return Err(decode_error(
                kind,
                format!("middle monomial {m} is not the denominator {denom}"),
            ));
        }
        if c % 2 == 0 {
            terms.push((ArgXY::zero(), c / 2));
        } else {
            for (arg, cf) in terms.iter_mut() {
                let old = *cf;
                *cf = old
                    .checked_mul(2)
                    .filter(|&v| v != i32::MIN)
                    .ok_or_else(|| DivisionError::Overflow(format!("2 * {old} at {arg}")))?;
            }
            terms.push((ArgXY::zero(), c));
        }
    }
    Ok(Equation::from_terms(kind, terms))
}

/// Decode as the given kind.
pub fn decode(kind: TrigKind, numer: &Polynomial, denom: LinST) -> Result<Equation, DivisionError> {
    match kind {
        TrigKind::Sin => decode_sin(numer, denom),
        TrigKind::Cos => decode_cos(numer, denom),
    }
}
