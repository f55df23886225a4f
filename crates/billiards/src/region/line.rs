//! Constraint lines `a*x + b*y + c*eta` in coordinates where `eta = 1`.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::Zero;

use crate::algebra::{LinXYEta, XYEta};
use crate::error::CertificationError;
use crate::geometry::{Point, Rational};

/// A constraint line; the region is where it evaluates positive.
pub type Line = LinXYEta;

/// `a*x + b*y + c` at `p`.
pub fn eval(line: &Line, p: &Point) -> Rational {
    let a = BigInt::from(line.coeff(XYEta::X));
    let b = BigInt::from(line.coeff(XYEta::Y));
    let c = BigInt::from(line.coeff(XYEta::Eta));
    &p.x * Rational::from_integer(a) + &p.y * Rational::from_integer(b) + Rational::from_integer(c)
}

/// Side of `line` that `p` lies on: `Greater` is inside the half-plane.
#[inline]
pub fn sign_at(line: &Line, p: &Point) -> Ordering {
    eval(line, p).cmp(&Rational::zero())
}

/// Exact intersection of two lines by Cramer's rule.
///
/// Coefficients are widened to 64 bits before forming determinants. Parallel
/// lines are an error: callers only intersect lines known to cross.
pub fn intersect(l1: &Line, l2: &Line) -> Result<Point, CertificationError> {
    let [a1, b1, c1] = l1.coeffs().map(i64::from);
    let [a2, b2, c2] = l2.coeffs().map(i64::from);
    let det = a1 * b2 - b1 * a2;
    if det == 0 {
        return Err(CertificationError::Singular(l1.to_string(), l2.to_string()));
    }
    let det = BigInt::from(det);
    Ok(Point::new(
        Rational::new(BigInt::from(b1 * c2 - b2 * c1), det.clone()),
        Rational::new(BigInt::from(a2 * c1 - a1 * c2), det),
    ))
}
