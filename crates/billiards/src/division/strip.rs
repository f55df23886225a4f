//! Stripping repeated triangle-angle factors out of an equation.
//!
//! In the Laurent encoding `sin x = (s^2 - 1) / (2i s)`, `sin y` likewise with
//! `t`, and `sin z = sin(x + y)` up to sign with `s t`. Each time `u^2 - 1`
//! divides the numerator, one factor `sin` of that angle is removed: the
//! denominator loses `u`, and the `1/i` bookkeeping flips between a sine
//! (odd number of `1/i`) and a cosine result.

use super::encode::{decode_cos, decode_sin, encode};
use super::poly::{divide_square_minus_one, Polynomial};
use crate::algebra::{Equation, LinST, TrigKind, XYZ};
use crate::cfg::STRIP_GROWTH_CAP;
use crate::error::DivisionError;

struct Stripper {
    numer: Polynomial,
    denom: LinST,
    sign: i32,
    one_over_i: bool,
}

fn step(angle: XYZ) -> LinST {
    match angle {
        XYZ::X => LinST::new([1, 0]),
        XYZ::Y => LinST::new([0, 1]),
        XYZ::Z => LinST::new([1, 1]),
    }
}

impl Stripper {
    fn new(eq: &Equation) -> Result<Self, DivisionError> {
        let enc = encode(eq)?;
        Ok(Self {
            numer: enc.numer,
            denom: enc.denom,
            sign: 1,
            one_over_i: eq.kind() == TrigKind::Sin,
        })
    }

    fn strip_angle(&mut self, angle: XYZ) -> Result<(), DivisionError> {
        let u = step(angle);
        while let Some(q) = divide_square_minus_one(&self.numer, u, STRIP_GROWTH_CAP)? {
            self.numer = q;
            self.denom = self.denom - u;
            // With no 1/i left, borrow one via 1 = (1/i)(-1/i).
            if !self.one_over_i {
                self.sign = -self.sign;
            }
            self.one_over_i = !self.one_over_i;
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Equation, DivisionError> {
        self.numer.scale(self.sign)?;
        if self.one_over_i {
            decode_sin(&self.numer, self.denom)
        } else {
            decode_cos(&self.numer, self.denom)
        }
    }
}

/// Divide out every repeated `sin` of the triangle angles, in the order
/// `first`, `second`, then the remaining angle.
///
/// The result equals `eq` divided by a product of those sines up to a
/// positive constant, so it has the same sign wherever all three angles lie
/// in `(0, pi)`.
pub fn strip_line_factors(eq: &Equation, first: XYZ, second: XYZ) -> Result<Equation, DivisionError> {
    let third = XYZ::other_angle(first, second)
        .ok_or_else(|| DivisionError::SameAngles(first.to_string()))?;
    if eq.is_zero() {
        return Ok(eq.clone());
    }
    let mut stripper = Stripper::new(eq)?;
    for angle in [first, second, third] {
        stripper.strip_angle(angle)?;
    }
    stripper.finish()
}
