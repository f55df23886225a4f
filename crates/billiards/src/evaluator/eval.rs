//! Certified positivity of a flattened equation over a neighborhood.

use gmp_mpfr_sys::mpfr;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::ToPrimitive;
use rug::float::{Constant, Round};
use rug::integer::Order;
use rug::ops::{AddAssignRound, DivAssignRound, MulAssignRound};
use rug::{Assign, Float};
use tracing::trace;

use super::flags::Flags;
use crate::algebra::{FlattenedEquation, TrigKind};
use crate::cfg::{digits_to_bits, PI_PRECISION_FACTOR};
use crate::error::CertificationError;
use crate::geometry::{Point, Rational};

fn to_integer(n: &BigInt) -> rug::Integer {
    let (sign, digits) = n.to_u32_digits();
    let m = rug::Integer::from_digits(&digits, Order::Lsf);
    if sign == Sign::Minus {
        -m
    } else {
        m
    }
}

/// Exact conversion into an MPFR-ready rational.
pub(crate) fn to_mpq(q: &Rational) -> rug::Rational {
    rug::Rational::from((to_integer(q.numer()), to_integer(q.denom())))
}

/// Per-task evaluation scratch: working precision, the pi/2 enclosure and
/// the flags of the last evaluation.
///
/// Not shared between threads; clone one per task. Dropping it releases the
/// thread's MPFR constant caches.
#[derive(Clone, Debug)]
pub struct Evaluator {
    prec: u32,
    half_pi_lo: Float,
    half_pi_hi: Float,
    flags: Flags,
}

impl Evaluator {
    pub fn new(bits: u32) -> Self {
        let prec = bits.max(2);
        let pi_prec = PI_PRECISION_FACTOR * prec;
        Flags::clear_thread();
        let (mut half_pi_lo, _) = Float::with_val_round(pi_prec, Constant::Pi, Round::Down);
        let (mut half_pi_hi, _) = Float::with_val_round(pi_prec, Constant::Pi, Round::Up);
        half_pi_lo.div_assign_round(2u32, Round::Down);
        half_pi_hi.div_assign_round(2u32, Round::Up);
        Self {
            prec,
            half_pi_lo,
            half_pi_hi,
            flags: Flags::raised(),
        }
    }

    pub fn with_digits(digits: u32) -> Self {
        Self::new(digits_to_bits(digits))
    }

    #[inline]
    pub fn precision(&self) -> u32 {
        self.prec
    }

    #[inline]
    pub fn half_pi_bounds(&self) -> (&Float, &Float) {
        (&self.half_pi_lo, &self.half_pi_hi)
    }

    /// Flags raised by the most recent evaluation.
    #[inline]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Prove `eq > 0` on the square (or disk) of `radius` around `center`,
    /// given the combined gradient bound `bound = bx + by`.
    pub fn is_positive(
        &mut self,
        eq: &FlattenedEquation,
        bound: i64,
        center: &Point,
        radius: &Rational,
    ) -> Result<bool, CertificationError> {
        let budget = Rational::from_integer(BigInt::from(bound)) * radius;
        self.positive_with_budget(eq, center, &budget)
    }

    /// Anisotropic form: the neighborhood is the box with half-widths
    /// `rx`, `ry` around `center`.
    pub fn is_positive_xy(
        &mut self,
        eq: &FlattenedEquation,
        bx: i64,
        by: i64,
        center: &Point,
        rx: &Rational,
        ry: &Rational,
    ) -> Result<bool, CertificationError> {
        let budget = Rational::from_integer(BigInt::from(bx)) * rx
            + Rational::from_integer(BigInt::from(by)) * ry;
        self.positive_with_budget(eq, center, &budget)
    }

    fn positive_with_budget(
        &mut self,
        eq: &FlattenedEquation,
        center: &Point,
        budget: &Rational,
    ) -> Result<bool, CertificationError> {
        Flags::clear_thread();
        let mut sum = Float::new(self.prec);
        for t in eq.terms() {
            if t.coeff == 0 {
                return Err(CertificationError::ZeroCoefficient);
            }
            let arg = Rational::from_integer(BigInt::from(t.x)) * &center.x
                + Rational::from_integer(BigInt::from(t.y)) * &center.y;
            let term = self.term_lower_bound(eq.kind(), i64::from(t.coeff), &arg);
            sum.add_assign_round(&term, Round::Down);
        }
        let (deviation, _) =
            Float::with_val_round(self.prec, &self.half_pi_hi * &to_mpq(budget), Round::Up);
        let positive = sum > deviation;
        self.flags = Flags::raised();
        if self.flags.any() {
            return Err(CertificationError::Flags(format!(
                "{} in {eq} at {center} with budget {budget}",
                self.flags
            )));
        }
        trace!(
            equation = %eq,
            lower = sum.to_f64(),
            deviation = deviation.to_f64(),
            positive,
            "evaluated"
        );
        Ok(positive)
    }

    /// Lower bound on `coeff * kind(arg * pi/2)`.
    fn term_lower_bound(&self, kind: TrigKind, coeff: i64, arg: &Rational) -> Float {
        let (quot, rem) = arg.numer().div_mod_floor(arg.denom());
        let frac = to_mpq(&Rational::new(rem, arg.denom().clone()));
        let quad = quot.mod_floor(&BigInt::from(4)).to_u8().unwrap_or(0);
        use TrigKind::{Cos, Sin};
        let (base, c) = match (kind, quad) {
            (Sin, 0) | (Cos, 3) => (Sin, coeff),
            (Sin, 1) | (Cos, 0) => (Cos, coeff),
            (Sin, 2) | (Cos, 1) => (Sin, -coeff),
            _ => (Cos, -coeff),
        };
        let mut value = self.quarter_bound(base, c > 0, &frac);
        value.mul_assign_round(c, Round::Down);
        value
    }

    /// Bound on `kind(frac * pi/2)` for `0 <= frac < 1`: a lower bound if
    /// `lower`, else an upper bound.
    fn quarter_bound(&self, kind: TrigKind, lower: bool, frac: &rug::Rational) -> Float {
        let rnd = if lower { Round::Down } else { Round::Up };
        // sin grows and cos shrinks on the quarter turn, so the argument is
        // rounded with the bound for sin and against it for cos.
        let arg_up = matches!((kind, lower), (TrigKind::Sin, false) | (TrigKind::Cos, true));
        if !arg_up {
            let (mut t, _) = Float::with_val_round(self.prec, &self.half_pi_lo * frac, Round::Down);
            trig_round(&mut t, kind, rnd);
            return t;
        }
        let (mut t, _) = Float::with_val_round(self.prec, &self.half_pi_hi * frac, Round::Up);
        if t > self.half_pi_lo {
            // Rounded past the quarter turn: use the exact endpoint value.
            match kind {
                TrigKind::Sin => t.assign(1),
                TrigKind::Cos => t.assign(0),
            }
            return t;
        }
        trig_round(&mut t, kind, rnd);
        t
    }
}

fn trig_round(t: &mut Float, kind: TrigKind, rnd: Round) {
    let _ = match kind {
        TrigKind::Sin => t.sin_round(rnd),
        TrigKind::Cos => t.cos_round(rnd),
    };
}

impl Drop for Evaluator {
    fn drop(&mut self) {
        // SAFETY: frees only MPFR's thread-local caches; values already held
        // by other evaluators are unaffected.
        unsafe { mpfr::free_cache() }
    }
}
