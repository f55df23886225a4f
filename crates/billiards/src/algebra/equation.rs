//! Sparse sums of sine or cosine terms with integer coefficients.

use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;
use std::fmt;

use super::arith::{abs, gcd};
use super::lincom::ArgXY;
use crate::error::AlgebraError;

/// Which trig function a term or equation uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrigKind {
    Sin,
    Cos,
}

impl TrigKind {
    pub fn name(self) -> &'static str {
        match self {
            TrigKind::Sin => "sin",
            TrigKind::Cos => "cos",
        }
    }
}

impl fmt::Display for TrigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single trig term `kind(arg)` with no coefficient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Trig<A> {
    pub kind: TrigKind,
    pub arg: A,
}

pub type TrigXY = Trig<ArgXY>;

impl<A> Trig<A> {
    #[inline]
    pub fn sin(arg: A) -> Self {
        Self {
            kind: TrigKind::Sin,
            arg,
        }
    }
    #[inline]
    pub fn cos(arg: A) -> Self {
        Self {
            kind: TrigKind::Cos,
            arg,
        }
    }
}

impl<A: fmt::Display> fmt::Display for Trig<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.arg)
    }
}

/// Per-axis Lipschitz bounds `(sum |c||b|, sum |c||d|)` of `sum c * trig(bx + dy)`
/// in units of `pi/2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GradientBound {
    pub x: i64,
    pub y: i64,
}

impl GradientBound {
    #[inline]
    pub fn total(&self) -> i64 {
        self.x + self.y
    }
}

/// `sum_k c_k * kind(arg_k)`, all terms of one trig kind.
///
/// Invariant: no stored coefficient is zero, so structural equality is
/// equality of the represented sums.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Equation {
    kind: TrigKind,
    terms: BTreeMap<ArgXY, i32>,
}

impl Equation {
    /// The zero equation of the given kind.
    pub fn zero(kind: TrigKind) -> Self {
        Self {
            kind,
            terms: BTreeMap::new(),
        }
    }

    /// `c * kind(arg)`.
    pub fn term(kind: TrigKind, arg: ArgXY, c: i32) -> Self {
        let mut eq = Self::zero(kind);
        eq.add_term(arg, c);
        eq
    }

    pub fn from_terms<I: IntoIterator<Item = (ArgXY, i32)>>(kind: TrigKind, terms: I) -> Self {
        let mut eq = Self::zero(kind);
        for (arg, c) in terms {
            eq.add_term(arg, c);
        }
        eq
    }

    #[inline]
    pub fn kind(&self) -> TrigKind {
        self.kind
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in increasing argument order.
    pub fn terms(&self) -> btree_map::Iter<'_, ArgXY, i32> {
        self.terms.iter()
    }

    pub fn coeff(&self, arg: &ArgXY) -> i32 {
        self.terms.get(arg).copied().unwrap_or(0)
    }

    pub fn add_term(&mut self, arg: ArgXY, c: i32) {
        if c == 0 {
            return;
        }
        match self.terms.entry(arg) {
            Entry::Vacant(v) => {
                v.insert(c);
            }
            Entry::Occupied(mut o) => {
                *o.get_mut() += c;
                if *o.get() == 0 {
                    o.remove();
                }
            }
        }
    }

    pub fn sub_term(&mut self, arg: ArgXY, c: i32) {
        self.add_term(arg, -c);
    }

    fn same_kind(&self, found: TrigKind) -> Result<(), AlgebraError> {
        if found == self.kind {
            Ok(())
        } else {
            Err(AlgebraError::KindMismatch {
                expected: self.kind.name(),
                found: found.name(),
            })
        }
    }

    /// Add `c * t`; `t` must have this equation's kind.
    pub fn add_trig(&mut self, t: TrigXY, c: i32) -> Result<(), AlgebraError> {
        self.same_kind(t.kind)?;
        self.add_term(t.arg, c);
        Ok(())
    }

    /// Add `other`, which must have this equation's kind. On a mismatch
    /// `self` is left unchanged.
    pub fn add(&mut self, other: &Equation) -> Result<(), AlgebraError> {
        self.same_kind(other.kind)?;
        for (&arg, &c) in &other.terms {
            self.add_term(arg, c);
        }
        Ok(())
    }

    pub fn sub(&mut self, other: &Equation) -> Result<(), AlgebraError> {
        self.same_kind(other.kind)?;
        for (&arg, &c) in &other.terms {
            self.sub_term(arg, c);
        }
        Ok(())
    }

    pub fn scale(&mut self, k: i32) {
        if k == 0 {
            self.terms.clear();
            return;
        }
        for c in self.terms.values_mut() {
            *c *= k;
        }
    }

    pub fn scaled(mut self, k: i32) -> Self {
        self.scale(k);
        self
    }

    /// Gcd of all coefficients; 0 for the zero equation.
    pub fn content(&self) -> i32 {
        self.terms.values().fold(0, |g, &c| gcd(g, c))
    }

    pub fn divide_content(&mut self) {
        let g = self.content();
        if g != 0 {
            for c in self.terms.values_mut() {
                *c /= g;
            }
        }
    }

    /// Per-axis gradient bounds.
    pub fn gradient_bounds(&self) -> GradientBound {
        let mut out = GradientBound::default();
        for (arg, &c) in &self.terms {
            let c = i64::from(abs(c));
            out.x += c * i64::from(abs(arg.x()));
            out.y += c * i64::from(abs(arg.y()));
        }
        out
    }

    #[inline]
    pub fn gradient_bound(&self) -> i64 {
        self.gradient_bounds().total()
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }
        for (i, (arg, &c)) in self.terms.iter().enumerate() {
            if c > 0 && i > 0 {
                f.write_str("+")?;
            }
            match c {
                1 => {}
                -1 => f.write_str("-")?,
                _ => write!(f, "{c}")?,
            }
            write!(f, "{}({arg})", self.kind)?;
        }
        Ok(())
    }
}
