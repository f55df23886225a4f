//! Dense integer linear combinations over a fixed symbol alphabet.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};

use super::arith::{abs, gcd, signum};
use super::symbols::{Symbol, ST, XY, XYEta, XYPi};
use crate::error::AlgebraError;

/// `sum_i c_i * s_i` with one `i32` coefficient per symbol of `S`.
///
/// `N` must equal `S::ALL.len()`; the aliases below fix both together.
/// Ordering is lexicographic on coefficients in symbol order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinCom<S: Symbol, const N: usize> {
    coeffs: [i32; N],
    alphabet: PhantomData<S>,
}

/// Argument of a trig term: `bx + cy`.
pub type ArgXY = LinCom<XY, 2>;
/// Constraint lines `ax + by + c*eta`.
pub type LinXYEta = LinCom<XYEta, 3>;
pub type LinXYPi = LinCom<XYPi, 3>;
/// Exponent vectors of Laurent monomials.
pub type LinST = LinCom<ST, 2>;

impl<S: Symbol, const N: usize> Default for LinCom<S, N> {
    fn default() -> Self {
        Self::new([0; N])
    }
}

impl<S: Symbol, const N: usize> LinCom<S, N> {
    #[inline]
    pub fn new(coeffs: [i32; N]) -> Self {
        debug_assert_eq!(S::ALL.len(), N, "alphabet size mismatch");
        Self {
            coeffs,
            alphabet: PhantomData,
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// The single-symbol combination `c * sym`.
    #[inline]
    pub fn term(sym: S, c: i32) -> Self {
        let mut out = Self::zero();
        out.coeffs[sym.index()] = c;
        out
    }

    #[inline]
    pub fn coeff(&self, sym: S) -> i32 {
        self.coeffs[sym.index()]
    }

    #[inline]
    pub fn set_coeff(&mut self, sym: S, c: i32) {
        self.coeffs[sym.index()] = c;
    }

    #[inline]
    pub fn coeffs(&self) -> &[i32; N] {
        &self.coeffs
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    pub fn add_term(&mut self, sym: S, c: i32) {
        self.coeffs[sym.index()] += c;
    }

    pub fn sub_term(&mut self, sym: S, c: i32) {
        self.coeffs[sym.index()] -= c;
    }

    pub fn scale(&mut self, k: i32) {
        for c in &mut self.coeffs {
            *c *= k;
        }
    }

    /// Gcd of all coefficients; 0 for the zero combination.
    pub fn content(&self) -> i32 {
        self.coeffs.iter().fold(0, |g, &c| gcd(g, c))
    }

    /// Divide out the content; no-op on zero.
    pub fn divide_content(&mut self) {
        let g = self.content();
        if g != 0 {
            for c in &mut self.coeffs {
                *c /= g;
            }
        }
    }

    /// Sign of the first nonzero coefficient in symbol order (0 if none).
    pub fn unit(&self) -> i32 {
        self.coeffs
            .iter()
            .find(|&&c| c != 0)
            .map(|&c| signum(c))
            .unwrap_or(0)
    }

    /// Multiply by the unit so the leading coefficient becomes positive.
    pub fn divide_unit(&mut self) {
        let u = self.unit();
        if u != 0 {
            self.scale(u);
        }
    }

    /// Sum of absolute coefficients.
    pub fn l1_norm(&self) -> i64 {
        self.coeffs.iter().map(|&c| i64::from(abs(c))).sum()
    }
}

impl<S: Symbol, const N: usize> Add for LinCom<S, N> {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs) {
            *a += b;
        }
        self
    }
}

impl<S: Symbol, const N: usize> Sub for LinCom<S, N> {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs) {
            *a -= b;
        }
        self
    }
}

impl<S: Symbol, const N: usize> Neg for LinCom<S, N> {
    type Output = Self;
    fn neg(mut self) -> Self {
        self.scale(-1);
        self
    }
}

impl<S: Symbol, const N: usize> Mul<i32> for LinCom<S, N> {
    type Output = Self;
    fn mul(mut self, k: i32) -> Self {
        self.scale(k);
        self
    }
}

impl<S: Symbol + fmt::Display, const N: usize> fmt::Display for LinCom<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (&sym, &c) in S::ALL.iter().zip(self.coeffs.iter()) {
            if c == 0 {
                continue;
            }
            if c > 0 && !first {
                f.write_str("+")?;
            }
            match c {
                1 => {}
                -1 => f.write_str("-")?,
                _ => write!(f, "{c}")?,
            }
            write!(f, "{sym}")?;
            first = false;
        }
        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}

impl<S: Symbol + fmt::Display, const N: usize> fmt::Debug for LinCom<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinCom({self})")
    }
}

impl ArgXY {
    #[inline]
    pub fn xy(x: i32, y: i32) -> Self {
        Self::new([x, y])
    }
    #[inline]
    pub fn x(&self) -> i32 {
        self.coeff(XY::X)
    }
    #[inline]
    pub fn y(&self) -> i32 {
        self.coeff(XY::Y)
    }
}

impl LinXYEta {
    #[inline]
    pub fn xy_eta(x: i32, y: i32, eta: i32) -> Self {
        Self::new([x, y, eta])
    }

    /// The `x`/`y` part, dropping the constant.
    #[inline]
    pub fn arg(&self) -> ArgXY {
        ArgXY::xy(self.coeff(XYEta::X), self.coeff(XYEta::Y))
    }

    /// Rewrite in terms of `pi`; the eta coefficient must be even.
    pub fn to_pi(&self) -> Result<LinXYPi, AlgebraError> {
        let eta = self.coeff(XYEta::Eta);
        if eta % 2 != 0 {
            return Err(AlgebraError::EtaParity {
                eta,
                what: "conversion to pi",
            });
        }
        Ok(LinXYPi::new([
            self.coeff(XYEta::X),
            self.coeff(XYEta::Y),
            eta / 2,
        ]))
    }
}

impl LinXYPi {
    /// Rewrite in terms of `eta = pi/2`.
    pub fn to_eta(&self) -> LinXYEta {
        LinXYEta::xy_eta(
            self.coeff(XYPi::X),
            self.coeff(XYPi::Y),
            2 * self.coeff(XYPi::Pi),
        )
    }
}
