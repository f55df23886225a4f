//! Sparse integer polynomials in `s`, `t` and exact long division.
//!
//! Monomials are exponent vectors (`LinST`) ordered lexicographically, `s`
//! first. Long division scans from the largest monomial down; `u^2 - 1`
//! division scans up from the smallest. Coefficient arithmetic is checked and
//! reports overflow as an error.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use crate::algebra::{LinST, ST};
use crate::error::DivisionError;

/// `sum_k c_k s^{a_k} t^{b_k}` with no zero coefficients.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polynomial {
    terms: BTreeMap<LinST, i32>,
}

/// True if `a` divides `b`, i.e. every exponent of `a` is at most that of `b`.
#[inline]
pub fn monomial_divides(a: &LinST, b: &LinST) -> bool {
    a.coeffs().iter().zip(b.coeffs()).all(|(x, y)| x <= y)
}

impl Polynomial {
    pub fn zero() -> Self {
        Self::default()
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

    /// Terms from the largest monomial down.
    pub fn terms_desc(&self) -> impl DoubleEndedIterator<Item = (&LinST, &i32)> + ExactSizeIterator {
        self.terms.iter().rev()
    }

    /// The largest term.
    pub fn leading(&self) -> Option<(LinST, i32)> {
        self.terms.last_key_value().map(|(&m, &c)| (m, c))
    }

    /// `self += c * m`. Sums must stay representable and negatable.
    pub fn add_term(&mut self, m: LinST, c: i32) -> Result<(), DivisionError> {
        if c == 0 {
            return Ok(());
        }
        match self.terms.entry(m) {
            Entry::Vacant(v) => {
                v.insert(coefficient(Some(c), || format!("{c} at {m}"))?);
            }
            Entry::Occupied(mut o) => {
                let old = *o.get();
                let sum = coefficient(old.checked_add(c), || format!("{old} + {c} at {m}"))?;
                if sum == 0 {
                    o.remove();
                } else {
                    *o.get_mut() = sum;
                }
            }
        }
        Ok(())
    }

    pub fn sub_term(&mut self, m: LinST, c: i32) -> Result<(), DivisionError> {
        let neg = coefficient(c.checked_neg(), || format!("-({c}) at {m}"))?;
        self.add_term(m, neg)
    }

    /// `self -= other * c * m`.
    pub fn sub_scaled(&mut self, other: &Polynomial, m: LinST, c: i32) -> Result<(), DivisionError> {
        for (&om, &oc) in &other.terms {
            let prod = coefficient(oc.checked_mul(c), || format!("{oc} * {c}"))?;
            self.sub_term(om + m, prod)?;
        }
        Ok(())
    }

    pub fn scale(&mut self, k: i32) -> Result<(), DivisionError> {
        if k == 0 {
            self.terms.clear();
            return Ok(());
        }
        for c in self.terms.values_mut() {
            let old = *c;
            *c = coefficient(old.checked_mul(k), || format!("{old} * {k}"))?;
        }
        Ok(())
    }

    pub fn scaled(mut self, k: i32) -> Result<Self, DivisionError> {
        self.scale(k)?;
        Ok(self)
    }
}

/// Checked coefficient; `i32::MIN` is rejected too, so every stored
/// coefficient can be negated.
fn coefficient(c: Option<i32>, what: impl FnOnce() -> String) -> Result<i32, DivisionError> {
    c.filter(|&c| c != i32::MIN)
        .ok_or_else(|| DivisionError::Overflow(what()))
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }
        for (i, (m, &c)) in self.terms_desc().enumerate() {
            if i > 0 && c > 0 {
                f.write_str("+")?;
            }
            write!(f, "{c}")?;
            for sym in [ST::S, ST::T] {
                match m.coeff(sym) {
                    0 => {}
                    1 => write!(f, "*{sym}")?,
                    e => write!(f, "*{sym}^{e}")?,
                }
            }
        }
        Ok(())
    }
}

/// Exact quotient `dividend / divisor`, or `None` if a nonzero remainder is
/// left once no remaining term is reducible by the divisor's leading term.
/// A zero divisor divides nothing.
pub fn divide(dividend: &Polynomial, divisor: &Polynomial) -> Result<Option<Polynomial>, DivisionError> {
    let Some((lead_m, lead_c)) = divisor.leading() else {
        return Ok(None);
    };
    let mut remainder = dividend.clone();
    let mut quotient = Polynomial::zero();
    while !remainder.is_zero() {
        let Some((m, c)) = remainder
            .terms_desc()
            .find(|&(m, c)| monomial_divides(&lead_m, m) && *c % lead_c == 0)
            .map(|(&m, &c)| (m, c))
        else {
            return Ok(None);
        };
        let qm = m - lead_m;
        let qc = c / lead_c;
        quotient.add_term(qm, qc)?;
        remainder.sub_scaled(divisor, qm, qc)?;
    }
    Ok(Some(quotient))
}

/// One pass of dividing by `u^2 - 1` where `u = s^a t^b` for `step = (a, b)`.
///
/// Each step reduces the smallest remainder term divisible by `u^2`. Gives up
/// (returns `None`) on a nonzero remainder, or when the quotient holds more
/// than `poly.len() + growth_cap` terms at the start of a step.
pub fn divide_square_minus_one(
    poly: &Polynomial,
    step: LinST,
    growth_cap: usize,
) -> Result<Option<Polynomial>, DivisionError> {
    let square = step * 2;
    let limit = poly.len() + growth_cap;
    let mut remainder = poly.clone();
    let mut quotient = Polynomial::zero();
    while !remainder.is_zero() {
        if quotient.len() > limit {
            return Ok(None);
        }
        let Some((m, c)) = remainder
            .terms
            .iter()
            .find(|&(m, _)| monomial_divides(&square, m))
            .map(|(&m, &c)| (m, c))
        else {
            return Ok(None);
        };
        let reduced = m - square;
        remainder.sub_term(m, c)?;
        quotient.add_term(reduced, c)?;
        remainder.add_term(reduced, c)?;
    }
    Ok(Some(quotient))
}
