//! Compact read-only equations for high-volume evaluation.

use std::fmt;

use super::equation::{Equation, TrigKind};
use super::lincom::ArgXY;
use crate::error::AlgebraError;

/// One term `coeff * kind(x*X + y*Y)` in 16-bit storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlatTerm {
    pub coeff: i16,
    pub x: i16,
    pub y: i16,
}

/// Immutable array-backed copy of an [`Equation`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlattenedEquation {
    kind: TrigKind,
    terms: Box<[FlatTerm]>,
}

impl FlattenedEquation {
    /// Wrap raw terms as-is; the evaluator rejects zero coefficients.
    pub fn new(kind: TrigKind, terms: Vec<FlatTerm>) -> Self {
        Self {
            kind,
            terms: terms.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn kind(&self) -> TrigKind {
        self.kind
    }
    #[inline]
    pub fn terms(&self) -> &[FlatTerm] {
        &self.terms
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Widen back into an editable equation.
    pub fn to_equation(&self) -> Equation {
        Equation::from_terms(
            self.kind,
            self.terms
                .iter()
                .map(|t| (ArgXY::xy(t.x.into(), t.y.into()), t.coeff.into())),
        )
    }
}

fn narrow(value: i32) -> Result<i16, AlgebraError> {
    i16::try_from(value).map_err(|_| AlgebraError::Narrowing { value })
}

impl TryFrom<&Equation> for FlattenedEquation {
    type Error = AlgebraError;
    fn try_from(eq: &Equation) -> Result<Self, Self::Error> {
        let terms = eq
            .terms()
            .map(|(arg, &c)| {
                Ok(FlatTerm {
                    coeff: narrow(c)?,
                    x: narrow(arg.x())?,
                    y: narrow(arg.y())?,
                })
            })
            .collect::<Result<Vec<_>, AlgebraError>>()?;
        Ok(Self {
            kind: eq.kind(),
            terms: terms.into_boxed_slice(),
        })
    }
}

impl fmt::Display for FlattenedEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_equation().fmt(f)
    }
}
