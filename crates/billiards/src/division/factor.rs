//! Dividing equations by a single vanishing trig factor.

use tracing::debug;

use super::encode::{decode, encode};
use super::poly::divide;
use crate::algebra::{Equation, EquationSet, LinXYEta, TrigKind, XYEta};
use crate::error::DivisionError;

/// Kind of `eq / factor` as a trig sum.
///
/// The `2i` and `2` normalizers of the encodings cancel to a positive scalar
/// except for cosine over sine, which the caller compensates by negating.
pub fn quotient_kind(eq: TrigKind, factor: TrigKind) -> TrigKind {
    match (eq, factor) {
        (TrigKind::Sin, TrigKind::Sin) => TrigKind::Cos,
        (TrigKind::Sin, TrigKind::Cos) => TrigKind::Sin,
        (TrigKind::Cos, TrigKind::Sin) => TrigKind::Sin,
        (TrigKind::Cos, TrigKind::Cos) => TrigKind::Cos,
    }
}

/// Divide `eq` by `factor` exactly once.
///
/// `Ok(None)` means the factor does not divide. The quotient equals
/// `eq / factor` up to a positive constant. Dividing the quotient again must
/// fail; a factor of multiplicity two or more is an error.
pub fn divide_once(eq: &Equation, factor: &Equation) -> Result<Option<Equation>, DivisionError> {
    let kind = quotient_kind(eq.kind(), factor.kind());
    if eq.is_zero() {
        return Ok(Some(Equation::zero(kind)));
    }
    let num = encode(eq)?;
    let fac = encode(factor)?;
    let numer = match (eq.kind(), factor.kind()) {
        (TrigKind::Cos, TrigKind::Sin) => num.numer.scaled(-1)?,
        _ => num.numer,
    };
    let Some(quotient) = divide(&numer, &fac.numer)? else {
        return Ok(None);
    };
    if divide(&quotient, &fac.numer)?.is_some() {
        return Err(DivisionError::RepeatedFactor {
            equation: eq.to_string(),
            factor: factor.to_string(),
        });
    }
    decode(kind, &quotient, num.denom - fac.denom).map(Some)
}

/// The trig factor vanishing on the line `ax + by + c*eta = 0`, and whether
/// the factor keeps its sign convention ("same") on the positive side.
///
/// Rearranged, `ax + by = -c*eta`: for even `c` the sine of both sides
/// vanishes, for odd `c` the cosine does.
pub fn line_factor(line: &LinXYEta) -> (Equation, bool) {
    let arg = line.arg();
    let c = line.coeff(XYEta::Eta);
    if c % 2 == 0 {
        (Equation::term(TrigKind::Sin, arg, 1), (c / 2) % 2 == 0)
    } else {
        (Equation::term(TrigKind::Cos, arg, 1), ((c - 1) / 2) % 2 == 0)
    }
}

/// Replace every equation of `set` divisible by `factor` with its quotient,
/// negated unless `positive`.
pub fn remove_factor(
    set: &mut EquationSet,
    factor: &Equation,
    positive: bool,
) -> Result<usize, DivisionError> {
    let mut replaced = Vec::new();
    for eq in set.iter() {
        if let Some(mut q) = divide_once(eq, factor)? {
            if !positive {
                q.scale(-1);
            }
            replaced.push((eq.clone(), q));
        }
    }
    for (old, _) in &replaced {
        set.remove(old);
    }
    let count = replaced.len();
    for (_, q) in replaced {
        set.insert(q);
    }
    Ok(count)
}

/// Cancel the shared boundary factor of a triple from both of its stable
/// sides.
pub fn remove_line_factor(
    negative: &mut EquationSet,
    line: &LinXYEta,
    positive: &mut EquationSet,
) -> Result<(), DivisionError> {
    let (factor, same) = line_factor(line);
    let neg = remove_factor(negative, &factor, !same)?;
    let pos = remove_factor(positive, &factor, same)?;
    debug!(line = %line, factor = %factor, same, neg, pos, "removed line factor");
    Ok(())
}
