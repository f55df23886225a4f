//! Splitting a square's corners across a triple's line.
//!
//! Corners are walked counter-clockwise from the lower left. Each corner is
//! filed under the sign of the line at it; where the line changes sign
//! strictly between two consecutive corners, the crossing point is filed with
//! the zeros. Points that lie exactly on the line are zeros too.

use std::cmp::Ordering;

use num_traits::{Signed, Zero};

use crate::algebra::XYEta;
use crate::error::CertificationError;
use crate::geometry::{bounding_box, int, Point, Rational, Rectangle};
use crate::region::{eval, Line};

/// Corners and crossing points of a square, grouped by side of the line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Split {
    pub negatives: Vec<Point>,
    pub zeros: Vec<Point>,
    pub positives: Vec<Point>,
}

pub(crate) enum Classified {
    Split(Split),
    /// A corner whose line value reaches the guard.
    TooFar { corner: Point, value: Rational },
}

/// Group the corners of `square`, or report the first corner whose line
/// value has magnitude at least `guard`.
pub(crate) fn classify(square: &Rectangle, line: &Line, guard: i64) -> Result<Classified, CertificationError> {
    let corners = square.corners();
    let values: Vec<Rational> = corners.iter().map(|c| eval(line, c)).collect();
    let guard = int(guard);
    for (corner, value) in corners.iter().zip(&values) {
        if value.abs() >= guard {
            return Ok(Classified::TooFar {
                corner: corner.clone(),
                value: value.clone(),
            });
        }
    }
    let mut split = Split::default();
    for i in 0..4 {
        let j = (i + 1) % 4;
        let (c0, c1) = (&corners[i], &corners[j]);
        let (s0, s1) = (values[i].cmp(&Rational::zero()), values[j].cmp(&Rational::zero()));
        match s0 {
            Ordering::Less => split.negatives.push(c0.clone()),
            Ordering::Equal => split.zeros.push(c0.clone()),
            Ordering::Greater => split.positives.push(c0.clone()),
        }
        if s0 != Ordering::Equal && s1 != Ordering::Equal && s0 != s1 {
            split.zeros.push(crossing(c0, c1, line)?);
        }
    }
    Ok(Classified::Split(split))
}

/// Where `line` crosses the axis-aligned edge from `c0` to `c1`.
fn crossing(c0: &Point, c1: &Point, line: &Line) -> Result<Point, CertificationError> {
    let a = int(line.coeff(XYEta::X).into());
    let b = int(line.coeff(XYEta::Y).into());
    let c = int(line.coeff(XYEta::Eta).into());
    let singular = || CertificationError::Singular(line.to_string(), format!("{c0}-{c1}"));
    if c0.x == c1.x {
        if b.is_zero() {
            return Err(singular());
        }
        let y = -(&a * &c0.x + c) / b;
        Ok(Point::new(c0.x.clone(), y))
    } else if c0.y == c1.y {
        if a.is_zero() {
            return Err(singular());
        }
        let x = -(&b * &c0.y + c) / a;
        Ok(Point::new(x, c0.y.clone()))
    } else {
        Err(singular())
    }
}

/// Center and per-axis half-widths of the box around `primary` and
/// `secondary`; `None` when `primary` is empty.
pub(crate) fn neighborhood(primary: &[Point], secondary: &[Point]) -> Option<(Point, Rational, Rational)> {
    if primary.is_empty() {
        return None;
    }
    let (min, max) = bounding_box(primary.iter().chain(secondary))?;
    let two = int(2);
    let rx = (&max.x - &min.x) / &two;
    let ry = (&max.y - &min.y) / two;
    let center = Point::new(&min.x + &rx, &min.y + &ry);
    Some((center, rx, ry))
}
