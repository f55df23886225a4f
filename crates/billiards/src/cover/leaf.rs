//! The three leaf checks of a proof tree.
//!
//! Each check returns `Ok(None)` when the square is certified and
//! `Ok(Some(diagnostic))` naming the first failed check otherwise. Errors are
//! reserved for untrustworthy evaluations.

use nalgebra::Vector2;
use num_traits::ToPrimitive;

use super::info::{Obligation, Obligations, StableInfo, TripleInfo};
use super::report::{Diagnostic, FailureKind};
use super::triple::{classify, neighborhood, Classified};
use crate::algebra::approx::approx_margin;
use crate::error::CertificationError;
use crate::evaluator::Evaluator;
use crate::geometry::{int, intersects, rect_in_polygon, ConvexPolygon, Open, Point, Rational, Rectangle};

type Checked = Result<Option<Diagnostic>, CertificationError>;

/// The square must stay clear of the target polygon.
pub(crate) fn check_empty(square: &Rectangle, polygon: &ConvexPolygon<Open>) -> Option<Diagnostic> {
    intersects(square, polygon).then(|| {
        Diagnostic::new(
            FailureKind::EmptyIntersects,
            square,
            "Failure: empty square intersects polygon",
        )
    })
}

/// Corners strictly inside the stable polygon, then every equation positive
/// on the disk of half the side around the center.
pub(crate) fn check_single(eval: &mut Evaluator, square: &Rectangle, info: &StableInfo) -> Checked {
    if !rect_in_polygon(square, &info.polygon) {
        return Ok(Some(Diagnostic::new(
            FailureKind::NotSubset,
            square,
            "Failure: square is not a subset of polygon",
        )));
    }
    let center = square.center();
    let radius = square.width() / int(2);
    for (obligations, what) in groups(&info.obligations) {
        for ob in obligations {
            if !eval.is_positive(&ob.eq, ob.bound.total(), &center, &radius)? {
                return Ok(Some(
                    not_positive(square, ob, &center, &radius, &radius)
                        .with_line(format!("radius = {radius}"))
                        .with_line(format!("not all {what} positive")),
                ));
            }
        }
    }
    Ok(None)
}

/// Split the square across the line, place every piece in its region, then
/// certify each region's equations on the box around its piece.
pub(crate) fn check_triple(eval: &mut Evaluator, square: &Rectangle, info: &TripleInfo, guard: i64) -> Checked {
    let split = match classify(square, &info.line, guard)? {
        Classified::Split(split) => split,
        Classified::TooFar { corner, value } => {
            return Ok(Some(
                Diagnostic::new(FailureKind::CornerTooFar, square, "Failure: corner too far from line")
                    .with_line(format!("line = {}", info.line))
                    .with_line(format!("corner = {corner}, value = {value}")),
            ))
        }
    };

    let outside = |what: &str, p: &Point| {
        Diagnostic::new(FailureKind::OutsideRegion, square, format!("Failure: {what} {p} outside region"))
            .with_line(format!("line = {}", info.line))
    };
    for (points, side, name) in [
        (&split.negatives, &info.negative, "negative"),
        (&split.positives, &info.positive, "positive"),
    ] {
        if points.is_empty() {
            continue;
        }
        if let Some(p) = points.iter().find(|p| !side.polygon.contains(p)) {
            return Ok(Some(outside(&format!("{name} corner"), p)));
        }
        if let Some(p) = split.zeros.iter().find(|p| !side.polygon.contains_closure(p)) {
            return Ok(Some(outside(&format!("zero on closed {name} side"), p)));
        }
    }
    if let Some(p) = split.zeros.iter().find(|p| !info.unstable.segment.contains(p)) {
        return Ok(Some(outside("zero on unstable segment", p)));
    }

    let none: &[_] = &[];
    for (primary, secondary, obligations, name) in [
        (&split.negatives[..], &split.zeros[..], &info.negative.obligations, "negative"),
        (&split.zeros[..], none, &info.unstable.obligations, "unstable"),
        (&split.positives[..], &split.zeros[..], &info.positive.obligations, "positive"),
    ] {
        let Some((center, rx, ry)) = neighborhood(primary, secondary) else {
            continue;
        };
        if let Some(diag) = positive_on_box(eval, square, obligations, &center, &rx, &ry)? {
            return Ok(Some(diag.with_line(format!("region = {name}"))));
        }
    }
    Ok(None)
}

fn positive_on_box(
    eval: &mut Evaluator,
    square: &Rectangle,
    obligations: &Obligations,
    center: &Point,
    rx: &Rational,
    ry: &Rational,
) -> Checked {
    for (group, what) in groups(obligations) {
        for ob in group {
            if !eval.is_positive_xy(&ob.eq, ob.bound.x, ob.bound.y, center, rx, ry)? {
                return Ok(Some(
                    not_positive(square, ob, center, rx, ry)
                        .with_line(format!("radii = ({rx}, {ry})"))
                        .with_line(format!("not all {what} positive")),
                ));
            }
        }
    }
    Ok(None)
}

fn groups(obligations: &Obligations) -> [(&[Obligation], &'static str); 2] {
    [(&obligations.sines, "sines"), (&obligations.cosines, "cosines")]
}

fn not_positive(square: &Rectangle, ob: &Obligation, center: &Point, rx: &Rational, ry: &Rational) -> Diagnostic {
    let f = |r: &Rational| r.to_f64().unwrap_or(f64::NAN);
    let margin = approx_margin(
        &ob.eq,
        ob.bound,
        Vector2::new(f(&center.x), f(&center.y)),
        Vector2::new(f(rx), f(ry)),
    );
    Diagnostic::new(FailureKind::NotPositive, square, "Failure: not positive")
        .with_line(format!("f(x, y) = {}", ob.eq))
        .with_line(format!("bounds = ({}, {})", ob.bound.x, ob.bound.y))
        .with_line(format!("center = {center}"))
        .with_line(format!("approx margin = {margin:.6e}"))
}
