//! Projections, containment and the separating-axis test.
//!
//! Two convex shapes are disjoint iff some axis separates their projections.
//! For polygons, segments and rectangles it suffices to try the edge normals
//! of both operands. Open shapes project to open intervals, so touching
//! boundaries do not count as intersecting unless both shapes are closed.

use super::interval::Topology;
use super::point::{Point, Rational};
use super::polygon::ConvexPolygon;
use super::rectangle::Rectangle;
use super::segment::Segment;

/// Extent of a shape along an axis: `lo == hi` means a single point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projection {
    pub lo: Rational,
    pub hi: Rational,
    pub open: bool,
}

impl Projection {
    fn of_values<I: IntoIterator<Item = Rational>>(first: Rational, rest: I, open: bool) -> Self {
        let (mut lo, mut hi) = (first.clone(), first);
        for v in rest {
            if v < lo {
                lo = v;
            } else if v > hi {
                hi = v;
            }
        }
        Self { lo, hi, open }
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        self.lo == self.hi
    }

    fn contains(&self, v: &Rational) -> bool {
        if self.open {
            &self.lo < v && v < &self.hi
        } else {
            &self.lo <= v && v <= &self.hi
        }
    }

    /// No value lies in both projections.
    pub fn disjoint(&self, other: &Projection) -> bool {
        match (self.is_point(), other.is_point()) {
            (false, false) => {
                if self.open || other.open {
                    other.hi <= self.lo || self.hi <= other.lo
                } else {
                    other.hi < self.lo || self.hi < other.lo
                }
            }
            (false, true) => !self.contains(&other.lo),
            (true, false) => !other.contains(&self.lo),
            (true, true) => self.lo != other.lo,
        }
    }
}

/// A convex shape that can take part in the separating-axis test.
pub trait Convex {
    /// Projection onto `axis` (dot products with `axis`).
    fn project(&self, axis: &Point) -> Projection;
    /// Candidate separating axes contributed by this shape.
    fn axes(&self) -> Vec<Point>;
}

impl Convex for Rectangle {
    fn project(&self, axis: &Point) -> Projection {
        let [c0, rest @ ..] = self.corners();
        Projection::of_values(c0.dot(axis), rest.iter().map(|c| c.dot(axis)), false)
    }
    fn axes(&self) -> Vec<Point> {
        vec![Point::from_ints(1, 0), Point::from_ints(0, 1)]
    }
}

impl<T: Topology> Convex for Segment<T> {
    fn project(&self, axis: &Point) -> Projection {
        let a = self.start().dot(axis);
        let b = self.end().dot(axis);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Projection { lo, hi, open: T::OPEN }
    }
    fn axes(&self) -> Vec<Point> {
        vec![self.direction().perp()]
    }
}

impl<T: Topology> Convex for ConvexPolygon<T> {
    fn project(&self, axis: &Point) -> Projection {
        let rest = self.vertices().iter().skip(1).map(|v| v.dot(axis));
        Projection::of_values(self.vertex(0).dot(axis), rest, T::OPEN)
    }
    fn axes(&self) -> Vec<Point> {
        self.edges().map(|(a, b)| (b - a).perp()).collect()
    }
}

fn separated_by_axes_of<A: Convex + ?Sized, B: Convex + ?Sized>(a: &A, b: &B) -> bool {
    a.axes()
        .iter()
        .any(|axis| a.project(axis).disjoint(&b.project(axis)))
}

/// Separating-axis disjointness of two convex shapes.
pub fn disjoint<A: Convex + ?Sized, B: Convex + ?Sized>(a: &A, b: &B) -> bool {
    separated_by_axes_of(a, b) || separated_by_axes_of(b, a)
}

#[inline]
pub fn intersects<A: Convex + ?Sized, B: Convex + ?Sized>(a: &A, b: &B) -> bool {
    !disjoint(a, b)
}

/// Every corner of `rect` lies in `poly` (strictly, for an open polygon).
pub fn rect_in_polygon<T: Topology>(rect: &Rectangle, poly: &ConvexPolygon<T>) -> bool {
    rect.corners().iter().all(|c| poly.contains(c))
}

/// Every vertex of `poly` lies in the closed `rect`.
pub fn polygon_in_rect<T: Topology>(poly: &ConvexPolygon<T>, rect: &Rectangle) -> bool {
    poly.vertices().iter().all(|v| rect.contains(v))
}
