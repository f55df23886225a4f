//! Line segments with distinct endpoints.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use super::interval::Topology;
use super::point::Point;
use crate::error::GeometryError;

/// Segment from `start` to `end`, `start != end`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment<T: Topology> {
    start: Point,
    end: Point,
    topology: PhantomData<T>,
}

impl<T: Topology> Segment<T> {
    pub fn new(start: Point, end: Point) -> Result<Self, GeometryError> {
        if start == end {
            return Err(GeometryError::DegenerateSegment(start.to_string()));
        }
        Ok(Self {
            start,
            end,
            topology: PhantomData,
        })
    }

    #[inline]
    pub fn start(&self) -> &Point {
        &self.start
    }
    #[inline]
    pub fn end(&self) -> &Point {
        &self.end
    }
    #[inline]
    pub fn direction(&self) -> Point {
        &self.end - &self.start
    }
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// Which side of the carrier line `p` lies on; `Greater` is the left.
    #[inline]
    pub fn side(&self, p: &Point) -> Ordering {
        Point::orientation(&self.start, &self.end, p)
    }

    /// `p` lies on the carrier line and within the segment's extent, with the
    /// endpoints counted according to the topology.
    pub fn contains(&self, p: &Point) -> bool {
        self.side(p) == Ordering::Equal && self.collinear_contains(p)
    }

    /// Extent test for a point already known to be collinear.
    #[inline]
    pub(crate) fn collinear_contains(&self, p: &Point) -> bool {
        collinear_between(&self.start, &self.end, p, T::OPEN)
    }
}

impl<T: Topology> fmt::Display for Segment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Extent test of a collinear `p` against the segment `a b`, measured along y
/// for vertical segments and along x otherwise.
pub(crate) fn collinear_between(a: &Point, b: &Point, p: &Point, open: bool) -> bool {
    let (a, b, v) = if a.x == b.x {
        (&a.y, &b.y, &p.y)
    } else {
        (&a.x, &b.x, &p.x)
    };
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if open {
        lo < v && v < hi
    } else {
        lo <= v && v <= hi
    }
}
