//! Strictly convex polygons with exact vertices.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use super::interval::Topology;
use super::point::Point;
use super::segment::collinear_between;
use crate::error::GeometryError;

/// Simple, strictly convex polygon.
///
/// Vertices are stored counter-clockwise starting from the lexicographically
/// smallest one, so equal polygons compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConvexPolygon<T: Topology> {
    vertices: Vec<Point>,
    topology: PhantomData<T>,
}

impl<T: Topology> ConvexPolygon<T> {
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        validate(&vertices)?;
        let mut poly = Self {
            vertices,
            topology: PhantomData,
        };
        poly.normalize();
        Ok(poly)
    }

    fn normalize(&mut self) {
        let v = &self.vertices;
        if Point::orientation(&v[0], &v[1], &v[2]) == Ordering::Less {
            self.vertices.reverse();
        }
        let (min_idx, _) = self
            .vertices
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.cmp(b.1))
            .unwrap_or((0, &self.vertices[0]));
        self.vertices.rotate_left(min_idx);
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    /// Vertex `i` modulo the vertex count.
    #[inline]
    pub fn vertex(&self, i: usize) -> &Point {
        &self.vertices[i % self.vertices.len()]
    }

    /// Counter-clockwise edges `(v_i, v_{i+1})`.
    pub fn edges(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }

    /// Point membership with the boundary counted per the topology.
    pub fn contains(&self, p: &Point) -> bool {
        if T::OPEN {
            self.edges()
                .all(|(a, b)| Point::orientation(a, b, p) == Ordering::Greater)
        } else {
            self.contains_closure(p)
        }
    }

    /// Membership in the closure, whatever the topology.
    pub fn contains_closure(&self, p: &Point) -> bool {
        for (a, b) in self.edges() {
            match Point::orientation(a, b, p) {
                Ordering::Less => return false,
                Ordering::Equal => return collinear_between(a, b, p, false),
                Ordering::Greater => {}
            }
        }
        true
    }
}

/// Closed segments `[a0, a1]` and `[b0, b1]` share a point.
fn segments_touch(a0: &Point, a1: &Point, b0: &Point, b1: &Point) -> bool {
    let o0 = Point::orientation(a0, a1, b0);
    let o1 = Point::orientation(a0, a1, b1);
    let o2 = Point::orientation(b0, b1, a0);
    let o3 = Point::orientation(b0, b1, a1);
    let proper = [o0, o1, o2, o3].iter().all(|o| *o != Ordering::Equal);
    if proper && o0 != o1 && o2 != o3 {
        return true;
    }
    (o0 == Ordering::Equal && collinear_between(a0, a1, b0, false))
        || (o1 == Ordering::Equal && collinear_between(a0, a1, b1, false))
        || (o2 == Ordering::Equal && collinear_between(b0, b1, a0, false))
        || (o3 == Ordering::Equal && collinear_between(b0, b1, a1, false))
}

fn validate(v: &[Point]) -> Result<(), GeometryError> {
    let n = v.len();
    if n < 3 {
        return Err(GeometryError::TooFewVertices(n));
    }
    // Non-adjacent edges must be disjoint; this also rejects repeated vertices.
    for i in 0..n - 2 {
        for j in i + 2..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_touch(&v[i], &v[i + 1], &v[j], &v[(j + 1) % n]) {
                return Err(GeometryError::SelfIntersecting(i, j));
            }
        }
    }
    // Every turn must go the same strict way.
    let first = Point::orientation(&v[0], &v[1], &v[2]);
    if first == Ordering::Equal {
        return Err(GeometryError::Collinear(0));
    }
    for i in 1..n {
        match Point::orientation(&v[i], &v[(i + 1) % n], &v[(i + 2) % n]) {
            Ordering::Equal => return Err(GeometryError::Collinear(i)),
            sign if sign != first => return Err(GeometryError::NotConvex(i)),
            _ => {}
        }
    }
    Ok(())
}

impl<T: Topology> fmt::Display for ConvexPolygon<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}
