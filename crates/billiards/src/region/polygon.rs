//! Clipping the open seed triangle by half-planes.

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use super::line::{intersect, sign_at, Line};
use crate::algebra::XYZ;
use crate::error::{CertificationError, GeometryError};
use crate::geometry::{ConvexPolygon, Open, Point};

/// A vertex together with the line carrying its outgoing edge.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub point: Point,
    pub side: Line,
}

impl Vertex {
    #[inline]
    fn new(point: Point, side: Line) -> Self {
        Self { point, side }
    }
}

/// Counter-clockwise boundary of an open convex region cut out by lines.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegionPolygon {
    vertices: Vec<Vertex>,
}

impl RegionPolygon {
    /// The open triangle `x > 0`, `y > 0`, `z > 0` with vertices `(0, 0)`,
    /// `(2, 0)` and `(0, 2)`.
    pub fn seed() -> Self {
        Self {
            vertices: vec![
                Vertex::new(Point::from_ints(0, 0), XYZ::Y.to_eta()),
                Vertex::new(Point::from_ints(2, 0), XYZ::Z.to_eta()),
                Vertex::new(Point::from_ints(0, 2), XYZ::X.to_eta()),
            ],
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.vertices.iter().map(|v| &v.point)
    }

    /// Intersect with the half-plane `line > 0`; `None` once the region has
    /// fewer than three vertices.
    pub fn refine(&self, line: &Line) -> Result<Option<Self>, CertificationError> {
        use Ordering::{Equal as Zero, Greater as Pos, Less as Neg};
        let signs: Vec<Ordering> = self.points().map(|p| sign_at(line, p)).collect();
        let n = self.vertices.len();
        let mut out = Vec::with_capacity(n + 1);
        for (i, v) in self.vertices.iter().enumerate() {
            match (signs[i], signs[(i + 1) % n]) {
                (Neg, Neg) | (Neg, Zero) => {}
                (Neg, Pos) => out.push(Vertex::new(intersect(&v.side, line)?, v.side)),
                (Zero, Neg) => out.push(Vertex::new(v.point.clone(), *line)),
                (Zero, Zero) | (Zero, Pos) | (Pos, Zero) | (Pos, Pos) => out.push(v.clone()),
                (Pos, Neg) => {
                    out.push(v.clone());
                    out.push(Vertex::new(intersect(&v.side, line)?, *line));
                }
            }
        }
        // Two vertices bound no open area.
        if out.len() < 3 {
            return Ok(None);
        }
        Ok(Some(Self { vertices: out }))
    }

    /// Validated open polygon with the same vertices.
    pub fn to_polygon(&self) -> Result<ConvexPolygon<Open>, GeometryError> {
        ConvexPolygon::new(self.points().cloned().collect())
    }
}

impl fmt::Display for RegionPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", v.point)?;
        }
        f.write_str("]")
    }
}

/// The seed triangle clipped by every `line > 0`, in order, or `None` as soon
/// as the region collapses.
pub fn clip_polygon(lines: &[Line]) -> Result<Option<RegionPolygon>, CertificationError> {
    let mut poly = RegionPolygon::seed();
    for (i, line) in lines.iter().enumerate() {
        match poly.refine(line)? {
            Some(next) => poly = next,
            None => {
                debug!(line = %line, index = i, "region collapsed");
                return Ok(None);
            }
        }
    }
    Ok(Some(poly))
}
