//! Clipping a constraint line inside the seed triangle.
//!
//! An unstable region is an open piece of one constraint line. It starts as
//! the chord the line cuts through the open seed triangle and shrinks with
//! every further half-plane.

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use super::line::{intersect, sign_at, Line};
use crate::algebra::XYZ;
use crate::error::{CertificationError, GeometryError};
use crate::geometry::{Open, Point, Segment};

/// Open segment on a constraint line, each endpoint tagged with the line that
/// cuts it off.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegionSegment {
    pub point0: Point,
    pub line0: Line,
    pub point1: Point,
    pub line1: Line,
}

impl RegionSegment {
    #[inline]
    fn new(point0: Point, line0: Line, point1: Point, line1: Line) -> Self {
        Self {
            point0,
            line0,
            point1,
            line1,
        }
    }

    /// The chord of `constraint = 0` through the open seed triangle.
    ///
    /// Decided by the signs of `constraint` at the corners `(0, 0)`, `(2, 0)`
    /// and `(0, 2)`. Chords touching only the boundary are empty.
    pub fn seed(constraint: &Line) -> Result<Option<Self>, CertificationError> {
        use Ordering::{Equal as Zero, Greater as Pos, Less as Neg};
        let (x, y, z) = (XYZ::X.to_eta(), XYZ::Y.to_eta(), XYZ::Z.to_eta());
        let corner = |px, py| Point::from_ints(px, py);
        let s = (
            sign_at(constraint, &corner(0, 0)),
            sign_at(constraint, &corner(2, 0)),
            sign_at(constraint, &corner(0, 2)),
        );
        let cut = |edge: &Line| intersect(constraint, edge);
        let seg = match s {
            (Neg, Neg, Pos) | (Pos, Pos, Neg) => Self::new(cut(&x)?, x, cut(&z)?, z),
            (Neg, Pos, Neg) | (Pos, Neg, Pos) => Self::new(cut(&y)?, y, cut(&z)?, z),
            (Neg, Pos, Pos) | (Pos, Neg, Neg) => Self::new(cut(&x)?, x, cut(&y)?, y),
            (Neg, Zero, Pos) => Self::new(cut(&x)?, x, corner(2, 0), z),
            (Pos, Zero, Neg) => Self::new(cut(&x)?, x, corner(2, 0), y),
            (Neg, Pos, Zero) | (Pos, Neg, Zero) => Self::new(corner(0, 2), x, cut(&y)?, y),
            (Zero, Neg, Pos) | (Zero, Pos, Neg) => Self::new(corner(0, 0), y, cut(&z)?, z),
            (Zero, Zero, Zero) => {
                return Err(CertificationError::Singular(
                    constraint.to_string(),
                    constraint.to_string(),
                ))
            }
            _ => return Ok(None),
        };
        Ok(Some(seg))
    }

    /// Intersect with the half-plane `line > 0`.
    pub fn refine(&self, line: &Line, constraint: &Line) -> Result<Option<Self>, CertificationError> {
        use Ordering::{Equal as Zero, Greater as Pos, Less as Neg};
        let signs = (sign_at(line, &self.point0), sign_at(line, &self.point1));
        let seg = match signs {
            (Neg, Neg) | (Neg, Zero) | (Zero, Neg) | (Zero, Zero) => return Ok(None),
            (Neg, Pos) => Self::new(
                intersect(constraint, line)?,
                *line,
                self.point1.clone(),
                self.line1,
            ),
            (Pos, Neg) => Self::new(
                self.point0.clone(),
                self.line0,
                intersect(constraint, line)?,
                *line,
            ),
            (Zero, Pos) | (Pos, Zero) | (Pos, Pos) => self.clone(),
        };
        Ok(Some(seg))
    }

    /// Validated open segment between the endpoints.
    pub fn to_segment(&self) -> Result<Segment<Open>, GeometryError> {
        Segment::new(self.point0.clone(), self.point1.clone())
    }
}

impl fmt::Display for RegionSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.point0, self.point1)
    }
}

/// The chord of `constraint = 0` clipped by every `line > 0`, or `None` as
/// soon as it collapses.
pub fn clip_segment(constraint: &Line, lines: &[Line]) -> Result<Option<RegionSegment>, CertificationError> {
    let Some(mut seg) = RegionSegment::seed(constraint)? else {
        debug!(constraint = %constraint, "constraint misses the seed triangle");
        return Ok(None);
    };
    for (i, line) in lines.iter().enumerate() {
        match seg.refine(line, constraint)? {
            Some(next) => seg = next,
            None => {
                debug!(line = %line, index = i, "segment collapsed");
                return Ok(None);
            }
        }
    }
    Ok(Some(seg))
}
