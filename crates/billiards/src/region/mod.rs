//! Region clipper: bounding polygons and segments from linear inequalities.
//!
//! Purpose
//! - A stable region is the open seed triangle `x, y, z > 0` intersected with
//!   half-planes `a*x + b*y + c*eta > 0`; an unstable region is the part of
//!   one constraint line that survives the same half-planes.
//!
//! Why this design
//! - Everything is exact: signs are decided in rationals and vertices come
//!   from Cramer's rule on 64-bit determinants. Each vertex remembers the line
//!   of its outgoing edge so the next cut knows which lines to intersect.
//! - A region that collapses returns `None` immediately; parallel lines where
//!   a crossing is required are a certification error.
//!
//! Code cross-refs: `geometry::{ConvexPolygon, Segment}`, `cover::info`.

mod line;
mod polygon;
mod segment;

pub use line::{eval, intersect, sign_at, Line};
pub use polygon::{clip_polygon, RegionPolygon, Vertex};
pub use segment::{clip_segment, RegionSegment};
