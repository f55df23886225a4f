//! Exact planar geometry over rationals.
//!
//! Purpose
//! - Points, intervals, rectangles, segments and strictly convex polygons with
//!   exact `BigRational` coordinates, in open and closed variants.
//! - Membership, subset and separating-axis disjointness tests used to decide
//!   whether a square lies inside a region or misses the target polygon.
//!
//! Why this design
//! - Topology is a zero-sized type parameter (`Open`/`Closed`), so the
//!   boundary rule is fixed at compile time and never mixed up at runtime.
//! - Constructors validate and normalize; a shape that exists is well formed.
//!
//! Code cross-refs: `region` (clipping produces these shapes), `cover`.

mod interval;
mod point;
mod polygon;
mod project;
mod rectangle;
mod segment;

pub use interval::{Closed, Interval, Open, Topology};
pub use point::{int, ratio, Point, Rational};
pub use polygon::ConvexPolygon;
pub use project::{disjoint, intersects, polygon_in_rect, rect_in_polygon, Convex, Projection};
pub use rectangle::{bounding_box, Rectangle};
pub use segment::Segment;
