//! Curated internal API (UNSTABLE).
//!
//! A convenience surface for the CLI and experiments. Breaking changes are
//! allowed.

// Equations
pub use crate::algebra::approx::{approx_margin, approx_value};
pub use crate::algebra::{Equation, EquationSet, FlattenedEquation, GradientBound, LinXYEta, TrigKind};
// Factor division
pub use crate::division::{divide_once, remove_line_factor, strip_line_factors};
// Exact geometry
pub use crate::geometry::{intersects, polygon_in_rect, rect_in_polygon, ConvexPolygon, Open, Point, Rectangle, Segment};
// Certified evaluation
pub use crate::evaluator::Evaluator;
// Regions and covers
pub use crate::cover::{
    check_square, verify_cover, CoverInfos, CoverReport, Diagnostic, FailureKind, ProofTree, RegionInput,
    SquareCheck, StableInfo, TripleInfo, UnstableInfo,
};
pub use crate::region::{clip_polygon, clip_segment, Line, RegionPolygon, RegionSegment};
