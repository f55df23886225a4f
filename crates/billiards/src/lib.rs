//! Certified cover verification for trig-inequality regions.
//!
//! Given a target polygon, a square containing it and a proof tree, decide
//! with exact rational geometry and directed-rounding trig bounds whether the
//! regions named by the tree cover the square.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; the
//!   curated surface lives in [`api`].
//!
//! Layers, bottom-up: `algebra` (equations), `division` (factor removal),
//! `geometry` (exact shapes), `region` (clipping), `evaluator` (certified
//! positivity), `cover` (proof trees).

pub mod algebra;
pub mod api;
pub mod cfg;
pub mod cover;
pub mod division;
pub mod error;
pub mod evaluator;
pub mod geometry;
pub mod region;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{digits_to_bits, CoverCfg};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algebra::{Equation, EquationSet, LinXYEta, TrigKind};
    pub use crate::cfg::CoverCfg;
    pub use crate::cover::{
        check_square, verify_cover, CoverInfos, CoverReport, ProofTree, RegionInput, StableInfo,
        TripleInfo,
    };
    pub use crate::geometry::{ratio, ConvexPolygon, Open, Point, Rational, Rectangle};
}
