//! Cover verification: walk a proof tree and certify every leaf.
//!
//! Purpose
//! - Decide whether a square containing a target polygon is covered by the
//!   stable and unstable regions named in a proof tree. `Empty` leaves avoid
//!   the polygon, `Single` leaves sit inside one stable region where its
//!   equations are positive, and `Triple` leaves straddle a constraint line
//!   between two stable regions.
//!
//! Why this design
//! - Region infos are built once up front (clipping and factor division are
//!   exact and comparatively slow) and then shared read-only across tasks.
//! - Leaves report failures as [`Diagnostic`]s; only untrustworthy arithmetic
//!   or inconsistent inputs abort the run.
//!
//! Code cross-refs: `region::{clip_polygon, clip_segment}`,
//! `division::remove_line_factor`, `evaluator::Evaluator`.

mod info;
mod leaf;
mod report;
mod tree;
mod triple;
mod verify;

pub use info::{Obligation, Obligations, RegionInput, StableInfo, TripleInfo, UnstableInfo};
pub use report::{CoverReport, Diagnostic, FailureKind, SquareCheck};
pub use tree::ProofTree;
pub use verify::{check_square, verify_cover, CoverInfos};

#[cfg(test)]
mod tests;
