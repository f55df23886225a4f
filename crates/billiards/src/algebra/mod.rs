//! Equation algebra: integer linear combinations and trig sums.
//!
//! Purpose
//! - Represent constraint lines (`ax + by + c*eta`) and trig arguments
//!   (`bx + cy`) as dense integer combinations over small closed alphabets.
//! - Represent sums `sum_k c_k * sin(arg_k)` (or all-cosine) in a canonical
//!   sparse form with no zero coefficients, so equations compare structurally
//!   and deduplicate in ordered sets.
//! - Provide the rotation, parity and product identities used to build and
//!   canonicalize inequalities.
//!
//! Why this design
//! - Angles are integer multiples of `eta = pi/2` plus integer combinations of
//!   the free angles, so all bookkeeping is exact integer arithmetic; overflow
//!   traps (see `arith::abs` and the release profile).
//! - Sin/cos polymorphism is a two-variant `TrigKind` on one `Equation` type.
//!
//! Code cross-refs: `division` (factor removal), `evaluator` (certified
//! positivity), `region` (constraint lines).

pub mod approx;
pub mod arith;
mod equation;
mod flat;
pub mod identities;
mod lincom;
mod parse;
mod set;
mod symbols;

pub use equation::{Equation, GradientBound, Trig, TrigKind, TrigXY};
pub use flat::{FlatTerm, FlattenedEquation};
pub use identities::{canonical_eta, canonical_pi, canonical_xy, product};
pub use lincom::{ArgXY, LinCom, LinST, LinXYEta, LinXYPi};
pub use set::EquationSet;
pub use symbols::{Symbol, ST, XY, XYEta, XYPi, XYZ};

#[cfg(test)]
mod tests;
