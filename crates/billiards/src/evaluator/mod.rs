//! Certified evaluator: rigorous lower bounds on trig sums.
//!
//! Purpose
//! - Prove `f(x, y) > 0` for every point of a box around a rational center,
//!   where `f` is a flattened sine or cosine sum in units of `eta = pi/2`.
//!
//! Why this design
//! - Arguments are reduced exactly in rationals: the integer part picks the
//!   quadrant and the fraction in `[0, 1)` the angle inside it. Only the final
//!   `sin`/`cos` on `[0, pi/2]` and the pi/2 constant are inexact.
//! - Every inexact step is a correctly rounded MPFR operation (through
//!   `rug::Float`) rounded in the direction that keeps the sum a lower bound.
//!   The deviation budget `pi/2 * (bx * rx + by * ry)` is rounded up, so
//!   `sum > budget` is a proof.
//! - MPFR exception flags (nan, overflow, underflow, erange) are cleared on
//!   entry and read on exit; a raised flag is an error, never a "not positive".
//!
//! Code cross-refs: `algebra::{FlattenedEquation, GradientBound}`, `cover`.

mod eval;
mod flags;

pub use eval::Evaluator;
pub use flags::Flags;
