//! Factor division: cancel a known vanishing factor out of trig sums.
//!
//! Purpose
//! - Along the shared boundary line of a triple, equations of both adjacent
//!   stable regions vanish identically. Dividing out the line's trig factor
//!   leaves equations that can be proven strictly positive up to the line.
//! - Strip repeated factors of the triangle angles (`sin x`, `sin y`,
//!   `sin z`), which never vanish inside the triangle, to shorten equations.
//!
//! Why this design
//! - Euler's formula turns a trig sum over integer arguments into a Laurent
//!   polynomial in `s = e^{ix}`, `t = e^{iy}`; shifting exponents gives a
//!   genuine polynomial with integer coefficients. Exact divisibility over a
//!   UFD does not depend on the monomial order, so plain long division decides
//!   it; "does not divide" is an ordinary outcome (`None`), while a quotient
//!   that fails to decode is a logic error.
//!
//! Code cross-refs: `algebra::{Equation, EquationSet}`, `cover::TripleInfo`.

mod encode;
mod factor;
mod poly;
mod strip;

pub use encode::{decode, decode_cos, decode_sin, encode, Encoded};
pub use factor::{divide_once, line_factor, quotient_kind, remove_factor, remove_line_factor};
pub use poly::{divide, divide_square_minus_one, monomial_divides, Polynomial};
pub use strip::strip_line_factors;

#[cfg(test)]
mod tests;
