//! Text forms of linear combinations and equations.
//!
//! Grammar (no whitespace):
//! - lincom   := "0" | lterm+
//! - lterm    := sign? digits? symbol
//! - equation := "0" | eterm+
//! - eterm    := sign? digits? ("sin" | "cos") "(" lincom ")"
//!
//! Equation arguments range over `x`, `y` and either `eta` or `pi`. A term
//! with a nonzero constant is folded by the rotation identities into its
//! canonical `x`/`y` form, which may change its kind: `sin(x+eta)` reads as
//! `cos(x)`. Terms without a constant are kept as written.
//!
//! Printing never emits a constant, so `Display` output parses back to an
//! equal value. The one exception is the zero equation, which prints as
//! `"0"` for both kinds; see [`Equation::parse`].

use std::str::FromStr;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, char, digit1};
use nom::combinator::{map, map_res, opt, value};
use nom::multi::many1;
use nom::sequence::{delimited, tuple};
use nom::IResult;

use super::equation::{Equation, Trig, TrigKind, TrigXY};
use super::identities::{canonical_eta, canonical_pi};
use super::lincom::{ArgXY, LinCom, LinXYEta};
use super::symbols::{Symbol, XYEta, XYPi};
use crate::error::ParseError;

fn sign(input: &str) -> IResult<&str, i32> {
    map(opt(alt((value(1, char('+')), value(-1, char('-'))))), |s| {
        s.unwrap_or(1)
    })(input)
}

fn magnitude(input: &str) -> IResult<&str, i32> {
    map(opt(map_res(digit1, str::parse::<i32>)), |m| m.unwrap_or(1))(input)
}

fn symbol<S: Symbol>(input: &str) -> IResult<&str, S> {
    map_res(alpha1, |name: &str| S::from_name(name).ok_or(()))(input)
}

fn lincom_term<S: Symbol>(input: &str) -> IResult<&str, (i32, S)> {
    map(tuple((sign, magnitude, symbol::<S>)), |(s, m, sym)| {
        (s * m, sym)
    })(input)
}

fn lincom<S: Symbol, const N: usize>(input: &str) -> IResult<&str, LinCom<S, N>> {
    alt((
        value(LinCom::zero(), char('0')),
        map(many1(lincom_term::<S>), |terms| {
            let mut out = LinCom::zero();
            for (c, sym) in terms {
                out.add_term(sym, c);
            }
            out
        }),
    ))(input)
}

fn trig_kind(input: &str) -> IResult<&str, TrigKind> {
    alt((
        value(TrigKind::Sin, tag("sin")),
        value(TrigKind::Cos, tag("cos")),
    ))(input)
}

/// `kind(arg)` with an eta constant, reduced to `sign * term`.
fn fold_eta(kind: TrigKind, arg: LinXYEta) -> (i32, TrigXY) {
    if arg.coeff(XYEta::Eta) == 0 {
        (1, Trig { kind, arg: arg.arg() })
    } else {
        canonical_eta(kind, arg)
    }
}

fn equation_term(input: &str) -> IResult<&str, (i32, TrigKind, ArgXY)> {
    let (input, (s, m, kind)) = tuple((sign, magnitude, trig_kind))(input)?;
    let (input, (unit, term)) = alt((
        map(delimited(char('('), lincom::<XYEta, 3>, char(')')), |arg| {
            fold_eta(kind, arg)
        }),
        map(delimited(char('('), lincom::<XYPi, 3>, char(')')), |arg| {
            canonical_pi(kind, arg)
        }),
    ))(input)?;
    Ok((input, (s * m * unit, term.kind, term.arg)))
}

/// Run `parser` over the whole of `input`.
fn complete<'a, T>(
    input: &'a str,
    parser: impl FnOnce(&'a str) -> IResult<&'a str, T>,
) -> Result<T, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    match parser(input) {
        Ok(("", out)) => Ok(out),
        Ok((rest, _)) => Err(unexpected(input, rest)),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(unexpected(input, e.input)),
        Err(nom::Err::Incomplete(_)) => Err(ParseError::Empty),
    }
}

fn unexpected(input: &str, rest: &str) -> ParseError {
    ParseError::Unexpected {
        position: input.len() - rest.len(),
        rest: rest.to_string(),
    }
}

impl<S: Symbol, const N: usize> FromStr for LinCom<S, N> {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        complete(s, lincom::<S, N>)
    }
}

impl Equation {
    /// Parse an equation of a known kind; this is the round trip for
    /// `Display`, since `"0"` then keeps the kind it was printed from.
    pub fn parse(kind: TrigKind, s: &str) -> Result<Self, ParseError> {
        let eq: Equation = if s == "0" {
            Equation::zero(kind)
        } else {
            s.parse()?
        };
        if eq.kind() != kind {
            return Err(ParseError::MixedKinds);
        }
        Ok(eq)
    }
}

/// Infers the kind from the terms whose folded coefficient is nonzero.
///
/// `"0"` carries no kind and reads as the cosine zero, so a printed sine
/// zero only round-trips through [`Equation::parse`].
impl FromStr for Equation {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "0" {
            return Ok(Equation::zero(TrigKind::Cos));
        }
        let terms = complete(s, many1(equation_term))?;
        let kind = terms
            .iter()
            .find(|(c, _, _)| *c != 0)
            .map_or(terms[0].1, |(_, k, _)| *k);
        let mut eq = Equation::zero(kind);
        for (c, k, arg) in terms {
            if c == 0 {
                continue;
            }
            if k != kind {
                return Err(ParseError::MixedKinds);
            }
            eq.add_term(arg, c);
        }
        Ok(eq)
    }
}
