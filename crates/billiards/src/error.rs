//! Error types for the billiards crate.
//!
//! Construction errors are returned from fallible constructors and mean the
//! upstream input is malformed. Certification errors mean a proof attempt is
//! untrustworthy; they must never be folded into a plain "not proven".

use thiserror::Error;

/// Errors raised by equation bookkeeping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// A sine/cosine with an eta coefficient of the wrong parity.
    #[error("eta coefficient {eta} has the wrong parity for {what}")]
    EtaParity { eta: i32, what: &'static str },

    /// A coefficient does not fit into the flattened 16-bit representation.
    #[error("coefficient {value} does not fit into i16")]
    Narrowing { value: i32 },

    /// Operands of incompatible trig kinds.
    #[error("trig kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors raised while parsing text forms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected input at {position}: {rest:?}")]
    Unexpected { position: usize, rest: String },

    #[error("empty input")]
    Empty,

    #[error("invalid number {0:?}")]
    Number(String),

    #[error("mixed trig kinds in one equation")]
    MixedKinds,

    #[error("truncated proof tree")]
    TruncatedTree,
}

/// Validation errors for geometric objects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("interval lower bound {lower} is not below upper bound {upper}")]
    EmptyInterval { lower: String, upper: String },

    #[error("segment start equals end at {0}")]
    DegenerateSegment(String),

    #[error("polygon has {0} vertices, at least 3 required")]
    TooFewVertices(usize),

    #[error("polygon has collinear consecutive vertices at index {0}")]
    Collinear(usize),

    #[error("polygon is not convex at index {0}")]
    NotConvex(usize),

    #[error("polygon edges {0} and {1} intersect")]
    SelfIntersecting(usize, usize),

    #[error("rectangle {0} is not a square")]
    NotSquare(String),
}

/// Errors raised while dividing equations by a factor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DivisionError {
    /// The factor divides the quotient again.
    #[error("factor {factor} divides {equation} twice")]
    RepeatedFactor { equation: String, factor: String },

    /// A quotient polynomial is not the encoding of a trig sum.
    #[error("cannot decode polynomial as {kind}: {reason}")]
    Decode { kind: &'static str, reason: String },

    /// A polynomial coefficient left the `i32` range.
    #[error("coefficient overflow in {0}")]
    Overflow(String),

    /// Line stripping needs two distinct angles to derive the third.
    #[error("angles to strip must differ, got {0} twice")]
    SameAngles(String),
}

/// Fatal conditions during certified evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CertificationError {
    /// Arithmetic exception flags raised by the MPFR evaluator.
    #[error("arithmetic flags raised during evaluation: {0}")]
    Flags(String),

    /// A term with a zero coefficient reached the evaluator.
    #[error("zero coefficient in evaluated term")]
    ZeroCoefficient,

    /// Two lines that must intersect are parallel.
    #[error("parallel lines {0} and {1} have no intersection")]
    Singular(String, String),
}

/// Errors raised while turning lines and equations into region infos.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Clipping left nothing of the region.
    #[error("{0} region is empty")]
    EmptyRegion(&'static str),

    #[error(transparent)]
    Algebra(#[from] AlgebraError),

    #[error(transparent)]
    Division(#[from] DivisionError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Certification(#[from] CertificationError),
}

/// Errors that abort a cover verification run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("target polygon is not a subset of the square")]
    PolygonOutsideSquare,

    #[error("no {kind} region with index {index}")]
    UnknownIndex { kind: &'static str, index: usize },

    #[error(transparent)]
    Certification(#[from] CertificationError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
