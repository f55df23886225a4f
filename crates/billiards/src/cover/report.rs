//! Outcomes of a verification run.

use std::fmt;

use crate::geometry::{Point, Rational, Rectangle};

/// Which check a leaf failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// An `Empty` leaf whose square meets the target polygon.
    EmptyIntersects,
    /// A `Single` leaf whose square is not inside the stable polygon.
    NotSubset,
    /// An equation could not be certified positive.
    NotPositive,
    /// A `Triple` corner lies too far from the line.
    CornerTooFar,
    /// A `Triple` corner or crossing point is outside its region.
    OutsideRegion,
}

impl FailureKind {
    pub fn name(self) -> &'static str {
        match self {
            FailureKind::EmptyIntersects => "empty-intersects",
            FailureKind::NotSubset => "not-subset",
            FailureKind::NotPositive => "not-positive",
            FailureKind::CornerTooFar => "corner-too-far",
            FailureKind::OutsideRegion => "outside-region",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A failed leaf check with human-readable detail lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: FailureKind,
    pub square: Rectangle,
    pub detail: Vec<String>,
}

impl Diagnostic {
    pub fn new(kind: FailureKind, square: &Rectangle, headline: impl Into<String>) -> Self {
        Self {
            kind,
            square: square.clone(),
            detail: vec![headline.into()],
        }
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.detail.push(line.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "square {}", self.square)?;
        for line in &self.detail {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

/// Result of [`verify_cover`](super::verify_cover).
///
/// `covered` is the conjunction over all leaves; `diagnostics` lists every
/// failing leaf in depth-first quadrant order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverReport {
    pub covered: bool,
    pub leaves: u64,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of [`check_square`](super::check_square).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareCheck {
    pub center: Point,
    pub radius: Rational,
    pub covered: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Display for SquareCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Center = {}", self.center)?;
        writeln!(f, "Radius = {}", self.radius)?;
        write!(f, "Covered = {}", self.covered)
    }
}
