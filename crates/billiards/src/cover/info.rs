//! Per-region proof data: the region shape plus the equations to certify.

use std::fmt;

use tracing::debug;

use crate::algebra::{Equation, EquationSet, FlattenedEquation, GradientBound, XYZ};
use crate::division::{remove_line_factor, strip_line_factors};
use crate::error::{AlgebraError, BuildError, DivisionError};
use crate::geometry::{ConvexPolygon, Open, Segment};
use crate::region::{clip_polygon, clip_segment, Line};

/// One equation to prove positive, with its gradient bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Obligation {
    pub eq: FlattenedEquation,
    pub bound: GradientBound,
}

impl Obligation {
    pub fn new(eq: &Equation) -> Result<Self, AlgebraError> {
        Ok(Self {
            eq: FlattenedEquation::try_from(eq)?,
            bound: eq.gradient_bounds(),
        })
    }
}

impl fmt::Display for Obligation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (bounds {}, {})", self.eq, self.bound.x, self.bound.y)
    }
}

/// Flattened sines and cosines of a set, sines first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Obligations {
    pub sines: Vec<Obligation>,
    pub cosines: Vec<Obligation>,
}

impl Obligations {
    pub fn new(set: &EquationSet) -> Result<Self, AlgebraError> {
        Ok(Self {
            sines: set.sines.iter().map(Obligation::new).collect::<Result<_, _>>()?,
            cosines: set.cosines.iter().map(Obligation::new).collect::<Result<_, _>>()?,
        })
    }

    pub fn len(&self) -> usize {
        self.sines.len() + self.cosines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Raw input of one region: the half-planes cutting it out of the seed
/// triangle and the equations that must be positive on it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionInput {
    pub lines: Vec<Line>,
    pub equations: EquationSet,
}

impl RegionInput {
    /// Divide repeated triangle-angle sines out of every equation, `first`
    /// and `second` before the remaining angle.
    ///
    /// All three sines are positive inside the seed triangle, so each
    /// equation keeps its sign on the region.
    pub fn strip_angles(&self, first: XYZ, second: XYZ) -> Result<Self, DivisionError> {
        let equations = self
            .equations
            .iter()
            .map(|eq| strip_line_factors(eq, first, second))
            .collect::<Result<EquationSet, _>>()?;
        debug!(
            before = self.equations.len(),
            after = equations.len(),
            %first,
            %second,
            "stripped angle factors"
        );
        Ok(Self {
            lines: self.lines.clone(),
            equations,
        })
    }
}

/// An open stable region with its obligations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StableInfo {
    pub polygon: ConvexPolygon<Open>,
    pub obligations: Obligations,
}

impl StableInfo {
    pub fn new(polygon: ConvexPolygon<Open>, equations: &EquationSet) -> Result<Self, AlgebraError> {
        Ok(Self {
            polygon,
            obligations: Obligations::new(equations)?,
        })
    }

    /// Clip the seed triangle by `input.lines`; a collapsed region is an error.
    pub fn build(input: &RegionInput) -> Result<Self, BuildError> {
        let region = clip_polygon(&input.lines)?.ok_or(BuildError::EmptyRegion("stable"))?;
        Ok(Self::new(region.to_polygon()?, &input.equations)?)
    }
}

/// An open piece of a constraint line with its obligations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnstableInfo {
    pub segment: Segment<Open>,
    pub obligations: Obligations,
}

impl UnstableInfo {
    pub fn new(segment: Segment<Open>, equations: &EquationSet) -> Result<Self, AlgebraError> {
        Ok(Self {
            segment,
            obligations: Obligations::new(equations)?,
        })
    }

    /// Clip the chord of `constraint` by `input.lines`.
    pub fn build(constraint: &Line, input: &RegionInput) -> Result<Self, BuildError> {
        let region = clip_segment(constraint, &input.lines)?.ok_or(BuildError::EmptyRegion("unstable"))?;
        Ok(Self::new(region.to_segment()?, &input.equations)?)
    }
}

/// Two stable regions on either side of `line` and the unstable piece of
/// `line` between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripleInfo {
    pub line: Line,
    pub negative: StableInfo,
    pub unstable: UnstableInfo,
    pub positive: StableInfo,
}

impl TripleInfo {
    /// Both stable sides have the line factor divided out before flattening,
    /// so their equations stay positive up to the line.
    pub fn build(
        line: Line,
        negative: &RegionInput,
        unstable: &RegionInput,
        positive: &RegionInput,
    ) -> Result<Self, BuildError> {
        let mut neg_eqs = negative.equations.clone();
        let mut pos_eqs = positive.equations.clone();
        remove_line_factor(&mut neg_eqs, &line, &mut pos_eqs)?;
        let neg_region = clip_polygon(&negative.lines)?.ok_or(BuildError::EmptyRegion("negative"))?;
        let pos_region = clip_polygon(&positive.lines)?.ok_or(BuildError::EmptyRegion("positive"))?;
        let info = Self {
            negative: StableInfo::new(neg_region.to_polygon()?, &neg_eqs)?,
            unstable: UnstableInfo::build(&line, unstable)?,
            positive: StableInfo::new(pos_region.to_polygon()?, &pos_eqs)?,
            line,
        };
        debug!(
            line = %info.line,
            negative = info.negative.obligations.len(),
            unstable = info.unstable.obligations.len(),
            positive = info.positive.obligations.len(),
            "built triple"
        );
        Ok(info)
    }
}
