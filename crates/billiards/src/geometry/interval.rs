//! One-dimensional intervals with a compile-time topology.

use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use super::point::Rational;
use crate::error::GeometryError;

/// Open or closed point-set topology of a shape.
pub trait Topology: Copy + Clone + Debug + Default + Eq + Hash + Send + Sync + 'static {
    const OPEN: bool;
}

/// Marker: the shape excludes its boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Open;

/// Marker: the shape includes its boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Closed;

impl Topology for Open {
    const OPEN: bool = true;
}

impl Topology for Closed {
    const OPEN: bool = false;
}

/// Interval with `lower < upper`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T: Topology> {
    lower: Rational,
    upper: Rational,
    topology: PhantomData<T>,
}

impl<T: Topology> Interval<T> {
    pub fn new(lower: Rational, upper: Rational) -> Result<Self, GeometryError> {
        if lower >= upper {
            return Err(GeometryError::EmptyInterval {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }
        Ok(Self::new_unchecked(lower, upper))
    }

    #[inline]
    pub(crate) fn new_unchecked(lower: Rational, upper: Rational) -> Self {
        debug_assert!(lower < upper);
        Self {
            lower,
            upper,
            topology: PhantomData,
        }
    }

    #[inline]
    pub fn lower(&self) -> &Rational {
        &self.lower
    }
    #[inline]
    pub fn upper(&self) -> &Rational {
        &self.upper
    }
    #[inline]
    pub fn length(&self) -> Rational {
        &self.upper - &self.lower
    }

    pub fn contains(&self, v: &Rational) -> bool {
        if T::OPEN {
            &self.lower < v && v < &self.upper
        } else {
            &self.lower <= v && v <= &self.upper
        }
    }

    /// `self` lies inside `other` as a set of bounds.
    pub fn subset_of<U: Topology>(&self, other: &Interval<U>) -> bool {
        other.lower <= self.lower && self.upper <= other.upper
    }
}

impl<T: Topology> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (l, r) = if T::OPEN { ('(', ')') } else { ('[', ']') };
        write!(f, "{l}{}, {}{r}", self.lower, self.upper)
    }
}
