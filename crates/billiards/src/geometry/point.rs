//! Exact rational points.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

/// Exact rational scalar used for all coordinates.
pub type Rational = BigRational;

/// Rational from an integer ratio. Panics on a zero denominator.
#[inline]
pub fn ratio(numer: i64, denom: i64) -> Rational {
    Rational::new(BigInt::from(numer), BigInt::from(denom))
}

/// Rational from an integer.
#[inline]
pub fn int(value: i64) -> Rational {
    Rational::from_integer(BigInt::from(value))
}

/// A point (or vector) in the plane. Orders lexicographically by `(x, y)`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: Rational,
    pub y: Rational,
}

impl Point {
    #[inline]
    pub fn new(x: Rational, y: Rational) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn from_ints(x: i64, y: i64) -> Self {
        Self::new(int(x), int(y))
    }

    #[inline]
    pub fn origin() -> Self {
        Self::new(Rational::zero(), Rational::zero())
    }

    #[inline]
    pub fn dot(&self, other: &Point) -> Rational {
        &self.x * &other.x + &self.y * &other.y
    }

    /// z-component of `self x other`.
    #[inline]
    pub fn cross(&self, other: &Point) -> Rational {
        &self.x * &other.y - &self.y * &other.x
    }

    /// The vector rotated a quarter turn counter-clockwise.
    #[inline]
    pub fn perp(&self) -> Point {
        Point::new(-self.y.clone(), self.x.clone())
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        let two = int(2);
        Point::new((&self.x + &other.x) / &two, (&self.y + &other.y) / two)
    }

    /// Orientation of the triangle `a b c`: `Greater` for counter-clockwise,
    /// `Less` for clockwise and `Equal` for collinear.
    pub fn orientation(a: &Point, b: &Point, c: &Point) -> Ordering {
        (b - a).cross(&(c - a)).cmp(&Rational::zero())
    }
}

impl Sub for &Point {
    type Output = Point;
    fn sub(self, rhs: &Point) -> Point {
        Point::new(&self.x - &rhs.x, &self.y - &rhs.y)
    }
}

impl Add for &Point {
    type Output = Point;
    fn add(self, rhs: &Point) -> Point {
        Point::new(&self.x + &rhs.x, &self.y + &rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
