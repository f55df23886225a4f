//! Closed axis-aligned rectangles.

use std::fmt;

use super::interval::{Closed, Interval};
use super::point::{int, Point, Rational};
use crate::error::GeometryError;

/// Closed rectangle `x_interval x y_interval`, both of positive length.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rectangle {
    x: Interval<Closed>,
    y: Interval<Closed>,
}

impl Rectangle {
    pub fn new(
        xmin: Rational,
        xmax: Rational,
        ymin: Rational,
        ymax: Rational,
    ) -> Result<Self, GeometryError> {
        Ok(Self {
            x: Interval::new(xmin, xmax)?,
            y: Interval::new(ymin, ymax)?,
        })
    }

    #[inline]
    pub fn from_intervals(x: Interval<Closed>, y: Interval<Closed>) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn interval_x(&self) -> &Interval<Closed> {
        &self.x
    }
    #[inline]
    pub fn interval_y(&self) -> &Interval<Closed> {
        &self.y
    }
    #[inline]
    pub fn width(&self) -> Rational {
        self.x.length()
    }
    #[inline]
    pub fn height(&self) -> Rational {
        self.y.length()
    }

    pub fn center(&self) -> Point {
        let two = int(2);
        Point::new(
            (self.x.lower() + self.x.upper()) / &two,
            (self.y.lower() + self.y.upper()) / two,
        )
    }

    pub fn lower_left(&self) -> Point {
        Point::new(self.x.lower().clone(), self.y.lower().clone())
    }
    pub fn lower_right(&self) -> Point {
        Point::new(self.x.upper().clone(), self.y.lower().clone())
    }
    pub fn upper_right(&self) -> Point {
        Point::new(self.x.upper().clone(), self.y.upper().clone())
    }
    pub fn upper_left(&self) -> Point {
        Point::new(self.x.lower().clone(), self.y.upper().clone())
    }

    /// Corners counter-clockwise from the lower left: LL, LR, UR, UL.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.lower_left(),
            self.lower_right(),
            self.upper_right(),
            self.upper_left(),
        ]
    }

    /// The four quarters in the order UL, UR, LL, LR.
    pub fn quadrants(&self) -> [Rectangle; 4] {
        let c = self.center();
        let left = Interval::new_unchecked(self.x.lower().clone(), c.x.clone());
        let right = Interval::new_unchecked(c.x, self.x.upper().clone());
        let lower = Interval::new_unchecked(self.y.lower().clone(), c.y.clone());
        let upper = Interval::new_unchecked(c.y, self.y.upper().clone());
        [
            Self::from_intervals(left.clone(), upper.clone()),
            Self::from_intervals(right.clone(), upper),
            Self::from_intervals(left, lower.clone()),
            Self::from_intervals(right, lower),
        ]
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.x.contains(&p.x) && self.y.contains(&p.y)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.x, self.y)
    }
}

/// Componentwise minimum and maximum of a point set; `None` when empty.
///
/// The box may be degenerate (a segment or a single point).
pub fn bounding_box<'a, I>(points: I) -> Option<(Point, Point)>
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut it = points.into_iter();
    let first = it.next()?;
    let (mut min, mut max) = (first.clone(), first.clone());
    for p in it {
        if p.x < min.x {
            min.x = p.x.clone();
        } else if p.x > max.x {
            max.x = p.x.clone();
        }
        if p.y < min.y {
            min.y = p.y.clone();
        } else if p.y > max.y {
            max.y = p.y.clone();
        }
    }
    Some((min, max))
}
