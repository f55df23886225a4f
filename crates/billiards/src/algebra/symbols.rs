//! Closed symbol alphabets indexing linear-combination coefficients.
//!
//! Angles are measured in units of `eta = pi/2`, so `Eta` and `Pi` stand for the
//! constants pi/2 and pi. `S` and `T` are the Laurent variables `e^{ix}` and
//! `e^{iy}` used by factor division.

use std::fmt;
use std::hash::Hash;

use super::lincom::LinCom;

/// A closed alphabet of symbols with a fixed coefficient index each.
pub trait Symbol: Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static {
    /// All symbols in index order.
    const ALL: &'static [Self];
    fn index(self) -> usize;
    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }
}

macro_rules! alphabet {
    ($(#[$meta:meta])* $ty:ident { $($var:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $ty {
            $($var),+
        }

        impl Symbol for $ty {
            const ALL: &'static [Self] = &[$($ty::$var),+];
            #[inline]
            fn index(self) -> usize {
                self as usize
            }
            #[inline]
            fn name(self) -> &'static str {
                match self {
                    $($ty::$var => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

alphabet!(
    /// Two free angles of the triangle.
    XY { X => "x", Y => "y" }
);
alphabet!(
    /// Free angles plus multiples of pi.
    XYPi { X => "x", Y => "y", Pi => "pi" }
);
alphabet!(
    /// Free angles plus multiples of pi/2; also the alphabet of constraint lines.
    XYEta { X => "x", Y => "y", Eta => "eta" }
);
alphabet!(
    /// Laurent variables of the polynomial encoding.
    ST { S => "s", T => "t" }
);
alphabet!(
    /// The three angles of a triangle; `z = 2eta - x - y`.
    XYZ { X => "x", Y => "y", Z => "z" }
);

impl XYZ {
    /// The angle distinct from both `a` and `b`, if they differ.
    pub fn other_angle(a: XYZ, b: XYZ) -> Option<XYZ> {
        if a == b {
            return None;
        }
        XYZ::ALL.iter().copied().find(|&c| c != a && c != b)
    }

    /// The angle as a combination of `x`, `y` and `eta`.
    pub fn to_eta(self) -> LinCom<XYEta, 3> {
        match self {
            XYZ::X => LinCom::new([1, 0, 0]),
            XYZ::Y => LinCom::new([0, 1, 0]),
            XYZ::Z => LinCom::new([-1, -1, 2]),
        }
    }
}
