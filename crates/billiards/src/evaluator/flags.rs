//! MPFR exception flags of the calling thread.

use std::fmt;

use gmp_mpfr_sys::mpfr;

/// Snapshot of the sticky MPFR flags that invalidate a certificate.
///
/// The inexact flag is not tracked: every trig evaluation raises it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub nan: bool,
    pub overflow: bool,
    pub underflow: bool,
    pub erange: bool,
}

impl Flags {
    /// Clear the calling thread's MPFR flags.
    #[inline]
    pub fn clear_thread() {
        // SAFETY: only touches MPFR's thread-local flag word.
        unsafe { mpfr::clear_flags() }
    }

    /// Read the calling thread's MPFR flags.
    pub fn raised() -> Self {
        // SAFETY: the predicates only read MPFR's thread-local flag word.
        unsafe {
            Self {
                nan: mpfr::nanflag_p() != 0,
                overflow: mpfr::overflow_p() != 0,
                underflow: mpfr::underflow_p() != 0,
                erange: mpfr::erangeflag_p() != 0,
            }
        }
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.nan || self.overflow || self.underflow || self.erange
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (self.underflow, "underflow"),
            (self.overflow, "overflow"),
            (self.nan, "nan"),
            (self.erange, "erange"),
        ];
        let raised: Vec<&str> = names.iter().filter(|(on, _)| *on).map(|(_, n)| *n).collect();
        if raised.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&raised.join(" "))
        }
    }
}
