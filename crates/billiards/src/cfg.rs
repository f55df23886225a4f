//! Run configuration and fixed tuning constants.
//!
//! Policy
//! - Constants below are fixed; they are not knobs. Changing one changes what a
//!   certificate means, so they stay crate-internal.
//! - `CoverCfg` carries the few values a caller legitimately chooses per run.

/// The pi/2 bounds are computed at this multiple of the working precision.
pub(crate) const PI_PRECISION_FACTOR: u32 = 2;
/// `(1-x^2)` stripping gives up once the quotient has grown by more than this
/// many terms over the original equation.
pub(crate) const STRIP_GROWTH_CAP: usize = 2;

/// Cover verification configuration.
#[derive(Clone, Copy, Debug)]
pub struct CoverCfg {
    /// Working precision in decimal digits.
    pub digits: u32,
    /// Triple leaves reject a square as soon as one corner's line value has
    /// magnitude at least this large.
    pub corner_guard: i64,
    /// Number of progress reports over a full run (0 disables them).
    pub progress_steps: usize,
}

impl Default for CoverCfg {
    fn default() -> Self {
        Self {
            digits: 10,
            corner_guard: 2,
            progress_steps: 100,
        }
    }
}

impl CoverCfg {
    #[inline]
    pub fn with_digits(self, digits: u32) -> Self {
        Self { digits, ..self }
    }
    #[inline]
    pub fn bits(&self) -> u32 {
        digits_to_bits(self.digits)
    }
}

/// Convert decimal digits to a slightly generous number of bits.
///
/// Uses `log2(10) ~ 1000/301`, rounding up and adding one more bit.
pub fn digits_to_bits(digits: u32) -> u32 {
    let scaled = digits * 1000;
    scaled / 301 + if scaled % 301 != 0 { 2 } else { 1 }
}
