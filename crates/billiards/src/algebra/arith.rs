//! Integer helpers that trap instead of wrapping.

use num_integer::Integer;

/// Absolute value that traps on `i32::MIN`, which has no positive negation.
#[inline]
pub fn abs(v: i32) -> i32 {
    match v.checked_abs() {
        Some(a) => a,
        None => panic!("integer overflow: abs({v})"),
    }
}

/// 64-bit counterpart of [`abs`].
#[inline]
pub fn abs64(v: i64) -> i64 {
    match v.checked_abs() {
        Some(a) => a,
        None => panic!("integer overflow: abs({v})"),
    }
}

/// Non-negative gcd; `gcd(0, 0) == 0`.
#[inline]
pub fn gcd(a: i32, b: i32) -> i32 {
    abs(a).gcd(&abs(b))
}

/// Sign as -1, 0 or 1.
#[inline]
pub fn signum(v: i32) -> i32 {
    v.signum()
}
