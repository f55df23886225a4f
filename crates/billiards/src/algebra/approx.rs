//! Floating-point evaluation for diagnostics only.
//!
//! Nothing here feeds a verdict; certified answers come from `evaluator`.

use nalgebra::Vector2;

use super::equation::{GradientBound, TrigKind};
use super::flat::FlattenedEquation;

/// Approximate `eq(p)` with `p` in units of `pi/2`.
pub fn approx_value(eq: &FlattenedEquation, p: Vector2<f64>) -> f64 {
    let f: fn(f64) -> f64 = match eq.kind() {
        TrigKind::Sin => f64::sin,
        TrigKind::Cos => f64::cos,
    };
    eq.terms()
        .iter()
        .map(|t| {
            let b = Vector2::new(f64::from(t.x), f64::from(t.y));
            f64::from(t.coeff) * f(std::f64::consts::FRAC_PI_2 * b.dot(&p))
        })
        .sum()
}

/// Approximate value at `center` minus the deviation budget over the
/// rectangle with half-widths `radius`; positive means the certified check has
/// a chance.
pub fn approx_margin(
    eq: &FlattenedEquation,
    bound: GradientBound,
    center: Vector2<f64>,
    radius: Vector2<f64>,
) -> f64 {
    let g = Vector2::new(bound.x as f64, bound.y as f64);
    approx_value(eq, center) - std::f64::consts::FRAC_PI_2 * g.dot(&radius)
}
