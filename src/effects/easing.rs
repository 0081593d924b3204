//! Easing math used by the built-in fades.

/// Clamp `x` into `[0, 1]`. NaN maps to 0.
pub fn clamp01(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Linear interpolation from `from` to `to` by `alpha`.
pub fn lerp(from: f32, to: f32, alpha: f32) -> f32 {
    from + (to - from) * alpha
}

/// Ken Perlin's smootherstep: `x³(x(6x − 15) + 10)`.
///
/// First and second derivatives vanish at both ends.
pub fn smoother(x: f32) -> f32 {
    x * x * x * (x * (x * 6.0 - 15.0) + 10.0)
}

/// Midpoint of the linear and quadratic curves, used by the linear fade.
pub fn linear_quadratic(x: f32) -> f32 {
    lerp(x, x * x, 0.5)
}
