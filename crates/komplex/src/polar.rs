//! Conversions between the Cartesian and polar views of a complex number.
//!
//! Angles are in radians, and always folded into `(-π, π]`.
use std::f64::consts::{PI, TAU};

/// Folds an angle (in radians) into `(-π, π]`. Negative zero comes back as `0.0`.
#[inline]
pub fn normalize_angle(th: f64) -> f64 {
    if -PI < th && th <= PI {
        return unsigned_zero(th);
    }

    // rem_euclid lands in [0, τ), so only the upper half needs shifting down.
    let wrapped = th.rem_euclid(TAU);

    if wrapped > PI {
        wrapped - TAU
    } else {
        unsigned_zero(wrapped)
    }
}

/// Maps `-0.0` to `0.0`, leaving every other value untouched.
#[inline]
pub const fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Returns `(r, th)` for the point `(re, im)`. The origin maps to `(0, 0)`.
#[inline]
pub fn to_polar(re: f64, im: f64) -> (f64, f64) {
    if re == 0.0 && im == 0.0 {
        return (0.0, 0.0);
    }

    (re.hypot(im), normalize_angle(im.atan2(re)))
}

/// Returns `(re, im)` for the polar pair `(r, th)`.
#[inline]
pub fn to_cartesian(r: f64, th: f64) -> (f64, f64) {
    let (sin, cos) = th.sin_cos();
    (r * cos, r * sin)
}
