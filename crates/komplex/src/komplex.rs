use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{Component, InvalidArgument, InvalidReason, Result};
use crate::polar;

/// An immutable complex number, holding both its Cartesian `(re, im)` and polar `(r, th)`
/// coordinates.
///
/// Both pairs are computed together whenever a [`Komplex`] is built, and every part is
/// guaranteed to be finite. `r` is never negative and `th` is always in `(-π, π]`, with the
/// zero value fixed to `th = 0`.
///
/// Equality is approximate, see [`Komplex::EPSILON`]. There is deliberately no [`PartialOrd`]
/// impl, since complex numbers have no meaningful total order.
#[derive(Clone, Copy)]
pub struct Komplex {
    re: f64,
    im: f64,
    r: f64,
    th: f64,
}

impl Komplex {
    /// `0 + 0 i`
    pub const ZERO: Self = Self {
        re: 0.0,
        im: 0.0,
        r: 0.0,
        th: 0.0,
    };

    /// `1 + 0 i`
    pub const ONE: Self = Self {
        re: 1.0,
        im: 0.0,
        r: 1.0,
        th: 0.0,
    };

    /// The imaginary unit, `0 + 1 i`.
    pub const I: Self = Self {
        re: 0.0,
        im: 1.0,
        r: 1.0,
        th: FRAC_PI_2,
    };

    /// Tolerance used by [`PartialEq`]. Two values are equal when both the real and
    /// imaginary parts differ by no more than `EPSILON * max(1, |a|, |b|)`.
    pub const EPSILON: f64 = 1e-9;

    /// Assembles a [`Komplex`] from parts that are already known to be finite, deriving the
    /// polar pair. The modulus is left unchecked.
    #[inline]
    pub(crate) fn from_finite_cartesian(re: f64, im: f64) -> Self {
        let (r, th) = polar::to_polar(re, im);
        Self::from_parts(re, im, r, th)
    }

    /// Assembles a [`Komplex`] from both pairs as-is. Callers are responsible for keeping the
    /// pairs consistent.
    #[inline]
    pub(crate) const fn from_parts(re: f64, im: f64, r: f64, th: f64) -> Self {
        Self {
            re: polar::unsigned_zero(re),
            im: polar::unsigned_zero(im),
            r,
            th,
        }
    }

    /// Builds a [`Komplex`] from its real and imaginary parts.
    ///
    /// Returns [`Error::InvalidArgument`] if either part is NaN or infinite, or if the modulus
    /// overflows an [`f64`].
    ///
    /// [`Error::InvalidArgument`]: crate::Error::InvalidArgument
    pub fn from_cartesian(re: f64, im: f64) -> Result<Self> {
        let re = InvalidArgument::check_finite(Component::Re, re)?;
        let im = InvalidArgument::check_finite(Component::Im, im)?;

        let komplex = Self::from_finite_cartesian(re, im);
        // hypot can still overflow for parts near f64::MAX
        InvalidArgument::check_finite(Component::Modulus, komplex.r)?;

        Ok(komplex)
    }

    /// Builds a [`Komplex`] from a modulus and an angle in radians. The angle is normalized
    /// into `(-π, π]`.
    ///
    /// Returns [`Error::InvalidArgument`] if either input is NaN or infinite, or if `r` is
    /// negative.
    ///
    /// [`Error::InvalidArgument`]: crate::Error::InvalidArgument
    pub fn from_polar(r: f64, th: f64) -> Result<Self> {
        let r = InvalidArgument::check_finite(Component::Modulus, r)?;
        let th = InvalidArgument::check_finite(Component::Angle, th)?;

        if r < 0.0 {
            let reason = InvalidReason::Negative { value: r };
            return Err(InvalidArgument::new(Component::Modulus, reason).into());
        }

        if r == 0.0 {
            return Ok(Self::ZERO);
        }

        // both pairs have to describe the same angle, so derive the parts from the folded one
        let th = polar::normalize_angle(th);
        let (re, im) = polar::to_cartesian(r, th);

        Ok(Self::from_parts(re, im, r, th))
    }

    /// Promotes a real number to a [`Komplex`] with a zero imaginary part. Negative values get
    /// an angle of `π`.
    pub fn from_real(value: f64) -> Result<Self> {
        let value = InvalidArgument::check_finite(Component::Real, value)?;

        Ok(Self {
            re: polar::unsigned_zero(value),
            im: 0.0,
            r: value.abs(),
            th: if value < 0.0 { PI } else { 0.0 },
        })
    }

    /// Returns the real part.
    #[inline]
    pub const fn re(&self) -> f64 {
        self.re
    }

    /// Returns the imaginary part.
    #[inline]
    pub const fn im(&self) -> f64 {
        self.im
    }

    /// Returns the modulus.
    #[inline]
    pub const fn r(&self) -> f64 {
        self.r
    }

    /// Returns the angle, in radians.
    #[inline]
    pub const fn th(&self) -> f64 {
        self.th
    }

    /// Returns the modulus, `|z|`. Identical to [`Komplex::r`].
    #[inline]
    pub const fn modulus(&self) -> f64 {
        self.r
    }

    /// Returns `(re, im)`.
    #[inline]
    pub const fn as_cartesian(&self) -> (f64, f64) {
        (self.re, self.im)
    }

    /// Returns `(r, th)`.
    #[inline]
    pub const fn as_polar(&self) -> (f64, f64) {
        (self.r, self.th)
    }

    /// Exact check for the origin (not tolerance based).
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.r == 0.0
    }

    /// Exact check for a zero imaginary part.
    #[inline]
    pub const fn is_real(&self) -> bool {
        self.im == 0.0
    }

    /// Compares with a caller provided tolerance, scaled the same way as [`PartialEq`]
    /// (see [`Komplex::EPSILON`]).
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        let tolerance = epsilon * 1.0_f64.max(self.r).max(other.r);

        (self.re - other.re).abs() <= tolerance && (self.im - other.im).abs() <= tolerance
    }
}

impl Default for Komplex {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Komplex {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Self::EPSILON)
    }
}

impl PartialEq<f64> for Komplex {
    fn eq(&self, rhs: &f64) -> bool {
        match Self::from_real(*rhs) {
            Ok(rhs) => *self == rhs,
            Err(_) => false,
        }
    }
}

impl PartialEq<Komplex> for f64 {
    #[inline]
    fn eq(&self, rhs: &Komplex) -> bool {
        rhs == self
    }
}

impl TryFrom<f64> for Komplex {
    type Error = crate::Error;

    #[inline]
    fn try_from(value: f64) -> Result<Self> {
        Self::from_real(value)
    }
}

impl TryFrom<(f64, f64)> for Komplex {
    type Error = crate::Error;

    #[inline]
    fn try_from((re, im): (f64, f64)) -> Result<Self> {
        Self::from_cartesian(re, im)
    }
}

impl From<Komplex> for (f64, f64) {
    #[inline]
    fn from(k: Komplex) -> Self {
        k.as_cartesian()
    }
}
