//! Arithmetic on [`Komplex`] values.
//!
//! Every operation builds a new value. The `checked_*` methods are the fallible entry points,
//! the [`std::ops`] impls delegate to them and panic if they fail.
use std::f64::consts::PI;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::Komplex;
use crate::error::{Error, Result};
use crate::polar;

impl Komplex {
    /// `self + rhs`. Only fails if the result overflows.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        Self::from_cartesian(self.re() + rhs.re(), self.im() + rhs.im())
    }

    /// `self - rhs`. Only fails if the result overflows.
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        Self::from_cartesian(self.re() - rhs.re(), self.im() - rhs.im())
    }

    /// `self * rhs`, using `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`. The polar pair is
    /// derived from the result. Only fails if the result overflows.
    pub fn checked_mul(self, rhs: Self) -> Result<Self> {
        let (a, b) = self.as_cartesian();
        let (c, d) = rhs.as_cartesian();

        Self::from_cartesian(a * c - b * d, a * d + b * c)
    }

    /// `self / rhs`, equal to `((ac + bd) + (bc - ad)i) / (c² + d²)`.
    ///
    /// The divisor is scaled by its larger part first (Smith's algorithm), so `c² + d²` is
    /// never formed and can't overflow or underflow on its own.
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` has a modulus of exactly zero. Otherwise only
    /// fails if the quotient itself overflows.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let (a, b) = self.as_cartesian();
        let (c, d) = rhs.as_cartesian();

        let (re, im) = if c.abs() >= d.abs() {
            let ratio = d / c;
            let denom = c + d * ratio;
            ((a + b * ratio) / denom, (b - a * ratio) / denom)
        } else {
            let ratio = c / d;
            let denom = c * ratio + d;
            ((a * ratio + b) / denom, (b * ratio - a) / denom)
        };

        Self::from_cartesian(re, im)
    }

    /// The reciprocal, `1 / self`.
    ///
    /// Returns [`Error::DivisionByZero`] for the zero value.
    #[inline]
    pub fn checked_inv(self) -> Result<Self> {
        Self::ONE.checked_div(self)
    }

    /// The complex conjugate. `re` and `r` are unchanged, `im` and `th` are negated.
    pub fn conjugate(self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }

        let (re, im) = self.as_cartesian();
        let (r, th) = self.as_polar();

        Self::from_parts(re, -im, r, polar::normalize_angle(-th))
    }

    /// Identical to [`Komplex::checked_inv`], but panics on [`Err`].
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[track_caller]
    #[inline]
    pub fn inv(self) -> Self {
        expect_op(self.checked_inv(), "inversion")
    }
}

/// Unwraps the result of a `checked_*` op for the operator impls.
#[track_caller]
fn expect_op(result: Result<Komplex>, op: &'static str) -> Komplex {
    match result {
        Ok(komplex) => komplex,
        Err(error) => panic!("complex {op} failed: {error}"),
    }
}

/// Promotes a real operand, panicking the same way a failed op does.
#[track_caller]
fn promote(value: f64, op: &'static str) -> Komplex {
    expect_op(Komplex::from_real(value), op)
}

impl Neg for Komplex {
    type Output = Self;

    /// Negates both parts, keeping `r` and rotating `th` by `π`.
    fn neg(self) -> Self::Output {
        if self.is_zero() {
            return Self::ZERO;
        }

        let (re, im) = self.as_cartesian();
        let (r, th) = self.as_polar();

        Self::from_parts(-re, -im, r, polar::normalize_angle(th + PI))
    }
}

macro_rules! impl_binary_ops {
    ($($op:ident::$method:ident, $assign_op:ident::$assign_method:ident => $checked:ident),* $(,)?) => {
        $(
            impl $op for Komplex {
                type Output = Self;

                #[track_caller]
                #[inline]
                fn $method(self, rhs: Self) -> Self::Output {
                    expect_op(self.$checked(rhs), stringify!($method))
                }
            }

            impl $op<f64> for Komplex {
                type Output = Self;

                #[track_caller]
                #[inline]
                fn $method(self, rhs: f64) -> Self::Output {
                    let rhs = promote(rhs, stringify!($method));
                    expect_op(self.$checked(rhs), stringify!($method))
                }
            }

            impl $op<Komplex> for f64 {
                type Output = Komplex;

                #[track_caller]
                #[inline]
                fn $method(self, rhs: Komplex) -> Self::Output {
                    let lhs = promote(self, stringify!($method));
                    expect_op(lhs.$checked(rhs), stringify!($method))
                }
            }

            impl $assign_op for Komplex {
                #[track_caller]
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    *self = $op::$method(*self, rhs);
                }
            }

            impl $assign_op<f64> for Komplex {
                #[track_caller]
                #[inline]
                fn $assign_method(&mut self, rhs: f64) {
                    *self = $op::$method(*self, rhs);
                }
            }
        )*
    };
}

impl_binary_ops! {
    Add::add, AddAssign::add_assign => checked_add,
    Sub::sub, SubAssign::sub_assign => checked_sub,
    Mul::mul, MulAssign::mul_assign => checked_mul,
    Div::div, DivAssign::div_assign => checked_div,
}

impl num_traits::Zero for Komplex {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Komplex::is_zero(self)
    }
}

impl num_traits::One for Komplex {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

impl num_traits::Inv for Komplex {
    type Output = Self;

    #[track_caller]
    #[inline]
    fn inv(self) -> Self::Output {
        Komplex::inv(self)
    }
}
