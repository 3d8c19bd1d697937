#![deny(clippy::suspicious, clippy::complexity, clippy::perf, clippy::style)]
#![deny(missing_docs)]
//! A small, immutable complex number type, [`Komplex`], that keeps both its Cartesian
//! `(re, im)` and polar `(r, th)` coordinates on hand.
//!
//! ```
//! use komplex::{I, Komplex};
//!
//! let z = 2.0 + 3.0 * I;
//! let w = Komplex::from_cartesian(4.0, 5.0)?;
//!
//! assert_eq!(format!("{:.2}", z * w), "-7.00 + 22.00 i");
//! assert_eq!(format!("{}", I), "0.0 + 1.0 i");
//!
//! let rotated = Komplex::from_polar(1.0, std::f64::consts::FRAC_PI_4)?;
//! assert_eq!(
//!     format!("{rotated:?}"),
//!     "Komplex(re=0.71, im=0.71, r=1.00, th=0.79)"
//! );
//! # Ok::<(), komplex::Error>(())
//! ```
//!
//! Constructors and the `checked_*` arithmetic methods return [`Result`]s. The operator impls
//! (`+`, `-`, `*`, `/`, unary `-`) delegate to those, and panic on failure the same way integer
//! division by zero does. Raising to a power is not supported.
mod de;
pub mod error;
mod fmt;
mod komplex;
mod ops;
mod parse;
pub mod polar;
#[cfg(any(test, feature = "random"))]
mod random;
mod ser;

pub use crate::error::{Error, Result};
pub use crate::komplex::Komplex;
#[cfg(any(test, feature = "random"))]
pub use crate::random::RANDOM_BOUND;

/// The imaginary unit, `0 + 1 i`.
pub const I: Komplex = Komplex::I;
