//! Errors returned by the checked constructors, checked arithmetic and string parsing.

use std::fmt;
use std::num::FpCategory;

use serde::de;

/// The value a rejected input was meant to become.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// The real part.
    Re,
    /// The imaginary part.
    Im,
    /// The modulus, `r`.
    Modulus,
    /// The angle, `th`, in radians.
    Angle,
    /// A plain real operand, promoted to a [`Komplex`].
    ///
    /// [`Komplex`]: crate::Komplex
    Real,
}

impl Component {
    /// Returns the name of the variant as a lowercase `&'static str`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Re => "real part",
            Self::Im => "imaginary part",
            Self::Modulus => "modulus",
            Self::Angle => "angle",
            Self::Real => "real operand",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Why a component was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidReason {
    /// The value was NaN.
    IsNaN,
    /// The value was positive or negative infinity.
    IsInf,
    /// A modulus below zero.
    Negative {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::IsNaN => write!(formatter, "'NaN'"),
            Self::IsInf => write!(formatter, "infinite"),
            Self::Negative { value } => write!(formatter, "negative (received value {value})"),
        }
    }
}

/// A component that cannot be represented by a [`Komplex`].
///
/// [`Komplex`]: crate::Komplex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidArgument {
    component: Component,
    reason: InvalidReason,
}

impl InvalidArgument {
    pub(crate) const fn new(component: Component, reason: InvalidReason) -> Self {
        Self { component, reason }
    }

    /// Returns [`Ok`] if `value` is finite, otherwise an error naming `component`.
    pub(crate) const fn check_finite(
        component: Component,
        value: f64,
    ) -> std::result::Result<f64, Self> {
        match value.classify() {
            FpCategory::Nan => Err(Self::new(component, InvalidReason::IsNaN)),
            FpCategory::Infinite => Err(Self::new(component, InvalidReason::IsInf)),
            _ => Ok(value),
        }
    }

    /// Returns the component that caused the error.
    pub const fn component(&self) -> Component {
        self.component
    }

    /// Returns the reason the component is invalid.
    pub const fn reason(&self) -> &InvalidReason {
        &self.reason
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "{} invalid: cannot be {}",
            self.component, self.reason
        )
    }
}

impl std::error::Error for InvalidArgument {}

impl de::Expected for InvalidArgument {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{self}")
    }
}

/// Errors from parsing a [`Komplex`] out of a string.
///
/// [`Komplex`]: crate::Komplex
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Nothing but whitespace.
    #[error("cannot parse a complex number from an empty string")]
    Empty,
    /// One of the two parts was not a valid float.
    #[error("invalid {component} '{text}': {source}")]
    Float {
        /// Which part failed to parse.
        component: Component,
        /// The offending text.
        text: String,
        /// The underlying float parsing error.
        #[source]
        source: std::num::ParseFloatError,
    },
    /// Text left over after the imaginary unit.
    #[error("unexpected trailing input '{0}'")]
    Trailing(String),
}

/// Error types that can be encountered.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A constructor (or an overflowing operation) was handed a value that is not
    /// representable.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    /// The divisor, or the value being inverted, has a modulus of exactly zero.
    #[error("division by a complex number with zero modulus")]
    DivisionByZero,
    /// Errors from [`str::parse`].
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Formats `self` as an arbitrary [`serde::de::Error`], given the value we tried to
    /// deserialize from.
    pub fn into_de_error<E>(self, unexpected: de::Unexpected<'_>) -> E
    where
        E: de::Error,
    {
        match self {
            Self::InvalidArgument(invalid) => de::Error::invalid_value(unexpected, &invalid),
            Self::Parse(parse) => de::Error::invalid_value(unexpected, &&*parse.to_string()),
            Self::DivisionByZero => de::Error::custom(Error::DivisionByZero),
        }
    }
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
