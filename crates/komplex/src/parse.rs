//! [`FromStr`] for [`Komplex`].
//!
//! Accepts the default [`Display`] form (`"3.0 + -4.0 i"`), the usual shorthand (`"3-4i"`,
//! `"-i"`), a bare real (`"2.5"`) or a bare imaginary part (`"4 i"`).
//!
//! [`Display`]: std::fmt::Display
use std::str::FromStr;

use crate::Komplex;
use crate::error::{Component, Error, ParseError};

impl FromStr for Komplex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err(ParseError::Empty.into());
        }

        let Some(body) = s.strip_suffix('i') else {
            let re = parse_part(Component::Re, s)?;
            return Self::from_cartesian(re, 0.0);
        };

        let body = body.trim_end();

        let (re, im) = match find_separator(body) {
            Some(idx) => {
                let re = parse_part(Component::Re, &body[..idx])?;
                let im = parse_coefficient(&body[idx..])?;
                (re, im)
            }
            None => (0.0, parse_coefficient(body)?),
        };

        Self::from_cartesian(re, im)
    }
}

/// Finds the sign splitting the real part from the imaginary part. It has to directly follow
/// the end of a number, which skips exponent signs ('1e-5') and the sign of a negative
/// imaginary part ('+ -4').
fn find_separator(body: &str) -> Option<usize> {
    let mut prev = None;

    for (idx, ch) in body.char_indices() {
        if matches!(ch, '+' | '-')
            && prev.is_some_and(|prev: char| prev == '.' || prev.is_ascii_digit())
        {
            return Some(idx);
        }

        if !ch.is_whitespace() {
            prev = Some(ch);
        }
    }

    None
}

/// Parses the imaginary coefficient, with any leading signs. A missing coefficient means 1.
fn parse_coefficient(text: &str) -> Result<f64, ParseError> {
    let mut text = text.trim();
    let mut negative = false;

    // at most one separator sign, plus the coefficient's own sign
    for _ in 0..2 {
        if let Some(rest) = text.strip_prefix('-') {
            negative = !negative;
            text = rest.trim_start();
        } else if let Some(rest) = text.strip_prefix('+') {
            text = rest.trim_start();
        } else {
            break;
        }
    }

    let magnitude = if text.is_empty() {
        1.0
    } else {
        parse_part(Component::Im, text)?
    };

    Ok(if negative { -magnitude } else { magnitude })
}

fn parse_part(component: Component, text: &str) -> Result<f64, ParseError> {
    let text = text.trim();

    text.parse::<f64>().map_err(|source| ParseError::Float {
        component,
        text: text.to_owned(),
        source,
    })
}
