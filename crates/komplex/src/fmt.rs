//! Textual forms of a [`Komplex`].
//!
//! - `{}` renders `"{re} + {im} i"`, each part in its shortest round-trippable form
//!   (`0.0 + 1.0 i`).
//! - `{:.N}` renders both parts with `N` fractional digits (`-1.00 + 0.00 i`).
//! - `{:?}` renders every field with two fractional digits
//!   (`Komplex(re=0.71, im=0.71, r=1.00, th=0.79)`).
//!
//! `Display` also honours width, fill and alignment (`{:>24.2}`), applied to the whole
//! rendered value. Alignment defaults to the left, same as for strings.
use std::fmt::{self, Write};

use crate::Komplex;

impl Komplex {
    /// Renders both parts with `digits` fractional digits. Equivalent to
    /// `format!("{komplex:.digits$}")`.
    pub fn format_precision(&self, digits: usize) -> String {
        format!("{self:.digits$}")
    }
}

impl Komplex {
    fn write_display<W: Write>(&self, dst: &mut W, precision: Option<usize>) -> fmt::Result {
        let (re, im) = self.as_cartesian();

        match precision {
            Some(digits) => write!(dst, "{re:.digits$} + {im:.digits$} i"),
            // f64's Debug impl always keeps a fractional part ('1.0' rather than '1')
            None => write!(dst, "{re:?} + {im:?} i"),
        }
    }
}

impl fmt::Display for Komplex {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let precision = formatter.precision();

        let Some(width) = formatter.width() else {
            return self.write_display(formatter, precision);
        };

        let mut rendered = String::with_capacity(32);
        self.write_display(&mut rendered, precision)?;

        // Formatter::pad would treat the precision as a max length, so pad by hand.
        let padding = width.saturating_sub(rendered.chars().count());
        let (before, after) = match formatter.align() {
            Some(fmt::Alignment::Right) => (padding, 0),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Left) | None => (0, padding),
        };

        let fill = formatter.fill();
        for _ in 0..before {
            formatter.write_char(fill)?;
        }
        formatter.write_str(&rendered)?;
        for _ in 0..after {
            formatter.write_char(fill)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Komplex {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "Komplex(re={:.2}, im={:.2}, r={:.2}, th={:.2})",
            self.re(),
            self.im(),
            self.r(),
            self.th()
        )
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use crate::Komplex;

    #[test]
    fn test_display_default() {
        assert_eq!(Komplex::I.to_string(), "0.0 + 1.0 i");
        assert_eq!(
            Komplex::from_cartesian(2.5, -0.125).unwrap().to_string(),
            "2.5 + -0.125 i"
        );
    }

    #[test]
    fn test_display_precision() {
        let squared = Komplex::I * Komplex::I;
        assert_eq!(format!("{squared:.2}"), "-1.00 + 0.00 i");

        let product = Komplex::from_cartesian(2.0, 3.0).unwrap()
            * Komplex::from_cartesian(4.0, 5.0).unwrap();
        assert_eq!(product.format_precision(2), "-7.00 + 22.00 i");
        assert_eq!(product.format_precision(0), "-7 + 22 i");
    }

    #[test]
    fn test_display_width() {
        let k = Komplex::from_cartesian(1.0, -2.0).unwrap();

        assert_eq!(format!("{k:>16}"), "    1.0 + -2.0 i");
        assert_eq!(format!("{k:16}|"), "1.0 + -2.0 i    |");
        assert_eq!(format!("{k:*^17.1}"), "**1.0 + -2.0 i***");
        assert_eq!(format!("{k:>18.2}"), "    1.00 + -2.00 i");
        // narrower than the value itself, nothing is cut off
        assert_eq!(format!("{k:4}"), "1.0 + -2.0 i");
    }

    #[test]
    fn test_debug() {
        let k = Komplex::from_polar(1.0, FRAC_PI_4).unwrap();
        assert_eq!(format!("{k:?}"), "Komplex(re=0.71, im=0.71, r=1.00, th=0.79)");

        let k = Komplex::from_cartesian(2.0, 3.0).unwrap();
        assert_eq!(format!("{k:?}"), "Komplex(re=2.00, im=3.00, r=3.61, th=0.98)");
    }

    #[test]
    fn test_no_negative_zero() {
        let conj = Komplex::ONE.conjugate();
        assert_eq!(conj.format_precision(2), "1.00 + 0.00 i");
        assert_eq!(conj.to_string(), "1.0 + 0.0 i");
    }
}
