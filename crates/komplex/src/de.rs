//! Komplex deserialization impl
//!
//! Accepts any of the forms [`Komplex`] can serialize as:
//!
//! - `{ "re": .., "im": .. }`
//! - `{ "r": .., "th": .. }`
//! - `[re, im]`
//! - a string in the display form, i.e `"3.0 + -4.0 i"`
//! - a plain number, taken as a real value
//!
//! Every path is validated by the same checked constructors as the rest of the crate.
use std::fmt;

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer};

use crate::Komplex;
use crate::error::Error;

impl<'de> Deserialize<'de> for Komplex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(KomplexVisitor)
    }
}

#[derive(Clone, Copy, Deserialize)]
#[serde(field_identifier, rename_all = "lowercase")]
enum Field {
    Re,
    Im,
    R,
    Th,
}

impl Field {
    const fn as_str(&self) -> &'static str {
        match self {
            Self::Re => "re",
            Self::Im => "im",
            Self::R => "r",
            Self::Th => "th",
        }
    }
}

/// Builds a [`Komplex`] from one optional coordinate pair. [`None`] if neither half was set.
fn from_pair<E>(
    pair: (Option<f64>, Option<f64>),
    fields: (Field, Field),
    ctor: fn(f64, f64) -> crate::Result<Komplex>,
) -> Result<Option<Komplex>, E>
where
    E: de::Error,
{
    match pair {
        (Some(a), Some(b)) => ctor(a, b)
            .map(Some)
            .map_err(|err| err.into_de_error(Unexpected::Map)),
        (None, None) => Ok(None),
        (Some(_), None) => Err(de::Error::missing_field(fields.1.as_str())),
        (None, Some(_)) => Err(de::Error::missing_field(fields.0.as_str())),
    }
}

struct KomplexVisitor;

impl<'de> de::Visitor<'de> for KomplexVisitor {
    type Value = Komplex;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(
            "a complex number, as a {re, im} or {r, th} map, a [re, im] pair, a string or a real",
        )
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_f64(v as f64)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_f64(v as f64)
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Komplex::from_real(v).map_err(|err| err.into_de_error(Unexpected::Float(v)))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse::<Komplex>()
            .map_err(|err: Error| err.into_de_error(Unexpected::Str(v)))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let re: f64 = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;

        let im: f64 = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;

        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(3, &self));
        }

        Komplex::from_cartesian(re, im).map_err(|err| err.into_de_error(Unexpected::Seq))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        let mut re = None;
        let mut im = None;
        let mut r = None;
        let mut th = None;

        while let Some(field) = map.next_key::<Field>()? {
            let slot = match field {
                Field::Re => &mut re,
                Field::Im => &mut im,
                Field::R => &mut r,
                Field::Th => &mut th,
            };

            if slot.is_some() {
                return Err(de::Error::duplicate_field(field.as_str()));
            }

            *slot = Some(map.next_value::<f64>()?);
        }

        let cartesian =
            from_pair::<A::Error>((re, im), (Field::Re, Field::Im), Komplex::from_cartesian)?;
        let polar = from_pair::<A::Error>((r, th), (Field::R, Field::Th), Komplex::from_polar)?;

        match (cartesian, polar) {
            (Some(cartesian), Some(polar)) => {
                if cartesian != polar {
                    tracing::warn!(
                        message = "cartesian and polar coordinates disagree, using cartesian",
                        ?cartesian,
                        ?polar
                    );
                }

                Ok(cartesian)
            }
            (Some(komplex), None) | (None, Some(komplex)) => Ok(komplex),
            (None, None) => Err(de::Error::missing_field("re")),
        }
    }
}
