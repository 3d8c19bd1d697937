//! Komplex serialization methods + impl

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::Komplex;

impl Komplex {
    /// Serializes the Cartesian pair as `{ re: .., im: .. }`. The default implementation of
    /// [`Serialize::serialize`] calls this under the hood.
    pub fn serialize_as_cartesian<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut struct_ser = serializer.serialize_struct("Komplex", 2)?;

        struct_ser.serialize_field("re", &self.re())?;
        struct_ser.serialize_field("im", &self.im())?;

        struct_ser.end()
    }

    /// Serializes the polar pair as `{ r: .., th: .. }`.
    pub fn serialize_as_polar<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut struct_ser = serializer.serialize_struct("Komplex", 2)?;

        struct_ser.serialize_field("r", &self.r())?;
        struct_ser.serialize_field("th", &self.th())?;

        struct_ser.end()
    }

    /// Serializes as a 2 element `[re, im]` array.
    pub fn serialize_as_pair<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq_ser = serializer.serialize_seq(Some(2))?;

        seq_ser.serialize_element(&self.re())?;
        seq_ser.serialize_element(&self.im())?;

        seq_ser.end()
    }

    /// Serializes as the default display string, i.e `"3.0 + -4.0 i"`.
    pub fn serialize_as_str<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Serialize for Komplex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.serialize_as_cartesian(serializer)
    }
}
