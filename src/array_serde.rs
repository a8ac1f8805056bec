// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;
use std::marker::PhantomData;

use crate::{Element, NdArray, Shape};

/// Version tag written as the `"v"` field of a serialized array.
pub const ARRAY_FORMAT_VERSION: u8 = 1u8;

/// Verifies that the version of the deserialized array matches the current
/// `ARRAY_FORMAT_VERSION`.
pub fn verify_version<E>(v: u8) -> Result<(), E>
where
    E: de::Error,
{
    if v != ARRAY_FORMAT_VERSION {
        let err_msg = format!("unknown array version: {}", v);
        return Err(de::Error::custom(err_msg));
    }
    Ok(())
}

/// **Requires crate feature `"serde"`**
impl Serialize for Shape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.dims().serialize(serializer)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let dims = Vec::<usize>::deserialize(deserializer)?;
        Shape::new(&dims).map_err(de::Error::custom)
    }
}

/// **Requires crate feature `"serde"`**
///
/// An array serializes as a struct `{ "v": 1, "dim": [..], "data": [..] }`
/// with the elements in row-major order.
impl<A> Serialize for NdArray<A>
where
    A: Element + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Array", 3)?;
        state.serialize_field("v", &ARRAY_FORMAT_VERSION)?;
        state.serialize_field("dim", self.shape())?;
        state.serialize_field("data", &Sequence(self.as_slice()))?;
        state.end()
    }
}

// private slice wrapper
struct Sequence<'a, A>(&'a [A]);

impl<A> Serialize for Sequence<'_, A>
where
    A: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for elt in self.0 {
            seq.serialize_element(elt)?;
        }
        seq.end()
    }
}

struct ArrayVisitor<A> {
    _marker: PhantomData<A>,
}

enum ArrayField {
    Version,
    Dim,
    Data,
}

impl<A> ArrayVisitor<A> {
    fn new() -> Self {
        ArrayVisitor { _marker: PhantomData }
    }
}

static ARRAY_FIELDS: &[&str] = &["v", "dim", "data"];

/// **Requires crate feature `"serde"`**
impl<'de, A> Deserialize<'de> for NdArray<A>
where
    A: Element + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<NdArray<A>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("Array", ARRAY_FIELDS, ArrayVisitor::new())
    }
}

impl<'de> Deserialize<'de> for ArrayField {
    fn deserialize<D>(deserializer: D) -> Result<ArrayField, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ArrayFieldVisitor;

        impl Visitor<'_> for ArrayFieldVisitor {
            type Value = ArrayField;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(r#""v", "dim", or "data""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<ArrayField, E>
            where
                E: de::Error,
            {
                match value {
                    "v" => Ok(ArrayField::Version),
                    "dim" => Ok(ArrayField::Dim),
                    "data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(other, ARRAY_FIELDS)),
                }
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<ArrayField, E>
            where
                E: de::Error,
            {
                match value {
                    b"v" => Ok(ArrayField::Version),
                    b"dim" => Ok(ArrayField::Dim),
                    b"data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(&String::from_utf8_lossy(other), ARRAY_FIELDS)),
                }
            }
        }

        deserializer.deserialize_identifier(ArrayFieldVisitor)
    }
}

fn build_array<A, E>(dim: Shape, data: Vec<A>) -> Result<NdArray<A>, E>
where
    A: Element,
    E: de::Error,
{
    NdArray::from_shape_vec(dim, data).map_err(|_| de::Error::custom("data and dimension must match in size"))
}

impl<'de, A> Visitor<'de> for ArrayVisitor<A>
where
    A: Element + Deserialize<'de>,
{
    type Value = NdArray<A>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ndnum representation")
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<NdArray<A>, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let v: u8 = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(0, &self)),
        };
        verify_version(v)?;

        let dim: Shape = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(1, &self)),
        };

        let data: Vec<A> = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(2, &self)),
        };

        build_array(dim, data)
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<NdArray<A>, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut v: Option<u8> = None;
        let mut data: Option<Vec<A>> = None;
        let mut dim: Option<Shape> = None;

        while let Some(key) = visitor.next_key()? {
            match key {
                ArrayField::Version => {
                    let val = visitor.next_value()?;
                    verify_version(val)?;
                    v = Some(val);
                }
                ArrayField::Data => {
                    data = Some(visitor.next_value()?);
                }
                ArrayField::Dim => {
                    dim = Some(visitor.next_value()?);
                }
            }
        }

        if v.is_none() {
            return Err(de::Error::missing_field("v"));
        }
        let data = data.ok_or_else(|| de::Error::missing_field("data"))?;
        let dim = dim.ok_or_else(|| de::Error::missing_field("dim"))?;

        build_array(dim, data)
    }
}
