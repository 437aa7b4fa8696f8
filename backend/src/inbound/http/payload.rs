//! Decoding helpers for flat JSON request objects with text fields.
//!
//! Request bodies must be JSON objects. Positional arrays are rejected even
//! though serde's derived struct visitors would accept them. Field values
//! follow the falsy rules clients expect from the service: `null`, `false`,
//! zero, and empty arrays or objects read as absent. Any other non-string
//! value is a type error.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Unexpected, Visitor};

/// A text field that may have been omitted or sent as a falsy value.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct TextField(pub(crate) Option<String>);

impl<'de> de::Deserialize<'de> for TextField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TextFieldVisitor)
    }
}

struct TextFieldVisitor;

impl<'de> Visitor<'de> for TextFieldVisitor {
    type Value = TextField;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or an empty value")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(TextField(Some(value.to_owned())))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(TextField(Some(value)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(TextField(None))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(TextField(None))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        if value {
            Err(E::invalid_type(Unexpected::Bool(value), &self))
        } else {
            Ok(TextField(None))
        }
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        if value == 0 {
            Ok(TextField(None))
        } else {
            Err(E::invalid_type(Unexpected::Signed(value), &self))
        }
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        if value == 0 {
            Ok(TextField(None))
        } else {
            Err(E::invalid_type(Unexpected::Unsigned(value), &self))
        }
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        if value.abs() > 0.0 {
            Err(E::invalid_type(Unexpected::Float(value), &self))
        } else {
            Ok(TextField(None))
        }
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        match seq.next_element::<IgnoredAny>()? {
            None => Ok(TextField(None)),
            Some(_) => Err(de::Error::invalid_type(Unexpected::Seq, &self)),
        }
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        match map.next_entry::<IgnoredAny, IgnoredAny>()? {
            None => Ok(TextField(None)),
            Some(_) => Err(de::Error::invalid_type(Unexpected::Map, &self)),
        }
    }
}

/// Decode a JSON object, returning the named text fields in order.
///
/// Unknown keys are skipped. A repeated key keeps its last value.
pub(crate) fn deserialize_object<'de, D, const N: usize>(
    deserializer: D,
    expecting: &'static str,
    names: [&'static str; N],
) -> Result<[Option<String>; N], D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_map(ObjectVisitor { expecting, names })
}

struct ObjectVisitor<const N: usize> {
    expecting: &'static str,
    names: [&'static str; N],
}

impl<'de, const N: usize> Visitor<'de> for ObjectVisitor<N> {
    type Value = [Option<String>; N];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut values: [Option<String>; N] = std::array::from_fn(|_| None);
        while let Some(key) = map.next_key::<String>()? {
            let slot = self
                .names
                .iter()
                .position(|name| *name == key)
                .and_then(|index| values.get_mut(index));
            match slot {
                Some(slot) => *slot = map.next_value::<TextField>()?.0,
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(values)
    }
}
