//! Wire coercion rules shared by every record.
//!
//! The Zabbix API transmits integers, floats, codes and identifiers as JSON
//! strings, while some server versions send bare numbers for the same
//! fields. The helpers here accept both on decode and always emit strings.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Scalar as it appears on the wire: a string or a bare number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
        }
    }

    fn parse<T, E>(self) -> Result<T, E>
    where
        T: FromStr,
        T::Err: Display,
        E: serde::de::Error,
    {
        let text = self.into_text();
        text.parse::<T>()
            .map_err(|e| E::custom(format!("invalid value {text:?}: {e}")))
    }
}

/// `#[serde(with = "wire::stringified")]` for fields sent as strings.
pub mod stringified {
    use super::{Deserialize, Deserializer, Display, FromStr, Scalar, Serializer};

    /// Encode a value as its string form.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error if writing fails.
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    /// Decode a value from a string or a bare number.
    ///
    /// # Errors
    ///
    /// Fails when the payload is neither a string nor a number, or when its
    /// text does not parse as `T`.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        Scalar::deserialize(deserializer)?.parse()
    }
}

/// `#[serde(with = "wire::optional")]` for optional stringified fields.
///
/// `null` and `""` both decode to `None`. Pair it with
/// `skip_serializing_if = "Option::is_none"` so `None` never reaches the wire.
pub mod optional {
    use super::{Deserialize, Deserializer, Display, FromStr, Scalar, Serializer};

    /// Encode `Some` as a string and `None` as `null`.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error if writing fails.
    // serde's `with` contract hands us `&Option<T>`
    #[allow(clippy::ref_option)]
    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    /// Decode an optional value from a string, a bare number, `""` or `null`.
    ///
    /// # Errors
    ///
    /// Fails when a non-empty payload does not parse as `T`.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        match Option::<Scalar>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Scalar::Text(s)) if s.is_empty() => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }
}

/// A single identifier from an id list, sent as a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id(pub String);

impl Id {
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Id(Scalar::deserialize(deserializer)?.into_text()))
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// Identifier collection returned by delete calls.
///
/// Depending on the server version the ids arrive either as an array or as
/// an object keyed by position. Only the count matters to callers.
#[derive(Debug, Clone, PartialEq)]
pub enum IdList {
    Sequence(Vec<Value>),
    Mapping(Map<String, Value>),
}

impl IdList {
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            IdList::Sequence(ids) => ids.len(),
            IdList::Mapping(ids) => ids.len(),
        }
    }
}

impl<'de> Deserialize<'de> for IdList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(ids) => Ok(IdList::Sequence(ids)),
            Value::Object(ids) => Ok(IdList::Mapping(ids)),
            other => Err(D::Error::custom(format!(
                "expected array or object of ids, got {other}"
            ))),
        }
    }
}
