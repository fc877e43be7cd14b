//! This module defines the canonical, type-safe representation of column values
//! used throughout the coltypes codec layer.
//!
//! The source systems this library talks to (CrateDB over its JSON HTTP wire)
//! accept one "array" shape on the application side that is really two shapes:
//! a positional list and an insertion-ordered keyed map. `ColumnValue` models
//! both explicitly so codecs can validate which shape they were given instead
//! of guessing from serialized bytes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A key of a `ColumnValue::Map` entry.
///
/// Keys carry the source-language semantics: a key that *looks* like a
/// canonical base-10 integer IS an integer key. The coercion happens once,
/// at the JSON boundary (`ColumnValue::from_json`), never on comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum MapKey {
    Int(i64),
    Str(String),
}

impl MapKey {
    /// Applies the key-coercion rule to a raw JSON object key.
    ///
    /// A key is an integer key iff it is the canonical rendering of an `i64`:
    /// optional leading `-`, no leading zeros (except `"0"` itself), no `"-0"`,
    /// and in range. Everything else stays a string key, including `"01"`,
    /// `"1.5"` and `"+1"`.
    pub fn from_json_key(raw: String) -> Self {
        match canonical_int_key(&raw) {
            Some(n) => MapKey::Int(n),
            None => MapKey::Str(raw),
        }
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKey::Int(n) => write!(f, "{}", n),
            MapKey::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Returns `Some(n)` iff `s` is the canonical base-10 rendering of `n: i64`.
fn canonical_int_key(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Leading zeros and "-0" are not canonical.
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if s.starts_with('-') && digits == "0" {
        return None;
    }
    s.parse::<i64>().ok()
}

/// The canonical, internal representation of a column value in the codec layer.
///
/// `List` is a positional sequence and is sequential by construction. `Map`
/// preserves insertion order (entry order is semantically significant for the
/// sequentiality check, so a plain hash map would be wrong here).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ColumnValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<ColumnValue>),
    Map(Vec<(MapKey, ColumnValue)>),
}

impl ColumnValue {
    /// Returns `true` if the value is the null sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, ColumnValue::Null)
    }

    /// Returns `true` if the value is list-typed (a `List` or a `Map`).
    ///
    /// Both variants originate from the same host-language structure; which
    /// one a value landed in depends only on its keys at the JSON boundary.
    pub fn is_list_typed(&self) -> bool {
        matches!(self, ColumnValue::List(_) | ColumnValue::Map(_))
    }

    /// The number of elements of a list-typed value, `None` for scalars/null.
    pub fn element_count(&self) -> Option<usize> {
        match self {
            ColumnValue::List(items) => Some(items.len()),
            ColumnValue::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Returns `true` iff the value is a sequential list: list-typed, with
    /// positional keys forming exactly the contiguous range `0..count`, in
    /// order. The empty list trivially qualifies.
    ///
    /// A `List` always qualifies. A `Map` qualifies iff its keys, enumerated
    /// in insertion order, are `Int(0), Int(1), ..`. Note that `{1: a, 0: b}`
    /// has the right key *set* but the wrong order and does NOT qualify.
    pub fn is_sequential_list(&self) -> bool {
        match self {
            ColumnValue::List(_) => true,
            ColumnValue::Map(entries) => entries
                .iter()
                .enumerate()
                .all(|(i, (key, _))| matches!(key, MapKey::Int(n) if *n == i as i64)),
            _ => false,
        }
    }

    /// Converts a `serde_json::Value` from the driver wire into a `ColumnValue`.
    ///
    /// JSON arrays become `List`; JSON objects become `Map` with the key
    /// coercion rule applied per key. Numbers that fit an `i64` stay integral.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ColumnValue::Null,
            serde_json::Value::Bool(b) => ColumnValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => ColumnValue::Int(i),
                // u64 beyond i64::MAX and all floats land here; `as_f64` is
                // total for both when arbitrary_precision is disabled.
                None => ColumnValue::Float(n.as_f64().unwrap_or(0.0)),
            },
            serde_json::Value::String(s) => ColumnValue::Str(s),
            serde_json::Value::Array(items) => {
                ColumnValue::List(items.into_iter().map(ColumnValue::from_json).collect())
            }
            serde_json::Value::Object(entries) => ColumnValue::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (MapKey::from_json_key(k), ColumnValue::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Converts a `ColumnValue` into the `serde_json::Value` handed to the
    /// driver. Map keys are stringified; non-finite floats have no JSON
    /// rendering and degrade to null.
    pub fn into_json(self) -> serde_json::Value {
        match self {
            ColumnValue::Null => serde_json::Value::Null,
            ColumnValue::Bool(b) => serde_json::Value::Bool(b),
            ColumnValue::Int(i) => serde_json::Value::Number(i.into()),
            ColumnValue::Float(f) => match serde_json::Number::from_f64(f) {
                Some(n) => serde_json::Value::Number(n),
                None => serde_json::Value::Null,
            },
            ColumnValue::Str(s) => serde_json::Value::String(s),
            ColumnValue::List(items) => {
                serde_json::Value::Array(items.into_iter().map(ColumnValue::into_json).collect())
            }
            ColumnValue::Map(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.into_json()))
                    .collect(),
            ),
        }
    }
}

// Serde support goes through the JSON mapping above so that a `ColumnValue`
// embedded in a config bag (e.g. a column default) serializes exactly like
// the wire representation.
impl Serialize for ColumnValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.clone().into_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ColumnValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(ColumnValue::from_json(serde_json::Value::deserialize(
            deserializer,
        )?))
    }
}

// Convenience conversions used heavily in call sites and tests.
impl From<bool> for ColumnValue {
    fn from(v: bool) -> Self {
        ColumnValue::Bool(v)
    }
}
impl From<i64> for ColumnValue {
    fn from(v: i64) -> Self {
        ColumnValue::Int(v)
    }
}
impl From<f64> for ColumnValue {
    fn from(v: f64) -> Self {
        ColumnValue::Float(v)
    }
}
impl From<&str> for ColumnValue {
    fn from(v: &str) -> Self {
        ColumnValue::Str(v.to_string())
    }
}
impl From<String> for ColumnValue {
    fn from(v: String) -> Self {
        ColumnValue::Str(v)
    }
}
impl<T: Into<ColumnValue>> From<Vec<T>> for ColumnValue {
    fn from(items: Vec<T>) -> Self {
        ColumnValue::List(items.into_iter().map(Into::into).collect())
    }
}
