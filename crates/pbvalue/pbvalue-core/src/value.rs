//! Value: the canonical in-memory form of `google.protobuf.Value`,
//! `google.protobuf.Struct` and `google.protobuf.ListValue`.
//!
//! A well-formed `Value` serializes as `{ "kind": "<label>", "<label>": <payload> }`.
//! Deserialization accepts the looser wire shape (see [`crate::wire`]) and
//! resolves it into this enum.

use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;
use crate::kind::Kind;
use crate::wire::{WireListValue, WireStruct, WireValue};

/// Numeric payload stored under `nullValue`.
pub const NULL_VALUE: i32 = 0;

/// Payload of the `nullValue` variant. Always written as `0`; any payload is
/// accepted on read and discarded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NullValue;

impl Serialize for NullValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(NULL_VALUE)
    }
}

impl<'de> Deserialize<'de> for NullValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IgnoredAny::deserialize(deserializer)?;
        Ok(NullValue)
    }
}

/// Exactly one of the six variants.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "WireValue")]
pub enum Value {
    Null,
    Number(f64),
    String(String),
    Bool(bool),
    Struct(Struct),
    List(ListValue),
}

/// String-keyed mapping of values. Field order follows insertion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireStruct")]
pub struct Struct {
    pub fields: IndexMap<String, Value>,
}

/// Ordered sequence of values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireListValue")]
pub struct ListValue {
    pub values: Vec<Value>,
}

impl Value {
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Bool(_) => Kind::Bool,
            Value::Struct(_) => Kind::Struct,
            Value::List(_) => Kind::List,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&Struct> {
        match self {
            Value::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListValue> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let kind = self.kind();
        let mut state = serializer.serialize_struct("Value", 2)?;
        state.serialize_field("kind", &kind)?;
        match self {
            Value::Null => state.serialize_field(kind.as_str(), &NullValue)?,
            Value::Number(n) => state.serialize_field(kind.as_str(), n)?,
            Value::String(s) => state.serialize_field(kind.as_str(), s)?,
            Value::Bool(b) => state.serialize_field(kind.as_str(), b)?,
            Value::Struct(s) => state.serialize_field(kind.as_str(), s)?,
            Value::List(l) => state.serialize_field(kind.as_str(), l)?,
        }
        state.end()
    }
}

impl TryFrom<WireValue> for Value {
    type Error = Error;

    fn try_from(wire: WireValue) -> Result<Self, Self::Error> {
        crate::codec::value::from_wire(&wire)
    }
}

impl TryFrom<WireStruct> for Struct {
    type Error = Error;

    fn try_from(wire: WireStruct) -> Result<Self, Self::Error> {
        crate::codec::structure::from_wire(&wire)
    }
}

impl TryFrom<WireListValue> for ListValue {
    type Error = Error;

    fn try_from(wire: WireListValue) -> Result<Self, Self::Error> {
        crate::codec::list::from_wire(&wire)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Struct> for Value {
    fn from(s: Struct) -> Self {
        Value::Struct(s)
    }
}

impl From<ListValue> for Value {
    fn from(l: ListValue) -> Self {
        Value::List(l)
    }
}

impl Struct {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Struct {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Struct {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl ListValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<Value> for ListValue {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        ListValue {
            values: iter.into_iter().collect(),
        }
    }
}
