//! The three codecs bridging JSON data and `Value` trees.
//!
//! [`value`] dispatches on the shape of its input and recurses into
//! [`structure`] and [`list`] for composites, which recurse back into
//! [`value`] for every child. Each module offers free functions bound to
//! the default [`Codec`]; use a configured `Codec` to change the limits.

pub mod list;
pub mod structure;
pub mod value;

use serde_json::Value as JsonValue;

use crate::config::CodecConfig;
use crate::error::{Error, Result};
use crate::value::{ListValue, Struct, Value};
use crate::wire::{WireListValue, WireStruct, WireValue};
use crate::JsonObject;

/// Stateless converter. Cheap to clone and safe to share between threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Codec without a nesting limit.
    pub fn unbounded() -> Self {
        Self::new(CodecConfig::unbounded())
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Fails once `depth` passes the configured limit.
    pub(crate) fn enter(&self, depth: usize) -> Result<()> {
        match self.config.max_depth {
            Some(limit) if depth > limit => Err(Error::DepthExceeded { limit }),
            _ => Ok(()),
        }
    }

    pub fn encode_value(&self, json: &JsonValue) -> Result<Value> {
        value::encode_at(self, json, 0)
    }

    pub fn decode_value(&self, value: &Value) -> Result<JsonValue> {
        value::decode_at(self, value, 0)
    }

    pub fn decode_wire_value(&self, wire: &WireValue) -> Result<JsonValue> {
        value::decode_wire_at(self, wire, 0)
    }

    pub fn value_from_wire(&self, wire: &WireValue) -> Result<Value> {
        value::from_wire_at(self, wire, 0)
    }

    pub fn encode_struct(&self, json: &JsonObject) -> Result<Struct> {
        structure::encode_at(self, json, 0)
    }

    /// Encode fields whose value may be missing. `None` entries are left out
    /// of the resulting struct; `Some(null)` is kept as a null value.
    pub fn encode_sparse_struct<'a, I, K>(&self, fields: I) -> Result<Struct>
    where
        I: IntoIterator<Item = (K, Option<&'a JsonValue>)>,
        K: Into<String>,
    {
        structure::encode_sparse_at(self, fields, 0)
    }

    pub fn decode_struct(&self, s: &Struct) -> Result<JsonObject> {
        structure::decode_at(self, s, 0)
    }

    pub fn decode_wire_struct(&self, wire: &WireStruct) -> Result<JsonObject> {
        structure::decode_wire_at(self, wire, 0)
    }

    pub fn struct_from_wire(&self, wire: &WireStruct) -> Result<Struct> {
        structure::from_wire_at(self, wire, 0)
    }

    pub fn encode_list(&self, json: &[JsonValue]) -> Result<ListValue> {
        list::encode_at(self, json, 0)
    }

    pub fn decode_list(&self, l: &ListValue) -> Result<Vec<JsonValue>> {
        list::decode_at(self, l, 0)
    }

    pub fn decode_wire_list(&self, wire: &WireListValue) -> Result<Vec<JsonValue>> {
        list::decode_wire_at(self, wire, 0)
    }

    pub fn list_from_wire(&self, wire: &WireListValue) -> Result<ListValue> {
        list::from_wire_at(self, wire, 0)
    }
}
