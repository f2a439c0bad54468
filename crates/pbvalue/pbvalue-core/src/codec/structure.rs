//! StructCodec: JSON objects to and from [`Struct`].

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use super::{value, Codec};
use crate::error::Result;
use crate::value::Struct;
use crate::wire::WireStruct;
use crate::JsonObject;

pub fn encode(json: &JsonObject) -> Result<Struct> {
    Codec::default().encode_struct(json)
}

/// Encode an object whose fields may be absent. Entries carrying `None` are
/// dropped; they are not turned into null values.
pub fn encode_sparse<'a, I, K>(fields: I) -> Result<Struct>
where
    I: IntoIterator<Item = (K, Option<&'a JsonValue>)>,
    K: Into<String>,
{
    Codec::default().encode_sparse_struct(fields)
}

pub fn decode(s: &Struct) -> Result<JsonObject> {
    Codec::default().decode_struct(s)
}

/// Decode a wire struct. A missing `fields` map reads as an empty object.
pub fn decode_wire(wire: &WireStruct) -> Result<JsonObject> {
    Codec::default().decode_wire_struct(wire)
}

pub fn from_wire(wire: &WireStruct) -> Result<Struct> {
    Codec::default().struct_from_wire(wire)
}

pub(crate) fn encode_at(codec: &Codec, json: &JsonObject, depth: usize) -> Result<Struct> {
    encode_sparse_at(codec, json.iter().map(|(k, v)| (k.as_str(), Some(v))), depth)
}

pub(crate) fn encode_sparse_at<'a, I, K>(codec: &Codec, fields: I, depth: usize) -> Result<Struct>
where
    I: IntoIterator<Item = (K, Option<&'a JsonValue>)>,
    K: Into<String>,
{
    let mut out = IndexMap::new();
    for (key, field) in fields {
        let key = key.into();
        let Some(field) = field else {
            log::trace!("skipping absent field {key:?}");
            continue;
        };
        let encoded = value::encode_at(codec, field, depth + 1)?;
        out.insert(key, encoded);
    }
    Ok(Struct { fields: out })
}

pub(crate) fn decode_at(codec: &Codec, s: &Struct, depth: usize) -> Result<JsonObject> {
    let mut out = JsonObject::new();
    for (key, field) in &s.fields {
        out.insert(key.clone(), value::decode_at(codec, field, depth + 1)?);
    }
    Ok(out)
}

pub(crate) fn decode_wire_at(codec: &Codec, wire: &WireStruct, depth: usize) -> Result<JsonObject> {
    let mut out = JsonObject::new();
    for (key, field) in wire.fields.iter().flatten() {
        out.insert(key.clone(), value::decode_wire_at(codec, field, depth + 1)?);
    }
    Ok(out)
}

pub(crate) fn from_wire_at(codec: &Codec, wire: &WireStruct, depth: usize) -> Result<Struct> {
    let mut out = IndexMap::new();
    for (key, field) in wire.fields.iter().flatten() {
        out.insert(key.clone(), value::from_wire_at(codec, field, depth + 1)?);
    }
    Ok(Struct { fields: out })
}
