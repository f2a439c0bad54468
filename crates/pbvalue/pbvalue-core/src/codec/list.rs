//! ListCodec: JSON arrays to and from [`ListValue`].

use serde_json::Value as JsonValue;

use super::{value, Codec};
use crate::error::{Error, Result};
use crate::value::ListValue;
use crate::wire::WireListValue;

pub fn encode(json: &[JsonValue]) -> Result<ListValue> {
    Codec::default().encode_list(json)
}

pub fn decode(l: &ListValue) -> Result<Vec<JsonValue>> {
    Codec::default().decode_list(l)
}

/// Decode a wire list. Unlike structs there is no empty fallback: a list
/// without `values` fails with [`Error::MissingListValues`].
pub fn decode_wire(wire: &WireListValue) -> Result<Vec<JsonValue>> {
    Codec::default().decode_wire_list(wire)
}

pub fn from_wire(wire: &WireListValue) -> Result<ListValue> {
    Codec::default().list_from_wire(wire)
}

pub(crate) fn encode_at(codec: &Codec, json: &[JsonValue], depth: usize) -> Result<ListValue> {
    let values = json
        .iter()
        .map(|item| value::encode_at(codec, item, depth + 1))
        .collect::<Result<Vec<_>>>()?;
    Ok(ListValue { values })
}

pub(crate) fn decode_at(codec: &Codec, l: &ListValue, depth: usize) -> Result<Vec<JsonValue>> {
    l.values
        .iter()
        .map(|item| value::decode_at(codec, item, depth + 1))
        .collect()
}

pub(crate) fn decode_wire_at(
    codec: &Codec,
    wire: &WireListValue,
    depth: usize,
) -> Result<Vec<JsonValue>> {
    required_values(wire)?
        .iter()
        .map(|item| value::decode_wire_at(codec, item, depth + 1))
        .collect()
}

pub(crate) fn from_wire_at(codec: &Codec, wire: &WireListValue, depth: usize) -> Result<ListValue> {
    let values = required_values(wire)?
        .iter()
        .map(|item| value::from_wire_at(codec, item, depth + 1))
        .collect::<Result<Vec<_>>>()?;
    Ok(ListValue { values })
}

fn required_values(wire: &WireListValue) -> Result<&[crate::wire::WireValue]> {
    wire.values.as_deref().ok_or(Error::MissingListValues)
}
