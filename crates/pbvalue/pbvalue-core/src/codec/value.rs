//! ValueCodec: one JSON datum to and from a tagged [`Value`].

use serde_json::{Number, Value as JsonValue};

use super::{list, structure, Codec};
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::value::Value;
use crate::wire::WireValue;

/// Largest integer a double holds exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Encode any JSON value into a [`Value`].
pub fn encode(json: &JsonValue) -> Result<Value> {
    Codec::default().encode_value(json)
}

/// Decode a canonical [`Value`] back into JSON.
pub fn decode(value: &Value) -> Result<JsonValue> {
    Codec::default().decode_value(value)
}

/// Decode a value received in the loose wire shape, resolving its kind first.
pub fn decode_wire(wire: &WireValue) -> Result<JsonValue> {
    Codec::default().decode_wire_value(wire)
}

/// Resolve a loose wire value into the canonical [`Value`] enum.
pub fn from_wire(wire: &WireValue) -> Result<Value> {
    Codec::default().value_from_wire(wire)
}

pub(crate) fn encode_at(codec: &Codec, json: &JsonValue, depth: usize) -> Result<Value> {
    codec.enter(depth)?;
    match json {
        JsonValue::Object(obj) => structure::encode_at(codec, obj, depth).map(Value::Struct),
        JsonValue::Array(items) => list::encode_at(codec, items, depth).map(Value::List),
        JsonValue::Number(n) => number_from_json(n).map(Value::Number),
        JsonValue::String(s) => Ok(Value::String(s.clone())),
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Null => Ok(Value::Null),
    }
}

pub(crate) fn decode_at(codec: &Codec, value: &Value, depth: usize) -> Result<JsonValue> {
    codec.enter(depth)?;
    match value {
        Value::List(l) => list::decode_at(codec, l, depth).map(JsonValue::Array),
        Value::Struct(s) => structure::decode_at(codec, s, depth).map(JsonValue::Object),
        Value::Null => Ok(JsonValue::Null),
        Value::Number(n) => number_to_json(*n),
        Value::String(s) => Ok(JsonValue::String(s.clone())),
        Value::Bool(b) => Ok(JsonValue::Bool(*b)),
    }
}

pub(crate) fn decode_wire_at(codec: &Codec, wire: &WireValue, depth: usize) -> Result<JsonValue> {
    codec.enter(depth)?;
    let kind = wire.resolve_kind()?;
    match kind {
        Kind::List => {
            let l = composite(wire.list_value.as_ref(), kind)?;
            list::decode_wire_at(codec, l, depth).map(JsonValue::Array)
        }
        Kind::Struct => {
            let s = composite(wire.struct_value.as_ref(), kind)?;
            structure::decode_wire_at(codec, s, depth).map(JsonValue::Object)
        }
        // The stored marker is irrelevant.
        Kind::Null => Ok(JsonValue::Null),
        Kind::Number => match scalar(wire.number_value.as_ref(), kind)? {
            Some(n) => number_to_json(*n),
            None => Ok(JsonValue::Null),
        },
        Kind::String => Ok(scalar(wire.string_value.as_ref(), kind)?
            .map_or(JsonValue::Null, |s| JsonValue::String(s.clone()))),
        Kind::Bool => Ok(scalar(wire.bool_value.as_ref(), kind)?
            .map_or(JsonValue::Null, |b| JsonValue::Bool(*b))),
    }
}

pub(crate) fn from_wire_at(codec: &Codec, wire: &WireValue, depth: usize) -> Result<Value> {
    codec.enter(depth)?;
    let kind = wire.resolve_kind()?;
    match kind {
        Kind::List => {
            let l = composite(wire.list_value.as_ref(), kind)?;
            list::from_wire_at(codec, l, depth).map(Value::List)
        }
        Kind::Struct => {
            let s = composite(wire.struct_value.as_ref(), kind)?;
            structure::from_wire_at(codec, s, depth).map(Value::Struct)
        }
        Kind::Null => Ok(Value::Null),
        Kind::Number => Ok(scalar(wire.number_value.as_ref(), kind)?
            .map_or(Value::Null, |n| Value::Number(*n))),
        Kind::String => Ok(scalar(wire.string_value.as_ref(), kind)?
            .map_or(Value::Null, |s| Value::String(s.clone()))),
        Kind::Bool => Ok(scalar(wire.bool_value.as_ref(), kind)?
            .map_or(Value::Null, |b| Value::Bool(*b))),
    }
}

/// A scalar field sent as `null` reads back as null.
fn scalar<T>(field: Option<&Option<T>>, kind: Kind) -> Result<Option<&T>> {
    field
        .map(Option::as_ref)
        .ok_or(Error::MissingPayload { kind })
}

/// A struct or list field must carry a body, even when present.
fn composite<T>(field: Option<&Option<T>>, kind: Kind) -> Result<&T> {
    field
        .and_then(Option::as_ref)
        .ok_or(Error::MissingPayload { kind })
}

fn number_from_json(n: &Number) -> Result<f64> {
    n.as_f64()
        .filter(|f| f.is_finite())
        .ok_or_else(|| Error::TypeUnsupported {
            found: format!("number {n}"),
        })
}

/// Integral numbers inside the exact-double range come back as JSON integers
/// so that `10` survives a round trip as `10` rather than `10.0`.
/// `1.0` therefore decodes as `1`, and `-0.0` loses its sign and decodes as `0`.
fn number_to_json(n: f64) -> Result<JsonValue> {
    if !n.is_finite() {
        return Err(Error::NumberNotRepresentable { value: n });
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Ok(JsonValue::from(n as i64));
    }
    Number::from_f64(n)
        .map(JsonValue::Number)
        .ok_or(Error::NumberNotRepresentable { value: n })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integral_numbers_decode_as_integers() {
        assert_eq!(number_to_json(10.0).unwrap(), json!(10));
        assert_eq!(number_to_json(-3.0).unwrap(), json!(-3));
        assert_eq!(number_to_json(0.25).unwrap(), json!(0.25));
        assert_eq!(number_to_json(1e300).unwrap(), json!(1e300));
    }

    #[test]
    fn integral_floats_lose_their_fraction_and_zero_its_sign() {
        let one = decode(&encode(&json!(1.0)).unwrap()).unwrap();
        assert_eq!(one, json!(1));
        assert!(one.is_u64());

        let zero = decode(&encode(&json!(-0.0)).unwrap()).unwrap();
        assert_eq!(zero, json!(0));
        assert_eq!(zero.to_string(), "0");

        // Beyond 2^53 - 1 integers are kept as doubles.
        let big = decode(&encode(&json!(u64::MAX)).unwrap()).unwrap();
        assert!(big.is_f64());
        assert_eq!(big.as_f64(), Some(u64::MAX as f64));
    }

    #[test]
    fn untagged_null_scalar_wins_the_scan_and_decodes_to_null() {
        let wire: WireValue =
            serde_json::from_value(json!({ "numberValue": null, "stringValue": "x" })).unwrap();
        assert_eq!(decode_wire(&wire).unwrap(), JsonValue::Null);
        assert_eq!(from_wire(&wire).unwrap(), Value::Null);
    }

    #[test]
    fn tagged_null_scalar_decodes_to_null() {
        let wire: WireValue =
            serde_json::from_value(json!({ "kind": "boolValue", "boolValue": null })).unwrap();
        assert_eq!(decode_wire(&wire).unwrap(), JsonValue::Null);
    }

    #[test]
    fn null_struct_or_list_payload_fails_instead_of_skipping_ahead() {
        let wire: WireValue =
            serde_json::from_value(json!({ "structValue": null, "boolValue": true })).unwrap();
        assert_eq!(
            decode_wire(&wire).unwrap_err(),
            Error::MissingPayload { kind: Kind::Struct }
        );

        let wire: WireValue =
            serde_json::from_value(json!({ "listValue": null, "numberValue": 1 })).unwrap();
        assert_eq!(
            from_wire(&wire).unwrap_err(),
            Error::MissingPayload { kind: Kind::List }
        );
    }

    #[test]
    fn non_finite_numbers_are_rejected_on_decode() {
        assert!(matches!(
            decode(&Value::Number(f64::NAN)),
            Err(Error::NumberNotRepresentable { .. })
        ));
        assert_eq!(
            decode(&Value::Number(f64::INFINITY)).unwrap_err(),
            Error::NumberNotRepresentable {
                value: f64::INFINITY
            }
        );
    }

    #[test]
    fn tagged_value_without_payload_is_rejected() {
        let wire: WireValue = serde_json::from_value(json!({ "kind": "stringValue" })).unwrap();
        assert_eq!(
            decode_wire(&wire).unwrap_err(),
            Error::MissingPayload { kind: Kind::String }
        );
        assert_eq!(
            from_wire(&wire).unwrap_err(),
            Error::MissingPayload { kind: Kind::String }
        );
    }

    #[test]
    fn tagged_null_ignores_missing_marker() {
        let wire: WireValue = serde_json::from_value(json!({ "kind": "nullValue" })).unwrap();
        assert_eq!(decode_wire(&wire).unwrap(), JsonValue::Null);
        assert_eq!(from_wire(&wire).unwrap(), Value::Null);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let wire: WireValue =
            serde_json::from_value(json!({ "kind": "bytesValue", "stringValue": "x" })).unwrap();
        assert_eq!(
            decode_wire(&wire).unwrap_err(),
            Error::UnknownKind {
                label: "bytesValue".into()
            }
        );
    }
}
