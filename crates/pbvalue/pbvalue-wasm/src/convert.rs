//! Walk live JS values into JSON data the core codecs accept.
//!
//! Only what JSON can express is let through: `null`, booleans, finite
//! numbers, strings, arrays and plain objects. Object properties holding
//! `undefined` are reported as absent so they never reach the encoded
//! struct. Everything else fails with `TypeUnsupported`.

use js_sys::{Array, Object};
use pbvalue_core::{CodecConfig, Error, JsonObject, JsonValue, Result};
use wasm_bindgen::{JsCast, JsValue};

/// Own enumerable properties of a plain object, with `undefined` mapped to `None`.
pub(crate) type SparseEntries = Vec<(String, Option<JsonValue>)>;

pub(crate) fn js_to_json(value: &JsValue, config: &CodecConfig) -> Result<JsonValue> {
    walk(value, config, 0)
}

pub(crate) fn js_to_json_array(value: &JsValue, config: &CodecConfig) -> Result<Vec<JsonValue>> {
    if !Array::is_array(value) {
        return Err(unsupported(value));
    }
    elements(value.unchecked_ref(), config, 0)
}

pub(crate) fn js_to_sparse_entries(value: &JsValue, config: &CodecConfig) -> Result<SparseEntries> {
    if !is_plain_object(value) {
        return Err(unsupported(value));
    }
    entries(value.unchecked_ref(), config, 0)
}

fn walk(value: &JsValue, config: &CodecConfig, depth: usize) -> Result<JsonValue> {
    // Cyclic objects would otherwise recurse forever.
    if let Some(limit) = config.max_depth {
        if depth > limit {
            return Err(Error::DepthExceeded { limit });
        }
    }

    if value.is_null() {
        return Ok(JsonValue::Null);
    }
    if let Some(b) = value.as_bool() {
        return Ok(JsonValue::Bool(b));
    }
    if let Some(n) = value.as_f64() {
        return serde_json::Number::from_f64(n)
            .map(JsonValue::Number)
            .ok_or_else(|| unsupported(value));
    }
    if let Some(s) = value.as_string() {
        return Ok(JsonValue::String(s));
    }
    if Array::is_array(value) {
        return elements(value.unchecked_ref(), config, depth).map(JsonValue::Array);
    }
    if is_plain_object(value) {
        let mut out = JsonObject::new();
        for (key, field) in entries(value.unchecked_ref(), config, depth)? {
            if let Some(field) = field {
                out.insert(key, field);
            }
        }
        return Ok(JsonValue::Object(out));
    }
    Err(unsupported(value))
}

fn elements(array: &Array, config: &CodecConfig, depth: usize) -> Result<Vec<JsonValue>> {
    array
        .iter()
        .map(|item| walk(&item, config, depth + 1))
        .collect()
}

fn entries(object: &Object, config: &CodecConfig, depth: usize) -> Result<SparseEntries> {
    let mut out = Vec::new();
    for entry in Object::entries(object).iter() {
        let pair: Array = entry.unchecked_into();
        let key = pair.get(0).as_string().unwrap_or_default();
        let field = pair.get(1);
        if field.is_undefined() {
            out.push((key, None));
            continue;
        }
        out.push((key, Some(walk(&field, config, depth + 1)?)));
    }
    Ok(out)
}

/// `{}` literals and `Object.create(null)`; not class instances, dates, maps, ...
fn is_plain_object(value: &JsValue) -> bool {
    if !value.is_object() {
        return false;
    }
    let proto = Object::get_prototype_of(value);
    proto.is_null() || Object::is(&proto, &Object::get_prototype_of(&Object::new()))
}

fn unsupported(value: &JsValue) -> Error {
    let found = if value.is_undefined() {
        "undefined".to_string()
    } else {
        let tag = value.js_typeof().as_string().unwrap_or_default();
        format!("{tag} {value:?}")
    };
    Error::TypeUnsupported { found }
}
