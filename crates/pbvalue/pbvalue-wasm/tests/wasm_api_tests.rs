#![cfg(target_arch = "wasm32")]
use js_sys::{Array, Date, Function, Object, Reflect};
use serde::Serialize;
use serde_json::json;
use serde_wasm_bindgen as swb;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use pbvalue_wasm::{
    abi_version, decode_list, decode_struct, decode_value, decode_value_json, encode_list,
    encode_struct, encode_value, encode_value_json, PbValueCodec,
};

wasm_bindgen_test_configure!(run_in_browser);

fn js(json: serde_json::Value) -> JsValue {
    json.serialize(&swb::Serializer::json_compatible()).unwrap()
}

fn to_json(value: JsValue) -> serde_json::Value {
    swb::from_value(value).unwrap()
}

fn set(target: &Object, key: &str, value: &JsValue) {
    Reflect::set(target, &JsValue::from_str(key), value).unwrap();
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn encodes_plain_object() {
    let out = to_json(encode_value(js(json!({ "foo": "bar", "no": false, "nil": null }))).unwrap());
    assert_eq!(
        out,
        json!({
            "kind": "structValue",
            "structValue": { "fields": {
                "foo": { "kind": "stringValue", "stringValue": "bar" },
                "no": { "kind": "boolValue", "boolValue": false },
                "nil": { "kind": "nullValue", "nullValue": 0 }
            }}
        })
    );
}

#[wasm_bindgen_test]
fn undefined_properties_are_skipped() {
    let obj = Object::new();
    set(&obj, "foo", &JsValue::from_str("bar"));
    set(&obj, "gone", &JsValue::UNDEFINED);

    let out = to_json(encode_struct(obj.clone().into()).unwrap());
    assert_eq!(
        out,
        json!({ "fields": { "foo": { "kind": "stringValue", "stringValue": "bar" } } })
    );

    let nested = to_json(encode_value(obj.into()).unwrap());
    assert!(nested["structValue"]["fields"].get("gone").is_none());
}

#[wasm_bindgen_test]
fn date_is_unsupported() {
    let err = encode_value(Date::new_0().into()).unwrap_err();
    let message: JsValue = err.into();
    let text = Reflect::get(&message, &JsValue::from_str("message"))
        .unwrap()
        .as_string()
        .unwrap();
    assert!(text.starts_with("unable to infer type"), "{text}");
}

#[wasm_bindgen_test]
fn functions_and_top_level_undefined_are_unsupported() {
    assert!(encode_value(Function::new_no_args("return 1").into()).is_err());
    assert!(encode_value(JsValue::UNDEFINED).is_err());
    assert!(encode_value(JsValue::from_f64(f64::NAN)).is_err());

    let arr = Array::new();
    arr.push(&JsValue::UNDEFINED);
    assert!(encode_list(arr.into()).is_err());
}

#[wasm_bindgen_test]
fn list_keeps_null_elements() {
    let out = to_json(encode_list(js(json!([null, 10]))).unwrap());
    let values = out["values"].as_array().unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0]["kind"], "nullValue");
    assert_eq!(values[1]["numberValue"].as_f64(), Some(10.0));
    assert_eq!(to_json(decode_list(js(out)).unwrap()), json!([null, 10]));
}

#[wasm_bindgen_test]
fn decode_prefers_kind_tag() {
    let tagged = json!({ "kind": "stringValue", "stringValue": "foo", "nullValue": 0 });
    let out = decode_value(js(tagged));
    assert_eq!(out.unwrap().as_string().as_deref(), Some("foo"));

    let out = decode_value(js(json!({ "stringValue": "foo" })));
    assert_eq!(out.unwrap().as_string().as_deref(), Some("foo"));

    assert!(decode_value(js(json!({}))).is_err());
}

#[wasm_bindgen_test]
fn decode_struct_defaults_missing_fields() {
    let out = to_json(decode_struct(Object::new().into()).unwrap());
    assert_eq!(out, json!({}));
}

#[wasm_bindgen_test]
fn json_text_helpers_round_trip() {
    let encoded = encode_value_json(r#"{"a":[true,"x"]}"#).unwrap();
    let decoded = decode_value_json(&encoded).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&decoded).unwrap();
    assert_eq!(parsed, json!({ "a": [true, "x"] }));
}

#[wasm_bindgen_test]
fn configured_codec_enforces_depth() {
    let codec = PbValueCodec::new(js(json!({ "max_depth": 1 }))).unwrap();
    assert!(codec.encode_value(js(json!([1]))).is_ok());
    assert!(codec.encode_value(js(json!([[1]]))).is_err());

    let unbounded = PbValueCodec::new(js(json!({ "max_depth": null }))).unwrap();
    assert!(unbounded.encode_value(js(json!([[[[1]]]]))).is_ok());
}

#[wasm_bindgen_test]
fn cyclic_objects_fail_instead_of_overflowing() {
    let obj = Object::new();
    set(&obj, "self", &obj);
    assert!(encode_value(obj.into()).is_err());
}
