//! pbvalue-wasm: JS bindings for pbvalue-core.
//!
//! `encode*` functions take plain JS data and return `{ kind, <kind>: ... }`
//! objects; `decode*` functions take such objects (tagged or not) and return
//! plain JS data. Every result is a plain object or array, never a `Map`.

mod convert;

use pbvalue_core::{Codec, CodecConfig, JsonValue, WireListValue, WireStruct, WireValue};
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use crate::convert::{js_to_json, js_to_json_array, js_to_sparse_entries};

/// Bumped whenever exported signatures change.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    Ok(value.serialize(&swb::Serializer::json_compatible())?)
}

/// Codec with its own configuration. The free functions below use the defaults.
#[wasm_bindgen]
pub struct PbValueCodec {
    codec: Codec,
}

#[wasm_bindgen]
impl PbValueCodec {
    /// Pass `{ max_depth: n }`, `{ max_depth: null }` for no limit, or
    /// undefined/null for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<PbValueCodec, JsError> {
        #[cfg(feature = "console_error")]
        console_error_panic_hook::set_once();

        let cfg: CodecConfig = if jsvalue_is_undefined_or_null(&config) {
            CodecConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        Ok(PbValueCodec {
            codec: Codec::new(cfg),
        })
    }

    #[wasm_bindgen(js_name = encodeValue)]
    pub fn encode_value(&self, input: JsValue) -> Result<JsValue, JsError> {
        let json = js_to_json(&input, self.codec.config())?;
        to_js(&self.codec.encode_value(&json)?)
    }

    #[wasm_bindgen(js_name = decodeValue)]
    pub fn decode_value(&self, value: JsValue) -> Result<JsValue, JsError> {
        let wire: WireValue = swb::from_value(value)?;
        to_js(&self.codec.decode_wire_value(&wire)?)
    }

    /// Encode a plain object. Properties set to `undefined` are left out.
    #[wasm_bindgen(js_name = encodeStruct)]
    pub fn encode_struct(&self, object: JsValue) -> Result<JsValue, JsError> {
        let entries = js_to_sparse_entries(&object, self.codec.config())?;
        let fields = entries.iter().map(|(key, field)| (key.as_str(), field.as_ref()));
        to_js(&self.codec.encode_sparse_struct(fields)?)
    }

    #[wasm_bindgen(js_name = decodeStruct)]
    pub fn decode_struct(&self, value: JsValue) -> Result<JsValue, JsError> {
        let wire: WireStruct = swb::from_value(value)?;
        to_js(&self.codec.decode_wire_struct(&wire)?)
    }

    #[wasm_bindgen(js_name = encodeList)]
    pub fn encode_list(&self, array: JsValue) -> Result<JsValue, JsError> {
        let items = js_to_json_array(&array, self.codec.config())?;
        to_js(&self.codec.encode_list(&items)?)
    }

    #[wasm_bindgen(js_name = decodeList)]
    pub fn decode_list(&self, value: JsValue) -> Result<JsValue, JsError> {
        let wire: WireListValue = swb::from_value(value)?;
        to_js(&self.codec.decode_wire_list(&wire)?)
    }

    /// JSON text in, encoded `Value` JSON text out.
    #[wasm_bindgen(js_name = encodeValueJson)]
    pub fn encode_value_json(&self, json: &str) -> Result<String, JsError> {
        let parsed: JsonValue = serde_json::from_str(json)?;
        let encoded = self.codec.encode_value(&parsed)?;
        Ok(serde_json::to_string(&encoded)?)
    }

    /// `Value` JSON text in (tagged or not), decoded JSON text out.
    #[wasm_bindgen(js_name = decodeValueJson)]
    pub fn decode_value_json(&self, value_json: &str) -> Result<String, JsError> {
        let wire: WireValue = serde_json::from_str(value_json)?;
        let decoded = self.codec.decode_wire_value(&wire)?;
        Ok(serde_json::to_string(&decoded)?)
    }
}

fn default_codec() -> PbValueCodec {
    PbValueCodec {
        codec: Codec::default(),
    }
}

#[wasm_bindgen(js_name = encodeValue)]
pub fn encode_value(input: JsValue) -> Result<JsValue, JsError> {
    default_codec().encode_value(input)
}

#[wasm_bindgen(js_name = decodeValue)]
pub fn decode_value(value: JsValue) -> Result<JsValue, JsError> {
    default_codec().decode_value(value)
}

#[wasm_bindgen(js_name = encodeStruct)]
pub fn encode_struct(object: JsValue) -> Result<JsValue, JsError> {
    default_codec().encode_struct(object)
}

#[wasm_bindgen(js_name = decodeStruct)]
pub fn decode_struct(value: JsValue) -> Result<JsValue, JsError> {
    default_codec().decode_struct(value)
}

#[wasm_bindgen(js_name = encodeList)]
pub fn encode_list(array: JsValue) -> Result<JsValue, JsError> {
    default_codec().encode_list(array)
}

#[wasm_bindgen(js_name = decodeList)]
pub fn decode_list(value: JsValue) -> Result<JsValue, JsError> {
    default_codec().decode_list(value)
}

#[wasm_bindgen(js_name = encodeValueJson)]
pub fn encode_value_json(json: &str) -> Result<String, JsError> {
    default_codec().encode_value_json(json)
}

#[wasm_bindgen(js_name = decodeValueJson)]
pub fn decode_value_json(value_json: &str) -> Result<String, JsError> {
    default_codec().decode_value_json(value_json)
}
