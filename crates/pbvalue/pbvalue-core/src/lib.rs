//! pbvalue-core: convert JSON data to and from the `google.protobuf.Value`,
//! `Struct` and `ListValue` shapes used to carry untyped data over protobuf
//! schemas.
//!
//! ```
//! use pbvalue_core::{codec, Value};
//! use serde_json::json;
//!
//! let encoded = codec::value::encode(&json!({ "foo": "bar", "nil": null })).unwrap();
//! assert_eq!(
//!     serde_json::to_value(&encoded).unwrap(),
//!     json!({
//!         "kind": "structValue",
//!         "structValue": { "fields": {
//!             "foo": { "kind": "stringValue", "stringValue": "bar" },
//!             "nil": { "kind": "nullValue", "nullValue": 0 }
//!         }}
//!     })
//! );
//! assert!(matches!(encoded, Value::Struct(_)));
//! assert_eq!(codec::value::decode(&encoded).unwrap(), json!({ "foo": "bar", "nil": null }));
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod kind;
#[cfg(feature = "prost")]
pub mod prost;
pub mod value;
pub mod wire;

pub use codec::Codec;
pub use config::{CodecConfig, DEFAULT_MAX_DEPTH};
pub use error::{Error, Result};
pub use kind::Kind;
pub use value::{ListValue, NullValue, Struct, Value, NULL_VALUE};
pub use wire::{WireListValue, WireStruct, WireValue};

pub use serde_json::Value as JsonValue;

/// String-keyed JSON object, the natural counterpart of [`Struct`].
pub type JsonObject = serde_json::Map<String, JsonValue>;
