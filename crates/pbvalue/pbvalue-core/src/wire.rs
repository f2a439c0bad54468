//! Loose wire shapes for values received from foreign producers.
//!
//! Every variant field is optional and the `kind` tag may be missing, empty,
//! or accompanied by other populated fields. These types only exist on the
//! way in; [`crate::codec`] resolves them into the canonical [`Value`] enum
//! or straight into JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::value::{ListValue, NullValue, Struct, Value};

/// A `Value` as sent by a foreign producer.
///
/// The outer `Option` of each payload field records whether the field was
/// present at all; the inner one is `None` when it was sent as `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub null_value: Option<NullValue>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub number_value: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub string_value: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub bool_value: Option<Option<bool>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub struct_value: Option<Option<WireStruct>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub list_value: Option<Option<WireListValue>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WireStruct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<IndexMap<String, WireValue>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WireListValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<WireValue>>,
}

// A field that is present counts as populated even when its payload is `null`.
fn deserialize_present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl WireValue {
    /// Whether the payload field named by `kind` is set.
    pub fn is_populated(&self, kind: Kind) -> bool {
        match kind {
            Kind::Struct => self.struct_value.is_some(),
            Kind::List => self.list_value.is_some(),
            Kind::Number => self.number_value.is_some(),
            Kind::String => self.string_value.is_some(),
            Kind::Bool => self.bool_value.is_some(),
            Kind::Null => self.null_value.is_some(),
        }
    }

    /// Decide which variant this value holds.
    ///
    /// A non-empty `kind` tag is authoritative and the other fields are never
    /// consulted. Without one, the first populated field in
    /// [`Kind::CANONICAL_ORDER`] wins.
    pub fn resolve_kind(&self) -> Result<Kind> {
        if let Some(label) = self.kind.as_deref().filter(|label| !label.is_empty()) {
            let kind: Kind = label.parse()?;
            let ignored = Kind::CANONICAL_ORDER
                .iter()
                .filter(|other| **other != kind && self.is_populated(**other))
                .count();
            if ignored > 0 {
                log::debug!("value tagged {kind} also populates {ignored} other field(s)");
            }
            return Ok(kind);
        }

        match Kind::CANONICAL_ORDER
            .iter()
            .copied()
            .find(|kind| self.is_populated(*kind))
        {
            Some(kind) => {
                log::debug!("value has no kind tag; inferred {kind} from populated fields");
                Ok(kind)
            }
            None => Err(Error::KindUnresolved {
                value: Box::new(self.clone()),
            }),
        }
    }

    fn tagged(kind: Kind) -> Self {
        WireValue {
            kind: Some(kind.as_str().to_string()),
            ..WireValue::default()
        }
    }
}

impl From<&Value> for WireValue {
    fn from(value: &Value) -> Self {
        let mut wire = WireValue::tagged(value.kind());
        match value {
            Value::Null => wire.null_value = Some(NullValue),
            Value::Number(n) => wire.number_value = Some(Some(*n)),
            Value::String(s) => wire.string_value = Some(Some(s.clone())),
            Value::Bool(b) => wire.bool_value = Some(Some(*b)),
            Value::Struct(s) => wire.struct_value = Some(Some(s.into())),
            Value::List(l) => wire.list_value = Some(Some(l.into())),
        }
        wire
    }
}

impl From<&Struct> for WireStruct {
    fn from(s: &Struct) -> Self {
        WireStruct {
            fields: Some(
                s.fields
                    .iter()
                    .map(|(key, value)| (key.clone(), value.into()))
                    .collect(),
            ),
        }
    }
}

impl From<&ListValue> for WireListValue {
    fn from(l: &ListValue) -> Self {
        WireListValue {
            values: Some(l.values.iter().map(WireValue::from).collect()),
        }
    }
}
