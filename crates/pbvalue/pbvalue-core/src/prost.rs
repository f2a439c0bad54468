//! Conversions to and from the `prost_types` well-known types.
//!
//! These stay in memory; producing protobuf bytes is left to `prost`.

use prost_types::value::Kind as ProstKind;

use crate::error::{Error, Result};
use crate::value::{ListValue, Struct, Value, NULL_VALUE};
use crate::wire::WireValue;

impl From<Value> for prost_types::Value {
    fn from(value: Value) -> Self {
        let kind = match value {
            Value::Null => ProstKind::NullValue(NULL_VALUE),
            Value::Number(n) => ProstKind::NumberValue(n),
            Value::String(s) => ProstKind::StringValue(s),
            Value::Bool(b) => ProstKind::BoolValue(b),
            Value::Struct(s) => ProstKind::StructValue(s.into()),
            Value::List(l) => ProstKind::ListValue(l.into()),
        };
        prost_types::Value { kind: Some(kind) }
    }
}

impl From<Struct> for prost_types::Struct {
    fn from(s: Struct) -> Self {
        prost_types::Struct {
            fields: s.fields.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}

impl From<ListValue> for prost_types::ListValue {
    fn from(l: ListValue) -> Self {
        prost_types::ListValue {
            values: l.values.into_iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<prost_types::Value> for Value {
    type Error = Error;

    /// A prost value with no `kind` set cannot be resolved.
    fn try_from(value: prost_types::Value) -> Result<Self> {
        match value.kind {
            Some(ProstKind::NullValue(_)) => Ok(Value::Null),
            Some(ProstKind::NumberValue(n)) => Ok(Value::Number(n)),
            Some(ProstKind::StringValue(s)) => Ok(Value::String(s)),
            Some(ProstKind::BoolValue(b)) => Ok(Value::Bool(b)),
            Some(ProstKind::StructValue(s)) => Struct::try_from(s).map(Value::Struct),
            Some(ProstKind::ListValue(l)) => ListValue::try_from(l).map(Value::List),
            None => Err(Error::KindUnresolved {
                value: Box::new(WireValue::default()),
            }),
        }
    }
}

impl TryFrom<prost_types::Struct> for Struct {
    type Error = Error;

    fn try_from(s: prost_types::Struct) -> Result<Self> {
        let fields = s
            .fields
            .into_iter()
            .map(|(k, v)| Value::try_from(v).map(|v| (k, v)))
            .collect::<Result<_>>()?;
        Ok(Struct { fields })
    }
}

impl TryFrom<prost_types::ListValue> for ListValue {
    type Error = Error;

    fn try_from(l: prost_types::ListValue) -> Result<Self> {
        let values = l
            .values
            .into_iter()
            .map(Value::try_from)
            .collect::<Result<_>>()?;
        Ok(ListValue { values })
    }
}
