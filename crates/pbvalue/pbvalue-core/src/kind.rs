//! Kind: the discriminant naming which variant of a `Value` is populated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The six variants of a `google.protobuf.Value`, named by their wire labels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    #[serde(rename = "structValue")]
    Struct,
    #[serde(rename = "listValue")]
    List,
    #[serde(rename = "numberValue")]
    Number,
    #[serde(rename = "stringValue")]
    String,
    #[serde(rename = "boolValue")]
    Bool,
    #[serde(rename = "nullValue")]
    Null,
}

impl Kind {
    /// Order in which variant fields are probed when a value carries no kind tag.
    /// The first populated field wins.
    pub const CANONICAL_ORDER: [Kind; 6] = [
        Kind::Struct,
        Kind::List,
        Kind::Number,
        Kind::String,
        Kind::Bool,
        Kind::Null,
    ];

    /// Wire label, which doubles as the name of the payload field.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Struct => "structValue",
            Kind::List => "listValue",
            Kind::Number => "numberValue",
            Kind::String => "stringValue",
            Kind::Bool => "boolValue",
            Kind::Null => "nullValue",
        }
    }

    #[inline]
    pub fn is_composite(self) -> bool {
        matches!(self, Kind::Struct | Kind::List)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Kind::CANONICAL_ORDER
            .iter()
            .copied()
            .find(|kind| kind.as_str() == label)
            .ok_or_else(|| Error::UnknownKind {
                label: label.to_string(),
            })
    }
}
