//! Error types for the codecs.

use thiserror::Error;

use crate::kind::Kind;
use crate::wire::WireValue;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way an encode or decode call can fail. All of them abort the whole
/// call; no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// Encode input matches none of null, bool, number, string, array or plain object.
    #[error("unable to infer type for {found}")]
    TypeUnsupported { found: String },

    /// Decode input carries neither a kind tag nor any populated variant field.
    #[error("unable to determine kind for {value:?}")]
    KindUnresolved { value: Box<WireValue> },

    /// Explicit kind tag that names none of the six variants.
    #[error("unknown value kind \"{label}\"")]
    UnknownKind { label: String },

    /// Explicit kind tag whose payload field is absent.
    #[error("value tagged {kind} has no {kind} field")]
    MissingPayload { kind: Kind },

    #[error("list value has no values")]
    MissingListValues,

    /// NaN and the infinities have no JSON form.
    #[error("number {value} cannot be represented in JSON")]
    NumberNotRepresentable { value: f64 },

    #[error("nesting depth exceeds the limit of {limit}")]
    DepthExceeded { limit: usize },
}
