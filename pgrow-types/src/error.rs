//! Type-level error types.

use pgrow_wire::WireError;
use thiserror::Error;

/// Boxed error raised by a caller-supplied codec.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors from typed encode/decode over the wire framing.
#[derive(Debug, Error)]
pub enum TypeError {
    /// Structural failure in the underlying buffer.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// The value declares a different arity than the destination schema.
    #[error("expected {expected} fields, found {found}")]
    FieldCountMismatch { expected: usize, found: usize },

    /// A NULL element or field reached a destination that cannot
    /// represent NULL. `index` names the offending element or field;
    /// decode into an `Option` destination to accept NULLs.
    #[error("element {index} is NULL, destination cannot represent NULL")]
    NullNotAllowed { index: usize },

    /// A fixed-width scalar payload had the wrong size.
    #[error("invalid payload length for {type_name}: expected {expected} bytes, got {actual}")]
    InvalidScalarLength {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A text payload was not valid UTF-8.
    #[error("invalid UTF-8 in text payload")]
    InvalidUtf8,

    /// Failure raised by a caller-supplied codec, passed through
    /// unchanged.
    #[error("codec error: {0}")]
    Codec(#[source] BoxError),
}
