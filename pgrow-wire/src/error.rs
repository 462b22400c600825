//! Wire-format error types.

use thiserror::Error;

/// Structural errors in a binary array or composite buffer.
///
/// Truncation variants report how many bytes the current read required
/// against how many were actually left, so a caller can tell exactly
/// where a malformed buffer stopped the parse.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("array header too short: need {required} bytes, have {actual}")]
    HeaderTooShort { required: usize, actual: usize },

    #[error("negative array dimension count: {0}")]
    NegativeDimCount(i32),

    #[error("negative length {length} in array dimension {index}")]
    NegativeDimLength { index: usize, length: i32 },

    #[error("array dimension lengths overflow the element count")]
    ElementCountOverflow,

    #[error("array element truncated: need {required} bytes, have {actual}")]
    ElementTruncated { required: usize, actual: usize },

    #[error("composite field truncated: need {required} bytes, have {actual}")]
    FieldTruncated { required: usize, actual: usize },

    #[error("invalid negative length: {0}")]
    InvalidLength(i32),

    #[error("negative composite field count: {0}")]
    NegativeFieldCount(i32),

    #[error("frame too large: {size} bytes (max {max})")]
    FrameTooLarge { size: usize, max: usize },

    #[error("{remaining} trailing bytes after the final frame")]
    TrailingBytes { remaining: usize },
}
