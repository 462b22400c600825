//! Capability traits for binary encode and decode.

use crate::error::TypeError;
use bytes::BytesMut;

/// Whether an encoder produced a value or a NULL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsNull {
    Yes,
    No,
}

/// Binary decoding capability.
///
/// `C` is the opaque context handle threaded through every dispatch;
/// this crate forwards it without interpreting it.
///
/// `src` is `None` when the wire frame carried the NULL sentinel, and
/// otherwise borrows the payload from the value buffer. Implementations
/// that cannot represent NULL report [`TypeError::NullNotAllowed`]; the
/// enclosing row/array helper rewrites the index to the failing
/// position.
pub trait DecodeBinary<C> {
    fn decode_binary(&mut self, cx: &C, src: Option<&[u8]>) -> Result<(), TypeError>;
}

/// Binary encoding capability.
///
/// Encoders append their payload to `buf` and report whether they
/// produced a value. On [`IsNull::Yes`] nothing may have been appended;
/// the enclosing writer emits the NULL frame instead.
pub trait EncodeBinary<C> {
    fn encode_binary(&self, cx: &C, buf: &mut BytesMut) -> Result<IsNull, TypeError>;
}

impl<C, T> DecodeBinary<C> for Option<T>
where
    T: DecodeBinary<C> + Default,
{
    fn decode_binary(&mut self, cx: &C, src: Option<&[u8]>) -> Result<(), TypeError> {
        match src {
            None => {
                *self = None;
                Ok(())
            }
            Some(_) => {
                let mut value = T::default();
                value.decode_binary(cx, src)?;
                *self = Some(value);
                Ok(())
            }
        }
    }
}

impl<C, T> EncodeBinary<C> for Option<T>
where
    T: EncodeBinary<C>,
{
    fn encode_binary(&self, cx: &C, buf: &mut BytesMut) -> Result<IsNull, TypeError> {
        match self {
            Some(value) => value.encode_binary(cx, buf),
            None => Ok(IsNull::Yes),
        }
    }
}
