//! Leaf scalar codecs.
//!
//! Enough of a catalog to drive the row and array dispatch end to end.
//! A full catalog keyed by OID belongs to the layer that owns the type
//! registry, not here.

use crate::codec::{DecodeBinary, EncodeBinary, IsNull};
use crate::error::TypeError;
use bytes::{BufMut, BytesMut};

fn fixed_width<'a>(
    type_name: &'static str,
    expected: usize,
    src: Option<&'a [u8]>,
) -> Result<&'a [u8], TypeError> {
    let src = src.ok_or(TypeError::NullNotAllowed { index: 0 })?;
    if src.len() != expected {
        return Err(TypeError::InvalidScalarLength {
            type_name,
            expected,
            actual: src.len(),
        });
    }
    Ok(src)
}

impl<C> DecodeBinary<C> for bool {
    fn decode_binary(&mut self, _cx: &C, src: Option<&[u8]>) -> Result<(), TypeError> {
        let src = fixed_width("bool", 1, src)?;
        *self = src[0] != 0;
        Ok(())
    }
}

impl<C> EncodeBinary<C> for bool {
    fn encode_binary(&self, _cx: &C, buf: &mut BytesMut) -> Result<IsNull, TypeError> {
        buf.put_u8(*self as u8);
        Ok(IsNull::No)
    }
}

impl<C> DecodeBinary<C> for i16 {
    fn decode_binary(&mut self, _cx: &C, src: Option<&[u8]>) -> Result<(), TypeError> {
        let src = fixed_width("int2", 2, src)?;
        *self = i16::from_be_bytes(src.try_into().unwrap());
        Ok(())
    }
}

impl<C> EncodeBinary<C> for i16 {
    fn encode_binary(&self, _cx: &C, buf: &mut BytesMut) -> Result<IsNull, TypeError> {
        buf.put_i16(*self);
        Ok(IsNull::No)
    }
}

impl<C> DecodeBinary<C> for i32 {
    fn decode_binary(&mut self, _cx: &C, src: Option<&[u8]>) -> Result<(), TypeError> {
        let src = fixed_width("int4", 4, src)?;
        *self = i32::from_be_bytes(src.try_into().unwrap());
        Ok(())
    }
}

impl<C> EncodeBinary<C> for i32 {
    fn encode_binary(&self, _cx: &C, buf: &mut BytesMut) -> Result<IsNull, TypeError> {
        buf.put_i32(*self);
        Ok(IsNull::No)
    }
}

impl<C> DecodeBinary<C> for i64 {
    fn decode_binary(&mut self, _cx: &C, src: Option<&[u8]>) -> Result<(), TypeError> {
        let src = fixed_width("int8", 8, src)?;
        *self = i64::from_be_bytes(src.try_into().unwrap());
        Ok(())
    }
}

impl<C> EncodeBinary<C> for i64 {
    fn encode_binary(&self, _cx: &C, buf: &mut BytesMut) -> Result<IsNull, TypeError> {
        buf.put_i64(*self);
        Ok(IsNull::No)
    }
}

impl<C> DecodeBinary<C> for f64 {
    fn decode_binary(&mut self, _cx: &C, src: Option<&[u8]>) -> Result<(), TypeError> {
        let src = fixed_width("float8", 8, src)?;
        *self = f64::from_be_bytes(src.try_into().unwrap());
        Ok(())
    }
}

impl<C> EncodeBinary<C> for f64 {
    fn encode_binary(&self, _cx: &C, buf: &mut BytesMut) -> Result<IsNull, TypeError> {
        buf.put_f64(*self);
        Ok(IsNull::No)
    }
}

impl<C> DecodeBinary<C> for String {
    fn decode_binary(&mut self, _cx: &C, src: Option<&[u8]>) -> Result<(), TypeError> {
        let src = src.ok_or(TypeError::NullNotAllowed { index: 0 })?;
        let text = std::str::from_utf8(src).map_err(|_| TypeError::InvalidUtf8)?;
        self.clear();
        self.push_str(text);
        Ok(())
    }
}

impl<C> EncodeBinary<C> for String {
    fn encode_binary(&self, cx: &C, buf: &mut BytesMut) -> Result<IsNull, TypeError> {
        self.as_str().encode_binary(cx, buf)
    }
}

impl<C> EncodeBinary<C> for &str {
    fn encode_binary(&self, _cx: &C, buf: &mut BytesMut) -> Result<IsNull, TypeError> {
        buf.put_slice(self.as_bytes());
        Ok(IsNull::No)
    }
}
