//! Array-level encode and decode for `Vec` destinations.

use crate::codec::{DecodeBinary, EncodeBinary, IsNull};
use crate::error::TypeError;
use bytes::BytesMut;
use pgrow_wire::{array_add, array_add_null, array_start, ArrayDimension, ArrayHeader, Oid, WireError};

/// Encodes a slice as a one-dimensional array with lower bound 1.
///
/// An empty slice encodes as the zero-dimension header, matching how
/// the server transmits empty arrays. The header's contains-null flag
/// reflects the elements actually encoded as NULL, so the element
/// frames are built before the header is written.
pub fn encode_array<C, T>(
    cx: &C,
    buf: &mut BytesMut,
    element_oid: Oid,
    elems: &[T],
) -> Result<(), TypeError>
where
    T: EncodeBinary<C>,
{
    if elems.is_empty() {
        array_start(buf, &[], false, element_oid);
        return Ok(());
    }

    let mut body = BytesMut::new();
    let mut scratch = BytesMut::new();
    let mut contains_null = false;
    for elem in elems {
        scratch.clear();
        match elem.encode_binary(cx, &mut scratch)? {
            IsNull::Yes => {
                contains_null = true;
                array_add_null(&mut body);
            }
            IsNull::No => array_add(&mut body, &scratch)?,
        }
    }

    let dims = [ArrayDimension {
        length: elems.len() as i32,
        lower_bound: 1,
    }];
    array_start(buf, &dims, contains_null, element_oid);
    buf.extend_from_slice(&body);
    Ok(())
}

/// Decodes an array value into a `Vec`, in flat row-major order.
///
/// A NULL element fails with [`TypeError::NullNotAllowed`] naming the
/// element index unless `T` itself accepts NULL (for example
/// `Option<i32>`). On success `out` holds exactly the decoded elements;
/// on error it is left empty. Trailing bytes after the final element
/// are rejected.
pub fn decode_array<C, T>(cx: &C, src: &[u8], out: &mut Vec<T>) -> Result<(), TypeError>
where
    T: DecodeBinary<C> + Default,
{
    let (header, mut elems) = ArrayHeader::parse(src)?;
    let count = header.element_count();

    let mut values = std::mem::take(out);
    values.clear();
    // An element frame is at least 4 bytes, which bounds how much a
    // hostile header can make us reserve.
    values.reserve(count.min(elems.remaining() / 4));

    for index in 0..count {
        let elem = elems.next_elem()?;
        let mut value = T::default();
        value.decode_binary(cx, elem).map_err(|err| match err {
            TypeError::NullNotAllowed { .. } => TypeError::NullNotAllowed { index },
            other => other,
        })?;
        values.push(value);
    }

    if elems.remaining() != 0 {
        return Err(WireError::TrailingBytes {
            remaining: elems.remaining(),
        }
        .into());
    }

    *out = values;
    Ok(())
}
