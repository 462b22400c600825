//! Row-level encode and scan.
//!
//! These helpers dispatch one composite value to or from an ordered set
//! of capability objects. Decoding is strictly linear and all-or-nothing:
//! the first failure aborts the call, and on error the destinations are
//! left in an unspecified partially-decoded state.

use crate::codec::{DecodeBinary, EncodeBinary, IsNull};
use crate::error::TypeError;
use bytes::BytesMut;
use pgrow_wire::{record_add, record_add_null, record_start, Oid, RecordFields, WireError};

/// Encodes one composite value from `(oid, encoder)` pairs.
///
/// Each field is encoded into a reusable scratch buffer and then framed
/// with its OID and length, so a field payload may itself be a complete
/// row or array encoding.
pub fn encode_row<C>(
    cx: &C,
    buf: &mut BytesMut,
    fields: &[(Oid, &dyn EncodeBinary<C>)],
) -> Result<(), TypeError> {
    record_start(buf, fields.len() as u32);

    let mut scratch = BytesMut::new();
    for (oid, field) in fields {
        scratch.clear();
        match field.encode_binary(cx, &mut scratch)? {
            IsNull::Yes => record_add_null(buf, *oid),
            IsNull::No => record_add(buf, *oid, &scratch)?,
        }
    }
    Ok(())
}

/// Decodes one composite value into an ordered set of destinations.
///
/// The declared field count must match the destination arity exactly;
/// on mismatch no decoder runs. Each frame's OID is surfaced by
/// [`RecordFields`] but not compared against the destination here;
/// that check needs the type registry, which lives above this crate.
/// Trailing bytes after the final field are rejected.
pub fn scan_row_value<C>(
    cx: &C,
    src: &[u8],
    fields: &mut [&mut dyn DecodeBinary<C>],
) -> Result<(), TypeError> {
    let (found, mut frames) = RecordFields::parse(src)?;
    if found as usize != fields.len() {
        return Err(TypeError::FieldCountMismatch {
            expected: fields.len(),
            found: found as usize,
        });
    }

    for (index, dst) in fields.iter_mut().enumerate() {
        let frame = frames.next_field()?;
        dst.decode_binary(cx, frame.data).map_err(|err| match err {
            TypeError::NullNotAllowed { .. } => TypeError::NullNotAllowed { index },
            other => other,
        })?;
    }

    if frames.remaining() != 0 {
        return Err(WireError::TrailingBytes {
            remaining: frames.remaining(),
        }
        .into());
    }
    Ok(())
}
