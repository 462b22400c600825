//! Composite (row) value framing.
//!
//! On the wire a composite value is laid out as:
//!
//! ```text
//! +-------------+
//! | field_count |
//! | 4 bytes     |
//! +-------------+
//! | (field_oid, field_length, field_payload) x field_count |
//! | 4 + 4 bytes + field_length bytes, length -1 for NULL   |
//! +--------------------------------------------------------+
//! ```
//!
//! This is the layout produced by the server's `record_send` routine.
//! The writer side is deliberately arity-unchecked: the number of
//! [`record_add`] / [`record_add_null`] calls after a [`record_start`]
//! must equal the declared count, and getting that wrong produces a
//! value only the reader on the other end can reject.

use crate::error::WireError;
use crate::{read_i32, read_u32, Oid, NULL_LENGTH};
use bytes::{BufMut, BytesMut};

/// Appends the field count that opens a composite value.
pub fn record_start(buf: &mut BytesMut, field_count: u32) {
    buf.put_u32(field_count);
}

/// Appends one non-NULL field frame.
///
/// Field payloads come from the field type's own binary codec; a payload
/// may itself be a complete composite or array encoding, which is how
/// nested rows are built up.
pub fn record_add(buf: &mut BytesMut, field_oid: Oid, field: &[u8]) -> Result<(), WireError> {
    if field.len() > i32::MAX as usize {
        return Err(WireError::FrameTooLarge {
            size: field.len(),
            max: i32::MAX as usize,
        });
    }
    buf.put_u32(field_oid);
    buf.put_i32(field.len() as i32);
    buf.put_slice(field);
    Ok(())
}

/// Appends one NULL field frame.
pub fn record_add_null(buf: &mut BytesMut, field_oid: Oid) {
    buf.put_u32(field_oid);
    buf.put_i32(NULL_LENGTH);
}

/// One field frame of a composite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFrame<'a> {
    /// Type OID the sender declared for this field.
    pub oid: Oid,
    /// Borrowed field payload, `None` for a NULL field.
    pub data: Option<&'a [u8]>,
}

/// Forward-only cursor over the field frames of one composite value.
///
/// Like [`crate::ArrayElements`], the cursor is count-blind: the caller
/// drives it exactly as many times as the count returned by
/// [`RecordFields::parse`].
#[derive(Debug, Clone)]
pub struct RecordFields<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> RecordFields<'a> {
    /// Reads the leading field count and returns it together with a
    /// cursor over the field frames.
    pub fn parse(src: &'a [u8]) -> Result<(u32, RecordFields<'a>), WireError> {
        if src.len() < 4 {
            return Err(WireError::FieldTruncated {
                required: 4,
                actual: src.len(),
            });
        }
        let count = read_i32(src, 0);
        if count < 0 {
            return Err(WireError::NegativeFieldCount(count));
        }
        Ok((count as u32, RecordFields { buf: src, offset: 4 }))
    }

    /// Yields the next field frame.
    pub fn next_field(&mut self) -> Result<FieldFrame<'a>, WireError> {
        let remaining = self.buf.len() - self.offset;
        if remaining < 8 {
            return Err(WireError::FieldTruncated {
                required: 8,
                actual: remaining,
            });
        }

        let oid = read_u32(self.buf, self.offset);
        let len = read_i32(self.buf, self.offset + 4);
        if len == NULL_LENGTH {
            self.offset += 8;
            return Ok(FieldFrame { oid, data: None });
        }
        if len < 0 {
            return Err(WireError::InvalidLength(len));
        }

        let len = len as usize;
        if remaining < 8 + len {
            return Err(WireError::FieldTruncated {
                required: 8 + len,
                actual: remaining,
            });
        }

        let start = self.offset + 8;
        let data = &self.buf[start..start + len];
        self.offset = start + len;
        Ok(FieldFrame {
            oid,
            data: Some(data),
        })
    }

    /// Bytes not yet consumed by the cursor.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_record_roundtrip(
            fields in proptest::collection::vec(
                (
                    any::<u32>(),
                    proptest::option::of(proptest::collection::vec(any::<u8>(), 0..48)),
                ),
                0..10,
            ),
        ) {
            let mut buf = BytesMut::new();
            record_start(&mut buf, fields.len() as u32);
            for (oid, data) in &fields {
                match data {
                    Some(payload) => record_add(&mut buf, *oid, payload).unwrap(),
                    None => record_add_null(&mut buf, *oid),
                }
            }

            let (count, mut cursor) = RecordFields::parse(&buf).unwrap();
            prop_assert_eq!(count as usize, fields.len());
            for (oid, data) in &fields {
                let frame = cursor.next_field().unwrap();
                prop_assert_eq!(frame.oid, *oid);
                prop_assert_eq!(frame.data, data.as_deref());
            }
            prop_assert_eq!(cursor.remaining(), 0);
        }
    }
}
