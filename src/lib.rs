//! # pgrow
//!
//! Binary wire-format codec for PostgreSQL array and composite (row)
//! values: decode a fully materialized value buffer into typed
//! elements and fields, or encode typed fields back into the same
//! framed byte layout.
//!
//! The implementation is split into two layers, both re-exported here:
//! - [`wire`]: framing primitives over raw byte buffers, covering array
//!   header parsing, element/field cursors, and the array/record writers
//! - [`types`]: the [`EncodeBinary`] / [`DecodeBinary`] capability
//!   traits, row and array dispatch helpers, and leaf scalar codecs
//!
//! ## Round-tripping a row
//!
//! ```
//! use bytes::BytesMut;
//! use pgrow::{encode_row, scan_row_value, INT4_OID, TEXT_OID};
//!
//! let mut buf = BytesMut::new();
//! encode_row(&(), &mut buf, &[(INT4_OID, &7_i32), (TEXT_OID, &"seven")])?;
//!
//! let mut a = 0_i32;
//! let mut b: Option<String> = None;
//! scan_row_value(&(), &buf, &mut [&mut a, &mut b])?;
//!
//! assert_eq!(a, 7);
//! assert_eq!(b.as_deref(), Some("seven"));
//! # Ok::<(), pgrow::TypeError>(())
//! ```
//!
//! ## Walking an array buffer by hand
//!
//! ```
//! use bytes::BytesMut;
//! use pgrow::wire::{array_add, array_add_null, array_start, ArrayDimension, ArrayHeader};
//!
//! let dims = [ArrayDimension { length: 2, lower_bound: 1 }];
//! let mut buf = BytesMut::new();
//! array_start(&mut buf, &dims, true, pgrow::INT4_OID);
//! array_add(&mut buf, &10_i32.to_be_bytes())?;
//! array_add_null(&mut buf);
//!
//! let (header, mut elems) = ArrayHeader::parse(&buf)?;
//! assert_eq!(header.element_count(), 2);
//! assert_eq!(elems.next_elem()?, Some(&10_i32.to_be_bytes()[..]));
//! assert_eq!(elems.next_elem()?, None);
//! # Ok::<(), pgrow::wire::WireError>(())
//! ```

pub use pgrow_types as types;
pub use pgrow_wire as wire;

pub use pgrow_types::{
    decode_array, encode_array, encode_row, scan_row_value, BoxError, DecodeBinary, EncodeBinary,
    IsNull, TypeError, BOOL_OID, FLOAT8_OID, INT2_OID, INT4_OID, INT8_OID, RECORD_OID, TEXT_OID,
};
pub use pgrow_wire::{
    ArrayDimension, ArrayElements, ArrayHeader, FieldFrame, Oid, RecordFields, WireError,
};
