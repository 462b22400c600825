//! # pgrow-wire
//!
//! Wire-level framing for PostgreSQL's binary array and composite (row)
//! value formats.
//!
//! This crate provides:
//! - Array header parsing and a cursor over array element frames
//! - Writers producing the array and composite framings
//! - A cursor splitting a composite body into framed fields
//!
//! All multi-byte integers on the wire are big-endian, all lengths are
//! signed, and a length of -1 is the universal NULL sentinel. Decoding
//! operates on a fully materialized buffer: every declared length is
//! validated against the remaining bytes before anything is read, and
//! decoded payloads borrow the input buffer rather than copying it.

pub mod array;
pub mod error;
pub mod record;

pub use array::{
    array_add, array_add_null, array_start, ArrayDimension, ArrayElements, ArrayHeader,
};
pub use error::WireError;
pub use record::{record_add, record_add_null, record_start, FieldFrame, RecordFields};

/// Object identifier naming a PostgreSQL type.
pub type Oid = u32;

/// Size of the fixed array header in bytes (ndim + contains-null flag +
/// element OID).
pub const ARRAY_HEADER_MIN_SIZE: usize = 12;

/// Size of one array dimension entry in bytes (length + lower bound).
pub const ARRAY_DIM_SIZE: usize = 8;

/// Wire sentinel marking a NULL element or field.
pub const NULL_LENGTH: i32 = -1;

pub(crate) fn read_i32(src: &[u8], offset: usize) -> i32 {
    i32::from_be_bytes(src[offset..offset + 4].try_into().unwrap())
}

pub(crate) fn read_u32(src: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes(src[offset..offset + 4].try_into().unwrap())
}
