//! # pgrow-types
//!
//! Typed encode/decode over the pgrow wire framing.
//!
//! This crate provides:
//! - The [`EncodeBinary`] / [`DecodeBinary`] capability traits every
//!   participating type implements
//! - Row-level dispatch ([`encode_row`], [`scan_row_value`])
//! - Array helpers for `Vec` destinations ([`encode_array`],
//!   [`decode_array`])
//! - Leaf codecs for a handful of scalar types
//!
//! Every codec call threads an opaque context handle of the caller's
//! choosing. The dispatch helpers forward it untouched; it exists so a
//! deployment can hand its OID registry or connection metadata down to
//! its own codecs. Code that needs no context passes `&()`.

pub mod array;
pub mod codec;
pub mod error;
pub mod row;
pub mod scalar;

pub use array::{decode_array, encode_array};
pub use codec::{DecodeBinary, EncodeBinary, IsNull};
pub use error::{BoxError, TypeError};
pub use row::{encode_row, scan_row_value};

pub use pgrow_wire::Oid;

/// OID of the `bool` type.
pub const BOOL_OID: Oid = 16;
/// OID of the `int8` type.
pub const INT8_OID: Oid = 20;
/// OID of the `int2` type.
pub const INT2_OID: Oid = 21;
/// OID of the `int4` type.
pub const INT4_OID: Oid = 23;
/// OID of the `text` type.
pub const TEXT_OID: Oid = 25;
/// OID of the `float8` type.
pub const FLOAT8_OID: Oid = 701;
/// OID of the anonymous `record` type.
pub const RECORD_OID: Oid = 2249;
