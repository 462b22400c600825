//! Array value framing.
//!
//! On the wire an array value is laid out as:
//!
//! ```text
//! +----------+---------------+-------------+
//! | ndim     | contains_null | element_oid |
//! | 4 bytes  | 4 bytes       | 4 bytes     |
//! +----------+---------------+-------------+
//! | (dim_length, dim_lower_bound) x ndim   |
//! | 4 + 4 bytes each                       |
//! +----------------------------------------+
//! | (elem_length, elem_payload) x count    |
//! | 4 bytes + elem_length bytes, or -1     |
//! +----------------------------------------+
//! ```
//!
//! This is the layout produced by the server's `array_send` routine.
//! Element payloads are whatever the element type's own binary codec
//! produces, so elements may themselves be complete composite or array
//! encodings. An empty array is transmitted with `ndim = 0` and no
//! dimension entries at all.

use crate::error::WireError;
use crate::{read_i32, read_u32, Oid, ARRAY_DIM_SIZE, ARRAY_HEADER_MIN_SIZE, NULL_LENGTH};
use bytes::{BufMut, BytesMut};

/// Extent of one array axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayDimension {
    /// Number of elements along this axis. Never negative in a parsed
    /// header.
    pub length: i32,
    /// Index of the first element along this axis. PostgreSQL arrays
    /// default to 1 but any lower bound is legal.
    pub lower_bound: i32,
}

/// Parsed array header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayHeader {
    /// Whether the sender marked the array as containing NULL elements.
    ///
    /// This is a sender-side hint; the element frames remain the source
    /// of truth for per-element NULLs.
    pub contains_null: bool,
    /// OID of the element type.
    pub element_oid: Oid,
    /// One entry per axis, outermost first. Empty for an empty array.
    pub dimensions: Vec<ArrayDimension>,
}

impl ArrayHeader {
    /// Parses the header of one array value and returns it together with
    /// a cursor positioned at the first element frame.
    ///
    /// The entire dimension block is length-checked before any dimension
    /// is read, so a shortfall is reported up front with the full
    /// required size.
    pub fn parse(src: &[u8]) -> Result<(ArrayHeader, ArrayElements<'_>), WireError> {
        if src.len() < ARRAY_HEADER_MIN_SIZE {
            return Err(WireError::HeaderTooShort {
                required: ARRAY_HEADER_MIN_SIZE,
                actual: src.len(),
            });
        }

        let ndim = read_i32(src, 0);
        let contains_null = read_u32(src, 4) != 0;
        let element_oid = read_u32(src, 8);

        if ndim < 0 {
            return Err(WireError::NegativeDimCount(ndim));
        }
        let ndim = ndim as usize;

        let required = ARRAY_HEADER_MIN_SIZE + ndim * ARRAY_DIM_SIZE;
        if src.len() < required {
            return Err(WireError::HeaderTooShort {
                required,
                actual: src.len(),
            });
        }

        let mut dimensions = Vec::with_capacity(ndim);
        let mut count: usize = if ndim == 0 { 0 } else { 1 };
        for i in 0..ndim {
            let offset = ARRAY_HEADER_MIN_SIZE + i * ARRAY_DIM_SIZE;
            let length = read_i32(src, offset);
            let lower_bound = read_i32(src, offset + 4);

            if length < 0 {
                return Err(WireError::NegativeDimLength { index: i, length });
            }
            count = count
                .checked_mul(length as usize)
                .ok_or(WireError::ElementCountOverflow)?;

            dimensions.push(ArrayDimension {
                length,
                lower_bound,
            });
        }

        let header = ArrayHeader {
            contains_null,
            element_oid,
            dimensions,
        };
        Ok((header, ArrayElements::new(&src[required..])))
    }

    /// Number of element frames the array body must carry: the product
    /// of all dimension lengths, or 0 when there are no dimensions.
    pub fn element_count(&self) -> usize {
        if self.dimensions.is_empty() {
            return 0;
        }
        self.dimensions
            .iter()
            .fold(1usize, |count, dim| {
                count.saturating_mul(dim.length.max(0) as usize)
            })
    }
}

/// Forward-only cursor over the element frames of one array body.
///
/// Yielded payloads borrow the underlying buffer and must not outlive
/// it. The cursor does not track how many elements the header promised;
/// the caller drives it exactly [`ArrayHeader::element_count`] times.
/// Reading past the final frame reports the same truncation error as
/// any other short read.
#[derive(Debug, Clone)]
pub struct ArrayElements<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> ArrayElements<'a> {
    /// Creates a cursor over raw element frames.
    ///
    /// [`ArrayHeader::parse`] constructs this for callers; it is public
    /// for drivers that frame the body themselves.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Yields the next element frame, `None` for a NULL element.
    pub fn next_elem(&mut self) -> Result<Option<&'a [u8]>, WireError> {
        let remaining = self.buf.len() - self.offset;
        if remaining < 4 {
            return Err(WireError::ElementTruncated {
                required: 4,
                actual: remaining,
            });
        }

        let len = read_i32(self.buf, self.offset);
        if len == NULL_LENGTH {
            self.offset += 4;
            return Ok(None);
        }
        if len < 0 {
            return Err(WireError::InvalidLength(len));
        }

        let len = len as usize;
        if remaining < 4 + len {
            return Err(WireError::ElementTruncated {
                required: 4 + len,
                actual: remaining,
            });
        }

        let start = self.offset + 4;
        let payload = &self.buf[start..start + len];
        self.offset = start + len;
        Ok(Some(payload))
    }

    /// Bytes not yet consumed by the cursor.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }
}

/// Appends an array header for the given shape.
///
/// The caller must follow up with exactly the product of the dimension
/// lengths via [`array_add`] / [`array_add_null`]; the writer performs
/// no arity check of its own. An empty array is written with an empty
/// dimension slice.
pub fn array_start(
    buf: &mut BytesMut,
    dimensions: &[ArrayDimension],
    contains_null: bool,
    element_oid: Oid,
) {
    buf.put_i32(dimensions.len() as i32);
    buf.put_u32(contains_null as u32);
    buf.put_u32(element_oid);
    for dim in dimensions {
        buf.put_i32(dim.length);
        buf.put_i32(dim.lower_bound);
    }
}

/// Appends one non-NULL element frame.
pub fn array_add(buf: &mut BytesMut, elem: &[u8]) -> Result<(), WireError> {
    if elem.len() > i32::MAX as usize {
        return Err(WireError::FrameTooLarge {
            size: elem.len(),
            max: i32::MAX as usize,
        });
    }
    buf.put_i32(elem.len() as i32);
    buf.put_slice(elem);
    Ok(())
}

/// Appends one NULL element frame.
pub fn array_add_null(buf: &mut BytesMut) {
    buf.put_i32(NULL_LENGTH);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int4_array_buf() -> BytesMut {
        // int4[] with one axis {length: 2, lower_bound: 1}: [10, NULL]
        let mut buf = BytesMut::new();
        buf.put_i32(1); // ndim
        buf.put_u32(1); // contains_null
        buf.put_u32(23); // element OID (int4)
        buf.put_i32(2); // dim length
        buf.put_i32(1); // dim lower bound
        buf.put_i32(4);
        buf.put_slice(&10_i32.to_be_bytes());
        buf.put_i32(-1);
        buf
    }

    #[test]
    fn test_parse_one_dimensional_array() {
        let buf = int4_array_buf();
        let (header, mut elems) = ArrayHeader::parse(&buf).unwrap();

        assert!(header.contains_null);
        assert_eq!(header.element_oid, 23);
        assert_eq!(
            header.dimensions,
            vec![ArrayDimension {
                length: 2,
                lower_bound: 1
            }]
        );
        assert_eq!(header.element_count(), 2);

        assert_eq!(elems.next_elem().unwrap(), Some(&10_i32.to_be_bytes()[..]));
        assert_eq!(elems.next_elem().unwrap(), None);
        assert_eq!(elems.remaining(), 0);
    }

    #[test]
    fn test_drained_cursor_errors() {
        let buf = int4_array_buf();
        let (header, mut elems) = ArrayHeader::parse(&buf).unwrap();

        for _ in 0..header.element_count() {
            elems.next_elem().unwrap();
        }
        let result = elems.next_elem();
        assert!(matches!(
            result,
            Err(WireError::ElementTruncated {
                required: 4,
                actual: 0
            })
        ));
    }

    #[test]
    fn test_zero_dimension_array() {
        let mut buf = BytesMut::new();
        buf.put_i32(0);
        buf.put_u32(0);
        buf.put_u32(25);

        let (header, mut elems) = ArrayHeader::parse(&buf).unwrap();
        assert!(!header.contains_null);
        assert_eq!(header.element_oid, 25);
        assert!(header.dimensions.is_empty());
        assert_eq!(header.element_count(), 0);
        assert_eq!(elems.remaining(), 0);
        assert!(matches!(
            elems.next_elem(),
            Err(WireError::ElementTruncated { .. })
        ));
    }

    #[test]
    fn test_multi_dimension_element_count() {
        let mut buf = BytesMut::new();
        buf.put_i32(2);
        buf.put_u32(0);
        buf.put_u32(23);
        buf.put_i32(2);
        buf.put_i32(1);
        buf.put_i32(3);
        buf.put_i32(1);

        let (header, _) = ArrayHeader::parse(&buf).unwrap();
        assert_eq!(header.dimensions.len(), 2);
        assert_eq!(header.element_count(), 6);
    }

    #[test]
    fn test_header_too_short() {
        let buf = [0u8; 8];
        let result = ArrayHeader::parse(&buf);
        assert!(matches!(
            result,
            Err(WireError::HeaderTooShort {
                required: 12,
                actual: 8
            })
        ));
    }

    #[test]
    fn test_dimension_block_too_short() {
        // Declares two dimensions but carries only one.
        let mut buf = BytesMut::new();
        buf.put_i32(2);
        buf.put_u32(0);
        buf.put_u32(23);
        buf.put_i32(4);
        buf.put_i32(1);

        let result = ArrayHeader::parse(&buf);
        assert!(matches!(
            result,
            Err(WireError::HeaderTooShort {
                required: 28,
                actual: 20
            })
        ));
    }

    #[test]
    fn test_negative_dimension_count() {
        let mut buf = BytesMut::new();
        buf.put_i32(-1);
        buf.put_u32(0);
        buf.put_u32(23);

        let result = ArrayHeader::parse(&buf);
        assert!(matches!(result, Err(WireError::NegativeDimCount(-1))));
    }

    #[test]
    fn test_negative_dimension_length() {
        let mut buf = BytesMut::new();
        buf.put_i32(1);
        buf.put_u32(0);
        buf.put_u32(23);
        buf.put_i32(-5);
        buf.put_i32(1);

        let result = ArrayHeader::parse(&buf);
        assert!(matches!(
            result,
            Err(WireError::NegativeDimLength {
                index: 0,
                length: -5
            })
        ));
    }

    #[test]
    fn test_element_count_overflow() {
        let mut buf = BytesMut::new();
        buf.put_i32(3);
        buf.put_u32(0);
        buf.put_u32(23);
        for _ in 0..3 {
            buf.put_i32(i32::MAX);
            buf.put_i32(1);
        }

        let result = ArrayHeader::parse(&buf);
        assert!(matches!(result, Err(WireError::ElementCountOverflow)));
    }

    #[test]
    fn test_truncated_element_length() {
        let mut body = BytesMut::new();
        body.put_slice(&[0, 0]);
        let mut elems = ArrayElements::new(&body);
        assert!(matches!(
            elems.next_elem(),
            Err(WireError::ElementTruncated {
                required: 4,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_truncated_element_payload() {
        let mut body = BytesMut::new();
        body.put_i32(10);
        body.put_slice(&[1, 2, 3]);
        let mut elems = ArrayElements::new(&body);
        assert!(matches!(
            elems.next_elem(),
            Err(WireError::ElementTruncated {
                required: 14,
                actual: 7
            })
        ));
    }

    #[test]
    fn test_invalid_element_length() {
        let mut body = BytesMut::new();
        body.put_i32(-2);
        let mut elems = ArrayElements::new(&body);
        assert!(matches!(elems.next_elem(), Err(WireError::InvalidLength(-2))));
    }

    #[test]
    fn test_writer_parses_back() {
        let dims = [ArrayDimension {
            length: 3,
            lower_bound: 1,
        }];
        let mut buf = BytesMut::new();
        array_start(&mut buf, &dims, true, 23);
        array_add(&mut buf, &1_i32.to_be_bytes()).unwrap();
        array_add_null(&mut buf);
        array_add(&mut buf, &3_i32.to_be_bytes()).unwrap();

        let (header, mut elems) = ArrayHeader::parse(&buf).unwrap();
        assert!(header.contains_null);
        assert_eq!(header.element_count(), 3);
        assert_eq!(elems.next_elem().unwrap(), Some(&1_i32.to_be_bytes()[..]));
        assert_eq!(elems.next_elem().unwrap(), None);
        assert_eq!(elems.next_elem().unwrap(), Some(&3_i32.to_be_bytes()[..]));
        assert_eq!(elems.remaining(), 0);
    }
}
