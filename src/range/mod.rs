//! Byte-range resolution.
//!
//! Callers describe the slice to decode with any [`RangeBounds<usize>`]:
//! `..` for the whole buffer, `1..` for "from offset 1 to the end",
//! `0..n` or `a..=b` for explicit bounds. Omitted bounds default to the
//! buffer edges. Explicit bounds are validated, never clamped.


use std::ops::{Bound, RangeBounds};

use crate::DecodeError;

/// A validated half-open range `[start, end)` into a buffer of known length.
///
/// Invariant: `start <= end <= len` of the buffer it was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    start: usize,
    end: usize,
}

impl ByteRange {
    /// Resolves `bounds` against a buffer of `buf_len` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidRange`] if `start > end`, if
    /// `end > buf_len`, or if an inclusive/exclusive bound overflows `usize`.
    pub fn resolve<R: RangeBounds<usize>>(bounds: &R, buf_len: usize) -> Result<Self, DecodeError> {
        let start = match bounds.start_bound() {
            Bound::Included(&s) => Some(s),
            Bound::Excluded(&s) => s.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        let end = match bounds.end_bound() {
            Bound::Included(&e) => e.checked_add(1),
            Bound::Excluded(&e) => Some(e),
            Bound::Unbounded => Some(buf_len),
        };

        match (start, end) {
            (Some(start), Some(end)) if start <= end && end <= buf_len => Ok(Self { start, end }),
            (start, end) => Err(DecodeError::InvalidRange {
                start: start.unwrap_or(usize::MAX),
                end: end.unwrap_or(usize::MAX),
                len: buf_len,
            }),
        }
    }

    /// First byte offset (inclusive).
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last byte offset (exclusive).
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of bytes in the range.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrows the covered bytes.
    ///
    /// # Panics
    ///
    /// Panics if `buf` is shorter than the buffer this range was resolved
    /// against.
    #[inline]
    pub fn slice<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.start..self.end]
    }
}
