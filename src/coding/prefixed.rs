//! Length-prefixed byte strings
//!
//! The primary mechanism for serializing keys and values into a
//! contiguous buffer: `varint32(len) || raw bytes`. No escaping and no
//! terminator, so any byte content round-trips, embedded NULs included.
//! Decoding yields a [`Slice`] aliasing the input buffer, never a copy.

use bytes::BufMut;

use super::varint::{get_varint32, put_varint32};
use super::Cursor;
use crate::error::Result;
use crate::slice::Slice;

/// Append `value` as `varint32(len) || bytes`
pub fn put_length_prefixed<D: BufMut>(dst: &mut D, value: Slice<'_>) {
    put_varint32(dst, value.len() as u32);
    dst.put_slice(value.as_bytes());
}

/// Decode a length-prefixed field from `cursor`, advancing past it.
///
/// Fails if the length varint is malformed, or with `TruncatedPayload`
/// when the declared length exceeds the remaining bytes, the primary
/// defense against truncated or corrupted records. The returned `Slice`
/// aliases the cursor's buffer.
pub fn get_length_prefixed<'a>(cursor: &mut Cursor<'a>) -> Result<Slice<'a>> {
    let len = get_varint32(cursor)? as usize;
    cursor.read_slice(len)
}

/// Decode a length-prefixed field from the front of `input`, shrinking
/// the view past the length prefix and payload on success. On failure
/// `input` is left untouched, so the caller still sees where the corrupt
/// region starts.
pub fn take_length_prefixed<'a>(input: &mut Slice<'a>) -> Result<Slice<'a>> {
    let mut cursor = Cursor::new(input.as_bytes());
    let result = get_length_prefixed(&mut cursor)?;
    input.remove_prefix(cursor.position());
    Ok(result)
}

// =============================================================================
// Tests
// =============================================================================
