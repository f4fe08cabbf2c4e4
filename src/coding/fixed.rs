//! Fixed-width integer codec
//!
//! Constant-size little-endian fields, used where random seekability
//! matters more than space: file footers, magic numbers, block handles
//! in fixed positions. For everything else the varint codec is smaller.

use bytes::BufMut;

use super::Cursor;
use crate::error::Result;

/// Append `value` as exactly 4 little-endian bytes
pub fn put_fixed32<B: BufMut>(dst: &mut B, value: u32) {
    dst.put_slice(&value.to_le_bytes());
}

/// Append `value` as exactly 8 little-endian bytes.
///
/// All 8 bytes are emitted independently of the 32-bit path; the high
/// half of the value is never truncated.
pub fn put_fixed64<B: BufMut>(dst: &mut B, value: u64) {
    dst.put_slice(&value.to_le_bytes());
}

/// Read exactly 4 little-endian bytes as a `u32`, failing if fewer remain
pub fn get_fixed32(cursor: &mut Cursor<'_>) -> Result<u32> {
    let bytes = cursor.read(4)?;
    Ok(u32::from_le_bytes(bytes.try_into().unwrap()))
}

/// Read exactly 8 little-endian bytes as a `u64`, failing if fewer remain
pub fn get_fixed64(cursor: &mut Cursor<'_>) -> Result<u64> {
    let bytes = cursor.read(8)?;
    Ok(u64::from_le_bytes(bytes.try_into().unwrap()))
}
