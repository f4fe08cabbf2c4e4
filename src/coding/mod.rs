//! Coding Module
//!
//! Encoding and decoding primitives for the on-disk and in-memory binary
//! formats. Every key, value, block handle, and count in the engine passes
//! through these functions.
//!
//! ## Wire Formats
//!
//! ### Fixed32 / Fixed64
//! ```text
//! ┌────┬────┬────┬────┐            ┌────┬────┬────┬────┬────┬────┬────┬────┐
//! │ b0 │ b1 │ b2 │ b3 │            │ b0 │ b1 │ b2 │ b3 │ b4 │ b5 │ b6 │ b7 │
//! └────┴────┴────┴────┘            └────┴────┴────┴────┴────┴────┴────┴────┘
//!   raw little-endian, exactly 4 / 8 bytes
//! ```
//!
//! ### Varint32 / Varint64
//! ```text
//! ┌─┬───────┐ ┌─┬───────┐     ┌─┬───────┐
//! │1│ 7 bits│ │1│ 7 bits│ ... │0│ 7 bits│
//! └─┴───────┘ └─┴───────┘     └─┴───────┘
//!   groups least-significant-first; high bit = continuation;
//!   minimal group count (1..=5 for 32-bit, 1..=10 for 64-bit)
//! ```
//!
//! ### Length-prefixed field
//! ```text
//! ┌──────────────┬──────────────────────┐
//! │ varint32 len │      raw bytes       │
//! └──────────────┴──────────────────────┘
//!   no escaping, no terminator; binary-safe for any content
//! ```
//!
//! Encoders append to any [`bytes::BufMut`]; decoders consume a bounded
//! [`Cursor`] and can never read past the buffer they were given.

mod cursor;
mod fixed;
mod varint;
mod prefixed;

pub use cursor::Cursor;
pub use fixed::{get_fixed32, get_fixed64, put_fixed32, put_fixed64};
pub use varint::{
    get_varint32, get_varint64, put_varint32, put_varint64, take_varint32, take_varint64,
    varint_length,
};
pub use prefixed::{get_length_prefixed, put_length_prefixed, take_length_prefixed};

// =============================================================================
// Shared Constants
// =============================================================================

/// Continuation bit: set on every varint byte except the last
pub const CONTINUATION_BIT: u8 = 0x80;

/// Payload mask: the low 7 bits of each varint byte
pub const PAYLOAD_MASK: u8 = 0x7F;

/// Maximum encoded size of a varint32 (5 groups of 7 bits cover 32 bits)
pub const MAX_VARINT32_BYTES: usize = 5;

/// Maximum encoded size of a varint64 (10 groups of 7 bits cover 64 bits)
pub const MAX_VARINT64_BYTES: usize = 10;
