//! Error types for the BasaltKV codec layer
//!
//! Provides a unified error type for all decode operations.
//!
//! Decode failures are ordinary values, never panics: a parse over a fixed
//! byte range cannot succeed on retry, so callers treat any of these as
//! "corrupt input" for the containing unit (record, block) and surface a
//! corruption condition to their own caller.

use thiserror::Error;

/// Result type alias using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;

/// Unified error type for codec operations
#[derive(Debug, Error)]
pub enum CodecError {
    // -------------------------------------------------------------------------
    // Varint Decode Errors
    // -------------------------------------------------------------------------
    /// The terminating byte (continuation bit clear) was not found before
    /// the cursor reached the end of the buffer.
    #[error("varint terminator not found before end of buffer")]
    BufferExhausted,

    /// More groups were consumed than the target width allows
    /// (6+ for 32-bit, 11+ for 64-bit). Callers treat this identically
    /// to `BufferExhausted`: reject, no partial recovery.
    #[error("varint exceeds {max_bytes} bytes")]
    Overlong {
        /// Maximum encoded size for the target width
        max_bytes: usize,
    },

    // -------------------------------------------------------------------------
    // Payload Errors
    // -------------------------------------------------------------------------
    /// A declared or fixed-width length exceeds the bytes remaining before
    /// the buffer limit. Primary defense against truncated or corrupted
    /// records.
    #[error("need {needed} bytes but only {available} remain")]
    TruncatedPayload {
        /// Bytes the field claims to occupy
        needed: usize,
        /// Bytes actually remaining in the buffer
        available: usize,
    },

    // -------------------------------------------------------------------------
    // I/O Errors (inspection tooling only; the codec itself performs no I/O)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
