//! # BasaltKV Codec
//!
//! The binary-encoding substrate for the BasaltKV storage engine:
//! - Non-owning byte views (`Slice`) with lexicographic ordering
//! - Variable-length integer encoding (varint32 / varint64)
//! - Fixed-width little-endian integer encoding
//! - Length-prefixed byte strings for keys and values
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Engine Layers (out of scope here)               │
//! │        MemTable · SSTable Blocks · WAL · File Footers        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ encode / decode
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Length-Prefixed Codec                       │
//! │                varint32(len) || raw bytes                    │
//! └──────────┬─────────────────────────────────┬────────────────┘
//!            │                                 │
//!            ▼                                 ▼
//!     ┌─────────────┐                   ┌─────────────┐
//!     │   Varint    │                   │    Slice    │
//!     │   Codec     │                   │ (zero-copy) │
//!     └──────┬──────┘                   └─────────────┘
//!            │
//!            ▼
//!     ┌─────────────┐
//!     │   Cursor    │
//!     │ (bounded)   │
//!     └─────────────┘
//! ```
//!
//! Writing appends encoded fields into a growable buffer; reading threads
//! a [`coding::Cursor`] over a received buffer, extracting [`Slice`] views
//! without copying. Every operation is a pure, synchronous function over
//! caller-owned memory: no I/O, no locking, no hidden state.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod slice;
pub mod coding;
pub mod comparator;
pub mod inspect;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CodecError, Result};
pub use config::{CompressionType, Options, ReadOptions, WriteOptions};
pub use slice::Slice;
pub use coding::Cursor;
pub use comparator::{BytewiseComparator, Comparator};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the BasaltKV codec crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
