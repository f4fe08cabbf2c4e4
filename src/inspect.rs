//! Buffer inspection
//!
//! Debug tooling for looking at encoded byte streams: walk a buffer as a
//! sequence of length-prefixed fields or varints, collecting per-field
//! positions and a summary of how far the scan got. Used by the
//! `basaltkv-dump` binary and handy in tests when a block builder
//! misbehaves.
//!
//! A scan stops at the first malformed field: after a bad length prefix
//! every later position is suspect, so the report records where the
//! corruption starts instead of attempting a resync.

use crate::coding::{get_length_prefixed, get_varint64, Cursor};
use crate::error::CodecError;

/// Location of one decoded field within a scanned buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    /// Byte offset of the field's length prefix (or first varint byte)
    pub offset: usize,

    /// Payload length in bytes (or the decoded varint value)
    pub value: u64,

    /// Byte offset where the payload starts; equals `offset` for varints
    pub payload_offset: usize,
}

/// Summary of a scan over one buffer
#[derive(Debug)]
pub struct ScanReport {
    /// Number of fields successfully decoded
    pub fields_decoded: u64,

    /// Bytes consumed by the decoded fields
    pub bytes_consumed: usize,

    /// The error that stopped the scan, if the buffer did not end cleanly
    /// on a field boundary
    pub trailing_error: Option<CodecError>,
}

impl ScanReport {
    /// True iff the whole buffer decoded as well-formed fields
    pub fn is_clean(&self) -> bool {
        self.trailing_error.is_none()
    }
}

/// Scan `buf` as consecutive length-prefixed fields.
///
/// Returns the location of every well-formed field plus a report. A
/// corrupt or truncated tail is recorded in the report (and logged),
/// never panicked on.
pub fn scan_fields(buf: &[u8]) -> (Vec<FieldEntry>, ScanReport) {
    let mut cursor = Cursor::new(buf);
    let mut entries = Vec::new();

    let (trailing_error, bytes_consumed) = loop {
        if cursor.is_empty() {
            break (None, cursor.position());
        }
        let offset = cursor.position();
        match get_length_prefixed(&mut cursor) {
            Ok(field) => {
                entries.push(FieldEntry {
                    offset,
                    value: field.len() as u64,
                    payload_offset: cursor.position() - field.len(),
                });
            }
            Err(err) => {
                tracing::warn!(
                    offset,
                    remaining = buf.len() - offset,
                    error = %err,
                    "field scan stopped at malformed length-prefixed field"
                );
                break (Some(err), offset);
            }
        }
    };

    let report = ScanReport {
        fields_decoded: entries.len() as u64,
        bytes_consumed,
        trailing_error,
    };
    (entries, report)
}

/// Scan `buf` as consecutive varint64 values.
pub fn scan_varints(buf: &[u8]) -> (Vec<FieldEntry>, ScanReport) {
    let mut cursor = Cursor::new(buf);
    let mut entries = Vec::new();

    let (trailing_error, bytes_consumed) = loop {
        if cursor.is_empty() {
            break (None, cursor.position());
        }
        let offset = cursor.position();
        match get_varint64(&mut cursor) {
            Ok(value) => {
                entries.push(FieldEntry {
                    offset,
                    value,
                    payload_offset: offset,
                });
            }
            Err(err) => {
                tracing::warn!(
                    offset,
                    remaining = buf.len() - offset,
                    error = %err,
                    "varint scan stopped at malformed group sequence"
                );
                break (Some(err), offset);
            }
        }
    };

    let report = ScanReport {
        fields_decoded: entries.len() as u64,
        bytes_consumed,
        trailing_error,
    };
    (entries, report)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coding::{put_length_prefixed, put_varint64};
    use crate::slice::Slice;

    #[test]
    fn clean_field_stream() {
        let mut buf = Vec::new();
        put_length_prefixed(&mut buf, Slice::new(b"alpha"));
        put_length_prefixed(&mut buf, Slice::new(b""));
        put_length_prefixed(&mut buf, Slice::new(b"gamma_longer_payload"));

        let (entries, report) = scan_fields(&buf);
        assert!(report.is_clean());
        assert_eq!(report.fields_decoded, 3);
        assert_eq!(report.bytes_consumed, buf.len());

        assert_eq!(entries[0].offset, 0);
        assert_eq!(entries[0].value, 5);
        assert_eq!(entries[0].payload_offset, 1);
        assert_eq!(entries[1].value, 0);
        assert_eq!(entries[2].value, 20);
    }

    #[test]
    fn truncated_tail_is_reported_not_panicked() {
        let mut buf = Vec::new();
        put_length_prefixed(&mut buf, Slice::new(b"ok"));
        buf.push(0x30); // claims 48 payload bytes; none follow

        let (entries, report) = scan_fields(&buf);
        assert_eq!(entries.len(), 1);
        assert!(!report.is_clean());
        assert_eq!(report.bytes_consumed, 3);
        assert!(matches!(
            report.trailing_error,
            Some(CodecError::TruncatedPayload { needed: 48, available: 0 })
        ));
    }

    #[test]
    fn empty_buffer_is_clean() {
        let (entries, report) = scan_fields(&[]);
        assert!(entries.is_empty());
        assert!(report.is_clean());
        assert_eq!(report.bytes_consumed, 0);
    }

    #[test]
    fn varint_stream_scan() {
        let mut buf = Vec::new();
        for v in [0u64, 127, 128, 300, 1 << 40] {
            put_varint64(&mut buf, v);
        }

        let (entries, report) = scan_varints(&buf);
        assert!(report.is_clean());
        assert_eq!(report.fields_decoded, 5);
        assert_eq!(report.bytes_consumed, buf.len());
        let values: Vec<u64> = entries.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![0, 127, 128, 300, 1 << 40]);
    }

    #[test]
    fn varint_stream_with_dangling_continuation() {
        let mut buf = Vec::new();
        put_varint64(&mut buf, 300);
        buf.push(0x80); // continuation byte with no terminator

        let (entries, report) = scan_varints(&buf);
        assert_eq!(entries.len(), 1);
        assert!(!report.is_clean());
        assert_eq!(report.bytes_consumed, 2);
        assert!(matches!(report.trailing_error, Some(CodecError::BufferExhausted)));
    }
}
