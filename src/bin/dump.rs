//! BasaltKV Dump Binary
//!
//! Inspects files containing encoded field streams: prints each decoded
//! field with its offset and a hex preview, and reports where a corrupt
//! buffer stops decoding.

use std::fs;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use basaltkv_codec::inspect::{scan_fields, scan_varints, FieldEntry, ScanReport};

/// BasaltKV encoded-stream inspector
#[derive(Parser, Debug)]
#[command(name = "basaltkv-dump")]
#[command(about = "Inspect BasaltKV encoded byte streams")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a file as consecutive length-prefixed fields
    Fields {
        /// File to inspect
        path: String,
    },

    /// Decode a file as consecutive varint64 values
    Varints {
        /// File to inspect
        path: String,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,basaltkv_codec=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let (path, as_fields) = match &args.command {
        Commands::Fields { path } => (path, true),
        Commands::Varints { path } => (path, false),
    };

    tracing::info!("basaltkv-dump v{}", basaltkv_codec::VERSION);
    tracing::info!("Inspecting: {}", path);

    let buf = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            tracing::error!("Failed to read {}: {}", path, e);
            std::process::exit(1);
        }
    };

    let (entries, report) = if as_fields {
        scan_fields(&buf)
    } else {
        scan_varints(&buf)
    };

    if as_fields {
        print_fields(&buf, &entries);
    } else {
        print_varints(&entries);
    }
    print_report(&buf, &report);

    if !report.is_clean() {
        std::process::exit(2);
    }
}

/// Render length-prefixed fields with a short hex preview of each payload
fn print_fields(buf: &[u8], entries: &[FieldEntry]) {
    for entry in entries {
        let payload =
            &buf[entry.payload_offset..entry.payload_offset + entry.value as usize];
        println!(
            "{:>8}  len {:>6}  {}",
            entry.offset,
            entry.value,
            hex_preview(payload)
        );
    }
}

/// Render decoded varint values
fn print_varints(entries: &[FieldEntry]) {
    for entry in entries {
        println!("{:>8}  {}", entry.offset, entry.value);
    }
}

fn print_report(buf: &[u8], report: &ScanReport) {
    println!(
        "{} fields, {} of {} bytes consumed",
        report.fields_decoded,
        report.bytes_consumed,
        buf.len()
    );
    if let Some(err) = &report.trailing_error {
        println!("corrupt tail at offset {}: {}", report.bytes_consumed, err);
    }
}

/// Up to 16 bytes as hex, with printable ASCII alongside
fn hex_preview(payload: &[u8]) -> String {
    let mut out = String::new();
    for &b in payload.iter().take(16) {
        out.push_str(&format!("{:02x} ", b));
    }
    if payload.len() > 16 {
        out.push_str("… ");
    }
    out.push('|');
    for &b in payload.iter().take(16) {
        out.push(if (0x20..0x7F).contains(&b) { b as char } else { '.' });
    }
    out.push('|');
    out
}
