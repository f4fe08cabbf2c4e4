//! Configuration for BasaltKV engine entry points
//!
//! Plain value structs passed by value into open/read/write operations.
//! The referenced collaborators (comparator, cache, environment, logger,
//! filter policy, snapshot) are owned and lifecycle-managed by the
//! engine; this layer holds opaque handles and never constructs, frees,
//! or synchronizes them.

use std::fmt;
use std::sync::Arc;

use crate::comparator::Comparator;

// =============================================================================
// Collaborator Seams (engine-owned, opaque here)
// =============================================================================

/// Block cache handle. The engine manages capacity and eviction.
pub trait Cache: Send + Sync {}

/// Platform environment handle (files, clocks, scheduling).
pub trait Env: Send + Sync {}

/// Destination for informational engine messages.
pub trait Logger: Send + Sync {
    /// Record one message
    fn log(&self, message: &str);
}

/// Key filter (e.g. a Bloom filter) used to skip disk reads.
pub trait FilterPolicy: Send + Sync {
    /// Stable identifier persisted alongside filter blocks
    fn name(&self) -> &str;
}

/// A point-in-time view of the database.
pub trait Snapshot: Send + Sync {}

// =============================================================================
// Compression
// =============================================================================

/// Block compression mode.
///
/// Stored per block with a stable code, so a database written with one
/// setting stays readable after the setting changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CompressionType {
    /// Store blocks uncompressed
    None = 0x00,
    /// Fast lightweight compression. The engine falls back to storing a
    /// block uncompressed when compression does not shrink it enough.
    Snappy = 0x01,
}

// =============================================================================
// Options
// =============================================================================

/// Options for opening an engine instance
#[derive(Clone)]
pub struct Options {
    // -------------------------------------------------------------------------
    // Behavior
    // -------------------------------------------------------------------------
    /// Key ordering. None → the engine uses its bytewise default.
    pub comparator: Option<Arc<dyn Comparator>>,

    /// Create the database if it does not exist
    pub create_if_missing: bool,

    /// Fail opening if the database already exists
    pub error_if_exists: bool,

    /// Aggressively check integrity and surface errors early; a single
    /// corrupt entry may make a whole unit unreadable when set
    pub paranoid_checks: bool,

    // -------------------------------------------------------------------------
    // Platform Hooks
    // -------------------------------------------------------------------------
    /// Platform environment. None → the engine's default environment.
    pub env: Option<Arc<dyn Env>>,

    /// Destination for informational messages. None → engine default.
    pub info_log: Option<Arc<dyn Logger>>,

    // -------------------------------------------------------------------------
    // Resource Sizing
    // -------------------------------------------------------------------------
    /// Memtable budget in bytes before a flush is scheduled
    pub write_buffer_size: usize,

    /// Max files held open at once, table files included
    pub max_open_files: usize,

    /// Block cache. None → the engine allocates an internal ~8 MiB cache.
    pub block_cache: Option<Arc<dyn Cache>>,

    // -------------------------------------------------------------------------
    // Block Format
    // -------------------------------------------------------------------------
    /// Approximate uncompressed bytes of user data per block
    pub block_size: usize,

    /// Keys between restart points for key delta-encoding
    pub block_restart_interval: usize,

    /// Block compression mode
    pub compression: CompressionType,

    /// Key filter for skipping disk reads. None → no filtering.
    pub filter_policy: Option<Arc<dyn FilterPolicy>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            comparator: None,
            create_if_missing: false,
            error_if_exists: false,
            paranoid_checks: false,
            env: None,
            info_log: None,
            write_buffer_size: 4 * 1024 * 1024,
            max_open_files: 1000,
            block_cache: None,
            block_size: 4 * 1024,
            block_restart_interval: 16,
            compression: CompressionType::Snappy,
            filter_policy: None,
        }
    }
}

impl Options {
    /// Create a new options builder
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("comparator", &self.comparator.as_ref().map(|c| c.name().to_string()))
            .field("create_if_missing", &self.create_if_missing)
            .field("error_if_exists", &self.error_if_exists)
            .field("paranoid_checks", &self.paranoid_checks)
            .field("write_buffer_size", &self.write_buffer_size)
            .field("max_open_files", &self.max_open_files)
            .field("has_block_cache", &self.block_cache.is_some())
            .field("block_size", &self.block_size)
            .field("block_restart_interval", &self.block_restart_interval)
            .field("compression", &self.compression)
            .field("has_filter_policy", &self.filter_policy.is_some())
            .finish()
    }
}

/// Builder for [`Options`]
#[derive(Default)]
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    /// Set the key comparator
    pub fn comparator(mut self, comparator: Arc<dyn Comparator>) -> Self {
        self.options.comparator = Some(comparator);
        self
    }

    /// Create the database if missing
    pub fn create_if_missing(mut self, yes: bool) -> Self {
        self.options.create_if_missing = yes;
        self
    }

    /// Fail if the database already exists
    pub fn error_if_exists(mut self, yes: bool) -> Self {
        self.options.error_if_exists = yes;
        self
    }

    /// Enable paranoid integrity checks
    pub fn paranoid_checks(mut self, yes: bool) -> Self {
        self.options.paranoid_checks = yes;
        self
    }

    /// Set the platform environment
    pub fn env(mut self, env: Arc<dyn Env>) -> Self {
        self.options.env = Some(env);
        self
    }

    /// Set the info log destination
    pub fn info_log(mut self, logger: Arc<dyn Logger>) -> Self {
        self.options.info_log = Some(logger);
        self
    }

    /// Set the memtable budget (in bytes)
    pub fn write_buffer_size(mut self, bytes: usize) -> Self {
        self.options.write_buffer_size = bytes;
        self
    }

    /// Set the open-file budget
    pub fn max_open_files(mut self, count: usize) -> Self {
        self.options.max_open_files = count;
        self
    }

    /// Set the block cache
    pub fn block_cache(mut self, cache: Arc<dyn Cache>) -> Self {
        self.options.block_cache = Some(cache);
        self
    }

    /// Set the target block size (in bytes)
    pub fn block_size(mut self, bytes: usize) -> Self {
        self.options.block_size = bytes;
        self
    }

    /// Set the restart interval for key delta-encoding
    pub fn block_restart_interval(mut self, keys: usize) -> Self {
        self.options.block_restart_interval = keys;
        self
    }

    /// Set the block compression mode
    pub fn compression(mut self, mode: CompressionType) -> Self {
        self.options.compression = mode;
        self
    }

    /// Set the key filter policy
    pub fn filter_policy(mut self, policy: Arc<dyn FilterPolicy>) -> Self {
        self.options.filter_policy = Some(policy);
        self
    }

    pub fn build(self) -> Options {
        self.options
    }
}

// =============================================================================
// Read / Write Options
// =============================================================================

/// Options for a single read operation
#[derive(Clone)]
pub struct ReadOptions {
    /// Verify block checksums for data read on this operation
    pub verify_checksums: bool,

    /// Cache blocks read for this operation; turn off for bulk scans
    pub fill_cache: bool,

    /// Read as of this snapshot. None → an implicit snapshot of the
    /// state at the start of the read.
    pub snapshot: Option<Arc<dyn Snapshot>>,
}

impl ReadOptions {
    /// Defaults: checksums off, cache fill on, implicit snapshot
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            verify_checksums: false,
            fill_cache: true,
            snapshot: None,
        }
    }
}

/// Options for a single write operation
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions {
    /// Flush the OS buffer cache (fsync) before the write is considered
    /// complete. Off trades durability of the most recent writes on a
    /// machine crash for speed; a process crash alone loses nothing.
    pub sync: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { sync: false }
    }
}

// =============================================================================
// Tests
// =============================================================================
