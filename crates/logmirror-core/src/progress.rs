//! Events emitted while mirroring, for the CLI to render.
//!
//! The core never prints; it reports through a [`ProgressSink`] and the
//! caller decides what the operator sees.

/// Announced when a download's size is known and the body starts streaming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStart {
    /// Local filename (last URL segment).
    pub name: String,
    /// Expected size from `Content-Length`.
    pub total_bytes: u64,
    /// Progress ticks to expect: `total_bytes / chunk_size + 1`.
    pub expected_chunks: u64,
}

impl FileStart {
    pub fn new(name: impl Into<String>, total_bytes: u64, chunk_size: usize) -> Self {
        Self {
            name: name.into(),
            total_bytes,
            expected_chunks: total_bytes / chunk_size.max(1) as u64 + 1,
        }
    }
}

/// Receiver for mirror progress. Every method defaults to a no-op.
pub trait ProgressSink {
    /// A listing page was fetched and yielded `links` matching hrefs.
    fn listing_fetched(&mut self, _url: &str, _links: usize) {}

    fn download_started(&mut self, _file: &FileStart) {}

    /// One chunk of `_bytes` was written and flushed.
    fn chunk_written(&mut self, _bytes: usize) {}

    fn download_completed(&mut self, _name: &str) {}

    /// MD5 of the completed file, as lowercase hex.
    fn checksum(&mut self, _name: &str, _md5: &str) {}

    /// A listing or download failed; the run continues.
    fn item_failed(&mut self, _target: &str, _error: &str) {}
}

/// Sink that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl ProgressSink for Silent {}
