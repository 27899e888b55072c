//! Per-run summary: what was downloaded and what failed.

use crate::downloader::DownloadedFile;

/// A listing or download that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Listing URL or file URL.
    pub target: String,
    pub error: String,
}

/// Overall result of a mirror run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing failed.
    Success,
    /// Some items failed, at least one file was downloaded.
    PartialSuccess,
    /// Items failed and nothing was downloaded.
    Failed,
}

#[derive(Debug, Default, Clone)]
pub struct MirrorReport {
    pub downloaded: Vec<DownloadedFile>,
    pub failures: Vec<Failure>,
    /// Listing pages fetched successfully.
    pub listings: usize,
}

impl MirrorReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_file(&mut self, file: DownloadedFile) {
        self.downloaded.push(file);
    }

    pub fn record_failure(&mut self, target: impl Into<String>, error: impl ToString) {
        self.failures.push(Failure {
            target: target.into(),
            error: error.to_string(),
        });
    }

    pub fn outcome(&self) -> Outcome {
        match (self.failures.is_empty(), self.downloaded.is_empty()) {
            (true, _) => Outcome::Success,
            (false, false) => Outcome::PartialSuccess,
            (false, true) => Outcome::Failed,
        }
    }

    pub fn total_bytes(&self) -> u64 {
        self.downloaded.iter().map(|f| f.bytes).sum()
    }
}
