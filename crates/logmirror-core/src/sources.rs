//! The fixed set of listing pages to mirror and the suffix filter.
//!
//! Each remote sub-path is paired explicitly with the local directory it is
//! mirrored into, so output paths never depend on the shape of the host name.

use std::path::Path;

/// S3 website hosting the raw proxy log listings.
pub const BASE_URL: &str = "http://project-bluesmote.s3-website-us-east-1.amazonaws.com";

/// Only compressed log archives are downloaded.
pub const LOG_SUFFIXES: &[&str] = &[".gz"];

/// A remote listing directory and the relative local directory it mirrors into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    /// Path under the base URL, with leading and trailing `/`.
    pub remote_path: &'static str,
    /// Directory relative to the download root.
    pub local_dir: &'static str,
}

impl Source {
    pub const fn new(remote_path: &'static str, local_dir: &'static str) -> Self {
        Self {
            remote_path,
            local_dir,
        }
    }

    /// Listing page URL for this source under `base_url`.
    pub fn listing_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.remote_path)
    }

    pub fn local_dir(&self) -> &Path {
        Path::new(self.local_dir)
    }
}

/// The seven proxy log listings, in crawl order.
pub const SOURCES: [Source; 7] = [
    Source::new("/raw_logs/SG-42/", "raw_logs/SG-42"),
    Source::new("/raw_logs/SG-43/", "raw_logs/SG-43"),
    Source::new("/raw_logs/SG-44/", "raw_logs/SG-44"),
    Source::new("/raw_logs/SG-45/", "raw_logs/SG-45"),
    Source::new("/raw_logs/SG-46/", "raw_logs/SG-46"),
    Source::new("/raw_logs/SG-47/", "raw_logs/SG-47"),
    Source::new("/raw_logs/SG-48/", "raw_logs/SG-48"),
];

/// Accepted filename suffixes for links on a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixFilter {
    suffixes: Vec<String>,
}

impl SuffixFilter {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Filter for compressed log archives.
    pub fn logs() -> Self {
        Self::new(LOG_SUFFIXES.iter().copied())
    }

    /// True if `href` ends with any accepted suffix.
    pub fn accepts(&self, href: &str) -> bool {
        self.suffixes.iter().any(|s| href.ends_with(s.as_str()))
    }
}
