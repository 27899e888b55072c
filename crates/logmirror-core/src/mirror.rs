//! Orchestrator: prepare directories, crawl each listing, download each link.
//!
//! Strictly sequential. Directory preparation failing is fatal; a listing or
//! download failing is recorded in the [`MirrorReport`] and the run moves on.

use anyhow::Result;
use std::path::Path;

use crate::downloader;
use crate::http::TransferOptions;
use crate::layout;
use crate::listing::{self, ListingError};
use crate::progress::ProgressSink;
use crate::report::MirrorReport;
use crate::sources::{Source, SuffixFilter, BASE_URL, SOURCES};
use crate::url_model;

/// What to crawl: a base URL, its sources, and the link filter.
#[derive(Debug, Clone)]
pub struct MirrorPlan<'a> {
    pub base_url: &'a str,
    pub sources: &'a [Source],
    pub filter: SuffixFilter,
}

impl Default for MirrorPlan<'static> {
    fn default() -> Self {
        Self {
            base_url: BASE_URL,
            sources: &SOURCES,
            filter: SuffixFilter::logs(),
        }
    }
}

/// Links found on one source's listing page.
#[derive(Debug)]
pub struct SourceListing {
    pub source: Source,
    pub url: String,
    pub links: Result<Vec<String>, ListingError>,
}

/// Fetches every listing in `plan` without downloading anything.
pub fn list(plan: &MirrorPlan<'_>, opts: &TransferOptions) -> Vec<SourceListing> {
    plan.sources
        .iter()
        .map(|source| {
            let url = source.listing_url(plan.base_url);
            let links = listing::fetch_links(&url, &plan.filter, opts);
            SourceListing {
                source: *source,
                url,
                links,
            }
        })
        .collect()
}

/// Mirrors every source in `plan` under `root`.
///
/// Returns `Err` only when the local directory tree cannot be prepared;
/// everything else ends up in the returned report.
pub fn run(
    plan: &MirrorPlan<'_>,
    root: &Path,
    opts: &TransferOptions,
    sink: &mut dyn ProgressSink,
) -> Result<MirrorReport> {
    layout::prepare_dirs(root, plan.sources)?;
    let mut report = MirrorReport::new();

    for source in plan.sources {
        let listing_url = source.listing_url(plan.base_url);
        let links = match listing::fetch_links(&listing_url, &plan.filter, opts) {
            Ok(links) => links,
            Err(e) => {
                tracing::warn!(url = %listing_url, "skipping listing: {}", e);
                sink.item_failed(&listing_url, &e.to_string());
                report.record_failure(listing_url, e);
                continue;
            }
        };
        report.listings += 1;
        sink.listing_fetched(&listing_url, links.len());

        for href in links {
            let file_url = match url_model::resolve_href(&listing_url, &href) {
                Ok(u) => u,
                Err(e) => {
                    let target = format!("{}{}", listing_url, href);
                    sink.item_failed(&target, &format!("{:#}", e));
                    report.record_failure(target, format!("{:#}", e));
                    continue;
                }
            };
            match downloader::download_file(root, source, &file_url, opts, sink) {
                Ok(file) => report.record_file(file),
                Err(e) => {
                    tracing::warn!(url = %file_url, "download failed: {}", e);
                    sink.item_failed(&file_url, &e.to_string());
                    report.record_failure(file_url, e);
                }
            }
        }
    }

    tracing::info!(
        files = report.downloaded.len(),
        failures = report.failures.len(),
        bytes = report.total_bytes(),
        "mirror run finished"
    );
    Ok(report)
}
