//! Link extractor: fetch a directory-listing page and pick out archive links.

mod parse;

pub use parse::extract_links;

use crate::http::{self, HttpError, TransferOptions};
use crate::sources::SuffixFilter;

/// Why a listing page yielded no links.
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    /// Anything but `200 OK`; the page is skipped.
    #[error("listing {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
    #[error("listing {url}: {source}")]
    Transfer { url: String, source: HttpError },
}

/// GETs the listing at `url` and returns every `<a href>` that passes
/// `filter`, in document order. Each call fetches the page again.
pub fn fetch_links(
    url: &str,
    filter: &SuffixFilter,
    opts: &TransferOptions,
) -> Result<Vec<String>, ListingError> {
    let response = http::get(url, opts).map_err(|source| ListingError::Transfer {
        url: url.to_string(),
        source,
    })?;
    if response.status != 200 {
        tracing::warn!(url, status = response.status, "listing not available");
        return Err(ListingError::Status {
            url: url.to_string(),
            code: response.status,
        });
    }
    let links = extract_links(&response.text(), filter);
    tracing::debug!(
        url,
        count = links.len(),
        content_type = response.head.content_type.as_deref().unwrap_or("-"),
        "listing parsed"
    );
    Ok(links)
}
