//! URL handling for listing links: resolving hrefs and deriving filenames.

mod path;
mod validate;

pub use path::filename_from_url_path;
pub use validate::is_usable_filename;

use anyhow::{Context, Result};

/// Resolves a listing href against the listing page URL.
///
/// Relative hrefs (the usual case on an S3 website listing) are appended to
/// the listing directory; absolute hrefs are kept as-is.
///
/// - `resolve_href("http://h/raw_logs/SG-42/", "a.gz")` → `"http://h/raw_logs/SG-42/a.gz"`
pub fn resolve_href(listing_url: &str, href: &str) -> Result<String> {
    let base = url::Url::parse(listing_url)
        .with_context(|| format!("invalid listing URL: {}", listing_url))?;
    let joined = base
        .join(href)
        .with_context(|| format!("invalid href {:?} on {}", href, listing_url))?;
    Ok(joined.to_string())
}

/// Derives the local filename for a download: the last URL path segment,
/// unchanged. Returns `None` when the URL has no usable segment.
pub fn derive_filename(url: &str) -> Option<String> {
    filename_from_url_path(url).filter(|name| is_usable_filename(name))
}
