//! Blocking HTTP GET over libcurl.
//!
//! Listing pages are small and fetched whole with [`get`]; archive downloads
//! stream through [`crate::downloader`], which reuses [`configure`] and the
//! header parsing in [`parse`].

mod parse;

pub use parse::{parse_headers, ResponseHead};

use std::str;
use std::time::Duration;

/// Knobs applied to every transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferOptions {
    /// Connect timeout; `None` waits indefinitely.
    pub connect_timeout: Option<Duration>,
    /// Bytes per disk write when streaming a download.
    pub chunk_size: usize,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            chunk_size: crate::config::DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Transport-level failure of a GET request.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// Curl reported an error (connection refused, DNS, aborted write, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Response had a status the caller does not accept.
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
}

/// Fully buffered response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u32,
    pub head: ResponseHead,
    pub body: Vec<u8>,
}

impl Response {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Applies URL and transfer options to a handle. Redirects are followed.
pub fn configure<H: curl::easy::Handler>(
    easy: &mut curl::easy::Easy2<H>,
    url: &str,
    opts: &TransferOptions,
) -> Result<(), HttpError> {
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    if let Some(t) = opts.connect_timeout {
        easy.connect_timeout(t)?;
    }
    Ok(())
}

/// Collects header lines of the final response (earlier redirect hops are dropped).
pub(crate) fn push_header_line(lines: &mut Vec<String>, data: &[u8]) {
    if let Ok(s) = str::from_utf8(data) {
        let line = s.trim_end();
        if line.starts_with("HTTP/") {
            lines.clear();
        }
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
}

struct Collector {
    headers: Vec<String>,
    body: Vec<u8>,
}

impl curl::easy::Handler for Collector {
    fn header(&mut self, data: &[u8]) -> bool {
        push_header_line(&mut self.headers, data);
        true
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, curl::easy::WriteError> {
        self.body.extend_from_slice(data);
        Ok(data.len())
    }
}

/// GETs `url` and buffers the whole body. Any HTTP status is returned as a
/// `Response`; only transport failures are errors.
pub fn get(url: &str, opts: &TransferOptions) -> Result<Response, HttpError> {
    let mut easy = curl::easy::Easy2::new(Collector {
        headers: Vec::new(),
        body: Vec::new(),
    });
    configure(&mut easy, url, opts)?;
    easy.perform()?;

    let status = easy.response_code()?;
    let collector = easy.get_mut();
    let head = parse_headers(&collector.headers);
    let body = std::mem::take(&mut collector.body);
    tracing::debug!(url, status, bytes = body.len(), "GET complete");
    Ok(Response { status, head, body })
}

/// True for 2xx status codes.
pub fn is_success(code: u32) -> bool {
    (200..300).contains(&code)
}
