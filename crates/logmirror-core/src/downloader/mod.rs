//! Streaming file downloader.
//!
//! One blocking GET per file. The body goes to `<output>.part` in fixed-size
//! chunks (flushed after each), the byte count is checked against
//! `Content-Length`, and only then is the file renamed into place. A failed
//! transfer can leave a `.part` file behind but never a truncated output.

mod handler;
mod storage;

pub use storage::{temp_path, ChunkWriter, TEMP_SUFFIX};

use std::io;
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::http::{self, HttpError, TransferOptions};
use crate::layout;
use crate::progress::ProgressSink;
use crate::sources::Source;

use handler::StreamHandler;

/// Why a single file could not be mirrored.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error(transparent)]
    Http(#[from] HttpError),
    /// Response carried no numeric `Content-Length`, so the size is unknown.
    #[error("{url}: response has no usable Content-Length header")]
    MissingContentLength { url: String },
    /// Body ended early (or ran long) relative to `Content-Length`.
    #[error("{url}: received {received} bytes, expected {expected}")]
    LengthMismatch {
        url: String,
        expected: u64,
        received: u64,
    },
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DownloadError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        DownloadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A file that landed on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub url: String,
    pub path: PathBuf,
    pub bytes: u64,
    /// Lowercase hex MD5 of the file as written.
    pub md5: String,
}

/// Downloads `url` into the directory of `source` under `root`.
///
/// The output name is the URL's final path segment. Progress and the final
/// checksum are reported to `sink`. The source directory must already exist
/// (see [`layout::prepare_dirs`]).
pub fn download_file(
    root: &Path,
    source: &Source,
    url: &str,
    opts: &TransferOptions,
    sink: &mut dyn ProgressSink,
) -> Result<DownloadedFile, DownloadError> {
    let output = layout::output_path(root, source, url)?;
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let part = temp_path(&output);
    tracing::info!(url, output = %output.display(), "downloading");

    let mut easy = curl::easy::Easy2::new(StreamHandler::new(
        url,
        &name,
        part,
        opts.chunk_size,
        &mut *sink,
    ));
    http::configure(&mut easy, url, opts)?;

    let performed = easy.perform();
    if let Some(failure) = easy.get_mut().take_failure() {
        return Err(failure);
    }
    performed.map_err(HttpError::from)?;

    let code = easy.response_code().map_err(HttpError::from)?;
    if !http::is_success(code) {
        return Err(HttpError::Status {
            url: url.to_string(),
            code,
        }
        .into());
    }

    let (writer, bytes) = easy.get_mut().complete()?;
    drop(easy);

    let part = writer.temp_path().to_path_buf();
    writer
        .finalize(&output)
        .map_err(|e| DownloadError::io(&part, e))?;
    sink.download_completed(&name);

    let md5 = checksum::md5_path(&output)?;
    sink.checksum(&name, &md5);
    tracing::info!(url, bytes, md5 = %md5, "download complete");

    Ok(DownloadedFile {
        url: url.to_string(),
        path: output,
        bytes,
        md5,
    })
}
