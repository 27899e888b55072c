//! Easy2 handler that streams one response body into a `.part` file.
//! Validates status and `Content-Length` before the first byte is written.

use std::mem;
use std::path::PathBuf;

use crate::http::{self, parse_headers, HttpError};
use crate::progress::{FileStart, ProgressSink};

use super::storage::ChunkWriter;
use super::DownloadError;

enum State {
    /// Headers still arriving; nothing on disk yet.
    Pending,
    Writing { writer: ChunkWriter, expected: u64 },
    Failed(DownloadError),
}

/// Handler state for one file transfer. Implements curl's Handler for Easy2.
pub(super) struct StreamHandler<'a> {
    url: String,
    name: String,
    temp_path: PathBuf,
    chunk_size: usize,
    pub(super) response_headers: Vec<String>,
    state: State,
    sink: &'a mut dyn ProgressSink,
}

impl<'a> StreamHandler<'a> {
    pub(super) fn new(
        url: &str,
        name: &str,
        temp_path: PathBuf,
        chunk_size: usize,
        sink: &'a mut dyn ProgressSink,
    ) -> Self {
        Self {
            url: url.to_string(),
            name: name.to_string(),
            temp_path,
            chunk_size,
            response_headers: Vec::new(),
            state: State::Pending,
            sink,
        }
    }

    /// Checks the final response head and opens the temp file.
    fn begin(&mut self) -> Result<(), DownloadError> {
        let head = parse_headers(&self.response_headers);
        let code = head.status.unwrap_or(0);
        if !http::is_success(code) {
            return Err(HttpError::Status {
                url: self.url.clone(),
                code,
            }
            .into());
        }
        let expected = head
            .content_length
            .ok_or_else(|| DownloadError::MissingContentLength {
                url: self.url.clone(),
            })?;
        let writer = ChunkWriter::create(&self.temp_path, self.chunk_size)
            .map_err(|e| DownloadError::io(&self.temp_path, e))?;
        self.sink
            .download_started(&FileStart::new(&self.name, expected, self.chunk_size));
        self.state = State::Writing { writer, expected };
        Ok(())
    }

    /// Failure recorded inside a callback, if any. Takes precedence over the
    /// generic curl write error it causes.
    pub(super) fn take_failure(&mut self) -> Option<DownloadError> {
        match mem::replace(&mut self.state, State::Pending) {
            State::Failed(e) => Some(e),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Called after a successful perform: flushes the tail, verifies the byte
    /// count and hands back the writer for the final rename.
    pub(super) fn complete(&mut self) -> Result<(ChunkWriter, u64), DownloadError> {
        if matches!(self.state, State::Pending) {
            // Empty body: write was never called.
            self.begin()?;
        }
        match mem::replace(&mut self.state, State::Pending) {
            State::Writing { mut writer, expected } => {
                let sink = &mut *self.sink;
                let received = writer
                    .finish(|n| sink.chunk_written(n))
                    .map_err(|e| DownloadError::io(&self.temp_path, e))?;
                if received != expected {
                    return Err(DownloadError::LengthMismatch {
                        url: self.url.clone(),
                        expected,
                        received,
                    });
                }
                Ok((writer, received))
            }
            State::Failed(e) => Err(e),
            State::Pending => unreachable!("begin() leaves Writing or returns Err"),
        }
    }
}

impl curl::easy::Handler for StreamHandler<'_> {
    fn header(&mut self, data: &[u8]) -> bool {
        http::push_header_line(&mut self.response_headers, data);
        true
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, curl::easy::WriteError> {
        if matches!(self.state, State::Pending) {
            if let Err(e) = self.begin() {
                self.state = State::Failed(e);
                return Ok(0);
            }
        }
        let result = match &mut self.state {
            State::Writing { writer, .. } => {
                let sink = &mut *self.sink;
                writer.push(data, |n| sink.chunk_written(n))
            }
            _ => return Ok(0),
        };
        match result {
            Ok(()) => Ok(data.len()),
            Err(e) => {
                tracing::warn!(url = %self.url, "write failed: {}", e);
                self.state = State::Failed(DownloadError::io(&self.temp_path, e));
                Ok(0) // abort transfer
            }
        }
    }
}
