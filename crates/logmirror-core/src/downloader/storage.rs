//! `.part` file lifecycle: fixed-size chunked writes, then atomic rename.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `a.gz` → `a.gz.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Buffers incoming bytes and writes them out `chunk_size` at a time,
/// flushing after every chunk.
pub struct ChunkWriter {
    file: File,
    temp_path: PathBuf,
    chunk_size: usize,
    pending: Vec<u8>,
    written: u64,
}

impl ChunkWriter {
    /// Create (or truncate) the temp file at `temp_path`.
    pub fn create(temp_path: &Path, chunk_size: usize) -> io::Result<Self> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)?;
        let chunk_size = chunk_size.max(1);
        Ok(Self {
            file,
            temp_path: temp_path.to_path_buf(),
            chunk_size,
            pending: Vec::with_capacity(chunk_size),
            written: 0,
        })
    }

    /// Appends `data`; calls `on_chunk(len)` after each chunk hits the disk.
    pub fn push(&mut self, mut data: &[u8], mut on_chunk: impl FnMut(usize)) -> io::Result<()> {
        while !data.is_empty() {
            let room = self.chunk_size - self.pending.len();
            let take = room.min(data.len());
            self.pending.extend_from_slice(&data[..take]);
            data = &data[take..];
            if self.pending.len() == self.chunk_size {
                let n = self.write_pending()?;
                on_chunk(n);
            }
        }
        Ok(())
    }

    /// Writes any buffered tail and returns the total bytes written.
    pub fn finish(&mut self, mut on_chunk: impl FnMut(usize)) -> io::Result<u64> {
        if !self.pending.is_empty() {
            let n = self.write_pending()?;
            on_chunk(n);
        }
        self.file.sync_all()?;
        Ok(self.written)
    }

    fn write_pending(&mut self) -> io::Result<usize> {
        self.file.write_all(&self.pending)?;
        self.file.flush()?;
        let n = self.pending.len();
        self.written += n as u64;
        self.pending.clear();
        Ok(n)
    }

    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Rename the temp file to the final path. Consumes the writer and closes the file.
    pub fn finalize(self, final_path: &Path) -> io::Result<()> {
        let temp_path = self.temp_path.clone();
        drop(self.file);
        std::fs::rename(&temp_path, final_path)
    }
}
