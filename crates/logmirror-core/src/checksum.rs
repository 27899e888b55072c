//! MD5 checksum of completed downloads, shown to the operator.
//!
//! Computed by re-reading the finished file rather than inline with the
//! transfer, so the digest reflects what actually landed on disk.

use anyhow::{Context, Result};
use md5::{Digest, Md5};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BLOCK_SIZE: usize = 4096;

/// Compute MD5 of a file and return the digest as lowercase hex.
/// Reads in 4096-byte blocks to keep memory use bounded.
pub fn md5_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Md5::new();
    let mut buf = [0u8; BLOCK_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    let digest = hasher.finalize();
    Ok(hex::encode(digest))
}
