//! Local directory tree: one directory per source under the download root.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::sources::Source;
use crate::url_model;

/// Directory a source is mirrored into.
pub fn source_dir(root: &Path, source: &Source) -> PathBuf {
    root.join(source.local_dir())
}

/// Ensures the directory of every source exists under `root` (parents included).
/// Existing directories are left alone, so repeated calls are no-ops.
pub fn prepare_dirs(root: &Path, sources: &[Source]) -> Result<()> {
    for source in sources {
        let dir = source_dir(root, source);
        if dir.is_dir() {
            continue;
        }
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;
        tracing::debug!(dir = %dir.display(), "created source directory");
    }
    Ok(())
}

/// Local path for a file of `source` downloaded from `url`:
/// the source directory plus the URL's final path segment.
pub fn output_path(root: &Path, source: &Source, url: &str) -> Result<PathBuf> {
    let name = url_model::derive_filename(url)
        .with_context(|| format!("no filename in URL {}", url))?;
    Ok(source_dir(root, source).join(name))
}
