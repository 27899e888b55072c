use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::http::TransferOptions;

/// Bytes per write+flush when streaming a download to disk.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Global configuration loaded from `~/.config/logmirror/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Local root under which the remote directory tree is mirrored.
    pub download_root: PathBuf,
    /// Chunk size in bytes for writing downloads (each chunk is flushed).
    pub chunk_size: usize,
    /// Optional connect timeout in seconds (None = wait indefinitely).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            download_root: PathBuf::from("bluesmote"),
            chunk_size: DEFAULT_CHUNK_SIZE,
            connect_timeout_secs: None,
        }
    }
}

impl MirrorConfig {
    /// Rejects values the downloader cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            anyhow::bail!("chunk_size must be greater than 0");
        }
        if self.download_root.as_os_str().is_empty() {
            anyhow::bail!("download_root must not be empty");
        }
        Ok(())
    }

    /// Transfer options derived from this config.
    pub fn transfer_options(&self) -> TransferOptions {
        TransferOptions {
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            chunk_size: self.chunk_size,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("logmirror")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MirrorConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MirrorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MirrorConfig = toml::from_str(&data)?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = MirrorConfig::default();
        assert_eq!(cfg.download_root, PathBuf::from("bluesmote"));
        assert_eq!(cfg.chunk_size, 1024);
        assert!(cfg.connect_timeout_secs.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            download_root = "/srv/mirror"
            chunk_size = 8192
            connect_timeout_secs = 15
        "#;
        let cfg: MirrorConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.download_root, PathBuf::from("/srv/mirror"));
        assert_eq!(cfg.chunk_size, 8192);
        assert_eq!(cfg.connect_timeout_secs, Some(15));
        let opts = cfg.transfer_options();
        assert_eq!(opts.connect_timeout, Some(Duration::from_secs(15)));
        assert_eq!(opts.chunk_size, 8192);
    }

    #[test]
    fn config_toml_timeout_optional() {
        let toml = r#"
            download_root = "data"
            chunk_size = 1024
        "#;
        let cfg: MirrorConfig = toml::from_str(toml).unwrap();
        assert!(cfg.connect_timeout_secs.is_none());
        assert!(cfg.transfer_options().connect_timeout.is_none());
    }

    #[test]
    fn zero_chunk_size_rejected() {
        let cfg = MirrorConfig {
            chunk_size: 0,
            ..MirrorConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
