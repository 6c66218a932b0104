use std::net::SocketAddr;

use anyhow::{Result, bail};

/// Upload limit bounds, in MiB.
const MIN_UPLOAD_MB: u64 = 1;
const MAX_UPLOAD_MB: u64 = 512;

/// Runtime configuration for the `serve` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub addr: SocketAddr,
    pub max_upload_bytes: usize,
}

impl ServeConfig {
    pub fn from_cli(host: &str, port: u16, max_upload_mb: u64) -> Result<Self> {
        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid listen address '{host}:{port}': {e}"))?;

        if !(MIN_UPLOAD_MB..=MAX_UPLOAD_MB).contains(&max_upload_mb) {
            bail!(
                "--max-upload-mb must be within {MIN_UPLOAD_MB}..={MAX_UPLOAD_MB}, got {max_upload_mb}"
            );
        }
        let max_upload_bytes = usize::try_from(max_upload_mb * 1024 * 1024)?;

        Ok(ServeConfig {
            addr,
            max_upload_bytes,
        })
    }
}
