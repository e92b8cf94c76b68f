use std::path::PathBuf;

use anyhow::Result;

/// File-save seam for the download operation.
pub trait ResultWriter: Send + Sync {
    fn write(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf>;
}
