use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::interfaces::ports::ResultWriter;
use crate::global_constants;

/// Writes downloaded results into a target directory.
pub struct DiskResultWriter {
    target_dir: PathBuf,
}

impl DiskResultWriter {
    pub fn build(target_dir: PathBuf) -> Self {
        Self { target_dir }
    }
}

impl ResultWriter for DiskResultWriter {
    fn write(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.target_dir)
            .with_context(|| format!("failed to create {:?}", self.target_dir))?;

        let path = self.target_dir.join(file_name);
        std::fs::write(&path, bytes).with_context(|| format!("failed to write {:?}", path))?;

        log::debug!(
            "{} wrote {} bytes to {:?}",
            global_constants::LOG_TAG_WRITER,
            bytes.len(),
            path
        );
        Ok(path)
    }
}
