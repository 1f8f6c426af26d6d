//! The run's output workspace.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::record::ModRecord;

/// Default workspace directory, relative to the working directory.
pub const DEFAULT_WORKSPACE: &str = "mod_temp_data";

/// Name of the aggregate output file inside the workspace.
pub const OUTPUT_FILE: &str = "mod_data.json";

/// Directory holding extracted icons and the aggregate record file.
///
/// Creation is idempotent: an existing directory from a previous run
/// is reused, and that run's icons and output file get overwritten.
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub async fn create(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("creating workspace {}", root.display()))?;
        // Icon and output paths are reported absolute, so anchor the
        // root once instead of at every join.
        let root = std::path::absolute(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(OUTPUT_FILE)
    }

    /// Serialize the full record list to `mod_data.json` in one pass.
    pub async fn write_records(&self, records: &[ModRecord]) -> Result<()> {
        let json = serde_json::to_vec_pretty(records)?;
        let path = self.output_path();
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
