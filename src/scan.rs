//! Directory scan and the per-archive pipeline.
//!
//! Archives are processed strictly one at a time in listing order.
//! Each one either yields a record or a [`Skip`] naming why it was
//! left out; skips are logged and never abort the run.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::archive::ModArchive;
use crate::descriptor::{DESCRIPTOR_ENTRY, Descriptor};
use crate::icon::extract_icon;
use crate::record::{ModRecord, build_record};
use crate::workspace::Workspace;

/// Suffix of an active mod archive.
pub const ENABLED_SUFFIX: &str = ".jar";
/// Suffix of a deactivated mod archive.
pub const DISABLED_SUFFIX: &str = ".jar.disabled";

/// Why an archive produced no record.
#[derive(Debug)]
pub enum Skip {
    /// The file could not be opened or is not a valid zip archive.
    Unreadable(anyhow::Error),
    /// No `fabric.mod.json` entry; not a Fabric mod, excluded quietly.
    NoDescriptor,
    /// The descriptor entry exists but is not valid JSON.
    BadDescriptor(anyhow::Error),
    /// The descriptor has no string `id`, which records require.
    MissingId,
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::Unreadable(err) => write!(f, "unreadable archive: {err:#}"),
            Skip::NoDescriptor => write!(f, "no {DESCRIPTOR_ENTRY} entry"),
            Skip::BadDescriptor(err) => write!(f, "malformed {DESCRIPTOR_ENTRY}: {err:#}"),
            Skip::MissingId => write!(f, "descriptor has no id field"),
        }
    }
}

/// Classify a file name by mod-archive suffix.
///
/// Returns the enabled flag for recognized names, `None` for anything
/// the scanner should ignore. Matching is exact and case-sensitive.
pub fn classify(file_name: &str) -> Option<bool> {
    if file_name.ends_with(DISABLED_SUFFIX) {
        Some(false)
    } else if file_name.ends_with(ENABLED_SUFFIX) {
        Some(true)
    } else {
        None
    }
}

/// Scan `mods_dir` and build a record for every readable Fabric mod.
///
/// Fails only if the directory itself cannot be listed; everything
/// below that is absorbed per archive.
pub async fn scan_mods(mods_dir: &Path, workspace: &Workspace) -> Result<Vec<ModRecord>> {
    let mut records = Vec::new();

    let mut dir = tokio::fs::read_dir(mods_dir)
        .await
        .with_context(|| format!("listing {}", mods_dir.display()))?;

    while let Some(dent) = dir.next_entry().await? {
        let name = dent.file_name();
        let Some(enabled) = name.to_str().and_then(classify) else {
            continue;
        };
        if !dent.file_type().await?.is_file() {
            continue;
        }

        let path = std::path::absolute(dent.path())?;
        match process_archive(&path, enabled, workspace).await {
            Ok(record) => {
                debug!(path = %path.display(), "built record");
                records.push(record);
            }
            Err(Skip::NoDescriptor) => {
                debug!(path = %path.display(), "skipped: {}", Skip::NoDescriptor);
            }
            Err(skip) => {
                warn!(path = %path.display(), "skipped: {skip}");
            }
        }
    }

    Ok(records)
}

/// Run the extraction pipeline for one archive.
///
/// The archive's file handle lives inside this function; it is
/// released before the scanner moves on, record or no record.
async fn process_archive(path: &Path, enabled: bool, workspace: &Workspace) -> Result<ModRecord, Skip> {
    let archive = ModArchive::open(path).await.map_err(Skip::Unreadable)?;

    let entry = archive
        .entry(DESCRIPTOR_ENTRY)
        .ok_or(Skip::NoDescriptor)?
        .clone();
    let bytes = archive.read(&entry).await.map_err(Skip::BadDescriptor)?;
    let descriptor = Descriptor::parse(&bytes).map_err(Skip::BadDescriptor)?;

    let id = descriptor.id().ok_or(Skip::MissingId)?.to_string();
    let icon_path = extract_icon(&archive, descriptor.icon(), &id, workspace.root()).await;

    Ok(build_record(&descriptor, path, enabled, icon_path.as_deref()))
}
