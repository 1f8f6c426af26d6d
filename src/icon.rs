//! Icon extraction.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::archive::ModArchive;

/// Copy a mod's declared icon out of its archive into `dest_dir`.
///
/// The output file is always `<mod_id>.png`, whatever the source
/// format; existing files are overwritten. Backslash separators in the
/// declared path are normalized to forward slashes before lookup,
/// since descriptors written on Windows encode them either way.
///
/// Every failure mode collapses to `None`: no icon declared, no
/// matching entry, or an I/O error during the copy. An icon is never
/// worth failing the mod's record over.
pub async fn extract_icon(
    archive: &ModArchive,
    icon_path: Option<&str>,
    mod_id: &str,
    dest_dir: &Path,
) -> Option<PathBuf> {
    let icon_path = icon_path.filter(|p| !p.is_empty())?;
    let entry = archive.entry(&icon_path.replace('\\', "/"))?.clone();

    let target = dest_dir.join(format!("{mod_id}.png"));
    match copy_entry(archive, &entry, &target).await {
        Ok(()) => Some(target),
        Err(err) => {
            warn!(mod_id, icon = icon_path, "failed to extract icon: {err:#}");
            None
        }
    }
}

async fn copy_entry(
    archive: &ModArchive,
    entry: &crate::archive::ArchiveEntry,
    target: &Path,
) -> anyhow::Result<()> {
    let data = archive.read(entry).await?;
    tokio::fs::write(target, data).await?;
    Ok(())
}
