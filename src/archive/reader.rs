//! Archive accessor: one open mod jar, entry lookup by name.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use flate2::read::DeflateDecoder;

use crate::io::{LocalFileReader, ReadAt};

use super::parser::CentralDirectory;
use super::structures::{ArchiveEntry, CompressionMethod};

/// A mod jar opened for entry lookup.
///
/// Owns the underlying file handle; dropping the value releases it,
/// which keeps handle lifetime scoped to one archive's processing.
pub struct ModArchive {
    directory: CentralDirectory<LocalFileReader>,
    entries: HashMap<String, ArchiveEntry>,
}

impl ModArchive {
    /// Open an archive and index its central directory by entry name.
    ///
    /// Fails if the file cannot be read or is not a valid zip, which
    /// the scanner treats as a per-archive skip.
    pub async fn open(path: &Path) -> Result<Self> {
        let reader = Arc::new(LocalFileReader::new(path)?);
        let directory = CentralDirectory::new(reader);
        let entries = directory
            .entries()
            .await
            .with_context(|| format!("reading archive {}", path.display()))?
            .into_iter()
            .filter(|e| !e.is_directory)
            .map(|e| (e.name.clone(), e))
            .collect();

        Ok(Self { directory, entries })
    }

    /// Look up an entry by its exact stored name.
    pub fn entry(&self, name: &str) -> Option<&ArchiveEntry> {
        self.entries.get(name)
    }

    /// Read and decompress one entry's contents.
    pub async fn read(&self, entry: &ArchiveEntry) -> Result<Vec<u8>> {
        let offset = self.directory.data_offset(entry).await?;

        let mut compressed = vec![0u8; entry.compressed_size as usize];
        self.directory
            .reader()
            .read_exact_at(offset, &mut compressed)
            .await?;

        match entry.compression_method {
            CompressionMethod::Stored => Ok(compressed),
            CompressionMethod::Deflate => {
                let mut data = Vec::with_capacity(entry.uncompressed_size as usize);
                DeflateDecoder::new(compressed.as_slice())
                    .read_to_end(&mut data)
                    .with_context(|| format!("inflating {}", entry.name))?;
                Ok(data)
            }
            CompressionMethod::Unsupported(method) => {
                bail!("unsupported compression method {method} for {}", entry.name)
            }
        }
    }
}
