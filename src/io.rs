//! Random-access reading of archive files.
//!
//! The zip parser reads archives back-to-front (EOCD first), so it
//! needs positioned reads rather than a sequential stream. [`ReadAt`]
//! is that seam; [`LocalFileReader`] is its filesystem implementation.

use anyhow::{Result, bail};
use async_trait::async_trait;
use std::path::Path;

/// Trait for random access reading from an archive source.
#[async_trait]
pub trait ReadAt: Send + Sync {
    /// Fill `buf` completely with data starting at `offset`.
    async fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> Result<()>;

    /// Total size of the source in bytes.
    fn size(&self) -> u64;
}

/// Positioned reader over a local file.
///
/// Holds the file handle for as long as the value lives; dropping it
/// releases the handle, so scoping one reader per archive gives the
/// per-archive handle discipline the scanner relies on.
pub struct LocalFileReader {
    file: std::fs::File,
    size: u64,
}

impl LocalFileReader {
    pub fn new(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let size = file.metadata()?.len();
        Ok(Self { file, size })
    }
}

#[async_trait]
impl ReadAt for LocalFileReader {
    async fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> Result<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileExt;
            // pread can return short; loop until the buffer is full.
            let mut pos = offset;
            let mut filled = 0;
            while filled < buf.len() {
                let n = self.file.read_at(&mut buf[filled..], pos)?;
                if n == 0 {
                    bail!("unexpected end of file at offset {pos}");
                }
                filled += n;
                pos += n as u64;
            }
            Ok(())
        }

        #[cfg(not(unix))]
        {
            use std::io::{Read, Seek, SeekFrom};
            // No pread available; seek-and-read on a borrowed handle.
            // Not thread-safe, but archives are processed one at a time.
            let mut file = &self.file;
            file.seek(SeekFrom::Start(offset))?;
            file.read_exact(buf)?;
            Ok(())
        }
    }

    fn size(&self) -> u64 {
        self.size
    }
}
