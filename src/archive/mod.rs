//! Zip archive reading for mod jars.
//!
//! Fabric mods ship as ordinary zip archives with a `.jar` name. This
//! module reads them back-to-front the way the format intends:
//!
//! - [`structures`]: the binary records (EOCD, ZIP64 records, central
//!   directory entries)
//! - [`parser`]: locating the central directory and walking its headers
//! - [`reader`]: [`ModArchive`], the accessor the pipeline uses to open
//!   one jar, look entries up by name, and read their contents
//!
//! STORED and DEFLATE entries are supported; other compression methods
//! do not occur in mod jars and are rejected when read.

mod parser;
mod reader;
mod structures;

pub use reader::ModArchive;
pub use structures::{ArchiveEntry, CompressionMethod};
