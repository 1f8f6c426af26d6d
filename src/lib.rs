//! # modlister
//!
//! Inventories Fabric mod archives into a machine-readable summary.
//!
//! Given a directory of `.jar` / `.jar.disabled` archives, modlister
//! reads each one's embedded `fabric.mod.json` descriptor, extracts
//! the declared icon, and aggregates everything into a single
//! `mod_data.json` plus a folder of icons: a structured view of an
//! installed mod set that launcher UIs can consume without parsing
//! archives themselves.
//!
//! Archives that are corrupt, lack a descriptor, or lack a mod `id`
//! are skipped individually; the run carries on with the rest.
//!
//! ## Example
//!
//! ```no_run
//! use modlister::{Workspace, scan_mods};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let workspace = Workspace::create("mod_temp_data").await?;
//!     let records = scan_mods(Path::new("mods"), &workspace).await?;
//!     workspace.write_records(&records).await?;
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod cli;
pub mod descriptor;
pub mod icon;
pub mod io;
pub mod record;
pub mod scan;
pub mod workspace;

pub use archive::ModArchive;
pub use cli::Cli;
pub use descriptor::{DESCRIPTOR_ENTRY, Descriptor};
pub use record::{MODLOADER, ModRecord};
pub use scan::{DISABLED_SUFFIX, ENABLED_SUFFIX, Skip, scan_mods};
pub use workspace::{OUTPUT_FILE, Workspace};
