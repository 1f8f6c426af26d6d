use std::path::PathBuf;

use clap::Parser;

use crate::workspace::DEFAULT_WORKSPACE;

#[derive(Parser, Debug)]
#[command(name = "modlister")]
#[command(version)]
#[command(about = "Inventory Fabric mod archives into a JSON summary", long_about = None)]
#[command(after_help = "Examples:\n  \
  modlister ~/.minecraft/mods            scan the default mods folder\n  \
  modlister mods -d /tmp/mod-inventory   write icons and mod_data.json elsewhere")]
pub struct Cli {
    /// Directory containing .jar / .jar.disabled mod archives
    #[arg(value_name = "MODS_DIR")]
    pub mods_dir: PathBuf,

    /// Workspace directory for extracted icons and mod_data.json
    #[arg(short = 'd', long = "out-dir", value_name = "DIR", default_value = DEFAULT_WORKSPACE)]
    pub out_dir: PathBuf,

    /// Quiet mode: errors only
    #[arg(short = 'q')]
    pub quiet: bool,
}
