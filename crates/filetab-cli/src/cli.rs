//! Command line arguments

use std::path::PathBuf;

use clap::Parser;
use filetab_core::DEFAULT_ROOT;

#[derive(Debug, Parser)]
#[command(name = "filetab")]
#[command(author, version, about = "Print the size and MD5 digest of every file under a directory", long_about = None)]
pub struct Cli {
    /// Directory to scan
    #[arg(default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Visit directory entries in file name order
    #[arg(short, long)]
    pub sort: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
