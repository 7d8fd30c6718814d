//! filetab: Print a size and digest table for every file under a directory

use clap::Parser;
use filetab_cli::{commands, setup_logging, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    commands::scan::run(&cli.root, cli.sort)
}
