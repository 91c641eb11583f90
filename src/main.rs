//! Binary entry point for `tsinit`.

use anyhow::Result;
use clap::Parser;

use tsinit_cli::scaffold::{self, ScaffoldOpts};
use tsinit_cli::{cli, exec, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new();

    let root = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    scaffold::run(
        &root,
        &exec::SystemExecutor,
        &log,
        ScaffoldOpts {
            skip_install: args.skip_install,
        },
    )
}
