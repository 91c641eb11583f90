use std::path::PathBuf;

use clap::Parser;

/// Command-line interface for the scaffolder.
///
/// The default invocation takes no arguments and operates on the current
/// working directory; every flag is optional.
#[derive(Parser, Debug)]
#[command(
    name = "tsinit",
    about = "One-shot scaffolding tool for pnpm/TypeScript projects",
    version
)]
pub struct Cli {
    /// Project directory to scaffold (defaults to the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Perform all filesystem steps but skip the pnpm install
    #[arg(long)]
    pub skip_install: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
