use std::path::PathBuf;

use clap::Parser;

/// Compact weather strip for the terminal.
#[derive(Parser, Debug)]
#[command(name = "weatherbar", version, about)]
pub struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
