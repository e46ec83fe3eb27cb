use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Splinter - split a single-file HTML page into an Electron app skeleton
#[derive(Parser, Debug)]
#[command(name = "splinter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write style.css, renderer.js, index.html, main.js and package.json
    Split {
        /// HTML file to split
        input: PathBuf,

        /// Output directory (default: input path without its extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write <output>.zip
        #[arg(long)]
        zip: bool,

        /// Application name (default: output directory name)
        #[arg(long)]
        name: Option<String>,

        /// Version written to package.json
        #[arg(long)]
        app_version: Option<String>,

        /// Extract every style/script block instead of only the first
        #[arg(long)]
        all_blocks: bool,

        /// Config file (default: splinter.toml beside the input)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show what would be extracted without writing anything
    Inspect {
        /// HTML file to inspect
        input: PathBuf,

        /// Extract every style/script block instead of only the first
        #[arg(long)]
        all_blocks: bool,

        /// Config file (default: splinter.toml beside the input)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
