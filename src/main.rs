//! Splinter CLI - split a single-file HTML page into an Electron app skeleton
//!
//! Usage: splinter <COMMAND>
//!
//! Commands:
//!   split    Write the project files for an HTML page
//!   inspect  Show what would be extracted without writing

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::inspect::{cmd_inspect, InspectArgs};
use commands::split::{cmd_split, SplitArgs};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Split {
            input,
            output,
            zip,
            name,
            app_version,
            all_blocks,
            config,
        } => {
            let args = SplitArgs {
                input,
                output,
                zip,
                name,
                app_version,
                all_blocks,
                config,
            };
            cmd_split(args, cli.json).await
        }
        Commands::Inspect {
            input,
            all_blocks,
            config,
        } => {
            let args = InspectArgs {
                input,
                all_blocks,
                config,
            };
            cmd_inspect(args, cli.json).await
        }
    }
}

/// Logs go to stderr so stdout stays clean for `--json`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("splinter={level}")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
