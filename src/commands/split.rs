use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use splinter::{split_html, SplitOutcome};

use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, SkippedEvent, StartEvent, WarningEvent};
use crate::ui::output::{self, Icons};

use super::{block_mode, load_options};

/// Flags of `splinter split`
#[derive(Debug, Clone, Default)]
pub struct SplitArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub zip: bool,
    pub name: Option<String>,
    pub app_version: Option<String>,
    pub all_blocks: bool,
    pub config: Option<PathBuf>,
}

pub async fn cmd_split(args: SplitArgs, json: bool) -> Result<()> {
    let started = Instant::now();
    let icons = Icons::detect();

    if json {
        emit_event(&StartEvent::new("split", args.input.display().to_string()))?;
    } else {
        output::print_header(&icons, icons.split, "Splinter Split", &args.input);
    }

    let (outcome, warnings) = match load_options(&args.input, args.config.clone()) {
        Ok((mut options, warnings)) => {
            if let Some(dir) = args.output {
                options = options.with_output_dir(dir);
            }
            if args.zip {
                options = options.with_zip(true);
            }
            if let Some(name) = args.name {
                options = options.with_app_name(name);
            }
            if let Some(version) = args.app_version {
                options = options.with_app_version(version);
            }
            let blocks = block_mode(args.all_blocks, options.blocks);
            options = options.with_blocks(blocks);

            (split_html(&args.input, &options).await, warnings)
        }
        Err(e) => (SplitOutcome::failure(&e), Vec::new()),
    };

    if json {
        for warning in &warnings {
            emit_event(&WarningEvent::new("split", warning.to_string()))?;
        }
        if let Some(files) = &outcome.files {
            for block in &files.skipped {
                emit_event(&SkippedEvent::new("split", block))?;
            }
        }
        let elapsed = started.elapsed().as_millis() as u64;
        emit_event(&CompleteEvent::new("split", &outcome).with_duration(elapsed))?;
    } else {
        output::print_config_warnings(&icons, &warnings);
        output::print_split_outcome(&icons, &outcome);
    }

    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
