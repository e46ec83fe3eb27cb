use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;

use splinter::{inspect, ExtractedAssets, SplinterError};

use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, SkippedEvent, StartEvent, WarningEvent};
use crate::ui::output::{self, Icons};

use super::{block_mode, load_options};

/// Flags of `splinter inspect`
#[derive(Debug, Clone, Default)]
pub struct InspectArgs {
    pub input: PathBuf,
    pub all_blocks: bool,
    pub config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    script: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    markup: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
}

impl<'a> InspectReport<'a> {
    fn new(result: &'a Result<ExtractedAssets, SplinterError>) -> Self {
        match result {
            Ok(assets) => Self {
                success: true,
                style: assets.style.as_deref(),
                script: assets.script.as_deref(),
                markup: Some(&assets.markup),
                error: None,
                code: None,
            },
            Err(e) => Self {
                success: false,
                style: None,
                script: None,
                markup: None,
                error: Some(e.to_string()),
                code: Some(e.code()),
            },
        }
    }
}

pub async fn cmd_inspect(args: InspectArgs, json: bool) -> Result<()> {
    let started = Instant::now();
    let icons = Icons::detect();

    if json {
        emit_event(&StartEvent::new("inspect", args.input.display().to_string()))?;
    } else {
        output::print_header(&icons, icons.inspect, "Splinter Inspect", &args.input);
    }

    let (result, warnings) = match load_options(&args.input, args.config.clone()) {
        Ok((options, warnings)) => {
            let blocks = block_mode(args.all_blocks, options.blocks);
            let options = options.with_blocks(blocks);
            (inspect(&args.input, &options).await, warnings)
        }
        Err(e) => (Err(e), Vec::new()),
    };

    if json {
        for warning in &warnings {
            emit_event(&WarningEvent::new("inspect", warning.to_string()))?;
        }
        if let Ok(assets) = &result {
            for block in &assets.skipped {
                emit_event(&SkippedEvent::new("inspect", block))?;
            }
        }
        let elapsed = started.elapsed().as_millis() as u64;
        emit_event(&CompleteEvent::new("inspect", InspectReport::new(&result)).with_duration(elapsed))?;
    } else {
        output::print_config_warnings(&icons, &warnings);
        match &result {
            Ok(assets) => output::print_inspection(&icons, assets),
            Err(e) => eprintln!("{} {}", icons.error, e),
        }
    }

    if result.is_err() {
        std::process::exit(1);
    }
    Ok(())
}
