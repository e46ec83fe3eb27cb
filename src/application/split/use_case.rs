//! Split Use Case
//!
//! Runs validate → extract → emit → (package) for one input file.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::emitter;
use crate::error::SplinterResult;
use crate::extractor;
use crate::models::{ExtractedAssets, OutputManifest};
use crate::packager;
use crate::validator;

use super::options::SplitOptions;
use super::result::SplitOutcome;

/// Pipeline stage, logged as the split progresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Extracting,
    Emitting,
    Packaging,
    Done,
    Failed,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Validating => "validating",
            Stage::Extracting => "extracting",
            Stage::Emitting => "emitting",
            Stage::Packaging => "packaging",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Split `input` into an Electron skeleton.
///
/// Never fails: errors are folded into the returned outcome.
pub async fn split_html(input: impl AsRef<Path>, options: &SplitOptions) -> SplitOutcome {
    let input = input.as_ref();
    let result = try_split(input, options).await;
    if let Err(e) = &result {
        warn!(stage = %Stage::Failed, input = %input.display(), code = e.code(), "{e}");
    }
    SplitOutcome::from(result)
}

/// Split `input`, returning the typed error of the first stage that fails.
///
/// Files written before a failure stay on disk.
pub async fn try_split(
    input: impl AsRef<Path>,
    options: &SplitOptions,
) -> SplinterResult<OutputManifest> {
    let input = input.as_ref();

    let assets = inspect(input, options).await?;
    let plan = options.resolve(input);

    debug!(stage = %Stage::Emitting, output_dir = %plan.output_dir.display());
    let mut manifest = emitter::emit(&assets, &plan).await?;

    if options.create_zip {
        debug!(stage = %Stage::Packaging, output_dir = %plan.output_dir.display());
        let archive = packager::package(&plan.output_dir).await?;
        manifest.archive_path = Some(archive.path.clone());
        manifest.written.push(archive);
    }

    info!(
        stage = %Stage::Done,
        output_dir = %manifest.output_dir.display(),
        files = manifest.written.len(),
        "split complete"
    );
    Ok(manifest)
}

/// Validate and extract without writing anything.
pub async fn inspect(
    input: impl AsRef<Path>,
    options: &SplitOptions,
) -> SplinterResult<ExtractedAssets> {
    let input = input.as_ref();

    debug!(stage = %Stage::Validating, input = %input.display());
    let document = validator::load_input(input).await?;

    debug!(stage = %Stage::Extracting, bytes = document.text.len());
    let assets = extractor::extract(&document.text, options.blocks);
    for skipped in &assets.skipped {
        warn!(
            kind = %skipped.kind,
            line = skipped.line,
            "{} block left in place: {}",
            skipped.kind,
            skipped.reason
        );
    }
    Ok(assets)
}
