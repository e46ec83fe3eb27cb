//! Emitter
//!
//! Writes the extracted assets and the generated project files into the
//! output directory.

pub mod scaffold;
mod writer;

use std::path::PathBuf;

use tracing::debug;

use crate::error::SplinterResult;
use crate::models::{ExtractedAssets, OutputManifest, OutputTarget, WrittenFile};

pub use writer::{hash_content, normalize_dir};

/// Where and under which name the project is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitPlan {
    pub output_dir: PathBuf,
    pub app_name: String,
    pub app_version: String,
}

/// Write every output file for `assets`.
///
/// Order: output directory, `style.css` and `renderer.js` when present,
/// `index.html`, `main.js`, `package.json`. The first failing write aborts
/// the rest.
pub async fn emit(assets: &ExtractedAssets, plan: &EmitPlan) -> SplinterResult<OutputManifest> {
    let dir = &plan.output_dir;
    writer::ensure_dir(dir).await?;
    debug!(dir = %dir.display(), "output directory ready");

    let mut written: Vec<WrittenFile> = Vec::new();

    let mut put = |file: WrittenFile| {
        debug!(target_file = %file.target, bytes = file.bytes, "wrote");
        let path = file.path.clone();
        written.push(file);
        path
    };

    let stylesheet_path = match &assets.style {
        Some(style) => Some(put(write(plan, OutputTarget::Stylesheet, style).await?)),
        None => None,
    };
    let script_path = match &assets.script {
        Some(script) => Some(put(write(plan, OutputTarget::Script, script).await?)),
        None => None,
    };
    let html_path = put(write(plan, OutputTarget::Html, &assets.markup).await?);
    let entry_script_path = put(
        write(
            plan,
            OutputTarget::EntryScript,
            &scaffold::entry_script(&plan.app_name),
        )
        .await?,
    );
    let manifest_path = put(
        write(
            plan,
            OutputTarget::Manifest,
            &scaffold::package_manifest(&plan.app_name, &plan.app_version),
        )
        .await?,
    );

    Ok(OutputManifest {
        output_dir: dir.clone(),
        stylesheet_path,
        script_path,
        html_path,
        entry_script_path,
        manifest_path,
        archive_path: None,
        written,
        skipped: assets.skipped.clone(),
    })
}

async fn write(plan: &EmitPlan, target: OutputTarget, contents: &str) -> SplinterResult<WrittenFile> {
    let name = target.file_name().unwrap_or_default();
    writer::write_file(target, &plan.output_dir.join(name), contents.as_bytes()).await
}
