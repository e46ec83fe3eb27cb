//! Split options

use std::path::{Path, PathBuf};

use crate::emitter::{normalize_dir, EmitPlan};
use crate::models::BlockMode;

/// Version written to `package.json` when none is given
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

/// Options for splitting one HTML file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    /// Output directory (None = input path without its extension)
    pub output_dir: Option<PathBuf>,
    /// Also write `<outputDir>.zip`
    pub create_zip: bool,
    /// Application name (None = last component of the output directory)
    pub app_name: Option<String>,
    /// Version written to `package.json`
    pub app_version: String,
    /// Which blocks the extractor takes
    pub blocks: BlockMode,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            output_dir: None,
            create_zip: false,
            app_name: None,
            app_version: DEFAULT_APP_VERSION.to_string(),
            blocks: BlockMode::default(),
        }
    }
}

impl SplitOptions {
    /// Create new split options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set whether to create the archive
    pub fn with_zip(mut self, create_zip: bool) -> Self {
        self.create_zip = create_zip;
        self
    }

    /// Set application name
    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Set application version
    pub fn with_app_version(mut self, version: impl Into<String>) -> Self {
        self.app_version = version.into();
        self
    }

    /// Set block mode
    pub fn with_blocks(mut self, blocks: BlockMode) -> Self {
        self.blocks = blocks;
        self
    }

    /// Fill in defaults that depend on the input path.
    pub fn resolve(&self, input: &Path) -> EmitPlan {
        let output_dir = match &self.output_dir {
            Some(dir) => normalize_dir(dir),
            None => normalize_dir(&default_output_dir(input)),
        };
        let app_name = self
            .app_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| default_app_name(&output_dir));

        EmitPlan {
            output_dir,
            app_name,
            app_version: self.app_version.clone(),
        }
    }
}

/// `pages/app.html` → `pages/app`; an input with no extension gets `_split`
/// appended instead so the output never collides with the input.
pub fn default_output_dir(input: &Path) -> PathBuf {
    let stem = input.with_extension("");
    if stem == input {
        let mut name = input.as_os_str().to_os_string();
        name.push("_split");
        PathBuf::from(name)
    } else {
        stem
    }
}

fn default_app_name(output_dir: &Path) -> String {
    output_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "app".to_string())
}
