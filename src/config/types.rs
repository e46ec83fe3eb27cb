//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::split::SplitOptions;
use crate::error::SplinterResult;
use crate::models::BlockMode;

use super::loader::{self, ConfigWarning};

/// File name looked up beside the input when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "splinter.toml";

/// Application identity written into `package.json` and `main.js`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Where the project is written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory; relative paths are taken from the config file's directory
    pub dir: Option<PathBuf>,
    pub create_zip: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub blocks: BlockMode,
}

/// Contents of `splinter.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub app: AppConfig,
    pub output: OutputConfig,
    pub extract: ExtractConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SplinterResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SplinterResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// `splinter.toml` in the input's directory, if there is one
    pub fn find_for_input(input: &Path) -> Option<PathBuf> {
        loader::find_for_input(input)
    }

    /// Split options with this file's values over the built-in defaults
    pub fn split_options(&self) -> SplitOptions {
        let mut options = SplitOptions::new()
            .with_zip(self.output.create_zip)
            .with_blocks(self.extract.blocks);
        if let Some(dir) = &self.output.dir {
            options = options.with_output_dir(dir.clone());
        }
        if let Some(name) = &self.app.name {
            options = options.with_app_name(name.clone());
        }
        if let Some(version) = &self.app.version {
            options = options.with_app_version(version.clone());
        }
        options
    }
}
