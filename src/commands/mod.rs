//! Command handlers

pub mod inspect;
pub mod split;

use std::path::{Path, PathBuf};

use splinter::config::{Config, ConfigWarning};
use splinter::{BlockMode, SplinterResult, SplitOptions};

/// Options from the config file (explicit, else beside the input), or defaults
/// when there is none.
pub fn load_options(
    input: &Path,
    config: Option<PathBuf>,
) -> SplinterResult<(SplitOptions, Vec<ConfigWarning>)> {
    let path = config.or_else(|| Config::find_for_input(input));
    match path {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(&path)?;
            tracing::debug!(config = %path.display(), "loaded config");
            Ok((config.split_options(), warnings))
        }
        None => Ok((SplitOptions::new(), Vec::new())),
    }
}

pub fn block_mode(all_blocks: bool, configured: BlockMode) -> BlockMode {
    if all_blocks {
        BlockMode::All
    } else {
        configured
    }
}
