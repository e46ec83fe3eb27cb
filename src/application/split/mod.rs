//! Split Use Case
//!
//! Turns one self-contained HTML file into an Electron project skeleton.
//!
//! This module handles:
//! - Resolving output directory and application name from the input path
//! - Running validation, extraction, emission and optional packaging in order
//! - Folding the first failure into a `SplitOutcome`

mod options;
mod result;
mod use_case;

pub use options::{default_output_dir, SplitOptions, DEFAULT_APP_VERSION};
pub use result::SplitOutcome;
pub use use_case::{inspect, split_html, try_split, Stage};
