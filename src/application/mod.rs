//! Application Layer
//!
//! Use cases that orchestrate the pipeline stages.
//!
//! ## Use Cases
//!
//! - `split` - validate, extract, emit and optionally package one HTML file

pub mod split;

pub use split::{inspect, split_html, try_split, SplitOptions, SplitOutcome, Stage};
