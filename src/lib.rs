//! Splinter - split a single-file HTML page into an Electron app skeleton
//!
//! Splinter takes one self-contained HTML document, pulls its inline
//! `<style>` and `<script>` blocks out into `style.css` and `renderer.js`,
//! rewrites the page to reference them, and writes the `main.js` and
//! `package.json` an Electron app needs to start.
//!
//! ```no_run
//! # async fn run() {
//! use splinter::{split_html, SplitOptions};
//!
//! let outcome = split_html("pages/dashboard.html", &SplitOptions::new().with_zip(true)).await;
//! assert!(outcome.success);
//! # }
//! ```

pub mod application;
pub mod config;
pub mod emitter;
pub mod error;
pub mod extractor;
pub mod models;
pub mod packager;
pub mod validator;

// Re-exports for convenience
pub use application::split::{inspect, split_html, try_split, SplitOptions, SplitOutcome};
pub use error::{SplinterError, SplinterResult};
pub use extractor::extract;
pub use models::{
    BlockKind, BlockMode, ExtractedAssets, OutputManifest, OutputTarget, SkipReason,
    SkippedBlock, SourceDocument, WrittenFile,
};
