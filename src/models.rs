//! Core data models for Splinter
//!
//! Defines the data flowing through the split pipeline:
//! - `SourceDocument`: the input page as read from disk
//! - `ExtractedAssets`: style/script text pulled out of the page plus the rewritten markup
//! - `OutputManifest`: every file a split wrote
//! - Supporting enums: `BlockKind`, `BlockMode`, `SkipReason`, `OutputTarget`

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Fixed file name of the extracted stylesheet
pub const STYLESHEET_FILE: &str = "style.css";
/// Fixed file name of the extracted renderer script
pub const SCRIPT_FILE: &str = "renderer.js";
/// Fixed file name of the rewritten HTML shell
pub const HTML_FILE: &str = "index.html";
/// Fixed file name of the process-entry bootstrap
pub const ENTRY_SCRIPT_FILE: &str = "main.js";
/// Fixed file name of the package manifest
pub const MANIFEST_FILE: &str = "package.json";

/// Input document: raw text plus the path it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub text: String,
}

impl SourceDocument {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// Kind of inline block the extractor looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Style,
    Script,
}

impl BlockKind {
    /// Lowercase HTML tag name
    pub fn tag_name(&self) -> &'static str {
        match self {
            BlockKind::Style => "style",
            BlockKind::Script => "script",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.tag_name())
    }
}

/// How many blocks of each kind get extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlockMode {
    /// Only the first block of each kind; later ones stay in the markup
    #[default]
    First,
    /// Every block, concatenated in document order
    All,
}

/// Why a block found in the document was left in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipReason {
    /// A later block of a kind that was already extracted (first-only mode)
    Additional,
    /// Opening tag without a matching closing tag
    Unclosed,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Additional => write!(f, "additional block left in place"),
            SkipReason::Unclosed => write!(f, "unclosed tag"),
        }
    }
}

/// A block that was found but not extracted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedBlock {
    pub kind: BlockKind,
    /// 1-based line of the opening tag
    pub line: usize,
    pub reason: SkipReason,
}

impl SkippedBlock {
    pub fn new(kind: BlockKind, line: usize, reason: SkipReason) -> Self {
        Self { kind, line, reason }
    }
}

/// Result of the extraction stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedAssets {
    /// Stylesheet text, absent when no non-empty style block was found
    pub style: Option<String>,
    /// Script text, absent when no non-empty inline script block was found
    pub script: Option<String>,
    /// Document with extracted blocks removed and references injected
    pub markup: String,
    /// Blocks that were found but left in the markup
    pub skipped: Vec<SkippedBlock>,
}

impl ExtractedAssets {
    /// Check if anything was pulled out of the document
    pub fn has_assets(&self) -> bool {
        self.style.is_some() || self.script.is_some()
    }
}

/// One of the files the emitter or packager produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputTarget {
    OutputDir,
    Stylesheet,
    Script,
    Html,
    EntryScript,
    Manifest,
    Archive,
}

impl OutputTarget {
    /// Fixed file name inside the output directory, if the target has one
    pub fn file_name(&self) -> Option<&'static str> {
        match self {
            OutputTarget::Stylesheet => Some(STYLESHEET_FILE),
            OutputTarget::Script => Some(SCRIPT_FILE),
            OutputTarget::Html => Some(HTML_FILE),
            OutputTarget::EntryScript => Some(ENTRY_SCRIPT_FILE),
            OutputTarget::Manifest => Some(MANIFEST_FILE),
            OutputTarget::OutputDir | OutputTarget::Archive => None,
        }
    }
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputTarget::OutputDir => write!(f, "output directory"),
            OutputTarget::Archive => write!(f, "archive"),
            other => write!(f, "{}", other.file_name().unwrap_or_default()),
        }
    }
}

/// A file the pipeline wrote, with the SHA-256 of its content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub target: OutputTarget,
    pub path: PathBuf,
    pub bytes: u64,
    /// `sha256:<hex>`
    pub hash: String,
}

/// Paths written by one successful split
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputManifest {
    pub output_dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_path: Option<PathBuf>,
    pub html_path: PathBuf,
    pub entry_script_path: PathBuf,
    pub manifest_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_path: Option<PathBuf>,
    /// Every file written, in write order
    pub written: Vec<WrittenFile>,
    /// Blocks left in the shell
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedBlock>,
}

impl OutputManifest {
    /// Paths of all files written, archive included
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.written.iter().map(|f| &f.path)
    }

    /// Look up a written file by target
    pub fn file(&self, target: OutputTarget) -> Option<&WrittenFile> {
        self.written.iter().find(|f| f.target == target)
    }
}
