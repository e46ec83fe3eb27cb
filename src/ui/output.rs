//! Human-readable output

use std::path::Path;

use is_terminal::IsTerminal;

use splinter::config::ConfigWarning;
use splinter::{ExtractedAssets, OutputManifest, SkippedBlock, SplitOutcome};

/// Icon set for terminal output; ASCII when stdout is not a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub arrow: &'static str,
    pub split: &'static str,
    pub inspect: &'static str,
}

impl Icons {
    pub const UNICODE: Icons = Icons {
        success: "✓",
        error: "✗",
        warning: "⚠",
        arrow: "↳",
        split: "✂",
        inspect: "🔍",
    };

    pub const ASCII: Icons = Icons {
        success: "[OK]",
        error: "[FAIL]",
        warning: "[WARN]",
        arrow: "->",
        split: "[SPLIT]",
        inspect: "[INSPECT]",
    };

    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() {
            Self::UNICODE
        } else {
            Self::ASCII
        }
    }
}

pub fn print_header(icons: &Icons, icon: &str, title: &str, input: &Path) {
    println!("{icon} {title}");
    println!("  {} {}", icons.arrow, input.display());
}

pub fn print_config_warnings(icons: &Icons, warnings: &[ConfigWarning]) {
    for w in warnings {
        eprintln!("{} {}", icons.warning, w);
    }
}

pub fn print_skipped(icons: &Icons, skipped: &[SkippedBlock]) {
    for block in skipped {
        eprintln!(
            "{} {} block at line {} left in place: {}",
            icons.warning, block.kind, block.line, block.reason
        );
    }
}

pub fn print_split_outcome(icons: &Icons, outcome: &SplitOutcome) {
    match &outcome.files {
        Some(files) => print_manifest(icons, files),
        None => {
            let message = outcome.error.as_deref().unwrap_or("split failed");
            eprintln!("{} {}", icons.error, message);
        }
    }
}

fn print_manifest(icons: &Icons, files: &OutputManifest) {
    print_skipped(icons, &files.skipped);
    println!();
    println!("{} Wrote {} files", icons.success, files.written.len());
    for file in &files.written {
        println!("    - {} ({} bytes)", file.path.display(), file.bytes);
    }
    println!();
    println!("Run it with:");
    println!("    cd {}", files.output_dir.display());
    println!("    npm install electron --save-dev && npm start");
}

pub fn print_inspection(icons: &Icons, assets: &ExtractedAssets) {
    print_skipped(icons, &assets.skipped);
    println!();
    match &assets.style {
        Some(style) => println!("  style.css    {} lines", line_count(style)),
        None => println!("  style.css    (none)"),
    }
    match &assets.script {
        Some(script) => println!("  renderer.js  {} lines", line_count(script)),
        None => println!("  renderer.js  (none)"),
    }
    println!("  index.html   {} bytes", assets.markup.len());
    if !assets.has_assets() {
        println!();
        println!("{} No inline style or script blocks found", icons.warning);
    }
}

fn line_count(text: &str) -> usize {
    text.lines().count()
}
