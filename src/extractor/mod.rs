//! Extractor
//!
//! Pulls inline `<style>` and `<script>` content out of a document and rewrites
//! the markup to reference `style.css` and `renderer.js` instead.
//!
//! Extraction is total: malformed or unusual markup never makes it fail, the
//! affected block is just left where it is and reported in
//! `ExtractedAssets::skipped`.

mod inject;
pub(crate) mod scanner;

use std::ops::Range;

use crate::models::{BlockKind, BlockMode, ExtractedAssets, SkipReason, SkippedBlock};

pub use inject::{script_tag, stylesheet_tag};

/// A replacement of `range` in the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Edit {
    pub range: Range<usize>,
    pub replacement: String,
}

impl Edit {
    pub fn remove(range: Range<usize>) -> Self {
        Self {
            range,
            replacement: String::new(),
        }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            range: at..at,
            replacement: text.into(),
        }
    }
}

/// Extract style and script blocks from `doc`.
///
/// In `BlockMode::First` only the first block of each kind is taken and later
/// ones stay in the markup. In `BlockMode::All` every block is taken and the
/// contents are concatenated with a numbered header per block.
pub fn extract(doc: &str, mode: BlockMode) -> ExtractedAssets {
    let report = scanner::scan(doc);
    let lines = scanner::LineIndex::new(doc);

    let mut edits = Vec::new();
    let mut skipped = Vec::new();
    let mut styles: Vec<&str> = Vec::new();
    let mut scripts: Vec<&str> = Vec::new();
    let mut seen_style = false;
    let mut seen_script = false;

    for region in report.regions.iter().filter(|r| !r.external) {
        let seen = match region.kind {
            BlockKind::Style => &mut seen_style,
            BlockKind::Script => &mut seen_script,
        };
        if *seen && mode == BlockMode::First {
            skipped.push(SkippedBlock::new(
                region.kind,
                lines.line(region.outer.start),
                SkipReason::Additional,
            ));
            continue;
        }
        *seen = true;

        edits.push(Edit::remove(whole_line_range(doc, region.outer.clone())));

        let body = clean_block(&doc[region.inner.clone()]);
        if !body.is_empty() {
            match region.kind {
                BlockKind::Style => styles.push(body),
                BlockKind::Script => scripts.push(body),
            }
        }
    }

    skipped.extend(report.unclosed.iter().map(|u| {
        SkippedBlock::new(u.kind, lines.line(u.start), SkipReason::Unclosed)
    }));
    skipped.sort_by_key(|s| s.line);

    let style = join_blocks(BlockKind::Style, &styles, mode);
    let script = join_blocks(BlockKind::Script, &scripts, mode);

    if style.is_some() {
        edits.push(inject::stylesheet_edit(doc, &report.landmarks));
    }
    if script.is_some() {
        edits.push(inject::script_edit(doc, &report.landmarks));
    }

    ExtractedAssets {
        style,
        script,
        markup: apply_edits(doc, edits),
        skipped,
    }
}

/// Apply non-overlapping edits expressed in original-document offsets.
pub(crate) fn apply_edits(doc: &str, mut edits: Vec<Edit>) -> String {
    edits.sort_by_key(|e| (e.range.start, e.range.end));

    let mut out = String::with_capacity(doc.len());
    let mut cursor = 0;
    for edit in edits {
        let start = edit.range.start.max(cursor);
        out.push_str(&doc[cursor..start]);
        out.push_str(&edit.replacement);
        cursor = edit.range.end.max(start);
    }
    out.push_str(&doc[cursor..]);
    out
}

/// Widen `range` to its whole line when nothing else shares that line.
///
/// Only the blanks around the range are walked, so the cost does not grow
/// with the length of a crowded line.
fn whole_line_range(doc: &str, range: Range<usize>) -> Range<usize> {
    let bytes = doc.as_bytes();
    let is_blank = |b: &u8| b.is_ascii_whitespace() && *b != b'\n';

    let lead = bytes[..range.start].iter().rev().take_while(|&b| is_blank(b)).count();
    let line_start = range.start - lead;
    if line_start > 0 && bytes[line_start - 1] != b'\n' {
        return range;
    }

    let trail = bytes[range.end..].iter().take_while(|&b| is_blank(b)).count();
    let line_end = range.end + trail;
    if line_end < doc.len() && bytes[line_end] != b'\n' {
        return range;
    }

    if line_end < doc.len() {
        line_start..line_end + 1
    } else if line_start > 0 {
        // Last line: take the preceding newline instead
        line_start - 1..line_end
    } else {
        line_start..line_end
    }
}

/// Drop leading blank lines and trailing whitespace. Indentation of the first
/// content line is kept.
fn clean_block(inner: &str) -> &str {
    let body = inner.trim_end();
    let mut start = 0;
    for line in body.split_inclusive('\n') {
        if !line.trim().is_empty() {
            break;
        }
        start += line.len();
    }
    &body[start..]
}

fn join_blocks(kind: BlockKind, blocks: &[&str], mode: BlockMode) -> Option<String> {
    match (mode, blocks) {
        (_, []) => None,
        (BlockMode::First, [first, ..]) => Some(format!("{first}\n")),
        (BlockMode::All, blocks) => {
            let sections: Vec<String> = blocks
                .iter()
                .enumerate()
                .map(|(i, block)| match kind {
                    BlockKind::Style => format!("/* Style block {} */\n{block}", i + 1),
                    BlockKind::Script => format!("// Script block {}\n{block}", i + 1),
                })
                .collect();
            Some(format!("{}\n", sections.join("\n\n")))
        }
    }
}
