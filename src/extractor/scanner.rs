//! Single-pass HTML scanner
//!
//! Walks the document once with three states (text, comment, raw text) and
//! records every `<style>`/`<script>` region plus the landmark tags the
//! injector anchors on. It is not an HTML parser: anything it does not
//! understand is treated as text.

use std::ops::Range;

use crate::models::BlockKind;

/// A complete `<style>` or `<script>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Region {
    pub kind: BlockKind,
    /// From the opening `<` to just past the closing tag's `>`
    pub outer: Range<usize>,
    /// Text between the opening and closing tags
    pub inner: Range<usize>,
    /// `<script src=...>`: a reference, not inline content
    pub external: bool,
}

/// An opening `<style>`/`<script>` tag that never closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unclosed {
    pub kind: BlockKind,
    pub start: usize,
}

/// Byte offsets of structural tags, all found outside comments and raw text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Landmarks {
    /// Just past the `>` of a `<!DOCTYPE ...>` declaration
    pub doctype_end: Option<usize>,
    /// Just past the `>` of the first `<html ...>` tag
    pub html_open_end: Option<usize>,
    /// Just past the `>` of the first `<head ...>` tag
    pub head_open_end: Option<usize>,
    /// Offset of the `<` of the first `</head>`
    pub head_close: Option<usize>,
    /// Offset of the `<` of the first `</body>`
    pub body_close: Option<usize>,
    /// Offset of the `<` of the first `</html>`
    pub html_close: Option<usize>,
}

#[derive(Debug, Default)]
pub(crate) struct ScanReport {
    pub regions: Vec<Region>,
    pub unclosed: Vec<Unclosed>,
    pub landmarks: Landmarks,
}

enum State {
    Text,
    Comment,
    RawText {
        kind: BlockKind,
        start: usize,
        content_start: usize,
        external: bool,
    },
}

/// Searches that already ran to the end of the document without a match.
///
/// A failed forward search stays failed for every later start offset, so
/// each of these is run to exhaustion at most once per scan.
#[derive(Debug, Default)]
struct Exhausted {
    style_close: bool,
    script_close: bool,
    gt: bool,
}

impl Exhausted {
    fn close(&mut self, kind: BlockKind) -> &mut bool {
        match kind {
            BlockKind::Style => &mut self.style_close,
            BlockKind::Script => &mut self.script_close,
        }
    }
}

/// Scan `doc` once, front to back.
pub(crate) fn scan(doc: &str) -> ScanReport {
    let bytes = doc.as_bytes();
    let mut report = ScanReport::default();
    let mut state = State::Text;
    let mut exhausted = Exhausted::default();
    let mut pos = 0;

    while pos < bytes.len() {
        match state {
            State::Text => {
                let Some(offset) = doc[pos..].find('<') else {
                    break;
                };
                let lt = pos + offset;

                if doc[lt..].starts_with("<!--") {
                    state = State::Comment;
                    pos = lt + 4;
                    continue;
                }

                match bytes.get(lt + 1) {
                    Some(b'!') => {
                        // Declaration (doctype, CDATA-ish junk): skip to '>'
                        let Some(gt) = find_tag_end(bytes, lt) else {
                            break;
                        };
                        if report.landmarks.doctype_end.is_none()
                            && starts_with_ignore_case(bytes, lt + 2, b"doctype")
                        {
                            report.landmarks.doctype_end = Some(gt + 1);
                        }
                        pos = gt + 1;
                    }
                    Some(b'/') => {
                        let name = tag_name(bytes, lt + 2);
                        record_closing(&mut report.landmarks, name, lt);
                        // Closing tags carry no attributes, so the next '>' ends them
                        let gt = if exhausted.gt {
                            None
                        } else {
                            bytes[lt..].iter().position(|b| *b == b'>').map(|i| lt + i)
                        };
                        match gt {
                            Some(gt) => pos = gt + 1,
                            None => {
                                exhausted.gt = true;
                                pos = lt + 2;
                            }
                        }
                    }
                    Some(c) if c.is_ascii_alphabetic() => {
                        let name = tag_name(bytes, lt + 1);
                        let kind = block_kind(name);
                        let Some(gt) = find_tag_end(bytes, lt) else {
                            // Opening tag runs off the end of the document
                            if let Some(kind) = kind {
                                report.unclosed.push(Unclosed { kind, start: lt });
                            }
                            break;
                        };

                        if let Some(kind) = kind {
                            let external = kind == BlockKind::Script
                                && attribute_names(&doc[lt..gt]).iter().any(|a| a == "src");
                            state = State::RawText {
                                kind,
                                start: lt,
                                content_start: gt + 1,
                                external,
                            };
                        } else {
                            record_opening(&mut report.landmarks, name, gt + 1);
                        }
                        pos = gt + 1;
                    }
                    _ => pos = lt + 1,
                }
            }
            State::Comment => match doc[pos..].find("-->") {
                Some(offset) => {
                    pos += offset + 3;
                    state = State::Text;
                }
                None => break,
            },
            State::RawText {
                kind,
                start,
                content_start,
                external,
            } => {
                let closing = if *exhausted.close(kind) {
                    None
                } else {
                    find_closing_tag(doc, content_start, kind.tag_name())
                };
                match closing {
                    Some((close_start, close_end)) => {
                        report.regions.push(Region {
                            kind,
                            outer: start..close_end,
                            inner: content_start..close_start,
                            external,
                        });
                        pos = close_end;
                    }
                    None => {
                        *exhausted.close(kind) = true;
                        report.unclosed.push(Unclosed { kind, start });
                        pos = content_start;
                    }
                }
                state = State::Text;
            }
        }
    }

    report
}

/// Newline offsets of a document, for offset to line lookups.
#[derive(Debug, Clone)]
pub(crate) struct LineIndex {
    breaks: Vec<usize>,
}

impl LineIndex {
    pub fn new(doc: &str) -> Self {
        let breaks = doc
            .bytes()
            .enumerate()
            .filter_map(|(i, b)| (b == b'\n').then_some(i))
            .collect();
        Self { breaks }
    }

    /// 1-based line number of a byte offset.
    pub fn line(&self, offset: usize) -> usize {
        self.breaks.partition_point(|&b| b < offset) + 1
    }
}

fn block_kind(name: &[u8]) -> Option<BlockKind> {
    if name.eq_ignore_ascii_case(b"style") {
        Some(BlockKind::Style)
    } else if name.eq_ignore_ascii_case(b"script") {
        Some(BlockKind::Script)
    } else {
        None
    }
}

fn record_opening(landmarks: &mut Landmarks, name: &[u8], end: usize) {
    if name.eq_ignore_ascii_case(b"html") {
        landmarks.html_open_end.get_or_insert(end);
    } else if name.eq_ignore_ascii_case(b"head") {
        landmarks.head_open_end.get_or_insert(end);
    }
}

fn record_closing(landmarks: &mut Landmarks, name: &[u8], start: usize) {
    if name.eq_ignore_ascii_case(b"head") {
        landmarks.head_close.get_or_insert(start);
    } else if name.eq_ignore_ascii_case(b"body") {
        landmarks.body_close.get_or_insert(start);
    } else if name.eq_ignore_ascii_case(b"html") {
        landmarks.html_close.get_or_insert(start);
    }
}

/// Tag name starting at `from`: ASCII alphanumerics, `-` and `:`.
fn tag_name(bytes: &[u8], from: usize) -> &[u8] {
    let start = from.min(bytes.len());
    let len = bytes[start..]
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'-' || **b == b':')
        .count();
    &bytes[start..start + len]
}

fn starts_with_ignore_case(bytes: &[u8], at: usize, needle: &[u8]) -> bool {
    bytes
        .get(at..at + needle.len())
        .is_some_and(|s| s.eq_ignore_ascii_case(needle))
}

/// Index of the `>` closing the tag that starts at `lt`.
///
/// A quote only opens a value when it directly follows `=` (whitespace
/// allowed), so stray apostrophes in unquoted values do not swallow the tag.
pub(crate) fn find_tag_end(bytes: &[u8], lt: usize) -> Option<usize> {
    let mut i = lt + 1;
    let mut after_eq = false;
    while i < bytes.len() {
        match bytes[i] {
            b'>' => return Some(i),
            b'=' => after_eq = true,
            b'"' | b'\'' if after_eq => {
                let quote = bytes[i];
                let close = bytes[i + 1..].iter().position(|b| *b == quote)?;
                i += close + 1;
                after_eq = false;
            }
            c if c.is_ascii_whitespace() => {}
            _ => after_eq = false,
        }
        i += 1;
    }
    None
}

/// Find `</name ...>` at or after `from`, ASCII case-insensitive.
/// Returns the offsets of its `<` and just past its `>`.
fn find_closing_tag(doc: &str, from: usize, name: &str) -> Option<(usize, usize)> {
    let bytes = doc.as_bytes();
    let mut search = from;
    while let Some(offset) = doc[search..].find("</") {
        let lt = search + offset;
        let name_end = lt + 2 + name.len();
        if starts_with_ignore_case(bytes, lt + 2, name.as_bytes()) {
            match bytes.get(name_end) {
                Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => {
                    let gt = bytes[name_end..].iter().position(|b| *b == b'>')?;
                    return Some((lt, name_end + gt + 1));
                }
                _ => {}
            }
        }
        search = lt + 2;
    }
    None
}

/// Lowercased attribute names of an opening tag (`<name ...` without the `>`).
pub(crate) fn attribute_names(tag: &str) -> Vec<String> {
    let bytes = tag.as_bytes();
    let mut names = Vec::new();
    let mut i = 1 + tag_name(bytes, 1).len();

    while i < bytes.len() {
        while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        let start = i;
        while i < bytes.len()
            && !bytes[i].is_ascii_whitespace()
            && !matches!(bytes[i], b'=' | b'/' | b'>')
        {
            i += 1;
        }
        if i > start {
            names.push(tag[start..i].to_ascii_lowercase());
        }

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if bytes.get(i) != Some(&b'=') {
            continue;
        }
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        match bytes.get(i) {
            Some(&quote) if quote == b'"' || quote == b'\'' => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    i += 1;
                }
                i += 1;
            }
            _ => {
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
            }
        }
    }

    names
}
