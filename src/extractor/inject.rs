//! Reference injection
//!
//! Decides where the `<link>` and `<script src>` tags go, falling back to a
//! fixed location when the document has no head or body.

use super::scanner::Landmarks;
use super::Edit;
use crate::models::{SCRIPT_FILE, STYLESHEET_FILE};

/// Tag referencing the extracted stylesheet
pub fn stylesheet_tag() -> String {
    format!("<link rel=\"stylesheet\" href=\"{STYLESHEET_FILE}\">")
}

/// Tag referencing the extracted renderer script
pub fn script_tag() -> String {
    format!("<script src=\"{SCRIPT_FILE}\"></script>")
}

/// Stylesheet goes at the end of the head.
///
/// Fallbacks: right after `<head>`, after `<html>`, after the doctype, then
/// document start.
pub(crate) fn stylesheet_edit(doc: &str, landmarks: &Landmarks) -> Edit {
    let tag = stylesheet_tag();
    if let Some(at) = landmarks.head_close {
        return before_closing(doc, at, &tag);
    }
    if let Some(at) = landmarks.head_open_end {
        return after_opening(doc, at, &tag, true);
    }
    match landmarks.html_open_end.or(landmarks.doctype_end) {
        Some(at) => after_opening(doc, at, &tag, false),
        None => Edit::insert(0, format!("{tag}\n")),
    }
}

/// Script goes before `</body>`, else before `</html>`, else at document end.
pub(crate) fn script_edit(doc: &str, landmarks: &Landmarks) -> Edit {
    let tag = script_tag();
    match landmarks.body_close.or(landmarks.html_close) {
        Some(at) => before_closing(doc, at, &tag),
        None if doc.ends_with('\n') => Edit::insert(doc.len(), format!("{tag}\n")),
        None => Edit::insert(doc.len(), tag),
    }
}

/// Insert `tag` in front of the closing tag at `at`.
///
/// A closing tag alone on its line gets the new tag on its own line, one
/// level deeper; otherwise the tag is inserted inline.
fn before_closing(doc: &str, at: usize, tag: &str) -> Edit {
    let indent = line_indent_before(doc, at);
    match indent {
        Some(indent) => {
            let unit = indent_unit(doc, indent);
            Edit::insert(at, format!("{unit}{tag}\n{indent}"))
        }
        None => Edit::insert(at, tag.to_string()),
    }
}

/// Insert `tag` right after an opening tag ending at `at`.
fn after_opening(doc: &str, at: usize, tag: &str, nest: bool) -> Edit {
    let rest = &doc[at..];
    if !(rest.starts_with('\n') || rest.starts_with("\r\n")) {
        return Edit::insert(at, tag.to_string());
    }

    let line_start = doc[..at].rfind('\n').map_or(0, |i| i + 1);
    let line = &doc[line_start..at];
    let indent = &line[..line.len() - line.trim_start().len()];
    let unit = if nest { indent_unit(doc, indent) } else { "" };
    Edit::insert(at, format!("\n{indent}{unit}{tag}"))
}

/// Whitespace between the start of the line and `at`, if that is all there is.
fn line_indent_before(doc: &str, at: usize) -> Option<&str> {
    let line_start = doc[..at].rfind('\n').map_or(0, |i| i + 1);
    let prefix = &doc[line_start..at];
    prefix
        .bytes()
        .all(|b| b == b' ' || b == b'\t')
        .then_some(prefix)
}

/// Tabs when the surrounding line (or, at column zero, the document) uses them.
fn indent_unit(doc: &str, indent: &str) -> &'static str {
    if indent.contains('\t') || (indent.is_empty() && doc.contains("\n\t")) {
        "\t"
    } else {
        "    "
    }
}
