//! Property tests for block extraction.

use proptest::prelude::*;

use splinter::{extract, BlockMode};

/// Markup-ish text built from fragments the scanner cares about.
fn html_soup() -> impl Strategy<Value = String> {
    const TOKENS: &[&str] = &[
        "<style>",
        "</style>",
        "<script>",
        "<script src=\"x.js\">",
        "</script>",
        "<head>",
        "</head>",
        "<body>",
        "</body>",
        "<!--",
        "-->",
        "\n",
        "    ",
        "<",
        "\"",
    ];
    let fragment = prop_oneof![
        3 => proptest::sample::select(TOKENS).prop_map(String::from),
        1 => "[a-z{}:;= ]{0,12}",
        1 => "\\PC{0,4}",
    ];
    proptest::collection::vec(fragment, 0..=24).prop_map(|parts| parts.concat())
}

fn plain_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 .,;:{}()\n\t-]{0,200}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: extraction never panics, whatever the input.
    #[test]
    fn property_extract_never_panics(doc in html_soup(), all in any::<bool>()) {
        let mode = if all { BlockMode::All } else { BlockMode::First };
        let _ = extract(&doc, mode);
    }

    /// PROPERTY: extraction never panics on arbitrary unicode.
    #[test]
    fn property_extract_never_panics_on_unicode(doc in "\\PC{0,200}") {
        let _ = extract(&doc, BlockMode::First);
    }

    /// PROPERTY: text without any tag passes through untouched.
    #[test]
    fn property_text_without_tags_passes_through(doc in plain_text()) {
        let assets = extract(&doc, BlockMode::First);
        prop_assert_eq!(assets.markup, doc);
        prop_assert!(assets.style.is_none());
        prop_assert!(assets.script.is_none());
        prop_assert!(assets.skipped.is_empty());
    }

    /// PROPERTY: an extracted style body no longer appears in the shell,
    /// and the shell references the stylesheet.
    #[test]
    fn property_extracted_style_leaves_the_markup(
        css in "[a-z]{1,8}\\{[a-z]{1,8}:[a-z0-9]{1,8}\\}",
        before in "[A-Za-z ]{0,20}",
        after in "[A-Za-z ]{0,20}",
    ) {
        let doc = format!("<html><head>{before}<style>{css}</style>{after}</head><body></body></html>");
        let assets = extract(&doc, BlockMode::First);

        let expected = format!("{css}\n");
        prop_assert_eq!(assets.style.as_deref(), Some(expected.as_str()));
        prop_assert!(!assets.markup.contains(&css));
        prop_assert!(assets.markup.contains("href=\"style.css\""));
    }

    /// PROPERTY: extraction is deterministic.
    #[test]
    fn property_extract_is_deterministic(doc in html_soup()) {
        prop_assert_eq!(extract(&doc, BlockMode::All), extract(&doc, BlockMode::All));
    }

    /// PROPERTY: skipped blocks are reported in line order with valid lines.
    #[test]
    fn property_skipped_lines_are_sorted(doc in html_soup()) {
        let assets = extract(&doc, BlockMode::First);
        let line_count = doc.matches('\n').count() + 1;
        let mut previous = 0;
        for skipped in &assets.skipped {
            prop_assert!(skipped.line >= 1 && skipped.line <= line_count);
            prop_assert!(skipped.line >= previous);
            previous = skipped.line;
        }
    }
}
