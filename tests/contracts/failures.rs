//! Failure contracts
//!
//! Bad input fails before anything is written; every failure is reported
//! through the outcome, never as a panic.

use splinter::{split_html, try_split, SplinterError, SplitOptions};

use crate::assert_no_output;
use crate::common::*;

#[tokio::test]
async fn contract_missing_input_writes_nothing() {
    let env = TestEnv::new();

    let outcome = split_html(env.path("nope.html"), &SplitOptions::new()).await;

    assert!(!outcome.success);
    assert!(outcome.files.is_none());
    assert_eq!(outcome.code, Some("not_found"));
    assert_no_output!(env, "nope");
}

#[tokio::test]
async fn contract_directory_input_is_invalid() {
    let env = TestEnv::new();
    std::fs::create_dir(env.path("site.html")).unwrap();

    let err = try_split(env.path("site.html"), &SplitOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(err, SplinterError::InvalidInput { .. }));
    assert_no_output!(env, "site");
}

#[tokio::test]
async fn contract_non_utf8_input_is_invalid() {
    let env = TestEnv::new();
    std::fs::write(env.path("latin1.html"), b"<p>caf\xe9</p>").unwrap();

    let outcome = split_html(env.path("latin1.html"), &SplitOptions::new()).await;

    assert_eq!(outcome.code, Some("invalid_input"));
    assert!(outcome.error.unwrap().contains("UTF-8"));
    assert_no_output!(env, "latin1");
}

#[tokio::test]
async fn contract_unwritable_output_reports_write() {
    let env = TestEnv::new();
    let input = env.write("app.html", MINIMAL_PAGE);
    env.write("app", "occupied by a file");

    let outcome = split_html(&input, &SplitOptions::new()).await;

    assert!(!outcome.success);
    assert_eq!(outcome.code, Some("write"));
    assert!(outcome.error.unwrap().contains("output directory"));
}

#[tokio::test]
async fn contract_unclosed_block_is_not_fatal() {
    let env = TestEnv::new();
    let input = env.write("broken.html", "<head><style>a{}</style></head><body><script>oops(");

    let outcome = split_html(&input, &SplitOptions::new()).await;
    let files = outcome.files.expect("unclosed script should not fail the split");

    assert!(files.script_path.is_none());
    assert_eq!(files.skipped.len(), 1);
    assert!(env.read("broken/index.html").ends_with("<script>oops("));
}

#[tokio::test]
async fn contract_archive_failure_reports_packaging() {
    let env = TestEnv::new();
    let input = env.write("app.html", MINIMAL_PAGE);
    std::fs::create_dir(env.path("app.zip")).unwrap();

    let outcome = split_html(&input, &SplitOptions::new().with_zip(true)).await;

    assert!(!outcome.success);
    assert!(outcome.files.is_none());
    assert_eq!(outcome.code, Some("packaging"));
    assert!(outcome.error.unwrap().contains("app.zip"));
    assert!(env.path("app.zip").is_dir());
}
