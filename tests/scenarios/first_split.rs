//! A user splits their first page from the command line.

use crate::common::*;
use crate::{assert_no_output, assert_output_file};

#[test]
fn scenario_split_with_defaults() {
    let env = TestEnv::new();
    env.write("dashboard.html", DASHBOARD_PAGE);

    let result = env.run(&["split", "dashboard.html"]);

    assert!(result.success, "split failed:\n{}", result.combined_output());
    assert_output_file!(env, "dashboard/index.html");
    assert_output_file!(env, "dashboard/main.js");
    assert!(result.stdout.contains("Wrote 5 files"), "{}", result.stdout);
    assert!(result.stdout.contains("npm start"));
}

#[test]
fn scenario_split_with_flags() {
    let env = TestEnv::new();
    env.write("page.html", MINIMAL_PAGE);

    let result = env.run(&[
        "split",
        "page.html",
        "-o",
        "desktop",
        "--zip",
        "--name",
        "Desk Top",
        "--app-version",
        "0.9.0",
    ]);

    assert!(result.success, "{}", result.combined_output());
    assert_output_file!(env, "desktop/package.json");
    assert_output_file!(env, "desktop.zip");
    assert_no_output!(env, "page");

    let manifest: serde_json::Value =
        serde_json::from_str(&env.read("desktop/package.json")).unwrap();
    assert_eq!(manifest["productName"], "Desk Top");
    assert_eq!(manifest["version"], "0.9.0");
}

#[test]
fn scenario_missing_input_exits_nonzero() {
    let env = TestEnv::new();

    let result = env.run(&["split", "missing.html"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("input not found"), "{}", result.stderr);
    assert_no_output!(env, "missing");
}

#[test]
fn scenario_inspect_writes_nothing() {
    let env = TestEnv::new();
    env.write("multi.html", MULTI_BLOCK_PAGE);

    let result = env.run(&["inspect", "multi.html"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("style.css"));
    assert!(result.stderr.contains("left in place"), "{}", result.stderr);
    assert_no_output!(env, "multi");
}

#[test]
fn scenario_split_directory_is_rejected() {
    let env = TestEnv::new();
    std::fs::create_dir(env.path("site")).unwrap();

    let result = env.run(&["split", "site"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("is a directory"), "{}", result.stderr);
    assert_no_output!(env, "site_split");
}
