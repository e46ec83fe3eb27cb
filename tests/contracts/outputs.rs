//! Output layout contracts
//!
//! A successful split writes index.html, main.js and package.json always,
//! plus style.css / renderer.js only when something was extracted.

use splinter::{split_html, BlockMode, OutputTarget, SplitOptions};

use crate::common::*;
use crate::{assert_no_output, assert_output_file};

#[tokio::test]
async fn contract_minimal_page_yields_five_files() {
    let env = TestEnv::new();
    let input = env.write("app.html", MINIMAL_PAGE);

    let outcome = split_html(&input, &SplitOptions::new()).await;

    assert!(outcome.success, "{:?}", outcome.error);
    for file in ["style.css", "renderer.js", "index.html", "main.js", "package.json"] {
        assert_output_file!(env, &format!("app/{file}"));
    }
    assert_eq!(env.read("app/style.css"), "body{color:red}\n");
    assert_eq!(env.read("app/renderer.js"), "console.log(1)\n");
    assert_eq!(
        env.read("app/index.html"),
        "<html><head><link rel=\"stylesheet\" href=\"style.css\"></head><body><script src=\"renderer.js\"></script></body></html>"
    );
}

#[tokio::test]
async fn contract_page_without_blocks_passes_through() {
    let env = TestEnv::new();
    let input = env.write("static.html", STATIC_PAGE);

    let outcome = split_html(&input, &SplitOptions::new()).await;

    assert!(outcome.success);
    let files = outcome.files.unwrap();
    assert!(files.stylesheet_path.is_none());
    assert!(files.script_path.is_none());
    assert_no_output!(env, "static/style.css");
    assert_no_output!(env, "static/renderer.js");
    assert_eq!(env.read("static/index.html"), STATIC_PAGE);
}

#[tokio::test]
async fn contract_indented_page_is_cleanly_rewritten() {
    let env = TestEnv::new();
    let input = env.write("pages/dashboard.html", DASHBOARD_PAGE);

    let outcome = split_html(&input, &SplitOptions::new()).await;
    assert!(outcome.success);

    assert_eq!(
        env.read("pages/dashboard/style.css"),
        "        body { font-family: sans-serif; margin: 0; }\n        .card { padding: 1rem; border: 1px solid #ddd; }\n"
    );
    let html = env.read("pages/dashboard/index.html");
    assert!(html.contains("    <link rel=\"stylesheet\" href=\"style.css\">\n</head>"));
    assert!(html.contains("    <script src=\"renderer.js\"></script>\n</body>"));
    assert!(!html.contains("font-family"));
    assert!(!html.contains("addEventListener"));
    assert!(!html.contains("\n\n"), "removed blocks must not leave blank lines:\n{html}");
}

#[tokio::test]
async fn contract_first_block_only_by_default() {
    let env = TestEnv::new();
    let input = env.write("multi.html", MULTI_BLOCK_PAGE);

    let outcome = split_html(&input, &SplitOptions::new()).await;
    let files = outcome.files.expect("split should succeed");

    assert_eq!(env.read("multi/style.css"), "h1 { color: red; }\n");
    assert_eq!(env.read("multi/renderer.js"), "first();\n");
    assert_eq!(
        env.read("multi/index.html"),
        r#"<html>
<head>
    <style>h2 { color: blue; }</style>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <script src="vendor/chart.js"></script>
    <script>second();</script>
    <script src="renderer.js"></script>
</body>
</html>
"#
    );
    let lines: Vec<usize> = files.skipped.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![4, 9]);
}

#[tokio::test]
async fn contract_all_blocks_mode_takes_everything() {
    let env = TestEnv::new();
    let input = env.write("multi.html", MULTI_BLOCK_PAGE);

    let outcome = split_html(&input, &SplitOptions::new().with_blocks(BlockMode::All)).await;
    let files = outcome.files.expect("split should succeed");

    assert!(files.skipped.is_empty());
    assert_eq!(
        env.read("multi/renderer.js"),
        "// Script block 1\nfirst();\n\n// Script block 2\nsecond();\n"
    );
    assert_eq!(
        env.read("multi/index.html"),
        r#"<html>
<head>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <script src="vendor/chart.js"></script>
    <script src="renderer.js"></script>
</body>
</html>
"#
    );
}

#[tokio::test]
async fn contract_all_writes_stay_inside_output_dir() {
    let env = TestEnv::new();
    let input = env.write("app.html", MINIMAL_PAGE);

    let files = split_html(&input, &SplitOptions::new().with_output_dir(env.path("out/app")))
        .await
        .files
        .unwrap();

    for path in files.paths() {
        assert!(path.starts_with(env.path("out/app")), "{path:?} escaped");
    }
    assert_eq!(
        list_all_files(env.root.path()).len(),
        6,
        "input plus five outputs expected"
    );
}

#[tokio::test]
async fn contract_package_json_names_the_app() {
    let env = TestEnv::new();
    let input = env.write("Sales Report.html", MINIMAL_PAGE);

    let outcome = split_html(&input, &SplitOptions::new().with_app_version("3.1.4")).await;
    let files = outcome.files.unwrap();

    let manifest: serde_json::Value =
        serde_json::from_str(&env.read("Sales Report/package.json")).unwrap();
    assert_eq!(manifest["name"], "sales-report");
    assert_eq!(manifest["productName"], "Sales Report");
    assert_eq!(manifest["version"], "3.1.4");
    assert_eq!(manifest["main"], "main.js");
    assert_eq!(manifest["scripts"]["start"], "electron .");

    let main_js = env.read("Sales Report/main.js");
    assert!(main_js.contains("const APP_NAME = \"Sales Report\";"));
    assert!(files.file(OutputTarget::EntryScript).is_some());
}
