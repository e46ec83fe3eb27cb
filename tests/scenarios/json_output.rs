//! CI pipelines consume `--json` output.

use crate::common::*;

#[test]
fn scenario_json_split_emits_ndjson() {
    let env = TestEnv::new();
    env.write("multi.html", MULTI_BLOCK_PAGE);

    let result = env.run(&["--json", "split", "multi.html"]);

    assert!(result.success, "{}", result.combined_output());
    let events = result.events();
    let kinds: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
    assert_eq!(kinds, vec!["start", "skipped", "skipped", "complete"]);

    let complete = events.last().unwrap();
    assert_eq!(complete["command"], "split");
    assert_eq!(complete["success"], true);
    assert!(complete["files"]["htmlPath"].as_str().unwrap().ends_with("index.html"));
    assert!(complete["duration_ms"].is_u64());
}

#[test]
fn scenario_json_failure_carries_code() {
    let env = TestEnv::new();

    let result = env.run(&["split", "gone.html", "--json"]);

    assert_eq!(result.exit_code, 1);
    let events = result.events();
    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["success"], false);
    assert_eq!(complete["code"], "not_found");
}

#[test]
fn scenario_json_inspect_includes_assets() {
    let env = TestEnv::new();
    env.write("page.html", MINIMAL_PAGE);

    let result = env.run(&["--json", "inspect", "page.html"]);

    assert!(result.success);
    let complete = result.events().pop().unwrap();
    assert_eq!(complete["style"], "body{color:red}\n");
    assert_eq!(complete["script"], "console.log(1)\n");
}
