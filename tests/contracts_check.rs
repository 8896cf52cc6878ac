//! Stdout contract checks: the success document and the error object are
//! the tool's only outputs, and downstream consumers parse both.

use httpmock::prelude::*;

mod common;
use common::{fixture_rows, token_ok_body, TestEnv};

#[test]
fn metadata_carries_exactly_the_contract_fields() {
    let env = TestEnv::new();
    env.write_config(&TestEnv::full_config());
    env.server.mock(|when, then| {
        when.method(POST).path("/token");
        then.status(200).json_body(token_ok_body());
    });
    env.server.mock(|when, then| {
        when.method(POST).path_contains("/searchAnalytics/query");
        then.status(200).json_body(fixture_rows());
    });

    let doc = env.run_json(&["--type", "summary"]);

    let metadata = doc["metadata"].as_object().expect("metadata object");
    let mut keys: Vec<&str> = metadata.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["dateRange", "fetchedAt", "range", "siteUrl"]);

    let date_range = metadata["dateRange"].as_object().expect("dateRange object");
    assert!(date_range.contains_key("startDate"));
    assert!(date_range.contains_key("endDate"));
}

#[test]
fn unrequested_sections_are_absent_not_null() {
    let env = TestEnv::new();
    env.write_config(&TestEnv::full_config());
    env.server.mock(|when, then| {
        when.method(POST).path("/token");
        then.status(200).json_body(token_ok_body());
    });
    env.server.mock(|when, then| {
        when.method(POST).path_contains("/searchAnalytics/query");
        then.status(200).json_body(fixture_rows());
    });

    let doc = env.run_json(&["--type", "page"]);

    let top = doc.as_object().expect("document object");
    assert!(top.contains_key("topPages"));
    assert!(!top.contains_key("summary"));
    assert!(!top.contains_key("topQueries"));
}

#[test]
fn config_defaults_feed_range_and_limit() {
    let env = TestEnv::new();
    let mut config = TestEnv::full_config();
    config["defaults"] = serde_json::json!({"range": "7d", "limit": 3});
    env.write_config(&config);

    env.server.mock(|when, then| {
        when.method(POST).path("/token");
        then.status(200).json_body(token_ok_body());
    });
    let query = env.server.mock(|when, then| {
        when.method(POST)
            .path_contains("/searchAnalytics/query")
            .json_body_partial(r#"{"rowLimit": 3}"#);
        then.status(200).json_body(fixture_rows());
    });

    let doc = env.run_json(&["--type", "query"]);

    assert_eq!(doc["metadata"]["range"], "7d");
    assert_eq!(query.hits(), 1);
}

#[test]
fn error_object_has_error_and_message_fields() {
    let env = TestEnv::new();

    let err = env.run_err_json(&[]);

    let top = err.as_object().expect("error object");
    assert!(top.contains_key("error"));
    assert!(top.contains_key("message"));
    assert_eq!(err["error"], "CONFIG_NOT_FOUND");
    assert!(err["message"]
        .as_str()
        .unwrap_or("")
        .contains(".gsc-config.json"));
}

#[test]
fn gitignore_warning_goes_to_stderr_not_stdout() {
    let env = TestEnv::new();
    env.write_config(&TestEnv::full_config());
    // A .gitignore that does not cover the credentials file.
    std::fs::write(env.project.join(".gitignore"), "target/\n").expect("write gitignore");

    env.server.mock(|when, then| {
        when.method(POST).path("/token");
        then.status(200).json_body(token_ok_body());
    });
    env.server.mock(|when, then| {
        when.method(POST).path_contains("/searchAnalytics/query");
        then.status(200).json_body(fixture_rows());
    });

    let assert = env.cmd().args(["--type", "summary"]).assert().success();
    let output = assert.get_output();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(".gsc-config.json"), "warning on stderr: {stderr}");

    // Stdout must still parse as the report document alone.
    let doc: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is the report document");
    assert!(doc["summary"].is_object());
}
