use std::fs;
use std::process::{Command, Output};

use serde_json::Value;

fn xsum(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xsum"))
        .args(args)
        .output()
        .expect("run xsum")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let body = String::from_utf8(output.stdout.clone()).expect("utf8");
    serde_json::from_str(&body).expect("json")
}

#[test]
fn demo_prints_four_views() {
    let value = stdout_json(&xsum(&["demo", "--json"]));
    let views = value.as_array().expect("array");
    assert_eq!(views.len(), 4);
    assert_eq!(views[2]["count"], 11);
    for entry in views[0]["entries"].as_array().unwrap() {
        assert_eq!(entry["total"], "15");
    }
}

#[test]
fn demo_text_has_headings() {
    let output = xsum(&["demo"]);
    assert!(output.status.success());
    let body = String::from_utf8(output.stdout).unwrap();
    assert!(body.starts_with("Sums totalling 15:\n"));
    assert!(body.contains("  15 = 1 + 2 + 3 + E\n"));
}

#[test]
fn query_filters_in_given_alphabet() {
    let value = stdout_json(&xsum(&[
        "query",
        "--alphabet",
        "0123456789XE",
        "--digits",
        "23",
        "--cardinality",
        "5",
        "--total",
        "19",
        "--json",
    ]));
    let view = &value[0];
    assert!(view["count"].as_u64().unwrap() > 0);
    for entry in view["entries"].as_array().unwrap() {
        assert_eq!(entry["total"], "19");
        let addends = entry["addends"].as_array().unwrap();
        assert_eq!(addends.len(), 5);
        assert!(addends.contains(&Value::from("2")));
        assert!(addends.contains(&Value::from("3")));
    }
}

#[test]
fn query_zero_total_is_empty_not_unfiltered() {
    let value = stdout_json(&xsum(&["query", "--total", "0", "--json"]));
    assert_eq!(value[0]["count"], 0);
}

#[test]
fn stats_for_decimal() {
    let value = stdout_json(&xsum(&["stats"]));
    assert_eq!(value["entries"], 502);
    assert_eq!(value["max_total"], 45);
    assert_eq!(value["max_total_numeral"], "45");
    assert_eq!(value["catalog_hash"].as_str().unwrap().len(), 64);
}

#[test]
fn stats_hash_is_repeatable() {
    let a = stdout_json(&xsum(&["stats", "--base", "12"]));
    let b = stdout_json(&xsum(&["stats", "--base", "12"]));
    assert_eq!(a["entries"], 2036);
    assert_eq!(a["catalog_hash"], b["catalog_hash"]);
}

#[test]
fn plan_from_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.yaml");
    fs::write(
        &path,
        "index:\n  alphabet: \"0123456789\"\nqueries:\n  - label: pairs to ten\n    total: \"10\"\n    cardinality: 2\n",
    )
    .unwrap();
    let value = stdout_json(&xsum(&["plan", "--config", path.to_str().unwrap(), "--json"]));
    assert_eq!(value[0]["label"], "pairs to ten");
    assert_eq!(value[0]["count"], 4);
}

#[test]
fn invalid_alphabet_fails() {
    let output = xsum(&["query", "--alphabet", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("alphabet-too-short"));
}

#[test]
fn oversized_base_fails_fast() {
    let output = xsum(&["stats", "--base", "48"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("base-too-large"));
}
