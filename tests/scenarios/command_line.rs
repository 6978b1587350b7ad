//! Scenario: Command Line
//!
//! Journey: A user keeps a menu in a TOML file and scripts it from a shell.
//!
//! Steps:
//! 1. `dropmenu inspect` prints the tree built from the file
//! 2. `dropmenu inspect --json` prints the store for tooling
//! 3. `dropmenu query` runs single commands against a fresh instance
//! 4. Typos in the options file surface as warnings, not failures
//! 5. `dropmenu show` refuses to run without a terminal
//!
//! Success Criteria:
//! - stdout carries only the requested output
//! - Warnings and errors go to stderr with a failing exit code on error

use serde_json::Value;

use crate::common::*;

/// SCENARIO: inspect shows nested items under their parent
#[test]
fn scenario_inspect_prints_tree() {
    let env = TestEnv::new();
    env.write("menu.toml", SELECT_SOURCE);

    let result = env.run(&["inspect", "menu.toml"]);

    assert!(result.is_success(), "inspect failed:\n{}", result.combined_output());
    let lines: Vec<&str> = result.stdout.lines().collect();
    assert!(lines[0].starts_with("Fruit ("), "title line: {}", lines[0]);

    let citrus = lines.iter().position(|l| l.contains("Citrus")).expect("Citrus line");
    let lime = lines.iter().position(|l| l.contains("Lime")).expect("Lime line");
    assert!(lime > citrus);
    let indent = |line: &str| line.len() - line.trim_start().len();
    assert!(indent(lines[lime]) > indent(lines[citrus]));
    assert!(result.stdout.contains("Banana = 2"));
}

/// SCENARIO: inspect --json exposes the store
#[test]
fn scenario_inspect_json() {
    let env = TestEnv::new();
    env.write("menu.toml", LIST_SOURCE);

    let result = env.run(&["inspect", "menu.toml", "--json"]);

    assert!(result.is_success(), "inspect failed:\n{}", result.combined_output());
    let json: Value = serde_json::from_str(&result.stdout).expect("stdout is JSON");
    assert_eq!(json["multi"], Value::Bool(false));
    assert_eq!(json["value"], Value::Null);

    let items = json["items"].as_array().expect("items array");
    let ids: Vec<&str> = items.iter().filter_map(|i| i["id"].as_str()).collect();
    for id in ["home", "docs", "more", "about", "zero"] {
        assert!(ids.contains(&id), "missing item {}: {:?}", id, ids);
    }

    let menus = json["menus"].as_array().expect("menus array");
    assert!(menus.iter().any(|m| m["id"] == "more-menu" && m["title"] == "More"));
}

/// SCENARIO: query runs one command and prints its JSON result
#[test]
fn scenario_query_commands() {
    let env = TestEnv::new();
    env.write("menu.toml", SELECT_SOURCE);

    // pre-selected option
    let result = env.run(&["query", "menu.toml", "value"]);
    assert!(result.is_success(), "query failed:\n{}", result.combined_output());
    assert_eq!(result.stdout.trim(), "\"2\"");

    let result = env.run(&["query", "menu.toml", "selectByValue", "1"]);
    assert!(result.is_success());
    assert_eq!(result.stdout.trim(), "true");

    let result = env.run(&["query", "menu.toml", "text", "lime"]);
    assert_eq!(result.stdout.trim(), "\"Lime\"");

    let result = env.run(&["query", "menu.toml", "getItem", "nope"]);
    assert_eq!(result.stdout.trim(), "false");
}

/// SCENARIO: --events streams notifications before the result
#[test]
fn scenario_query_with_events() {
    let env = TestEnv::new();
    env.write("menu.toml", SELECT_SOURCE);

    let result = env.run(&["--events", "query", "menu.toml", "select", "lime"]);

    assert!(result.is_success(), "query failed:\n{}", result.combined_output());
    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines.last(), Some(&"true"));

    let events: Vec<Value> = lines[..lines.len() - 1]
        .iter()
        .map(|l| serde_json::from_str(l).expect("event line is JSON"))
        .collect();
    let names: Vec<&str> = events.iter().filter_map(|e| e["event"].as_str()).collect();
    assert!(names.contains(&"dropdown.select:before"), "events: {:?}", names);
    assert!(names.contains(&"dropdown.select"), "events: {:?}", names);
}

/// SCENARIO: reserved and unknown commands fail with a message
#[test]
fn scenario_query_rejects_bad_commands() {
    let env = TestEnv::new();
    env.write("menu.toml", SELECT_SOURCE);

    let result = env.run(&["query", "menu.toml", "init"]);
    assert!(!result.is_success());
    assert!(result.stderr.contains("cannot be called by name"), "stderr: {}", result.stderr);

    let result = env.run(&["query", "menu.toml", "explode"]);
    assert!(!result.is_success());
    assert!(result.stderr.contains("unknown command 'explode'"), "stderr: {}", result.stderr);
}

/// SCENARIO: a typo in the options file warns and the command still runs
#[test]
fn scenario_options_typo_warns() {
    let env = TestEnv::new();
    env.write("menu.toml", SELECT_SOURCE);
    env.write_options("auto_clse = false\n");

    let result = env.run(&["query", "menu.toml", "value"]);

    assert!(result.is_success(), "query failed:\n{}", result.combined_output());
    assert!(result.stderr.contains("warning:"), "stderr: {}", result.stderr);
    assert!(result.stderr.contains("auto_close"), "stderr: {}", result.stderr);
    assert_eq!(result.stdout.trim(), "\"2\"");
}

/// SCENARIO: a source with two markup roots is rejected
#[test]
fn scenario_invalid_source_fails() {
    let env = TestEnv::new();
    env.write(
        "menu.toml",
        "[select]\noptions = [{ text = \"One\" }]\n\n[list]\nitems = [{ text = \"Two\" }]\n",
    );

    let result = env.run(&["inspect", "menu.toml"]);

    assert!(!result.is_success());
    assert!(result.stderr.contains("menu.toml"), "stderr: {}", result.stderr);
}

/// SCENARIO: show needs an interactive terminal
#[test]
fn scenario_show_without_terminal_fails() {
    let env = TestEnv::new();
    env.write("menu.toml", SELECT_SOURCE);

    let result = env.run(&["show", "menu.toml"]);

    assert!(!result.is_success());
    assert!(result.stderr.contains("interactive terminal"), "stderr: {}", result.stderr);
}
