mod common;

use common::*;

fn tree_env() -> TestEnv {
    let env = TestEnv::new();
    env.write_project_file("folders.json", MAILBOX_TREE_JSON);
    env
}

#[test]
fn test_toggle_on_checks_whole_subtree_and_persists() {
    let env = tree_env();

    let result = env.run(&[
        "toggle",
        "inbox",
        "--on",
        "--tree",
        "folders.json",
        "--selection",
        "selection.json",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("Checked 'inbox' (+3 -0)"));
    assert!(result.stdout.contains("  + inbox-work"));
    assert!(result.stdout.contains("Selected: 3/7 items"));
    assert_eq!(
        env.read_selection("selection.json"),
        vec!["inbox", "inbox-personal", "inbox-work"]
    );
}

#[test]
fn test_toggle_off_child_keeps_checked_parent() {
    let env = tree_env();
    let base = ["--tree", "folders.json", "--selection", "selection.json"];

    let on = env.run(&[&["toggle", "inbox", "--on"][..], &base[..]].concat());
    assert!(on.success, "stderr:\n{}", on.stderr);

    let off = env.run(&[&["toggle", "inbox-work", "--off"][..], &base[..]].concat());
    assert!(off.success, "stderr:\n{}", off.stderr);
    assert!(off.stdout.contains("  - inbox-work"));

    assert_eq!(
        env.read_selection("selection.json"),
        vec!["inbox", "inbox-personal"]
    );
}

#[test]
fn test_toggle_off_parent_leaves_siblings() {
    let env = tree_env();
    env.write_project_file("selection.json", BARE_SELECTION_JSON);

    let result = env.run(&[
        "toggle",
        "inbox",
        "--off",
        "--tree",
        "folders.json",
        "--selection",
        "selection.json",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(env.read_selection("selection.json"), vec!["sent"]);

    // The bare array is upgraded to a full document
    let doc: serde_json::Value =
        serde_json::from_str(&env.read_project_file("selection.json")).unwrap();
    assert_eq!(doc["version"], 1);
    assert_eq!(doc["source"], "file");
    assert!(doc["tree_digest"].as_str().unwrap().starts_with("sha256:"));
}

#[test]
fn test_toggle_is_idempotent() {
    let env = tree_env();
    let args = [
        "toggle",
        "inbox",
        "--on",
        "--tree",
        "folders.json",
        "--selection",
        "selection.json",
    ];

    assert!(env.run(&args).success);
    let first = env.read_selection("selection.json");

    let again = env.run(&args);
    assert!(again.success);
    assert!(again.stdout.contains("Checked 'inbox': no change"));
    assert_eq!(env.read_selection("selection.json"), first);
}

#[test]
fn test_toggle_dry_run_does_not_write() {
    let env = tree_env();

    let result = env.run(&[
        "toggle",
        "sent",
        "--on",
        "--tree",
        "folders.json",
        "--selection",
        "selection.json",
        "--dry-run",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("  + sent"));
    assert!(result.stdout.contains("Dry run: selection.json not written"));
    assert!(!env.project_path("selection.json").exists());
}

#[test]
fn test_toggle_unknown_node_is_a_warning_and_no_op() {
    let env = tree_env();
    env.write_project_file("selection.json", BARE_SELECTION_JSON);

    let result = env.run(&[
        "toggle",
        "spam",
        "--on",
        "--tree",
        "folders.json",
        "--selection",
        "selection.json",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stderr.contains("unknown node 'spam'"));
    assert!(result.stdout.contains("no change"));
    assert_eq!(env.read_project_file("selection.json"), BARE_SELECTION_JSON);
}

#[test]
fn test_toggle_requires_on_or_off() {
    let env = tree_env();

    let result = env.run(&[
        "toggle",
        "inbox",
        "--tree",
        "folders.json",
        "--selection",
        "selection.json",
    ]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 2);
}

#[test]
fn test_toggle_demo_starts_from_default_selection() {
    let env = TestEnv::new();

    let result = env.run(&[
        "toggle",
        "deleted",
        "--on",
        "--demo",
        "--selection",
        "selection.json",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("Selected: 7/7 items"));
    assert_eq!(env.read_selection("selection.json").len(), 7);
}

#[test]
fn test_toggle_yaml_selection_document() {
    let env = tree_env();

    let result = env.run(&[
        "toggle",
        "archive",
        "--on",
        "--tree",
        "folders.json",
        "--selection",
        "picked.yaml",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let yaml = env.read_project_file("picked.yaml");
    assert!(yaml.contains("version: 1"));
    assert!(yaml.contains("- archive"));
    assert!(!env.project_path("picked.yaml.tmp").exists());
}
