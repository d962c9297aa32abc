mod common;

use common::*;

#[test]
fn test_show_demo_tree_with_default_selection() {
    let env = TestEnv::new();
    let result = env.run(&["show", "--demo"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let expected_tree = "\
[v] [x] Inbox (2 items)
      [x] Work
      [x] Personal
    [x] Sent Items
    [x] Drafts
    [x] Archive
    [ ] Deleted Items
";
    assert!(
        result.stdout.starts_with(expected_tree),
        "unexpected output:\n{}",
        result.stdout
    );
    assert!(result.stdout.contains("Selected: 6/7 items"));
}

#[test]
fn test_show_collapsed_hides_children_but_not_their_state() {
    let env = TestEnv::new();
    env.write_project_file("folders.json", MAILBOX_TREE_JSON);
    env.write_project_file("selection.json", BARE_SELECTION_JSON);

    let result = env.run(&[
        "show",
        "--tree",
        "folders.json",
        "--selection",
        "selection.json",
        "--collapsed",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("[>] [x] Inbox (2 items)"));
    assert!(!result.stdout.contains("Work"));
    assert!(result.stdout.contains("Selected: 4/7 items"));
}

#[test]
fn test_show_yaml_tree_indents_by_depth() {
    let env = TestEnv::new();
    env.write_project_file("tree.yaml", PROJECT_TREE_YAML);

    let result = env.run(&["show", "--tree", "tree.yaml"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("\n  [v] [ ] ui (1 item)\n"));
    assert!(result.stdout.contains("\n        [ ] render.rs\n"));
    assert!(result.stdout.contains("Selected: 0/5 items"));
}

#[test]
fn test_show_toml_tree() {
    let env = TestEnv::new();
    env.write_project_file("tree.toml", MAILBOX_TREE_TOML);

    let result = env.run(&["show", "--tree", "tree.toml"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("[v] [ ] Inbox (2 items)"));
    assert!(result.stdout.contains("Selected: 0/4 items"));
}

#[test]
fn test_show_directory_tree() {
    let env = TestEnv::new();
    let root = env.project_path("mail");
    std::fs::create_dir_all(root.join("inbox/work")).unwrap();
    std::fs::write(root.join("inbox/work/a.eml"), "").unwrap();
    std::fs::write(root.join("sent.mbox"), "").unwrap();

    let result = env.run(&["show", "--dir", "mail"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("[v] [ ] inbox (2 items)"));
    assert!(result.stdout.contains("        [ ] a.eml"));
    assert!(result.stdout.contains("    [ ] sent.mbox"));
}

#[test]
fn test_show_unicode_when_forced() {
    let env = TestEnv::new();
    let result = env.run_with_env(&["show", "--demo"], &[("TREEPICK_UNICODE", "always")]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("▼ ● Inbox"));
    assert!(result.stdout.contains("  ○ Deleted Items"));
}

#[test]
fn test_show_respects_project_config() {
    let env = TestEnv::new();
    env.write_project_file(
        ".treepick.toml",
        "[picker]\nshow_counts = false\nstart_collapsed = true\nshow_cuonts = true\n",
    );

    let result = env.run(&["show", "--demo"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("[>] [x] Inbox\n"));
    assert!(!result.stdout.contains("items)"));
    assert!(
        result.stderr.contains("unknown config key 'show_cuonts'"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result
        .stderr
        .contains(".treepick.toml:4 (did you mean 'show_counts'?)"));
}

#[test]
fn test_show_explicit_config_must_exist() {
    let env = TestEnv::new();
    let result = env.run(&["show", "--demo", "--config", "missing.toml"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
}

#[test]
fn test_show_unsupported_tree_format() {
    let env = TestEnv::new();
    env.write_project_file("folders.xml", "<folders/>");

    let result = env.run(&["show", "--tree", "folders.xml"]);

    assert!(!result.success);
    assert!(result.stderr.contains("unsupported document format"));
    assert!(result.stderr.contains("Tree documents must end in"));
}

#[test]
fn test_show_warns_about_stale_selection_ids() {
    let env = TestEnv::new();
    env.write_project_file("folders.json", MAILBOX_TREE_JSON);
    env.write_project_file("selection.json", r#"["inbox", "spam"]"#);

    let result = env.run(&[
        "show",
        "--tree",
        "folders.json",
        "--selection",
        "selection.json",
    ]);

    assert!(result.success);
    assert!(result.stderr.contains("1 selected id(s) not in the tree: spam"));
    assert!(result.stdout.contains("Selected: 1/7 items"));
}

#[test]
fn test_show_warns_about_duplicate_ids() {
    let env = TestEnv::new();
    env.write_project_file(
        "dupes.json",
        r#"[{"id": "a", "label": "A", "children": [{"id": "a", "label": "Again"}]}]"#,
    );

    let result = env.run(&["show", "--tree", "dupes.json"]);

    assert!(result.success);
    assert!(result.stderr.contains("duplicate node id 'a'"));
}
