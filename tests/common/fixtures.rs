//! Test fixtures - tree and selection documents.

/// Mailbox folders as a bare JSON array, using `name` for labels
pub const MAILBOX_TREE_JSON: &str = r#"[
  {
    "id": "inbox",
    "name": "Inbox",
    "children": [
      { "id": "inbox-work", "name": "Work" },
      { "id": "inbox-personal", "name": "Personal" }
    ]
  },
  { "id": "sent", "name": "Sent Items" },
  { "id": "drafts", "name": "Drafts" },
  { "id": "archive", "name": "Archive" },
  { "id": "deleted", "name": "Deleted Items" }
]
"#;

/// A three-level tree under a `nodes` table
pub const PROJECT_TREE_YAML: &str = r#"nodes:
  - id: src
    label: src
    children:
      - id: src/ui
        label: ui
        children:
          - id: src/ui/render.rs
            label: render.rs
      - id: src/lib.rs
        label: lib.rs
  - id: README.md
    label: README.md
"#;

/// The same mailbox tree as TOML
pub const MAILBOX_TREE_TOML: &str = r#"
[[nodes]]
id = "inbox"
label = "Inbox"

[[nodes.children]]
id = "inbox-work"
label = "Work"

[[nodes.children]]
id = "inbox-personal"
label = "Personal"

[[nodes]]
id = "sent"
label = "Sent Items"
"#;

/// A legacy selection: a bare array of ids
pub const BARE_SELECTION_JSON: &str = r#"["inbox", "inbox-work", "inbox-personal", "sent"]"#;
