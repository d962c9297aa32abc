//! Built-in mailbox folder structure, used by `--demo` and tests.

use crate::error::TreepickResult;
use crate::tree::{SelectionSet, TreeNode};

use super::FolderProvider;

/// Mailbox folders of a typical migration source account
#[derive(Debug, Clone, Copy, Default)]
pub struct MailboxFixture;

impl MailboxFixture {
    pub fn nodes() -> Vec<TreeNode> {
        vec![
            TreeNode::new("inbox", "Inbox")
                .with_child(TreeNode::new("inbox-work", "Work"))
                .with_child(TreeNode::new("inbox-personal", "Personal")),
            TreeNode::new("sent", "Sent Items"),
            TreeNode::new("drafts", "Drafts"),
            TreeNode::new("archive", "Archive"),
            TreeNode::new("deleted", "Deleted Items"),
        ]
    }

    /// Everything except deleted items starts checked
    pub fn default_selection() -> SelectionSet {
        [
            "inbox",
            "inbox-work",
            "inbox-personal",
            "sent",
            "drafts",
            "archive",
        ]
        .into_iter()
        .collect()
    }
}

impl FolderProvider for MailboxFixture {
    fn name(&self) -> &str {
        "mailbox-demo"
    }

    fn load(&self) -> TreepickResult<Vec<TreeNode>> {
        Ok(Self::nodes())
    }
}
