//! Tree providers
//!
//! Hosts never hard-code their trees; they ask a [`FolderProvider`] for one.
//! Providers are read-only: the selection core treats whatever they return
//! as immutable.

mod directory;
mod file;
mod fixture;

pub use directory::{DirectoryOptions, DirectoryProvider};
pub use file::{parse_tree_document, DocumentFormat, FileProvider, TreeDocument};
pub use fixture::MailboxFixture;

use crate::error::TreepickResult;
use crate::tree::TreeNode;

/// Source of a selection tree
pub trait FolderProvider {
    /// Short name used in logs and selection documents
    fn name(&self) -> &str;

    /// Load the tree roots
    fn load(&self) -> TreepickResult<Vec<TreeNode>>;
}

impl<P: FolderProvider + ?Sized> FolderProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self) -> TreepickResult<Vec<TreeNode>> {
        (**self).load()
    }
}
