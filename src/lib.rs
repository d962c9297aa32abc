//! treepick - hierarchical checkbox selection
//!
//! A pure selection core over immutable trees of labelled nodes: checking or
//! unchecking a node applies to its whole subtree, never to its ancestors.
//! Around the core sit tree providers, a selection store, a terminal picker
//! and the `treepick` CLI.

pub mod config;
pub mod error;
pub mod provider;
pub mod store;
pub mod tree;
pub mod ui;

// Re-exports for convenience
pub use config::Config;
pub use error::{TreepickError, TreepickResult};
pub use provider::{DirectoryProvider, FileProvider, FolderProvider, MailboxFixture};
pub use store::{tree_digest, SelectionDocument, SelectionStore};
pub use tree::{
    find_node, is_checked, toggle_node, ExpansionState, SelectionSet, SelectionTree, TreeNode,
};
