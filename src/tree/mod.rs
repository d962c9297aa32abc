//! Hierarchical selection tree
//!
//! # Module Structure
//!
//! - `node` - TreeNode data structure and traversal
//! - `selection` - SelectionSet and the pure toggle operations
//! - `expansion` - per-branch open/closed view state

mod expansion;
mod node;
mod selection;

pub use expansion::ExpansionState;
pub use node::{all_ids, duplicate_ids, find_node, total_count, TreeNode};
pub use selection::{
    invert, is_checked, prune, select_all, select_none, selected_count, toggle_node, unknown_ids,
    SelectionSet, SelectionTree,
};
