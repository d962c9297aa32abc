//! Open/closed state of branch nodes.
//!
//! Pure view state: branches start open, collapsing one never changes the
//! selection, and leaves have no expand affordance.

use std::collections::HashSet;

use super::node::TreeNode;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    collapsed: HashSet<String>,
}

impl ExpansionState {
    /// Every branch open
    pub fn all_open() -> Self {
        Self::default()
    }

    /// Every branch of `roots` closed
    pub fn all_collapsed(roots: &[TreeNode]) -> Self {
        let mut state = Self::default();
        state.collapse_all(roots);
        state
    }

    /// Whether `node` currently shows its children
    pub fn is_expanded(&self, node: &TreeNode) -> bool {
        !node.is_leaf() && !self.collapsed.contains(&node.id)
    }

    pub fn expand(&mut self, id: &str) {
        self.collapsed.remove(id);
    }

    pub fn collapse(&mut self, id: &str) {
        self.collapsed.insert(id.to_string());
    }

    /// Flip one branch; returns the new open state
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.collapsed.remove(id) {
            true
        } else {
            self.collapsed.insert(id.to_string());
            false
        }
    }

    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    pub fn collapse_all(&mut self, roots: &[TreeNode]) {
        for node in roots {
            if !node.is_leaf() {
                self.collapsed.insert(node.id.clone());
                self.collapse_all(&node.children);
            }
        }
    }
}
