//! Tree node data structure and traversal helpers.
//!
//! A tree is an ordered slice of root nodes. Node ids are expected to be
//! unique across the whole tree; lookups walk depth-first in preorder and
//! take the first match, so duplicate ids never break a traversal.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

/// A node in a selection tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Identifier, unique across the whole tree
    pub id: String,
    /// Display label
    #[serde(alias = "name")]
    pub label: String,
    /// Child nodes (empty for leaf nodes)
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<TreeNode>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<TreeNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TreeNode>>::deserialize(deserializer)?.unwrap_or_default())
}

impl TreeNode {
    /// Create a leaf node
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Builder-style variant of [`TreeNode::add_child`]
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Replace the children of this node
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// Add a child node
    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Ids of this node and every node below it, in preorder.
    pub fn subtree_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        collect_ids(self, &mut ids);
        ids
    }

    /// Number of nodes in this subtree, including this node
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// Number of strict descendants
    pub fn descendant_count(&self) -> usize {
        self.node_count() - 1
    }
}

fn collect_ids<'a>(node: &'a TreeNode, out: &mut Vec<&'a str>) {
    out.push(node.id.as_str());
    for child in &node.children {
        collect_ids(child, out);
    }
}

/// Find a node by id: roots in order, depth-first preorder, first match wins.
pub fn find_node<'a>(roots: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    for node in roots {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Every id in the tree, in preorder.
pub fn all_ids(roots: &[TreeNode]) -> Vec<&str> {
    let mut ids = Vec::new();
    for root in roots {
        collect_ids(root, &mut ids);
    }
    ids
}

/// Total number of nodes in the tree
pub fn total_count(roots: &[TreeNode]) -> usize {
    roots.iter().map(TreeNode::node_count).sum()
}

/// Ids that occur more than once, in the order their second occurrence is met.
pub fn duplicate_ids(roots: &[TreeNode]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for id in all_ids(roots) {
        if !seen.insert(id) && !duplicates.iter().any(|d: &String| d == id) {
            duplicates.push(id.to_string());
        }
    }
    duplicates
}
