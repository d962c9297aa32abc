//! Selection set and the pure selection operations.
//!
//! Every operation takes the caller's selection by reference and returns a
//! new [`SelectionSet`]; the caller decides whether to commit it. Toggling a
//! node checks or unchecks its whole subtree and never touches ancestors or
//! siblings. There is no partial (tri-state) roll-up.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use super::node::{all_ids, find_node, TreeNode};

/// The set of node ids currently considered checked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet(BTreeSet<String>);

impl SelectionSet {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is checked
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checked ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// A copy of this selection with `ids` added
    pub fn union<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut next = self.0.clone();
        next.extend(ids.into_iter().map(str::to_string));
        Self(next)
    }

    /// A copy of this selection with `ids` removed
    pub fn difference<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut next = self.0.clone();
        for id in ids {
            next.remove(id);
        }
        Self(next)
    }

    /// Ids in `self` that are not in `other`
    pub fn added_since<'a>(&'a self, other: &'a SelectionSet) -> Vec<&'a str> {
        self.0.difference(&other.0).map(String::as_str).collect()
    }
}

impl FromIterator<String> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Whether `node_id` is checked.
///
/// Membership alone decides; `tree` is accepted so hosts can call every
/// operation with the same arguments. Unknown ids are unchecked.
pub fn is_checked(_tree: &[TreeNode], selection: &SelectionSet, node_id: &str) -> bool {
    selection.contains(node_id)
}

/// Check (`checked = true`) or uncheck the node `node_id` and its entire
/// subtree, returning the new selection.
///
/// Ids outside the node's subtree keep their membership. An id that does not
/// occur in `tree` yields a copy of `selection`.
pub fn toggle_node(
    tree: &[TreeNode],
    selection: &SelectionSet,
    node_id: &str,
    checked: bool,
) -> SelectionSet {
    let Some(node) = find_node(tree, node_id) else {
        log::debug!("toggle of unknown node '{}' ignored", node_id);
        return selection.clone();
    };

    let ids = node.subtree_ids();
    log::trace!(
        "toggle '{}' -> {} ({} ids in subtree)",
        node_id,
        if checked { "checked" } else { "unchecked" },
        ids.len()
    );

    if checked {
        selection.union(ids)
    } else {
        selection.difference(ids)
    }
}

/// Every id in the tree
pub fn select_all(tree: &[TreeNode]) -> SelectionSet {
    all_ids(tree).into_iter().collect()
}

/// The empty selection
pub fn select_none() -> SelectionSet {
    SelectionSet::new()
}

/// Flip the membership of every id in the tree.
///
/// Ids in `selection` that the tree does not contain are kept as they are.
pub fn invert(tree: &[TreeNode], selection: &SelectionSet) -> SelectionSet {
    let tree_ids: HashSet<&str> = all_ids(tree).into_iter().collect();
    let kept = selection.iter().filter(|id| !tree_ids.contains(id));
    let flipped = tree_ids
        .iter()
        .copied()
        .filter(|id| !selection.contains(id));
    kept.chain(flipped).collect()
}

/// Drop ids that do not occur in the tree
pub fn prune(tree: &[TreeNode], selection: &SelectionSet) -> SelectionSet {
    let tree_ids: HashSet<&str> = all_ids(tree).into_iter().collect();
    selection.iter().filter(|id| tree_ids.contains(id)).collect()
}

/// Ids in `selection` that do not occur in the tree
pub fn unknown_ids<'a>(tree: &[TreeNode], selection: &'a SelectionSet) -> Vec<&'a str> {
    let tree_ids: HashSet<&str> = all_ids(tree).into_iter().collect();
    selection.iter().filter(|id| !tree_ids.contains(id)).collect()
}

/// Number of tree nodes that are checked
pub fn selected_count(tree: &[TreeNode], selection: &SelectionSet) -> usize {
    all_ids(tree)
        .into_iter()
        .filter(|id| selection.contains(id))
        .count()
}

/// A tree bound to its selection operations.
///
/// Borrows the caller's tree, which it treats as immutable.
#[derive(Debug, Clone, Copy)]
pub struct SelectionTree<'a> {
    roots: &'a [TreeNode],
}

impl<'a> SelectionTree<'a> {
    pub fn new(roots: &'a [TreeNode]) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &'a [TreeNode] {
        self.roots
    }

    pub fn is_checked(&self, selection: &SelectionSet, node_id: &str) -> bool {
        is_checked(self.roots, selection, node_id)
    }

    pub fn toggle(&self, selection: &SelectionSet, node_id: &str, checked: bool) -> SelectionSet {
        toggle_node(self.roots, selection, node_id, checked)
    }

    /// Toggle and hand the new selection to the host callback.
    ///
    /// Returns `None` without calling `on_change` when `node_id` is not in the
    /// tree. Toggles that leave the selection equal still reach the callback.
    pub fn toggle_with<R>(
        &self,
        selection: &SelectionSet,
        node_id: &str,
        checked: bool,
        on_change: impl FnOnce(SelectionSet) -> R,
    ) -> Option<R> {
        find_node(self.roots, node_id)?;
        Some(on_change(self.toggle(selection, node_id, checked)))
    }

    pub fn select_all(&self) -> SelectionSet {
        select_all(self.roots)
    }

    pub fn invert(&self, selection: &SelectionSet) -> SelectionSet {
        invert(self.roots, selection)
    }

    pub fn selected_count(&self, selection: &SelectionSet) -> usize {
        selected_count(self.roots, selection)
    }

    pub fn total_count(&self) -> usize {
        super::node::total_count(self.roots)
    }
}
