//! Generators for trees with unique ids and selections over them.

use proptest::prelude::*;

use treepick::tree::{all_ids, SelectionSet, TreeNode};

/// Shape of a tree before ids are assigned
#[derive(Debug, Clone)]
pub struct Shape(pub Vec<Shape>);

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = Just(Shape(Vec::new()));
    leaf.prop_recursive(4, 32, 4, |inner| {
        proptest::collection::vec(inner, 0..4).prop_map(Shape)
    })
}

fn build(shapes: &[Shape], next: &mut usize) -> Vec<TreeNode> {
    shapes
        .iter()
        .map(|s| {
            let id = format!("n{}", *next);
            *next += 1;
            let children = build(&s.0, next);
            TreeNode::new(id.clone(), id.to_uppercase()).with_children(children)
        })
        .collect()
}

/// A forest of 0..5 roots, with ids `n0`, `n1`, ... in preorder
pub fn tree() -> impl Strategy<Value = Vec<TreeNode>> {
    proptest::collection::vec(shape(), 0..5).prop_map(|roots| build(&roots, &mut 0))
}

/// A tree with a random subset of its ids selected, plus some ids that are
/// not in the tree at all
pub fn tree_and_selection() -> impl Strategy<Value = (Vec<TreeNode>, SelectionSet)> {
    tree().prop_flat_map(|roots| {
        let count = all_ids(&roots).len();
        (
            Just(roots),
            proptest::collection::vec(any::<bool>(), count),
            proptest::collection::vec("x[0-9]{1,3}", 0..3),
        )
            .prop_map(|(roots, mask, foreign)| {
                let mut ids: Vec<String> = all_ids(&roots)
                    .into_iter()
                    .zip(mask)
                    .filter(|(_, keep)| *keep)
                    .map(|(id, _)| id.to_string())
                    .collect();
                ids.extend(foreign);
                let selection = ids.into_iter().collect();
                (roots, selection)
            })
    })
}

/// A tree, a selection and one id of the tree to act on
pub fn tree_selection_and_node() -> impl Strategy<Value = (Vec<TreeNode>, SelectionSet, String)> {
    tree_and_selection()
        .prop_filter("tree must have nodes", |(roots, _)| !roots.is_empty())
        .prop_flat_map(|(roots, selection)| {
            let count = all_ids(&roots).len();
            (Just(roots), Just(selection), 0..count)
        })
        .prop_map(|(roots, selection, idx)| {
            let id = all_ids(&roots)[idx].to_string();
            (roots, selection, id)
        })
}
