//! Property tests for the selection core.

use proptest::prelude::*;

use treepick::tree::{
    all_ids, find_node, invert, is_checked, prune, select_all, selected_count, toggle_node,
    total_count, SelectionSet,
};

use crate::strategies::{tree, tree_and_selection, tree_selection_and_node};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: checking a node from nothing selects exactly its subtree.
    #[test]
    fn property_check_from_empty_selects_subtree(
        (roots, _selection, id) in tree_selection_and_node()
    ) {
        let next = toggle_node(&roots, &SelectionSet::new(), &id, true);
        let subtree: SelectionSet = find_node(&roots, &id).unwrap().subtree_ids().into_iter().collect();
        prop_assert_eq!(next, subtree);
    }

    /// PROPERTY: unchecking a node from everything removes exactly its subtree.
    #[test]
    fn property_uncheck_from_all_removes_only_subtree(
        (roots, _selection, id) in tree_selection_and_node()
    ) {
        let all = select_all(&roots);
        let next = toggle_node(&roots, &all, &id, false);
        let subtree = find_node(&roots, &id).unwrap().subtree_ids();

        prop_assert_eq!(next.len(), all.len() - subtree.len());
        for other in all_ids(&roots) {
            prop_assert_eq!(next.contains(other), !subtree.contains(&other));
        }
    }

    /// PROPERTY: toggling twice with the same state equals toggling once.
    #[test]
    fn property_toggle_is_idempotent(
        (roots, selection, id) in tree_selection_and_node(),
        checked in any::<bool>()
    ) {
        let once = toggle_node(&roots, &selection, &id, checked);
        let twice = toggle_node(&roots, &once, &id, checked);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: a toggle never changes ids outside the node's subtree,
    /// ancestors included.
    #[test]
    fn property_toggle_leaves_outside_ids_alone(
        (roots, selection, id) in tree_selection_and_node(),
        checked in any::<bool>()
    ) {
        let next = toggle_node(&roots, &selection, &id, checked);
        let subtree = find_node(&roots, &id).unwrap().subtree_ids();

        for other in all_ids(&roots) {
            if subtree.contains(&other) {
                prop_assert_eq!(next.contains(other), checked);
            } else {
                prop_assert_eq!(next.contains(other), selection.contains(other));
            }
        }
        // Ids that are not in the tree survive every toggle
        for foreign in selection.iter().filter(|s| s.starts_with('x')) {
            prop_assert!(next.contains(foreign));
        }
    }

    /// PROPERTY: toggling an id that is not in the tree returns an equal set.
    #[test]
    fn property_unknown_id_is_a_no_op(
        (roots, selection) in tree_and_selection(),
        checked in any::<bool>()
    ) {
        let next = toggle_node(&roots, &selection, "not-in-any-tree", checked);
        prop_assert_eq!(next, selection);
    }

    /// PROPERTY: `is_checked` is plain membership.
    #[test]
    fn property_is_checked_is_membership(
        (roots, selection, id) in tree_selection_and_node()
    ) {
        prop_assert_eq!(is_checked(&roots, &selection, &id), selection.contains(&id));
    }

    /// PROPERTY: inverting twice restores the selection over tree ids.
    #[test]
    fn property_invert_twice_is_identity_on_tree(
        (roots, selection) in tree_and_selection()
    ) {
        let back = invert(&roots, &invert(&roots, &selection));
        prop_assert_eq!(prune(&roots, &back), prune(&roots, &selection));
    }

    /// PROPERTY: a selection and its inverse partition the tree.
    #[test]
    fn property_invert_partitions_tree(
        (roots, selection) in tree_and_selection()
    ) {
        let inverse = invert(&roots, &selection);
        prop_assert_eq!(
            selected_count(&roots, &selection) + selected_count(&roots, &inverse),
            total_count(&roots)
        );
    }

    /// PROPERTY: select_all covers every node exactly once.
    #[test]
    fn property_select_all_counts_every_node(roots in tree()) {
        let all = select_all(&roots);
        prop_assert_eq!(all.len(), total_count(&roots));
        prop_assert_eq!(selected_count(&roots, &all), total_count(&roots));
    }
}
