//! Property tests for the tree picker.

use proptest::prelude::*;

use treepick::tree::toggle_node;
use treepick::ui::picker::{PickerAction, TreePicker};

use crate::strategies::tree_and_selection;

fn action() -> impl Strategy<Value = PickerAction> {
    prop_oneof![
        Just(PickerAction::Up),
        Just(PickerAction::Down),
        Just(PickerAction::Toggle),
        Just(PickerAction::Expand),
        Just(PickerAction::Collapse),
        Just(PickerAction::ExpandAll),
        Just(PickerAction::CollapseAll),
        Just(PickerAction::SelectAll),
        Just(PickerAction::SelectNone),
        Just(PickerAction::Invert),
    ]
}

fn navigation() -> impl Strategy<Value = PickerAction> {
    prop_oneof![
        Just(PickerAction::Up),
        Just(PickerAction::Down),
        Just(PickerAction::Expand),
        Just(PickerAction::Collapse),
        Just(PickerAction::ExpandAll),
        Just(PickerAction::CollapseAll),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the cursor always points at a visible row.
    #[test]
    fn property_cursor_stays_in_range(
        (roots, selection) in tree_and_selection(),
        actions in proptest::collection::vec(action(), 0..40)
    ) {
        let mut picker = TreePicker::new(&roots, selection);
        for action in actions {
            picker.handle_action(action);
            if picker.rows().is_empty() {
                prop_assert_eq!(picker.cursor_position(), 0);
            } else {
                prop_assert!(picker.cursor_position() < picker.rows().len());
            }
        }
    }

    /// PROPERTY: navigating and folding never changes the selection.
    #[test]
    fn property_navigation_keeps_selection(
        (roots, selection) in tree_and_selection(),
        actions in proptest::collection::vec(navigation(), 0..40)
    ) {
        let mut picker = TreePicker::new(&roots, selection.clone());
        for action in actions {
            picker.handle_action(action);
        }
        prop_assert_eq!(picker.selection(), &selection);
    }

    /// PROPERTY: a picker toggle commits exactly what the core returns.
    #[test]
    fn property_toggle_commits_core_result(
        (roots, selection) in tree_and_selection(),
        moves in 0usize..20
    ) {
        let mut picker = TreePicker::new(&roots, selection.clone());
        for _ in 0..moves {
            picker.handle_action(PickerAction::Down);
        }

        let Some(row) = picker.current_row().cloned() else {
            return Ok(());
        };
        picker.handle_action(PickerAction::Toggle);

        let expected = toggle_node(&roots, &selection, &row.id, !row.checked);
        prop_assert_eq!(picker.selection(), &expected);
    }
}
