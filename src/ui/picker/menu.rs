//! TreePicker state management and action handling.
//!
//! The picker is a host of the selection core: it borrows the tree, owns the
//! committed selection, and replaces it with whatever the core returns, unless
//! the `on_change` hook vetoes the change.

use crate::tree::{
    invert, select_all, select_none, selected_count, toggle_node, total_count, ExpansionState,
    SelectionSet, TreeNode,
};
use crate::ui::render::{render_help_bar, render_row, render_status_bar, visible_rows, VisibleRow};
use crate::ui::theme::Glyphs;

/// Picker action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Check or uncheck the node under the cursor and its subtree
    Toggle,
    Expand,
    Collapse,
    ExpandAll,
    CollapseAll,
    SelectAll,
    SelectNone,
    Invert,
    /// Confirm selection
    Confirm,
    /// Quit without confirming
    Quit,
}

type ChangeHook<'a> = Box<dyn FnMut(&SelectionSet) -> bool + 'a>;

/// Interactive tree picker
pub struct TreePicker<'a> {
    roots: &'a [TreeNode],
    selection: SelectionSet,
    expansion: ExpansionState,
    /// Current cursor position in the visible rows
    pub cursor: usize,
    rows: Vec<VisibleRow>,
    on_change: Option<ChangeHook<'a>>,
}

impl<'a> TreePicker<'a> {
    pub fn new(roots: &'a [TreeNode], selection: SelectionSet) -> Self {
        let mut picker = Self {
            roots,
            selection,
            expansion: ExpansionState::all_open(),
            cursor: 0,
            rows: Vec::new(),
            on_change: None,
        };
        picker.rebuild_rows();
        picker
    }

    pub fn with_expansion(mut self, expansion: ExpansionState) -> Self {
        self.expansion = expansion;
        self.rebuild_rows();
        self
    }

    /// Hook called with every candidate selection; returning false discards it.
    pub fn with_on_change(mut self, hook: impl FnMut(&SelectionSet) -> bool + 'a) -> Self {
        self.on_change = Some(Box::new(hook));
        self
    }

    /// Rebuild the visible rows, keeping the cursor on the same node if it is
    /// still visible.
    pub fn rebuild_rows(&mut self) {
        let current = self.rows.get(self.cursor).map(|row| row.id.clone());
        self.rows = visible_rows(self.roots, &self.selection, &self.expansion);

        if let Some(pos) = current.and_then(|id| self.rows.iter().position(|r| r.id == id)) {
            self.cursor = pos;
        } else if !self.rows.is_empty() && self.cursor >= self.rows.len() {
            self.cursor = self.rows.len() - 1;
        }
    }

    pub fn rows(&self) -> &[VisibleRow] {
        &self.rows
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn current_row(&self) -> Option<&VisibleRow> {
        self.rows.get(self.cursor)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn into_selection(self) -> SelectionSet {
        self.selection
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Handle an action; returns true when the picker should close
    pub fn handle_action(&mut self, action: PickerAction) -> bool {
        match action {
            PickerAction::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                false
            }
            PickerAction::Down => {
                if self.cursor + 1 < self.rows.len() {
                    self.cursor += 1;
                }
                false
            }
            PickerAction::Toggle => {
                if let Some(row) = self.current_row() {
                    let next = toggle_node(self.roots, &self.selection, &row.id, !row.checked);
                    self.commit(next);
                }
                false
            }
            PickerAction::Expand => {
                if let Some(row) = self.current_row() {
                    if row.has_children {
                        let id = row.id.clone();
                        self.expansion.expand(&id);
                        self.rebuild_rows();
                    }
                }
                false
            }
            PickerAction::Collapse => {
                if let Some(row) = self.current_row() {
                    if row.has_children {
                        let id = row.id.clone();
                        self.expansion.collapse(&id);
                        self.rebuild_rows();
                    }
                }
                false
            }
            PickerAction::ExpandAll => {
                self.expansion.expand_all();
                self.rebuild_rows();
                false
            }
            PickerAction::CollapseAll => {
                self.expansion.collapse_all(self.roots);
                self.rebuild_rows();
                false
            }
            PickerAction::SelectAll => {
                self.commit(select_all(self.roots));
                false
            }
            PickerAction::SelectNone => {
                self.commit(select_none());
                false
            }
            PickerAction::Invert => {
                self.commit(invert(self.roots, &self.selection));
                false
            }
            PickerAction::Confirm => true,
            PickerAction::Quit => true,
        }
    }

    fn commit(&mut self, next: SelectionSet) {
        let accepted = match self.on_change.as_mut() {
            Some(hook) => hook(&next),
            None => true,
        };
        if accepted {
            self.selection = next;
            self.rebuild_rows();
        } else {
            log::debug!("selection change vetoed by host");
        }
    }

    pub fn selected_count(&self) -> usize {
        selected_count(self.roots, &self.selection)
    }

    pub fn total_count(&self) -> usize {
        total_count(self.roots)
    }

    /// Render the visible rows with a cursor column
    pub fn render(&self, glyphs: &Glyphs, show_counts: bool) -> String {
        let mut out = String::new();
        for (i, row) in self.rows.iter().enumerate() {
            let cursor = if i == self.cursor { glyphs.cursor } else { " " };
            out.push_str(cursor);
            out.push(' ');
            out.push_str(&render_row(row, glyphs, show_counts));
            out.push('\n');
        }
        out
    }

    pub fn render_status_bar(&self, glyphs: &Glyphs) -> String {
        render_status_bar(self.selected_count(), self.total_count(), glyphs)
    }

    pub fn render_help_bar(&self) -> String {
        render_help_bar()
    }
}
