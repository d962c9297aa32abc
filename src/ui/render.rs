//! Rendering of selection trees to plain strings.
//!
//! Each visible node becomes one row: indentation proportional to depth, an
//! expand/collapse control for branches (a same-width spacer for leaves, so
//! checkbox columns line up across depths), the checkbox, and the label.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tree::{ExpansionState, SelectionSet, TreeNode};

use super::theme::Glyphs;

/// A tree node as it appears on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    pub id: String,
    pub label: String,
    /// Depth level (0 = root)
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
    pub checked: bool,
    pub descendant_count: usize,
}

/// Flatten the visible part of the tree in preorder.
///
/// Children of collapsed branches are skipped.
pub fn visible_rows(
    roots: &[TreeNode],
    selection: &SelectionSet,
    expansion: &ExpansionState,
) -> Vec<VisibleRow> {
    let mut rows = Vec::new();
    push_rows(roots, 0, selection, expansion, &mut rows);
    rows
}

fn push_rows(
    nodes: &[TreeNode],
    depth: usize,
    selection: &SelectionSet,
    expansion: &ExpansionState,
    rows: &mut Vec<VisibleRow>,
) {
    for node in nodes {
        let expanded = expansion.is_expanded(node);
        rows.push(VisibleRow {
            id: node.id.clone(),
            label: node.label.clone(),
            depth,
            has_children: !node.is_leaf(),
            expanded,
            checked: selection.contains(&node.id),
            descendant_count: node.descendant_count(),
        });
        if expanded {
            push_rows(&node.children, depth + 1, selection, expansion, rows);
        }
    }
}

/// Render a single row, without the cursor column
pub fn render_row(row: &VisibleRow, glyphs: &Glyphs, show_counts: bool) -> String {
    let indent = "  ".repeat(row.depth);

    let control = if !row.has_children {
        glyphs.spacer
    } else if row.expanded {
        glyphs.expanded
    } else {
        glyphs.collapsed
    };

    let count_suffix = if row.has_children && show_counts {
        format!(" ({})", items(row.descendant_count))
    } else {
        String::new()
    };

    format!(
        "{}{} {} {}{}",
        indent,
        control,
        glyphs.checkbox(row.checked),
        row.label,
        count_suffix
    )
}

/// Render every visible row of the tree, one per line
pub fn render_tree(
    roots: &[TreeNode],
    selection: &SelectionSet,
    expansion: &ExpansionState,
    glyphs: &Glyphs,
    show_counts: bool,
) -> String {
    let mut out = String::new();
    for row in visible_rows(roots, selection, expansion) {
        out.push_str(&render_row(&row, glyphs, show_counts));
        out.push('\n');
    }
    out
}

/// Render the status bar showing selection counts
pub fn render_status_bar(selected: usize, total: usize, glyphs: &Glyphs) -> String {
    format!(
        "Selected: {}/{}\n\n{} = checked    {} = not checked",
        selected,
        items(total),
        glyphs.checked,
        glyphs.unchecked
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar() -> String {
    String::from(
        "[a] All    [n] None    [i] Invert    [e] Expand all    [c] Collapse all\n\
         [Enter] Confirm    [q] Quit    (↑↓ navigate, Space toggle, →← expand/collapse)",
    )
}

/// Cut `line` to at most `width` display columns, marking the cut with `…`
pub fn truncate_to_width(line: &str, width: usize) -> String {
    if line.width() <= width {
        return line.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn items(n: usize) -> String {
    if n == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", n)
    }
}
