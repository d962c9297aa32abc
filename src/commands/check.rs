//! Check command handler

use std::path::Path;

use anyhow::Result;

use treepick::tree::{find_node, SelectionTree};
use treepick::ui::json::{emit_event, events::CheckEvent};

use super::{load_selection, load_tree, unknown_node_warning, CommandContext};
use crate::cli::SourceArgs;

pub fn cmd_check(
    ctx: &CommandContext,
    source: &SourceArgs,
    node: &str,
    selection: &Path,
) -> Result<()> {
    let tree = load_tree(source, ctx)?;
    let selection = load_selection(Some(selection), &tree, ctx)?;

    let known = find_node(&tree.roots, node).is_some();
    if !known {
        ctx.warn(unknown_node_warning(node))?;
    }
    let checked = SelectionTree::new(&tree.roots).is_checked(&selection, node);

    if ctx.json {
        emit_event(&CheckEvent::new(ctx.command, node, known, checked))?;
        return ctx.complete();
    }

    let state = if checked { "checked" } else { "not checked" };
    println!("{} {}: {}", ctx.glyphs.checkbox(checked), node, state);
    Ok(())
}
