//! Ids command handler
//!
//! Prints the descendant-inclusive id set of a node, in preorder: exactly the
//! ids a toggle of that node would add or remove.

use anyhow::Result;

use treepick::tree::find_node;
use treepick::ui::json::{emit_event, events::IdsEvent};

use super::{load_tree, unknown_node_warning, CommandContext};
use crate::cli::SourceArgs;

pub fn cmd_ids(ctx: &CommandContext, source: &SourceArgs, node: &str) -> Result<()> {
    let tree = load_tree(source, ctx)?;

    let ids = find_node(&tree.roots, node).map(|found| found.subtree_ids());
    if ids.is_none() {
        ctx.warn(unknown_node_warning(node))?;
    }

    if ctx.json {
        emit_event(&IdsEvent::new(ctx.command, node, ids))?;
        return ctx.complete();
    }

    for id in ids.unwrap_or_default() {
        println!("{}", id);
    }
    Ok(())
}
