//! Toggle command handler
//!
//! Checks or unchecks a node and its whole subtree, then commits the new
//! selection to the selection document. The read and the write happen under
//! the store's lock.

use std::path::Path;

use anyhow::{Context, Result};

use treepick::store::{SelectionDocument, SelectionStore};
use treepick::tree::{find_node, selected_count, toggle_node, total_count, SelectionSet};
use treepick::ui::json::{emit_event, events::ToggleEvent};
use treepick::ui::render::render_status_bar;

use super::{
    load_tree, selection_document, selection_from_document, unknown_node_warning, CommandContext,
};
use crate::cli::SourceArgs;

pub fn cmd_toggle(
    ctx: &CommandContext,
    source: &SourceArgs,
    node: &str,
    checked: bool,
    selection_path: &Path,
    dry_run: bool,
) -> Result<()> {
    let tree = load_tree(source, ctx)?;
    let store = SelectionStore::new(selection_path);

    let known = find_node(&tree.roots, node).is_some();
    if !known {
        ctx.warn(unknown_node_warning(node))?;
    }

    let apply = |stored: Option<SelectionDocument>| -> Result<(SelectionSet, SelectionSet)> {
        let current = selection_from_document(stored, &tree, ctx)?;
        let next = toggle_node(&tree.roots, &current, node, checked);
        Ok((current, next))
    };

    let (current, next) = if dry_run {
        let stored = store
            .load()
            .with_context(|| format!("failed to read selection {}", selection_path.display()))?;
        apply(stored)?
    } else {
        store
            .update(|stored| {
                let (current, next) = apply(stored)?;
                let doc = if next != current {
                    Some(selection_document(&tree, next.clone())?)
                } else {
                    None
                };
                Ok::<_, anyhow::Error>((doc, (current, next)))
            })
            .with_context(|| format!("failed to save selection {}", selection_path.display()))?
    };

    let added = next.added_since(&current);
    let removed = current.added_since(&next);
    let changed = next != current;

    if ctx.json {
        emit_event(
            &ToggleEvent::new(ctx.command, node, checked, known)
                .with_changes(added, removed)
                .with_dry_run(dry_run),
        )?;
        ctx.emit_selection(&tree.roots, &next)?;
        return ctx.complete();
    }

    let verb = if checked { "Checked" } else { "Unchecked" };
    if !changed {
        println!("{} '{}': no change", verb, node);
    } else {
        println!(
            "{} {} '{}' (+{} -{})",
            ctx.glyphs.success,
            verb,
            node,
            added.len(),
            removed.len()
        );
        for id in &added {
            println!("  + {}", id);
        }
        for id in &removed {
            println!("  - {}", id);
        }
    }
    if dry_run {
        println!("Dry run: {} not written", selection_path.display());
    }
    println!(
        "{}",
        render_status_bar(
            selected_count(&tree.roots, &next),
            total_count(&tree.roots),
            &ctx.glyphs,
        )
    );
    Ok(())
}
