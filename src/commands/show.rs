//! Show command handler

use std::path::Path;

use anyhow::Result;

use treepick::tree::{selected_count, total_count, ExpansionState};
use treepick::ui::render::{render_status_bar, render_tree};

use super::{load_selection, load_tree, CommandContext};
use crate::cli::SourceArgs;

pub fn cmd_show(
    ctx: &CommandContext,
    source: &SourceArgs,
    selection: Option<&Path>,
    collapsed: bool,
) -> Result<()> {
    let tree = load_tree(source, ctx)?;
    let selection = load_selection(selection, &tree, ctx)?;

    if ctx.json {
        ctx.emit_selection(&tree.roots, &selection)?;
        return ctx.complete();
    }

    let expansion = if collapsed || ctx.config.picker.start_collapsed {
        ExpansionState::all_collapsed(&tree.roots)
    } else {
        ExpansionState::all_open()
    };

    print!(
        "{}",
        render_tree(
            &tree.roots,
            &selection,
            &expansion,
            &ctx.glyphs,
            ctx.config.picker.show_counts,
        )
    );
    println!();
    println!(
        "{}",
        render_status_bar(
            selected_count(&tree.roots, &selection),
            total_count(&tree.roots),
            &ctx.glyphs,
        )
    );
    Ok(())
}
