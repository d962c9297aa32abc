//! Pick command handler
//!
//! Runs the interactive picker over the tree and, once confirmed, saves the
//! committed selection.

use std::path::Path;

use anyhow::{bail, Context, Result};

use treepick::store::SelectionStore;
use treepick::tree::ExpansionState;
use treepick::ui::picker::{run_interactive, PickerView, TreePicker};
use treepick::ui::terminal::is_interactive;
use treepick::TreepickError;

use super::{load_selection, load_tree, selection_document, CommandContext};
use crate::cli::SourceArgs;

pub fn cmd_pick(
    ctx: &CommandContext,
    source: &SourceArgs,
    selection_path: &Path,
    yes: bool,
) -> Result<()> {
    if !is_interactive() {
        bail!("pick needs an interactive terminal; use `treepick toggle` in scripts");
    }

    let tree = load_tree(source, ctx)?;
    let initial = load_selection(Some(selection_path), &tree, ctx)?;
    let loaded = initial.clone();

    let expansion = if ctx.config.picker.start_collapsed {
        ExpansionState::all_collapsed(&tree.roots)
    } else {
        ExpansionState::all_open()
    };
    let mut picker = TreePicker::new(&tree.roots, initial).with_expansion(expansion);

    let view = PickerView {
        title: format!("treepick: {} ({})", selection_path.display(), tree.provider),
        glyphs: ctx.glyphs,
        show_counts: ctx.config.picker.show_counts,
        color: ctx.caps.color,
        width: ctx.caps.width,
        height: ctx.caps.height,
    };

    let Some(selection) = run_interactive(&mut picker, &view)? else {
        return Err(TreepickError::Aborted.into());
    };

    if !yes && !ctx.json {
        use dialoguer::{theme::ColorfulTheme, Confirm};
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Save {} selected item(s) to {}?",
                selection.len(),
                selection_path.display()
            ))
            .default(true)
            .interact()?;

        if !confirmed {
            return Err(TreepickError::Aborted.into());
        }
    }

    SelectionStore::new(selection_path)
        .update(|stored| {
            let on_disk = stored.map(|doc| doc.selected);
            if on_disk.as_ref().is_some_and(|on_disk| *on_disk != loaded) {
                ctx.warn("selection changed on disk while picking; replacing it")?;
            }
            Ok::<_, anyhow::Error>((Some(selection_document(&tree, selection.clone())?), ()))
        })
        .with_context(|| format!("failed to save selection {}", selection_path.display()))?;

    if ctx.json {
        ctx.emit_selection(&tree.roots, &selection)?;
        return ctx.complete();
    }

    println!(
        "{} Saved {} selected item(s) to {}",
        ctx.glyphs.success,
        selection.len(),
        selection_path.display()
    );
    Ok(())
}
