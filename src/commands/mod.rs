//! Command handlers for the treepick CLI
//!
//! Each command loads a tree through a provider, reads the committed
//! selection from its document, runs one or more core operations and reports
//! the result as text or NDJSON.

pub mod check;
pub mod ids;
pub mod pick;
pub mod show;
pub mod toggle;

use std::cell::Cell;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use treepick::config::Config;
use treepick::store::{SelectionDocument, SelectionStore};
use treepick::tree::{duplicate_ids, selected_count, total_count, unknown_ids, SelectionSet, TreeNode};
use treepick::ui::json::{emit_event, events::*};
use treepick::ui::terminal::TerminalCapabilities;
use treepick::ui::theme::Glyphs;
use treepick::MailboxFixture;

use crate::cli::SourceArgs;

/// Shared state for one command invocation
pub struct CommandContext {
    pub command: &'static str,
    pub json: bool,
    pub config: Config,
    pub caps: TerminalCapabilities,
    pub glyphs: Glyphs,
    started: Instant,
    /// Held back until the start event has gone out
    deferred_warnings: Cell<Vec<String>>,
}

impl CommandContext {
    pub fn new(command: &'static str, json: bool, config: Config) -> Self {
        let caps = TerminalCapabilities::detect();
        let glyphs = Glyphs::new(config.picker.unicode.resolve(caps.unicode));
        Self {
            command,
            json,
            config,
            caps,
            glyphs,
            started: Instant::now(),
            deferred_warnings: Cell::new(Vec::new()),
        }
    }

    /// Queue warnings to report right after the start event.
    pub fn defer_warnings(&self, warnings: impl IntoIterator<Item = String>) {
        let mut pending = self.deferred_warnings.take();
        pending.extend(warnings);
        self.deferred_warnings.set(pending);
    }

    pub fn start(&self, source: &str) -> Result<()> {
        if self.json {
            emit_event(&StartEvent::new(self.command).with_source(source))?;
        }
        self.flush_warnings()
    }

    /// Report queued warnings; commands that fail before starting still
    /// surface them.
    pub fn flush_warnings(&self) -> Result<()> {
        for warning in self.deferred_warnings.take() {
            self.warn(warning)?;
        }
        Ok(())
    }

    pub fn complete(&self) -> Result<()> {
        if self.json {
            let elapsed = self.started.elapsed().as_millis() as u64;
            emit_event(&CompleteEvent::success(self.command).with_duration(elapsed))?;
        }
        Ok(())
    }

    /// Report a non-fatal problem
    pub fn warn(&self, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        log::debug!("warning emitted: {}", message);
        if self.json {
            emit_event(&WarningEvent::new(self.command, message))?;
        } else {
            eprintln!("{} {}", self.glyphs.warning, message);
        }
        Ok(())
    }

    pub fn emit_selection(&self, roots: &[TreeNode], selection: &SelectionSet) -> Result<()> {
        emit_event(&SelectionEvent::new(
            self.command,
            selection.iter().collect(),
            selected_count(roots, selection),
            total_count(roots),
        ))?;
        Ok(())
    }
}

/// A tree loaded from the source the user named
pub struct LoadedTree {
    pub provider: String,
    pub roots: Vec<TreeNode>,
    pub demo: bool,
}

pub fn load_tree(source: &SourceArgs, ctx: &CommandContext) -> Result<LoadedTree> {
    let provider = source.provider(&ctx.config);
    ctx.start(provider.name())?;
    let roots = provider
        .load()
        .with_context(|| format!("failed to load tree from {} provider", provider.name()))?;

    for id in duplicate_ids(&roots) {
        ctx.warn(format!(
            "duplicate node id '{}': only the first occurrence can be toggled",
            id
        ))?;
    }

    Ok(LoadedTree {
        provider: provider.name().to_string(),
        roots,
        demo: source.demo,
    })
}

/// Read the committed selection for `tree`.
///
/// A missing document starts empty, except for the demo tree which starts
/// with its default selection.
pub fn load_selection(
    path: Option<&Path>,
    tree: &LoadedTree,
    ctx: &CommandContext,
) -> Result<SelectionSet> {
    let doc = match path {
        Some(path) => SelectionStore::new(path)
            .load()
            .with_context(|| format!("failed to read selection {}", path.display()))?,
        None => None,
    };
    selection_from_document(doc, tree, ctx)
}

/// The selection a stored document holds for `tree`, warning when it was
/// saved against another tree or names ids the tree lacks.
pub fn selection_from_document(
    doc: Option<SelectionDocument>,
    tree: &LoadedTree,
    ctx: &CommandContext,
) -> Result<SelectionSet> {
    let Some(doc) = doc else {
        return Ok(if tree.demo {
            MailboxFixture::default_selection()
        } else {
            SelectionSet::new()
        });
    };

    if !doc.matches_tree(&tree.roots)? {
        ctx.warn("selection was saved against a different tree")?;
    }
    let unknown = unknown_ids(&tree.roots, &doc.selected);
    if !unknown.is_empty() {
        ctx.warn(format!(
            "{} selected id(s) not in the tree: {}",
            unknown.len(),
            unknown.join(", ")
        ))?;
    }

    Ok(doc.selected)
}

/// The document that commits `selection` for `tree`.
pub fn selection_document(tree: &LoadedTree, selection: SelectionSet) -> Result<SelectionDocument> {
    Ok(SelectionDocument::new(selection)
        .with_source(tree.provider.as_str())
        .with_tree(&tree.roots)?)
}

pub fn unknown_node_warning(node: &str) -> String {
    format!("unknown node '{}'", node)
}
