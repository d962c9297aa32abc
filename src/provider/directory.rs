//! Directory listing provider.
//!
//! Node ids are root-relative paths joined with `/`, labels are the entry
//! names. Entries are sorted by name within each directory.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{TreepickError, TreepickResult};
use crate::tree::TreeNode;

use super::FolderProvider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryOptions {
    pub include_hidden: bool,
    pub respect_gitignore: bool,
    pub max_depth: Option<usize>,
    pub dirs_only: bool,
}

impl Default for DirectoryOptions {
    fn default() -> Self {
        Self {
            include_hidden: false,
            respect_gitignore: true,
            max_depth: None,
            dirs_only: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    root: PathBuf,
    options: DirectoryOptions,
}

impl DirectoryProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            options: DirectoryOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DirectoryOptions) -> Self {
        self.options = options;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FolderProvider for DirectoryProvider {
    fn name(&self) -> &str {
        "directory"
    }

    fn load(&self) -> TreepickResult<Vec<TreeNode>> {
        if !self.root.is_dir() {
            return Err(TreepickError::NotADirectory {
                path: self.root.clone(),
            });
        }

        let opts = &self.options;
        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(!opts.include_hidden)
            .git_ignore(opts.respect_gitignore)
            .git_exclude(opts.respect_gitignore)
            .git_global(false)
            .ignore(opts.respect_gitignore)
            .parents(false)
            .require_git(false)
            .max_depth(opts.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b));

        let mut roots = Vec::new();
        let mut entries = 0usize;
        for entry in builder.build() {
            let entry = entry?;
            if entry.depth() == 0 {
                continue;
            }
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if opts.dirs_only && !is_dir {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let components: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            insert_path(&mut roots, &components, "");
            entries += 1;
        }

        log::debug!(
            "walked {} entries under {}",
            entries,
            self.root.display()
        );
        Ok(roots)
    }
}

fn insert_path(nodes: &mut Vec<TreeNode>, components: &[String], prefix: &str) {
    let Some((name, rest)) = components.split_first() else {
        return;
    };
    let id = if prefix.is_empty() {
        name.clone()
    } else {
        format!("{}/{}", prefix, name)
    };

    // The walk is sorted depth-first, so an existing parent is always the
    // most recent node at its level.
    if nodes.last().map_or(true, |last| last.id != id) {
        nodes.push(TreeNode::new(id.clone(), name.clone()));
    }
    if let Some(node) = nodes.last_mut() {
        insert_path(&mut node.children, rest, &id);
    }
}
