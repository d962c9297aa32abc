//! Tree documents on disk (JSON, YAML, TOML).
//!
//! A document is either a bare array of nodes or a table with a `nodes`
//! array. TOML cannot express a top-level array, so it always uses the table.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{TreepickError, TreepickResult};
use crate::tree::TreeNode;

use super::FolderProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Accepted shapes of a tree document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeDocument {
    Nodes(Vec<TreeNode>),
    Table { nodes: Vec<TreeNode> },
}

impl TreeDocument {
    pub fn into_nodes(self) -> Vec<TreeNode> {
        match self {
            TreeDocument::Nodes(nodes) | TreeDocument::Table { nodes } => nodes,
        }
    }
}

/// Parse a tree document in the given format
pub fn parse_tree_document(content: &str, format: DocumentFormat) -> TreepickResult<Vec<TreeNode>> {
    let doc: TreeDocument = match format {
        DocumentFormat::Json => serde_json::from_str(content)?,
        DocumentFormat::Yaml => serde_yaml_ng::from_str(content)?,
        DocumentFormat::Toml => toml::from_str(content)?,
    };
    Ok(doc.into_nodes())
}

/// Loads a tree from a document file
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FolderProvider for FileProvider {
    fn name(&self) -> &str {
        "file"
    }

    fn load(&self) -> TreepickResult<Vec<TreeNode>> {
        let format =
            DocumentFormat::from_path(&self.path).ok_or_else(|| TreepickError::UnsupportedFormat {
                path: self.path.clone(),
            })?;
        let content = fs::read_to_string(&self.path)?;
        let nodes = parse_tree_document(&content, format)?;
        log::debug!(
            "loaded {} root node(s) from {}",
            nodes.len(),
            self.path.display()
        );
        Ok(nodes)
    }
}
