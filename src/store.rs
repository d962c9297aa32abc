//! Selection documents on disk
//!
//! The core hands every new selection back to its host; this is where the
//! CLI host commits it. Writes take an exclusive lock on a sibling `.lock`
//! file and replace the document atomically.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{TreepickError, TreepickResult};
use crate::tree::{SelectionSet, TreeNode};

pub const SELECTION_DOCUMENT_VERSION: u32 = 1;

/// A persisted selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionDocument {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    /// Provider the tree came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Digest of the tree the selection was made against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_digest: Option<String>,
    #[serde(default)]
    pub selected: SelectionSet,
}

fn default_version() -> u32 {
    SELECTION_DOCUMENT_VERSION
}

impl SelectionDocument {
    pub fn new(selected: SelectionSet) -> Self {
        Self {
            version: SELECTION_DOCUMENT_VERSION,
            saved_at: Some(Utc::now()),
            source: None,
            tree_digest: None,
            selected,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_tree(mut self, tree: &[TreeNode]) -> TreepickResult<Self> {
        self.tree_digest = Some(tree_digest(tree)?);
        Ok(self)
    }

    /// False when the document records a digest for a different tree.
    pub fn matches_tree(&self, tree: &[TreeNode]) -> TreepickResult<bool> {
        match self.tree_digest.as_deref() {
            Some(digest) => Ok(digest == tree_digest(tree)?),
            None => Ok(true),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredSelection {
    Bare(SelectionSet),
    Document(SelectionDocument),
}

/// `sha256:<hex>` of the tree's canonical JSON
pub fn tree_digest(tree: &[TreeNode]) -> TreepickResult<String> {
    let mut hasher = Sha256::new();
    serde_json::to_writer(&mut hasher, tree)?;
    Ok(format!("sha256:{:x}", hasher.finalize()))
}

/// Reads and writes one selection document
#[derive(Debug, Clone)]
pub struct SelectionStore {
    path: PathBuf,
}

impl SelectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn is_yaml(&self) -> bool {
        matches!(
            self.path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        )
    }

    /// Load the document; a missing file is `None`.
    ///
    /// A bare array of ids is accepted as a document with no metadata.
    pub fn load(&self) -> TreepickResult<Option<SelectionDocument>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let stored: StoredSelection = if self.is_yaml() {
            serde_yaml_ng::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        let doc = match stored {
            StoredSelection::Bare(selected) => SelectionDocument {
                version: SELECTION_DOCUMENT_VERSION,
                saved_at: None,
                source: None,
                tree_digest: None,
                selected,
            },
            StoredSelection::Document(doc) => doc,
        };

        if doc.version > SELECTION_DOCUMENT_VERSION {
            return Err(TreepickError::UnsupportedVersion {
                path: self.path.clone(),
                version: doc.version,
            });
        }

        log::debug!(
            "loaded {} selected id(s) from {}",
            doc.selected.len(),
            self.path.display()
        );
        Ok(Some(doc))
    }

    /// Load the selection, or an empty one if the file does not exist
    pub fn load_selection(&self) -> TreepickResult<SelectionSet> {
        Ok(self.load()?.map(|doc| doc.selected).unwrap_or_default())
    }

    /// Write the document atomically under an exclusive lock
    pub fn save(&self, doc: &SelectionDocument) -> TreepickResult<()> {
        let lock_file = self.lock()?;
        let result = self.write(doc);
        let _ = lock_file.unlock();
        result
    }

    /// Load, change and save the document under one exclusive lock.
    ///
    /// `change` receives the stored document (`None` when the file is
    /// missing) and returns the document to write, or `None` to leave the
    /// file as it is, along with a value handed back to the caller.
    pub fn update<T, E>(
        &self,
        change: impl FnOnce(Option<SelectionDocument>) -> Result<(Option<SelectionDocument>, T), E>,
    ) -> Result<T, E>
    where
        E: From<TreepickError>,
    {
        let lock_file = self.lock()?;

        let result = self
            .load()
            .map_err(E::from)
            .and_then(change)
            .and_then(|(doc, value)| {
                if let Some(doc) = doc {
                    self.write(&doc)?;
                }
                Ok(value)
            });

        let _ = lock_file.unlock();
        result
    }

    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn lock(&self) -> TreepickResult<fs::File> {
        fs::create_dir_all(self.dir())?;
        let lock_file = fs::File::create(self.lock_path())?;
        lock_file.lock_exclusive()?;
        Ok(lock_file)
    }

    fn write(&self, doc: &SelectionDocument) -> TreepickResult<()> {
        let content = if self.is_yaml() {
            serde_yaml_ng::to_string(doc)?
        } else {
            let mut json = serde_json::to_string_pretty(doc)?;
            json.push('\n');
            json
        };

        write_atomic(&self.dir(), &self.path, content.as_bytes())?;

        log::info!(
            "saved {} selected id(s) to {}",
            doc.selected.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn write_atomic(dir: &Path, path: &Path, content: &[u8]) -> TreepickResult<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
