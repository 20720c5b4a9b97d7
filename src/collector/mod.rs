use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, TmdlSlimError};
use crate::rules::CULTURES_FOLDER_KEY;
use crate::stats::SlimStats;

pub const TMDL_EXTENSION: &str = "tmdl";

/// Subtree holding localized translations; excluded wholesale when the
/// language-data toggle is on.
pub const CULTURES_SUBTREE: &str = "cultures";

/// One source document, fully read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path relative to the scan root, `/`-separated.
    pub relative_path: String,
    pub content: String,
}

/// Result of collecting a model folder.
#[derive(Debug, Default)]
pub struct Collection {
    /// Surviving documents in lexicographic relative-path order.
    pub documents: Vec<Document>,
    /// Documents found under the root, excluded ones included.
    pub total_found: usize,
    /// Total bytes of surviving document content.
    pub input_bytes: u64,
}

/// Enumerates `.tmdl` documents under a root and applies the whole-document
/// cultures exclusion.
pub struct DocumentCollector {
    exclude_cultures: bool,
}

impl DocumentCollector {
    #[must_use]
    pub const fn new(exclude_cultures: bool) -> Self {
        Self { exclude_cultures }
    }

    /// Enumerate matching document paths under `root`, sorted lexicographically
    /// by relative path so output is reproducible across filesystems.
    ///
    /// # Errors
    /// Returns an error if any directory in the walk cannot be read; an
    /// unreadable subtree must fail the run rather than silently dropping the
    /// documents beneath it.
    pub fn enumerate(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_document = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == TMDL_EXTENSION);
            if is_document {
                paths.push(entry.path().to_path_buf());
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Read every surviving document under `root`, recording cultures-subtree
    /// skips under the synthetic stats key.
    ///
    /// # Errors
    /// Returns an error if the walk fails or any surviving document cannot be
    /// read; a failure on one document fails the whole run.
    pub fn collect(&self, root: &Path, stats: &mut SlimStats) -> Result<Collection> {
        let mut collection = Collection::default();

        for path in self.enumerate(root)? {
            collection.total_found += 1;

            let relative_path = relative_path(root, &path);
            if self.exclude_cultures && is_under_cultures(&relative_path) {
                stats.record(CULTURES_FOLDER_KEY);
                continue;
            }

            let content =
                std::fs::read_to_string(&path).map_err(|source| TmdlSlimError::DocumentRead {
                    path: path.clone(),
                    source,
                })?;

            collection.input_bytes += content.len() as u64;
            collection.documents.push(Document {
                relative_path,
                content,
            });
        }

        Ok(collection)
    }
}

fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn is_under_cultures(relative_path: &str) -> bool {
    relative_path
        .split('/')
        .any(|component| component == CULTURES_SUBTREE)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
