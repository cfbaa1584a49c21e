//! Content store abstraction.
//!
//! Documents are addressed by `(bucket, identifier)`. On disk a bucket is a
//! directory under the content root and an identifier is a file stem:
//!
//! | Bucket  | Identifier | File                      |
//! |---------|------------|---------------------------|
//! | `posts` | `hello`    | `<root>/posts/hello.md`   |
//! | `pages` | `index`    | `<root>/pages/index.md`   |

use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

use crate::error::{ContentError, Result};

/// Named-bucket lookup of text documents.
pub trait ContentStore: Send + Sync {
    /// Identifiers of every document in `bucket`.
    fn list(&self, bucket: &str) -> Result<Vec<String>>;

    /// Raw text of one document.
    fn read(&self, bucket: &str, identifier: &str) -> Result<String>;
}

/// Filesystem-backed store: `<root>/<bucket>/<identifier>.<extension>`.
#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
    extension: String,
}

impl FsContentStore {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// Path a document would live at, whether or not it exists.
    pub fn document_path(&self, bucket: &str, identifier: &str) -> PathBuf {
        self.root
            .join(bucket)
            .join(format!("{identifier}.{}", self.extension))
    }

    /// File stem of `path` if it carries the content extension.
    fn identifier_of(&self, path: &Path) -> Option<String> {
        let matches = path
            .extension()
            .is_some_and(|ext| ext.to_str() == Some(self.extension.as_str()));
        if !matches {
            return None;
        }
        path.file_stem()?.to_str().map(str::to_owned)
    }
}

impl ContentStore for FsContentStore {
    /// Direct children only, sorted by file name.
    fn list(&self, bucket: &str) -> Result<Vec<String>> {
        let dir = self.root.join(bucket);
        if !dir.is_dir() {
            return Err(ContentError::unavailable(dir.display().to_string(), None));
        }

        let mut identifiers = Vec::new();
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|err| {
                ContentError::unavailable(dir.display().to_string(), err.into_io_error())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(identifier) = self.identifier_of(entry.path()) {
                identifiers.push(identifier);
            }
        }

        Ok(identifiers)
    }

    fn read(&self, bucket: &str, identifier: &str) -> Result<String> {
        let path = self.document_path(bucket, identifier);
        fs::read_to_string(&path)
            .map_err(|err| ContentError::unavailable(path.display().to_string(), Some(err)))
    }
}
