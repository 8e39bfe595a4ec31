//! Identifier-addressed blob storage on the local filesystem.
//!
//! Storage layout: `{tmp_path}/{id}`, one plain file per paste, no index.
//! All calls are synchronous; handlers run them on `spawn_blocking`.

use std::fs::{self, DirBuilder, OpenOptions};
use std::path::{Component, Path, PathBuf};

use crate::error::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Maps identifiers to files below a storage root.
#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join `id` onto the storage root.
    ///
    /// Resolution is purely lexical and never touches the filesystem. `.`
    /// components and trailing separators are dropped (`abc/` is `abc`) and
    /// `..` pops a previous component; the id is rejected if it is empty,
    /// absolute, or climbs to or above the root.
    pub fn resolve(&self, id: &str) -> Result<PathBuf> {
        if id.is_empty() {
            return Err(StoreError::InvalidPath("empty identifier".to_string()));
        }

        let mut relative = PathBuf::new();
        for component in Path::new(id).components() {
            match component {
                Component::Normal(part) => relative.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    if !relative.pop() {
                        return Err(StoreError::InvalidPath(format!(
                            "{id} escapes the storage root"
                        )));
                    }
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(StoreError::InvalidPath(format!(
                        "{id} is an absolute path"
                    )));
                }
            }
        }

        if relative.as_os_str().is_empty() {
            return Err(StoreError::InvalidPath(format!(
                "{id} does not name a file below the storage root"
            )));
        }

        Ok(self.root.join(relative))
    }

    /// Create missing parent directories and an empty file at `path` if
    /// nothing exists there yet. Existing content is left untouched.
    pub fn ensure_exists(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            dir_builder()
                .create(dir)
                .map_err(|e| StoreError::io(dir, e))?;
        }

        // append + create never truncates, and fails on directories
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| StoreError::io(path, e))?;

        Ok(())
    }

    /// Read the whole blob at `path`, creating it empty first if absent.
    pub fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.ensure_exists(path)?;
        let content = fs::read(path).map_err(|e| StoreError::io(path, e))?;
        tracing::debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(content)
    }

    /// Replace the blob at `path` with `content`.
    pub fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        self.ensure_exists(path)?;
        fs::write(path, content).map_err(|e| StoreError::io(path, e))?;
        tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }

    pub fn read_paste(&self, id: &str) -> Result<Vec<u8>> {
        let path = self.resolve(id)?;
        self.read(&path)
    }

    pub fn write_paste(&self, id: &str, content: &[u8]) -> Result<()> {
        let path = self.resolve(id)?;
        self.write(&path, content)
    }
}

fn dir_builder() -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder
}
