//! Note storage
//!
//! The creation flow only needs two things from storage: an existence probe
//! and a create-new write. `VaultStore` provides both on top of a vault
//! directory; tests substitute their own implementations.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::util;
use crate::Result;

/// Storage seam used by the note creation flow. Paths are vault-relative
/// and use `/` separators.
pub trait NoteStore {
    /// Whether anything exists at `path`
    fn exists(&self, path: &str) -> bool;

    /// Create a new file at `path` holding `content`.
    /// Fails with `AlreadyExists` if the path is taken.
    fn create(&mut self, path: &str, content: &str) -> Result<PathBuf>;
}

/// Filesystem-backed store rooted at a vault directory
#[derive(Debug, Clone)]
pub struct VaultStore {
    root: PathBuf,
}

impl VaultStore {
    /// Create a store for the vault at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Vault root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a vault-relative path to an absolute one inside the vault
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        util::secure_path(&self.root, path)
    }
}

impl NoteStore for VaultStore {
    fn exists(&self, path: &str) -> bool {
        // A path that cannot be resolved inside the vault does not exist in it
        self.resolve(path).map(|p| p.exists()).unwrap_or(false)
    }

    fn create(&mut self, path: &str, content: &str) -> Result<PathBuf> {
        let full_path = self.resolve(path)?;

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // create_new refuses to clobber a file that appeared after the probe
        let mut file = OpenOptions::new().write(true).create_new(true).open(&full_path)?;
        file.write_all(content.as_bytes())?;

        tracing::debug!(path = %util::display_path(&full_path), bytes = content.len(), "note written");
        Ok(full_path)
    }
}
