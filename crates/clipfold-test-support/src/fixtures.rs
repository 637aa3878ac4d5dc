//! Scratch directory trees for filesystem tests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Temporary directory removed when dropped.
#[derive(Debug)]
pub struct ScratchTree {
    dir: TempDir,
}

impl ScratchTree {
    /// Create an empty scratch tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("clipfold-")
            .tempdir()
            .context("failed to create scratch directory")?;
        Ok(Self { dir })
    }

    /// Root of the tree.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path for `relative` inside the tree, without touching disk.
    #[must_use]
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write a small file at `relative`, creating missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if a parent directory or the file cannot be written.
    pub fn touch(&self, relative: impl AsRef<Path>) -> Result<PathBuf> {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        fs::write(&path, name.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Write every file in `relatives`, returning their paths in order.
    ///
    /// # Errors
    ///
    /// Returns the first write failure.
    pub fn touch_all<I, P>(&self, relatives: I) -> Result<Vec<PathBuf>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        relatives.into_iter().map(|rel| self.touch(rel)).collect()
    }

    /// Create an empty directory at `relative`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn mkdir(&self, relative: impl AsRef<Path>) -> Result<PathBuf> {
        let path = self.join(relative);
        fs::create_dir_all(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        Ok(path)
    }
}

/// Sorted file names directly inside `dir`.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed.
pub fn file_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = fs::read_dir(dir)
        .with_context(|| format!("failed to list {}", dir.display()))?
        .map(|entry| entry.map(|entry| entry.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}
