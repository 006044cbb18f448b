//! Directory enumeration
//!
//! Indexers never call `std::fs` directly; they go through a
//! [`DirectoryLister`] so the traversal logic runs unchanged against an
//! in-memory tree in tests.

use crate::error::{ArchiveError, Result};
use log::debug;
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

/// Names excluded at every level of an archive
pub const IGNORED_NAMES: [&str; 2] = [".DS_Store", "LICENSE"];

/// Checks whether a directory entry name is in the ignore set
pub fn is_ignored(name: &str) -> bool {
    IGNORED_NAMES.contains(&name)
}

/// Source of directory listings
pub trait DirectoryLister {
    /// Returns the entry names of a directory, in no particular order
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::DirectoryAccess`] if `dir` does not exist or
    /// cannot be listed, and [`ArchiveError::InvalidName`] for an entry
    /// name that is not valid UTF-8.
    fn list(&self, dir: &Path) -> Result<Vec<String>>;

    /// Checks whether a file or directory exists
    fn exists(&self, path: &Path) -> bool;
}

/// Lists a directory, drops ignored names, and sorts the rest ascending
pub fn sorted_entries<L: DirectoryLister + ?Sized>(lister: &L, dir: &Path) -> Result<Vec<String>> {
    let mut names: Vec<String> = lister
        .list(dir)?
        .into_iter()
        .filter(|name| !is_ignored(name))
        .collect();
    names.sort();
    debug!("Listed {} entries in {}", names.len(), dir.display());
    Ok(names)
}

/// Lister backed by the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path) -> Result<Vec<String>> {
        let read_dir =
            std::fs::read_dir(dir).map_err(|e| ArchiveError::directory_access(dir, e))?;

        let mut names = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| ArchiveError::directory_access(dir, e))?;
            let name = entry
                .file_name()
                .into_string()
                .map_err(|name| ArchiveError::InvalidName(dir.join(name)))?;
            names.push(name);
        }
        Ok(names)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Lister over an in-memory set of file paths
///
/// Directories are implied by the files they contain; empty directories are
/// added with [`MemoryLister::with_dir`].
///
/// # Example
///
/// ```
/// use mrarchive_core::archive::{sorted_entries, MemoryLister};
/// use std::path::Path;
///
/// let lister = MemoryLister::from_files(["root/b/x", "root/a/y", "root/LICENSE"]);
/// let names = sorted_entries(&lister, Path::new("root")).unwrap();
/// assert_eq!(names, vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLister {
    files: BTreeSet<PathBuf>,
    dirs: BTreeSet<PathBuf>,
}

impl MemoryLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a lister holding the given files
    pub fn from_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        files
            .into_iter()
            .fold(Self::new(), |lister, file| lister.with_file(file))
    }

    /// Builder: Add a file and its parent directories
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.add_parents(&path);
        self.files.insert(path);
        self
    }

    /// Builder: Add a directory and its parents
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.add_parents(&path);
        self.dirs.insert(path);
        self
    }

    fn add_parents(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl DirectoryLister for MemoryLister {
    fn list(&self, dir: &Path) -> Result<Vec<String>> {
        if !self.dirs.contains(dir) {
            let kind = if self.files.contains(dir) {
                io::Error::new(io::ErrorKind::Other, "Not a directory")
            } else {
                io::Error::new(io::ErrorKind::NotFound, "No such file or directory")
            };
            return Err(ArchiveError::directory_access(dir, kind));
        }

        Ok(self
            .files
            .iter()
            .chain(self.dirs.iter())
            .filter(|p| p.parent() == Some(dir))
            .filter_map(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path) || self.dirs.contains(path)
    }
}
